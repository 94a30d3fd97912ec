// SPDX-License-Identifier: Apache-2.0

use std::env;

// The Compressonator SDK ships as two prebuilt libraries, one per pointer
// width (`Compressonator32` / `Compressonator64`). Both export the same
// symbols, so the only per-target decision is which of the two to link.

fn main() {
    if env::var_os("CARGO_FEATURE_DOCS_ONLY").is_some() {
        println!("-- docs-only build: not linking the native Compressonator");
    } else {
        if let Ok(dir) = env::var("COMPRESSONATOR_LIB_DIR") {
            println!("cargo:rustc-link-search=native={}", dir);
        }

        let width = env::var("CARGO_CFG_TARGET_POINTER_WIDTH")
            .expect("CARGO_CFG_TARGET_POINTER_WIDTH set by cargo");
        let lib = match width.as_str() {
            "64" => "Compressonator64",
            "32" => "Compressonator32",
            other => panic!("no Compressonator build for {}-bit targets", other),
        };

        println!("-- Link the native {} to the crate", lib);
        println!("cargo:rustc-link-lib=dylib={}", lib);
    }

    println!("cargo:rerun-if-env-changed=COMPRESSONATOR_LIB_DIR");
    println!("cargo:rerun-if-changed=build/build.rs");
}
