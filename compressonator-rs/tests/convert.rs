// SPDX-License-Identifier: Apache-2.0
#![cfg(feature = "test-native")]

//! Tests that call into the native library; they need a Compressonator
//! build to be present at link time (see the `test-native` feature).

use compressonator_rs::{calculate_buffer_size, convert_texture, CmpError, Format, Texture};

fn rgba_source_4x4() -> Texture {
    let mut source = Texture::new(4, 4, Format::Rgba8888);
    source.pitch = 16;
    // An opaque white 4x4 RGBA8888 surface: 64 bytes.
    source.data = vec![0xFF; 64];
    source
}

#[test]
fn rgba8888_to_bc1_single_block() {
    let mut source = rgba_source_4x4();
    let mut destination = Texture::new(4, 4, Format::Bc1);

    // One 4x4 BC1 block is 8 bytes.
    let size = calculate_buffer_size(&mut destination);
    assert_eq!(size, 8);

    destination.data = vec![0; size as usize];
    convert_texture(&mut source, &mut destination, None).expect("RGBA8888 -> BC1");

    // A white block encodes to non-zero endpoint colours.
    assert!(destination.data.iter().any(|&b| b != 0));
}

#[test]
fn undersized_destination_reports_an_error() {
    let mut source = rgba_source_4x4();

    let mut destination = Texture::new(4, 4, Format::Bc1);
    destination.data = vec![0; 4]; // half a BC1 block

    let error = convert_texture(&mut source, &mut destination, None)
        .expect_err("an undersized destination must be rejected");
    assert!(matches!(
        error,
        CmpError::SizeMismatch | CmpError::InvalidDestinationTexture
    ));
}
