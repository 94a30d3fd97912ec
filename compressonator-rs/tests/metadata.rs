// SPDX-License-Identifier: Apache-2.0

use compressonator_rs::{sys, Format, Texture};

#[test]
fn metadata_survives_the_native_layout() {
    let texture = Texture {
        width: 256,
        height: 128,
        pitch: 1024,
        format: Format::Rgba8888,
        transcode_format: Format::Bc7,
        block_height: 8,
        block_width: 8,
        block_depth: 2,
        data: vec![0xAB; 16],
    };

    let native = texture.to_native();
    assert_eq!(
        native.dwSize as usize,
        std::mem::size_of::<sys::CMP_Texture>()
    );
    // The data fields are only filled in right before a conversion call.
    assert_eq!(native.dwDataSize, 0);
    assert!(native.pData.is_null());
    assert!(native.pMipSet.is_null());

    let mut back = Texture::default();
    back.update_from_native(&native);
    assert_eq!(back.width, texture.width);
    assert_eq!(back.height, texture.height);
    assert_eq!(back.pitch, texture.pitch);
    assert_eq!(back.format, texture.format);
    assert_eq!(back.transcode_format, texture.transcode_format);
    assert_eq!(back.block_height, texture.block_height);
    assert_eq!(back.block_width, texture.block_width);
    assert_eq!(back.block_depth, texture.block_depth);
    // The copy-back never touches the data buffer.
    assert!(back.data.is_empty());
}

#[test]
fn unknown_native_formats_fold_to_unknown() {
    let mut native = Texture::new(4, 4, Format::Bc1).to_native();
    native.format = 0xDEAD;

    let mut texture = Texture::default();
    texture.update_from_native(&native);
    assert_eq!(texture.format, Format::Unknown);
}
