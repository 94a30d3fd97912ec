// SPDX-License-Identifier: Apache-2.0

use compressonator_rs::{
    sys, CompressOptions, CompressionSpeed, EncodeWith, Format, GpuDecode, ModeMask, Texture,
};

#[test]
fn options_defaults_match_the_documented_native_ones() {
    let options = CompressOptions::default();

    assert_eq!(options.quality, 0.05);
    assert_eq!(options.mode_mask, ModeMask::all());
    assert_eq!(options.mode_mask.bits(), 0xFF);
    assert_eq!(options.speed, CompressionSpeed::Normal);
    assert_eq!(options.gpu_decode, GpuDecode::OpenGl);
    assert_eq!(options.encode_with, EncodeWith::Unknown);
    assert_eq!(options.number_of_threads, 0);

    // Mesh/geometry defaults
    assert_eq!(options.level, 7);
    assert_eq!(options.position_bits, 14);
    assert_eq!(options.texture_coordinate_bits, 12);
    assert_eq!(options.normal_bits, 10);
    assert_eq!(options.generic_bits, 8);
    assert_eq!(options.vcache_size, 16);
    assert_eq!(options.vcache_fifo_size, 0);
    assert_eq!(options.overdraw_acmr, 1.05);
    assert_eq!(options.simplify_lod, 0);
    assert!(options.vertex_fetch);

    assert!(!options.use_channel_weighting);
    assert!(!options.use_adaptive_weighting);
    assert!(!options.dxt1_use_alpha);
    assert!(!options.disable_multithreading);
    assert_eq!(options.source_format, Format::Unknown);
    assert_eq!(options.destination_format, Format::Unknown);
}

#[test]
fn options_native_record_is_stamped_and_reserved_slots_zeroed() {
    let native = CompressOptions::default().to_native();

    assert_eq!(
        native.dwSize as usize,
        std::mem::size_of::<sys::CMP_CompressOptions>()
    );
    assert_eq!(native.fquality, 0.05);
    assert_eq!(native.dwmodeMask, 0xFF);
    assert_eq!(native.bVertexFetch, sys::CMP_TRUE);
    assert_eq!(native.bUseChannelWeighting, sys::CMP_FALSE);

    // The reserved command set goes out empty and zeroed, always.
    assert_eq!(native.NumCmds, 0);
    assert!(native.CmdSet.iter().all(|cmd| {
        cmd.strCommand.iter().all(|&c| c == 0) && cmd.strParameter.iter().all(|&c| c == 0)
    }));
    assert!(native.m_PrintInfoStr.is_none());
}

#[test]
fn texture_defaults_to_4x4x1_blocks() {
    let texture = Texture::default();
    assert_eq!(texture.block_width, 4);
    assert_eq!(texture.block_height, 4);
    assert_eq!(texture.block_depth, 1);
    assert_eq!(texture.format, Format::Unknown);
    assert!(texture.data.is_empty());
}
