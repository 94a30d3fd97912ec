// SPDX-License-Identifier: Apache-2.0

//! The texture descriptor handed to and back from the native library.

use crate::{enums::Format, sys};
use std::convert::TryFrom;

/// One texture surface, or one specific MIP level of one.
///
/// `data` holds the raw pixels or compressed blocks to process. The buffer
/// must be large enough for the declared dimensions and format; that is
/// checked by the native library, not by this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Texture {
    pub width: u32,
    pub height: u32,
    /// Distance to the start of the next line. Uncompressed data only.
    pub pitch: u32,
    pub format: Format,
    /// Optional target format used when `format` is BASIS (the native
    /// default target is BC1). Ignored otherwise.
    pub transcode_format: Format,
    /// Block dimensions of a block-compressed source. For ASTC,
    /// `block_depth` is the z setting.
    pub block_height: u8,
    pub block_width: u8,
    pub block_depth: u8,
    pub data: Vec<u8>,
}

impl Texture {
    /// A descriptor for a `width`×`height` surface of `format`, with default
    /// block dimensions and an empty data buffer.
    pub fn new(width: u32, height: u32, format: Format) -> Self {
        Texture {
            width,
            height,
            format,
            ..Default::default()
        }
    }

    /// The native-layout equivalent of `self`, with the data pointer and
    /// size left zeroed. Callers doing a conversion fill those two fields in
    /// from a live buffer right before the native call.
    pub fn to_native(&self) -> sys::CMP_Texture {
        sys::CMP_Texture {
            dwSize: std::mem::size_of::<sys::CMP_Texture>() as sys::CMP_DWORD,
            dwWidth: self.width,
            dwHeight: self.height,
            dwPitch: self.pitch,
            format: self.format as sys::CMP_FORMAT,
            transcodeFormat: self.transcode_format as sys::CMP_FORMAT,
            nBlockHeight: self.block_height,
            nBlockWidth: self.block_width,
            nBlockDepth: self.block_depth,
            dwDataSize: 0,
            pData: std::ptr::null_mut(),
            pMipSet: std::ptr::null_mut(),
        }
    }

    /// Copies back the metadata fields a native call may have normalized
    /// (dimensions, pitch, formats, block sizes). The data buffer is left
    /// alone.
    pub fn update_from_native(&mut self, native: &sys::CMP_Texture) {
        self.width = native.dwWidth;
        self.height = native.dwHeight;
        self.pitch = native.dwPitch;
        self.format = Format::try_from(native.format).unwrap_or(Format::Unknown);
        self.transcode_format =
            Format::try_from(native.transcodeFormat).unwrap_or(Format::Unknown);
        self.block_height = native.nBlockHeight;
        self.block_width = native.nBlockWidth;
        self.block_depth = native.nBlockDepth;
    }
}

impl Default for Texture {
    fn default() -> Self {
        Texture {
            width: 0,
            height: 0,
            pitch: 0,
            format: Format::Unknown,
            transcode_format: Format::Unknown,
            block_height: 4,
            block_width: 4,
            block_depth: 1,
            data: Vec::new(),
        }
    }
}
