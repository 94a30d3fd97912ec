// SPDX-License-Identifier: Apache-2.0

//! Low-level FFI bindings to [AMD Compressonator](https://gpuopen.com/compressonator/),
//! a library for compressing, decompressing and transcoding GPU texture formats.
//!
//! Everything in this crate mirrors the native SDK headers field for field.
//! The structures use sequential C layout, and each carries a leading `dwSize`
//! field that the library inspects to tell ABI revisions apart; it must always
//! be stamped with `size_of` of the corresponding struct.
//!
//! Which of the two SDK builds gets linked (`Compressonator32` or
//! `Compressonator64`) is decided once, at compile time, from the target's
//! pointer width. Both builds export the same symbols, so the declarations
//! below cover either.

#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(non_upper_case_globals)]

use std::os::raw::{c_char, c_int, c_void};

pub type CMP_BYTE = u8;
pub type CMP_DWORD = u32;
pub type CMP_INT = c_int;
pub type CMP_FLOAT = f32;
/// Four-byte boolean, as the SDK's C ABI marshals it.
pub type CMP_BOOL = u32;

pub const CMP_FALSE: CMP_BOOL = 0;
pub const CMP_TRUE: CMP_BOOL = 1;

/// Texture pixel/block formats (`CMP_FORMAT`).
pub type CMP_FORMAT = u32;

pub const CMP_FORMAT_Unknown: CMP_FORMAT = 0;
// Uncompressed, 8 bits per channel
pub const CMP_FORMAT_ARGB_8888: CMP_FORMAT = 1;
pub const CMP_FORMAT_ABGR_8888: CMP_FORMAT = 2;
pub const CMP_FORMAT_RGBA_8888: CMP_FORMAT = 3;
pub const CMP_FORMAT_BGRA_8888: CMP_FORMAT = 4;
pub const CMP_FORMAT_RGB_888: CMP_FORMAT = 5;
pub const CMP_FORMAT_BGR_888: CMP_FORMAT = 6;
pub const CMP_FORMAT_RG_8: CMP_FORMAT = 7;
pub const CMP_FORMAT_R_8: CMP_FORMAT = 8;
pub const CMP_FORMAT_ARGB_2101010: CMP_FORMAT = 9;
// Uncompressed, 16 bits per channel
pub const CMP_FORMAT_ARGB_16: CMP_FORMAT = 10;
pub const CMP_FORMAT_ABGR_16: CMP_FORMAT = 11;
pub const CMP_FORMAT_RGBA_16: CMP_FORMAT = 12;
pub const CMP_FORMAT_BGRA_16: CMP_FORMAT = 13;
pub const CMP_FORMAT_RG_16: CMP_FORMAT = 14;
pub const CMP_FORMAT_R_16: CMP_FORMAT = 15;
// Uncompressed, half and full float
pub const CMP_FORMAT_RGBE_32F: CMP_FORMAT = 16;
pub const CMP_FORMAT_ARGB_16F: CMP_FORMAT = 17;
pub const CMP_FORMAT_ABGR_16F: CMP_FORMAT = 18;
pub const CMP_FORMAT_RGBA_16F: CMP_FORMAT = 19;
pub const CMP_FORMAT_BGRA_16F: CMP_FORMAT = 20;
pub const CMP_FORMAT_RG_16F: CMP_FORMAT = 21;
pub const CMP_FORMAT_R_16F: CMP_FORMAT = 22;
pub const CMP_FORMAT_ARGB_32F: CMP_FORMAT = 23;
pub const CMP_FORMAT_ABGR_32F: CMP_FORMAT = 24;
pub const CMP_FORMAT_RGBA_32F: CMP_FORMAT = 25;
pub const CMP_FORMAT_BGRA_32F: CMP_FORMAT = 26;
pub const CMP_FORMAT_RGB_32F: CMP_FORMAT = 27;
pub const CMP_FORMAT_BGR_32F: CMP_FORMAT = 28;
pub const CMP_FORMAT_RG_32F: CMP_FORMAT = 29;
pub const CMP_FORMAT_R_32F: CMP_FORMAT = 30;
// Block-compressed
pub const CMP_FORMAT_ASTC: CMP_FORMAT = 31;
pub const CMP_FORMAT_ATI1N: CMP_FORMAT = 32;
pub const CMP_FORMAT_ATI2N: CMP_FORMAT = 33;
pub const CMP_FORMAT_ATI2N_XY: CMP_FORMAT = 34;
pub const CMP_FORMAT_ATI2N_DXT5: CMP_FORMAT = 35;
pub const CMP_FORMAT_ATC_RGB: CMP_FORMAT = 36;
pub const CMP_FORMAT_ATC_RGBA_Explicit: CMP_FORMAT = 37;
pub const CMP_FORMAT_ATC_RGBA_Interpolated: CMP_FORMAT = 38;
pub const CMP_FORMAT_BC1: CMP_FORMAT = 39;
pub const CMP_FORMAT_BC2: CMP_FORMAT = 40;
pub const CMP_FORMAT_BC3: CMP_FORMAT = 41;
pub const CMP_FORMAT_BC4: CMP_FORMAT = 42;
pub const CMP_FORMAT_BC5: CMP_FORMAT = 43;
pub const CMP_FORMAT_BC6H: CMP_FORMAT = 44;
pub const CMP_FORMAT_BC6H_SF: CMP_FORMAT = 45;
pub const CMP_FORMAT_BC7: CMP_FORMAT = 46;
pub const CMP_FORMAT_DXT1: CMP_FORMAT = 47;
pub const CMP_FORMAT_DXT3: CMP_FORMAT = 48;
pub const CMP_FORMAT_DXT5: CMP_FORMAT = 49;
pub const CMP_FORMAT_DXT5_xGBR: CMP_FORMAT = 50;
pub const CMP_FORMAT_DXT5_RxBG: CMP_FORMAT = 51;
pub const CMP_FORMAT_DXT5_RBxG: CMP_FORMAT = 52;
pub const CMP_FORMAT_DXT5_xRBG: CMP_FORMAT = 53;
pub const CMP_FORMAT_DXT5_RGxB: CMP_FORMAT = 54;
pub const CMP_FORMAT_DXT5_xGxR: CMP_FORMAT = 55;
pub const CMP_FORMAT_ETC_RGB: CMP_FORMAT = 56;
pub const CMP_FORMAT_ETC2_RGB: CMP_FORMAT = 57;
pub const CMP_FORMAT_ETC2_SRGB: CMP_FORMAT = 58;
pub const CMP_FORMAT_ETC2_RGBA: CMP_FORMAT = 59;
pub const CMP_FORMAT_ETC2_RGBA1: CMP_FORMAT = 60;
pub const CMP_FORMAT_ETC2_SRGBA: CMP_FORMAT = 61;
pub const CMP_FORMAT_ETC2_SRGBA1: CMP_FORMAT = 62;
pub const CMP_FORMAT_PVRTC: CMP_FORMAT = 63;
pub const CMP_FORMAT_GTC: CMP_FORMAT = 64;
pub const CMP_FORMAT_BASIS: CMP_FORMAT = 65;

/// Compression speed/quality trade-off (`CMP_Speed`).
pub type CMP_Speed = u32;

pub const CMP_Speed_Normal: CMP_Speed = 0;
pub const CMP_Speed_Fast: CMP_Speed = 1;
pub const CMP_Speed_SuperFast: CMP_Speed = 2;

/// API used for GPU decompression (`CMP_GPUDecode`).
pub type CMP_GPUDecode = u32;

pub const GPUDecode_OPENGL: CMP_GPUDecode = 0;
pub const GPUDecode_DIRECTX: CMP_GPUDecode = 1;
pub const GPUDecode_VULKAN: CMP_GPUDecode = 2;
pub const GPUDecode_INVALID: CMP_GPUDecode = 3;

/// Compute framework used for encoding (`CMP_Compute_type`).
pub type CMP_Compute_type = u32;

pub const CMP_UNKNOWN: CMP_Compute_type = 0;
pub const CMP_CPU: CMP_Compute_type = 1;
pub const CMP_HPC: CMP_Compute_type = 2;
pub const CMP_GPU_OCL: CMP_Compute_type = 3;
pub const CMP_GPU_DXC: CMP_Compute_type = 4;
pub const CMP_GPU_VLK: CMP_Compute_type = 5;
pub const CMP_GPU_HW: CMP_Compute_type = 6;

/// Status codes returned by the native library (`CMP_ERROR`).
pub type CMP_ERROR = u32;

pub const CMP_OK: CMP_ERROR = 0;
pub const CMP_ABORTED: CMP_ERROR = 1;
pub const CMP_ERR_INVALID_SOURCE_TEXTURE: CMP_ERROR = 2;
pub const CMP_ERR_INVALID_DEST_TEXTURE: CMP_ERROR = 3;
pub const CMP_ERR_UNSUPPORTED_SOURCE_FORMAT: CMP_ERROR = 4;
pub const CMP_ERR_UNSUPPORTED_DEST_FORMAT: CMP_ERROR = 5;
pub const CMP_ERR_UNSUPPORTED_GPU_ASTC_DECODE: CMP_ERROR = 6;
pub const CMP_ERR_UNSUPPORTED_GPU_BASIS_DECODE: CMP_ERROR = 7;
pub const CMP_ERR_SIZE_MISMATCH: CMP_ERROR = 8;
pub const CMP_ERR_UNABLE_TO_INIT_CODEC: CMP_ERROR = 9;
pub const CMP_ERR_UNABLE_TO_INIT_DECOMPRESSLIB: CMP_ERROR = 10;
pub const CMP_ERR_UNABLE_TO_INIT_COMPUTELIB: CMP_ERROR = 11;
pub const CMP_ERR_CMP_DESTINATION: CMP_ERROR = 12;
pub const CMP_ERR_MEM_ALLOC_FOR_MIPSET: CMP_ERROR = 13;
pub const CMP_ERR_UNKNOWN_DESTINATION_FORMAT: CMP_ERROR = 14;
pub const CMP_ERR_FAILED_HOST_SETUP: CMP_ERROR = 15;
pub const CMP_ERR_PLUGIN_FILE_NOT_FOUND: CMP_ERROR = 16;
pub const CMP_ERR_UNABLE_TO_LOAD_FILE: CMP_ERROR = 17;
pub const CMP_ERR_UNABLE_TO_CREATE_ENCODER: CMP_ERROR = 18;
pub const CMP_ERR_UNABLE_TO_LOAD_ENCODER: CMP_ERROR = 19;
pub const CMP_ERR_NOSHADER_CODE_DEFINED: CMP_ERROR = 20;
pub const CMP_ERR_GPU_DOESNOT_SUPPORT_COMPUTE: CMP_ERROR = 21;
pub const CMP_ERR_GENERIC: CMP_ERROR = 22;

pub const AMD_MAX_CMDS: usize = 20;
pub const AMD_MAX_CMD_STR: usize = 32;
pub const AMD_MAX_CMD_PARAM: usize = 16;

/// One entry of the extra-command set embedded in [`CMP_CompressOptions`].
/// These bindings never populate entries; the whole array is emitted zeroed.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct AMD_CMD_SET {
    pub strCommand: [c_char; AMD_MAX_CMD_STR],
    pub strParameter: [c_char; AMD_MAX_CMD_PARAM],
}

/// Progress callback invoked by the library during long conversions.
/// Return `CMP_TRUE` to abort. These bindings always pass `None`.
pub type CMP_Feedback_Proc =
    Option<unsafe extern "C" fn(fProgress: CMP_FLOAT, pUser1: usize, pUser2: usize) -> CMP_BOOL>;

/// Info-print callback slot of [`CMP_CompressOptions`]; never populated here.
pub type CMP_PrintInfoStr = Option<unsafe extern "C" fn(InfoStr: *const c_char)>;

/// One texture surface (or one MIP level of one).
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct CMP_Texture {
    /// Size of this structure; versioning field checked by the library.
    pub dwSize: CMP_DWORD,
    pub dwWidth: CMP_DWORD,
    pub dwHeight: CMP_DWORD,
    /// Distance to the start of the next line; uncompressed data only.
    pub dwPitch: CMP_DWORD,
    pub format: CMP_FORMAT,
    /// Target format when `format` is a universal one (e.g. BASIS).
    pub transcodeFormat: CMP_FORMAT,
    pub nBlockHeight: CMP_BYTE,
    pub nBlockWidth: CMP_BYTE,
    pub nBlockDepth: CMP_BYTE,
    pub dwDataSize: CMP_DWORD,
    pub pData: *mut CMP_BYTE,
    pub pMipSet: *mut c_void,
}

/// The full conversion options record (`CMP_CompressOptions`).
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct CMP_CompressOptions {
    /// Size of this structure; versioning field checked by the library.
    pub dwSize: CMP_DWORD,
    pub bUseChannelWeighting: CMP_BOOL,
    pub fWeightingRed: CMP_FLOAT,
    pub fWeightingGreen: CMP_FLOAT,
    pub fWeightingBlue: CMP_FLOAT,
    pub bUseAdaptiveWeighting: CMP_BOOL,
    pub bDXT1UseAlpha: CMP_BOOL,
    pub bUseGPUDecompress: CMP_BOOL,
    pub bUseCGCompress: CMP_BOOL,
    pub nAlphaThreshold: CMP_BYTE,
    pub bDisableMultiThreading: CMP_BOOL,
    pub nCompressionSpeed: CMP_Speed,
    pub nGPUDecode: CMP_GPUDecode,
    pub nEncodeWith: CMP_Compute_type,
    pub dwnumThreads: CMP_DWORD,
    pub fquality: CMP_FLOAT,
    pub brestrictColour: CMP_BOOL,
    pub brestrictAlpha: CMP_BOOL,
    pub dwmodeMask: CMP_DWORD,
    pub NumCmds: CMP_INT,
    pub CmdSet: [AMD_CMD_SET; AMD_MAX_CMDS],
    pub fInputDefog: CMP_FLOAT,
    pub fInputExposure: CMP_FLOAT,
    pub fInputKneeLow: CMP_FLOAT,
    pub fInputKneeHigh: CMP_FLOAT,
    pub fInputGamma: CMP_FLOAT,
    pub iCmpLevel: CMP_INT,
    pub iPosBits: CMP_INT,
    pub iTexCBits: CMP_INT,
    pub iNormalBits: CMP_INT,
    pub iGenericBits: CMP_INT,
    pub iVcacheSize: CMP_INT,
    pub iVcacheFIFOSize: CMP_INT,
    pub fOverdrawACMR: CMP_FLOAT,
    pub iSimplifyLOD: CMP_INT,
    pub bVertexFetch: CMP_BOOL,
    pub SourceFormat: CMP_FORMAT,
    pub DestFormat: CMP_FORMAT,
    pub format_support_gpu: CMP_BOOL,
    pub m_PrintInfoStr: CMP_PrintInfoStr,
}

extern "C" {
    /// Computes the number of bytes needed to hold `pTexture`'s data in its
    /// declared format. May normalize metadata fields of `pTexture` in place.
    pub fn CMP_CalculateBufferSize(pTexture: *mut CMP_Texture) -> CMP_DWORD;

    /// Converts `pSourceTexture`'s data into `pDestTexture`'s format, writing
    /// into `pDestTexture->pData`. Both texture records may have their
    /// metadata fields normalized in place.
    pub fn CMP_ConvertTexture(
        pSourceTexture: *mut CMP_Texture,
        pDestTexture: *mut CMP_Texture,
        pOptions: *const CMP_CompressOptions,
        pFeedbackProc: CMP_Feedback_Proc,
    ) -> CMP_ERROR;
}

// Layout regression tests, in the spirit of bindgen's generated ones. The
// library rejects structs whose dwSize does not match its own headers, so
// any drift here is an ABI break.
#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::{offset_of, size_of};

    #[test]
    fn layout_CMP_Texture() {
        let ptr = size_of::<*mut c_void>();

        assert_eq!(offset_of!(CMP_Texture, dwSize), 0);
        assert_eq!(offset_of!(CMP_Texture, dwWidth), 4);
        assert_eq!(offset_of!(CMP_Texture, dwHeight), 8);
        assert_eq!(offset_of!(CMP_Texture, dwPitch), 12);
        assert_eq!(offset_of!(CMP_Texture, format), 16);
        assert_eq!(offset_of!(CMP_Texture, transcodeFormat), 20);
        assert_eq!(offset_of!(CMP_Texture, nBlockHeight), 24);
        assert_eq!(offset_of!(CMP_Texture, nBlockWidth), 25);
        assert_eq!(offset_of!(CMP_Texture, nBlockDepth), 26);
        assert_eq!(offset_of!(CMP_Texture, dwDataSize), 28);
        assert_eq!(offset_of!(CMP_Texture, pData), 32);
        assert_eq!(offset_of!(CMP_Texture, pMipSet), 32 + ptr);
        assert_eq!(size_of::<CMP_Texture>(), if ptr == 8 { 48 } else { 40 });
    }

    #[test]
    fn layout_AMD_CMD_SET() {
        assert_eq!(offset_of!(AMD_CMD_SET, strCommand), 0);
        assert_eq!(offset_of!(AMD_CMD_SET, strParameter), 32);
        assert_eq!(size_of::<AMD_CMD_SET>(), 48);
    }

    #[test]
    fn layout_CMP_CompressOptions() {
        let ptr = size_of::<*mut c_void>();

        assert_eq!(offset_of!(CMP_CompressOptions, dwSize), 0);
        assert_eq!(offset_of!(CMP_CompressOptions, bUseChannelWeighting), 4);
        assert_eq!(offset_of!(CMP_CompressOptions, fWeightingRed), 8);
        assert_eq!(offset_of!(CMP_CompressOptions, fWeightingGreen), 12);
        assert_eq!(offset_of!(CMP_CompressOptions, fWeightingBlue), 16);
        assert_eq!(offset_of!(CMP_CompressOptions, bUseAdaptiveWeighting), 20);
        assert_eq!(offset_of!(CMP_CompressOptions, bDXT1UseAlpha), 24);
        assert_eq!(offset_of!(CMP_CompressOptions, bUseGPUDecompress), 28);
        assert_eq!(offset_of!(CMP_CompressOptions, bUseCGCompress), 32);
        assert_eq!(offset_of!(CMP_CompressOptions, nAlphaThreshold), 36);
        assert_eq!(offset_of!(CMP_CompressOptions, bDisableMultiThreading), 40);
        assert_eq!(offset_of!(CMP_CompressOptions, nCompressionSpeed), 44);
        assert_eq!(offset_of!(CMP_CompressOptions, nGPUDecode), 48);
        assert_eq!(offset_of!(CMP_CompressOptions, nEncodeWith), 52);
        assert_eq!(offset_of!(CMP_CompressOptions, dwnumThreads), 56);
        assert_eq!(offset_of!(CMP_CompressOptions, fquality), 60);
        assert_eq!(offset_of!(CMP_CompressOptions, brestrictColour), 64);
        assert_eq!(offset_of!(CMP_CompressOptions, brestrictAlpha), 68);
        assert_eq!(offset_of!(CMP_CompressOptions, dwmodeMask), 72);
        assert_eq!(offset_of!(CMP_CompressOptions, NumCmds), 76);
        assert_eq!(offset_of!(CMP_CompressOptions, CmdSet), 80);
        assert_eq!(offset_of!(CMP_CompressOptions, fInputDefog), 1040);
        assert_eq!(offset_of!(CMP_CompressOptions, fInputExposure), 1044);
        assert_eq!(offset_of!(CMP_CompressOptions, fInputKneeLow), 1048);
        assert_eq!(offset_of!(CMP_CompressOptions, fInputKneeHigh), 1052);
        assert_eq!(offset_of!(CMP_CompressOptions, fInputGamma), 1056);
        assert_eq!(offset_of!(CMP_CompressOptions, iCmpLevel), 1060);
        assert_eq!(offset_of!(CMP_CompressOptions, iPosBits), 1064);
        assert_eq!(offset_of!(CMP_CompressOptions, iTexCBits), 1068);
        assert_eq!(offset_of!(CMP_CompressOptions, iNormalBits), 1072);
        assert_eq!(offset_of!(CMP_CompressOptions, iGenericBits), 1076);
        assert_eq!(offset_of!(CMP_CompressOptions, iVcacheSize), 1080);
        assert_eq!(offset_of!(CMP_CompressOptions, iVcacheFIFOSize), 1084);
        assert_eq!(offset_of!(CMP_CompressOptions, fOverdrawACMR), 1088);
        assert_eq!(offset_of!(CMP_CompressOptions, iSimplifyLOD), 1092);
        assert_eq!(offset_of!(CMP_CompressOptions, bVertexFetch), 1096);
        assert_eq!(offset_of!(CMP_CompressOptions, SourceFormat), 1100);
        assert_eq!(offset_of!(CMP_CompressOptions, DestFormat), 1104);
        assert_eq!(offset_of!(CMP_CompressOptions, format_support_gpu), 1108);
        assert_eq!(offset_of!(CMP_CompressOptions, m_PrintInfoStr), 1112);
        assert_eq!(
            size_of::<CMP_CompressOptions>(),
            if ptr == 8 { 1120 } else { 1116 }
        );
    }

    #[test]
    fn option_fn_pointers_are_thin() {
        assert_eq!(size_of::<CMP_Feedback_Proc>(), size_of::<*mut c_void>());
        assert_eq!(size_of::<CMP_PrintInfoStr>(), size_of::<*mut c_void>());
    }
}
