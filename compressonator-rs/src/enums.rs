// SPDX-License-Identifier: Apache-2.0

use std::{
    convert::TryFrom,
    error::Error,
    fmt::{Display, Formatter},
};

use crate::sys;

/// Pixel or block format of a texture surface.
///
/// Mirrors the native `CMP_FORMAT` set value for value.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[repr(u32)]
pub enum Format {
    Unknown = sys::CMP_FORMAT_Unknown,
    Argb8888 = sys::CMP_FORMAT_ARGB_8888,
    Abgr8888 = sys::CMP_FORMAT_ABGR_8888,
    Rgba8888 = sys::CMP_FORMAT_RGBA_8888,
    Bgra8888 = sys::CMP_FORMAT_BGRA_8888,
    Rgb888 = sys::CMP_FORMAT_RGB_888,
    Bgr888 = sys::CMP_FORMAT_BGR_888,
    Rg8 = sys::CMP_FORMAT_RG_8,
    R8 = sys::CMP_FORMAT_R_8,
    Argb2101010 = sys::CMP_FORMAT_ARGB_2101010,
    Argb16 = sys::CMP_FORMAT_ARGB_16,
    Abgr16 = sys::CMP_FORMAT_ABGR_16,
    Rgba16 = sys::CMP_FORMAT_RGBA_16,
    Bgra16 = sys::CMP_FORMAT_BGRA_16,
    Rg16 = sys::CMP_FORMAT_RG_16,
    R16 = sys::CMP_FORMAT_R_16,
    Rgbe32F = sys::CMP_FORMAT_RGBE_32F,
    Argb16F = sys::CMP_FORMAT_ARGB_16F,
    Abgr16F = sys::CMP_FORMAT_ABGR_16F,
    Rgba16F = sys::CMP_FORMAT_RGBA_16F,
    Bgra16F = sys::CMP_FORMAT_BGRA_16F,
    Rg16F = sys::CMP_FORMAT_RG_16F,
    R16F = sys::CMP_FORMAT_R_16F,
    Argb32F = sys::CMP_FORMAT_ARGB_32F,
    Abgr32F = sys::CMP_FORMAT_ABGR_32F,
    Rgba32F = sys::CMP_FORMAT_RGBA_32F,
    Bgra32F = sys::CMP_FORMAT_BGRA_32F,
    Rgb32F = sys::CMP_FORMAT_RGB_32F,
    Bgr32F = sys::CMP_FORMAT_BGR_32F,
    Rg32F = sys::CMP_FORMAT_RG_32F,
    R32F = sys::CMP_FORMAT_R_32F,
    Astc = sys::CMP_FORMAT_ASTC,
    Ati1N = sys::CMP_FORMAT_ATI1N,
    Ati2N = sys::CMP_FORMAT_ATI2N,
    Ati2NXy = sys::CMP_FORMAT_ATI2N_XY,
    Ati2NDxt5 = sys::CMP_FORMAT_ATI2N_DXT5,
    AtcRgb = sys::CMP_FORMAT_ATC_RGB,
    AtcRgbaExplicit = sys::CMP_FORMAT_ATC_RGBA_Explicit,
    AtcRgbaInterpolated = sys::CMP_FORMAT_ATC_RGBA_Interpolated,
    Bc1 = sys::CMP_FORMAT_BC1,
    Bc2 = sys::CMP_FORMAT_BC2,
    Bc3 = sys::CMP_FORMAT_BC3,
    Bc4 = sys::CMP_FORMAT_BC4,
    Bc5 = sys::CMP_FORMAT_BC5,
    Bc6H = sys::CMP_FORMAT_BC6H,
    Bc6HSf = sys::CMP_FORMAT_BC6H_SF,
    Bc7 = sys::CMP_FORMAT_BC7,
    Dxt1 = sys::CMP_FORMAT_DXT1,
    Dxt3 = sys::CMP_FORMAT_DXT3,
    Dxt5 = sys::CMP_FORMAT_DXT5,
    Dxt5Xgbr = sys::CMP_FORMAT_DXT5_xGBR,
    Dxt5Rxbg = sys::CMP_FORMAT_DXT5_RxBG,
    Dxt5Rbxg = sys::CMP_FORMAT_DXT5_RBxG,
    Dxt5Xrbg = sys::CMP_FORMAT_DXT5_xRBG,
    Dxt5Rgxb = sys::CMP_FORMAT_DXT5_RGxB,
    Dxt5Xgxr = sys::CMP_FORMAT_DXT5_xGxR,
    EtcRgb = sys::CMP_FORMAT_ETC_RGB,
    Etc2Rgb = sys::CMP_FORMAT_ETC2_RGB,
    Etc2Srgb = sys::CMP_FORMAT_ETC2_SRGB,
    Etc2Rgba = sys::CMP_FORMAT_ETC2_RGBA,
    Etc2Rgba1 = sys::CMP_FORMAT_ETC2_RGBA1,
    Etc2Srgba = sys::CMP_FORMAT_ETC2_SRGBA,
    Etc2Srgba1 = sys::CMP_FORMAT_ETC2_SRGBA1,
    Pvrtc = sys::CMP_FORMAT_PVRTC,
    Gtc = sys::CMP_FORMAT_GTC,
    Basis = sys::CMP_FORMAT_BASIS,
}

impl TryFrom<u32> for Format {
    type Error = &'static str;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        // TODO: A bit ugly (but still manageable), convert to a macro?
        Ok(match value {
            sys::CMP_FORMAT_Unknown => Self::Unknown,
            sys::CMP_FORMAT_ARGB_8888 => Self::Argb8888,
            sys::CMP_FORMAT_ABGR_8888 => Self::Abgr8888,
            sys::CMP_FORMAT_RGBA_8888 => Self::Rgba8888,
            sys::CMP_FORMAT_BGRA_8888 => Self::Bgra8888,
            sys::CMP_FORMAT_RGB_888 => Self::Rgb888,
            sys::CMP_FORMAT_BGR_888 => Self::Bgr888,
            sys::CMP_FORMAT_RG_8 => Self::Rg8,
            sys::CMP_FORMAT_R_8 => Self::R8,
            sys::CMP_FORMAT_ARGB_2101010 => Self::Argb2101010,
            sys::CMP_FORMAT_ARGB_16 => Self::Argb16,
            sys::CMP_FORMAT_ABGR_16 => Self::Abgr16,
            sys::CMP_FORMAT_RGBA_16 => Self::Rgba16,
            sys::CMP_FORMAT_BGRA_16 => Self::Bgra16,
            sys::CMP_FORMAT_RG_16 => Self::Rg16,
            sys::CMP_FORMAT_R_16 => Self::R16,
            sys::CMP_FORMAT_RGBE_32F => Self::Rgbe32F,
            sys::CMP_FORMAT_ARGB_16F => Self::Argb16F,
            sys::CMP_FORMAT_ABGR_16F => Self::Abgr16F,
            sys::CMP_FORMAT_RGBA_16F => Self::Rgba16F,
            sys::CMP_FORMAT_BGRA_16F => Self::Bgra16F,
            sys::CMP_FORMAT_RG_16F => Self::Rg16F,
            sys::CMP_FORMAT_R_16F => Self::R16F,
            sys::CMP_FORMAT_ARGB_32F => Self::Argb32F,
            sys::CMP_FORMAT_ABGR_32F => Self::Abgr32F,
            sys::CMP_FORMAT_RGBA_32F => Self::Rgba32F,
            sys::CMP_FORMAT_BGRA_32F => Self::Bgra32F,
            sys::CMP_FORMAT_RGB_32F => Self::Rgb32F,
            sys::CMP_FORMAT_BGR_32F => Self::Bgr32F,
            sys::CMP_FORMAT_RG_32F => Self::Rg32F,
            sys::CMP_FORMAT_R_32F => Self::R32F,
            sys::CMP_FORMAT_ASTC => Self::Astc,
            sys::CMP_FORMAT_ATI1N => Self::Ati1N,
            sys::CMP_FORMAT_ATI2N => Self::Ati2N,
            sys::CMP_FORMAT_ATI2N_XY => Self::Ati2NXy,
            sys::CMP_FORMAT_ATI2N_DXT5 => Self::Ati2NDxt5,
            sys::CMP_FORMAT_ATC_RGB => Self::AtcRgb,
            sys::CMP_FORMAT_ATC_RGBA_Explicit => Self::AtcRgbaExplicit,
            sys::CMP_FORMAT_ATC_RGBA_Interpolated => Self::AtcRgbaInterpolated,
            sys::CMP_FORMAT_BC1 => Self::Bc1,
            sys::CMP_FORMAT_BC2 => Self::Bc2,
            sys::CMP_FORMAT_BC3 => Self::Bc3,
            sys::CMP_FORMAT_BC4 => Self::Bc4,
            sys::CMP_FORMAT_BC5 => Self::Bc5,
            sys::CMP_FORMAT_BC6H => Self::Bc6H,
            sys::CMP_FORMAT_BC6H_SF => Self::Bc6HSf,
            sys::CMP_FORMAT_BC7 => Self::Bc7,
            sys::CMP_FORMAT_DXT1 => Self::Dxt1,
            sys::CMP_FORMAT_DXT3 => Self::Dxt3,
            sys::CMP_FORMAT_DXT5 => Self::Dxt5,
            sys::CMP_FORMAT_DXT5_xGBR => Self::Dxt5Xgbr,
            sys::CMP_FORMAT_DXT5_RxBG => Self::Dxt5Rxbg,
            sys::CMP_FORMAT_DXT5_RBxG => Self::Dxt5Rbxg,
            sys::CMP_FORMAT_DXT5_xRBG => Self::Dxt5Xrbg,
            sys::CMP_FORMAT_DXT5_RGxB => Self::Dxt5Rgxb,
            sys::CMP_FORMAT_DXT5_xGxR => Self::Dxt5Xgxr,
            sys::CMP_FORMAT_ETC_RGB => Self::EtcRgb,
            sys::CMP_FORMAT_ETC2_RGB => Self::Etc2Rgb,
            sys::CMP_FORMAT_ETC2_SRGB => Self::Etc2Srgb,
            sys::CMP_FORMAT_ETC2_RGBA => Self::Etc2Rgba,
            sys::CMP_FORMAT_ETC2_RGBA1 => Self::Etc2Rgba1,
            sys::CMP_FORMAT_ETC2_SRGBA => Self::Etc2Srgba,
            sys::CMP_FORMAT_ETC2_SRGBA1 => Self::Etc2Srgba1,
            sys::CMP_FORMAT_PVRTC => Self::Pvrtc,
            sys::CMP_FORMAT_GTC => Self::Gtc,
            sys::CMP_FORMAT_BASIS => Self::Basis,
            _ => return Err("Not a CMP_FORMAT variant"),
        })
    }
}

/// The compression speed/quality trade-off.
///
/// Ignored for BC6H and BC7, whose encode time follows the quality value
/// instead.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[repr(u32)]
pub enum CompressionSpeed {
    Normal = sys::CMP_Speed_Normal,
    Fast = sys::CMP_Speed_Fast,
    SuperFast = sys::CMP_Speed_SuperFast,
}

/// API used when decompressing on the GPU.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[repr(u32)]
pub enum GpuDecode {
    OpenGl = sys::GPUDecode_OPENGL,
    DirectX = sys::GPUDecode_DIRECTX,
    Vulkan = sys::GPUDecode_VULKAN,
    Invalid = sys::GPUDecode_INVALID,
}

/// Compute framework used when encoding on the GPU.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[repr(u32)]
pub enum EncodeWith {
    Unknown = sys::CMP_UNKNOWN,
    Cpu = sys::CMP_CPU,
    Hpc = sys::CMP_HPC,
    GpuOcl = sys::CMP_GPU_OCL,
    GpuDxc = sys::CMP_GPU_DXC,
    GpuVlk = sys::CMP_GPU_VLK,
    GpuHw = sys::CMP_GPU_HW,
}

/// A failure reported by the native library.
///
/// Values are bit-identical to the native `CMP_ERROR` codes; nothing is
/// translated or re-categorized on the way through.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[repr(u32)]
pub enum CmpError {
    Aborted = sys::CMP_ABORTED,
    InvalidSourceTexture = sys::CMP_ERR_INVALID_SOURCE_TEXTURE,
    InvalidDestinationTexture = sys::CMP_ERR_INVALID_DEST_TEXTURE,
    UnsupportedSourceFormat = sys::CMP_ERR_UNSUPPORTED_SOURCE_FORMAT,
    UnsupportedDestinationFormat = sys::CMP_ERR_UNSUPPORTED_DEST_FORMAT,
    UnsupportedGpuAstcDecode = sys::CMP_ERR_UNSUPPORTED_GPU_ASTC_DECODE,
    UnsupportedGpuBasisDecode = sys::CMP_ERR_UNSUPPORTED_GPU_BASIS_DECODE,
    SizeMismatch = sys::CMP_ERR_SIZE_MISMATCH,
    UnableToInitCodec = sys::CMP_ERR_UNABLE_TO_INIT_CODEC,
    UnableToInitDecompressLib = sys::CMP_ERR_UNABLE_TO_INIT_DECOMPRESSLIB,
    UnableToInitComputeLib = sys::CMP_ERR_UNABLE_TO_INIT_COMPUTELIB,
    CompressDestination = sys::CMP_ERR_CMP_DESTINATION,
    MemoryAllocationForMipSet = sys::CMP_ERR_MEM_ALLOC_FOR_MIPSET,
    UnknownDestinationFormat = sys::CMP_ERR_UNKNOWN_DESTINATION_FORMAT,
    FailedHostSetup = sys::CMP_ERR_FAILED_HOST_SETUP,
    PluginFileNotFound = sys::CMP_ERR_PLUGIN_FILE_NOT_FOUND,
    UnableToLoadFile = sys::CMP_ERR_UNABLE_TO_LOAD_FILE,
    UnableToCreateEncoder = sys::CMP_ERR_UNABLE_TO_CREATE_ENCODER,
    UnableToLoadEncoder = sys::CMP_ERR_UNABLE_TO_LOAD_ENCODER,
    NoShaderCodeDefined = sys::CMP_ERR_NOSHADER_CODE_DEFINED,
    GpuDoesNotSupportCompute = sys::CMP_ERR_GPU_DOESNOT_SUPPORT_COMPUTE,
    Unknown = sys::CMP_ERR_GENERIC,
}

impl TryFrom<u32> for CmpError {
    type Error = &'static str;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Ok(match value {
            sys::CMP_ABORTED => Self::Aborted,
            sys::CMP_ERR_INVALID_SOURCE_TEXTURE => Self::InvalidSourceTexture,
            sys::CMP_ERR_INVALID_DEST_TEXTURE => Self::InvalidDestinationTexture,
            sys::CMP_ERR_UNSUPPORTED_SOURCE_FORMAT => Self::UnsupportedSourceFormat,
            sys::CMP_ERR_UNSUPPORTED_DEST_FORMAT => Self::UnsupportedDestinationFormat,
            sys::CMP_ERR_UNSUPPORTED_GPU_ASTC_DECODE => Self::UnsupportedGpuAstcDecode,
            sys::CMP_ERR_UNSUPPORTED_GPU_BASIS_DECODE => Self::UnsupportedGpuBasisDecode,
            sys::CMP_ERR_SIZE_MISMATCH => Self::SizeMismatch,
            sys::CMP_ERR_UNABLE_TO_INIT_CODEC => Self::UnableToInitCodec,
            sys::CMP_ERR_UNABLE_TO_INIT_DECOMPRESSLIB => Self::UnableToInitDecompressLib,
            sys::CMP_ERR_UNABLE_TO_INIT_COMPUTELIB => Self::UnableToInitComputeLib,
            sys::CMP_ERR_CMP_DESTINATION => Self::CompressDestination,
            sys::CMP_ERR_MEM_ALLOC_FOR_MIPSET => Self::MemoryAllocationForMipSet,
            sys::CMP_ERR_UNKNOWN_DESTINATION_FORMAT => Self::UnknownDestinationFormat,
            sys::CMP_ERR_FAILED_HOST_SETUP => Self::FailedHostSetup,
            sys::CMP_ERR_PLUGIN_FILE_NOT_FOUND => Self::PluginFileNotFound,
            sys::CMP_ERR_UNABLE_TO_LOAD_FILE => Self::UnableToLoadFile,
            sys::CMP_ERR_UNABLE_TO_CREATE_ENCODER => Self::UnableToCreateEncoder,
            sys::CMP_ERR_UNABLE_TO_LOAD_ENCODER => Self::UnableToLoadEncoder,
            sys::CMP_ERR_NOSHADER_CODE_DEFINED => Self::NoShaderCodeDefined,
            sys::CMP_ERR_GPU_DOESNOT_SUPPORT_COMPUTE => Self::GpuDoesNotSupportCompute,
            sys::CMP_ERR_GENERIC => Self::Unknown,
            _ => return Err("Not a CMP_ERROR variant"),
        })
    }
}

impl CmpError {
    /// Human-readable description, per the SDK's documentation of the code.
    pub fn message(self) -> &'static str {
        match self {
            Self::Aborted => "the conversion was aborted",
            Self::InvalidSourceTexture => "the source texture is invalid",
            Self::InvalidDestinationTexture => "the destination texture is invalid",
            Self::UnsupportedSourceFormat => "the source format is not a supported format",
            Self::UnsupportedDestinationFormat => {
                "the destination format is not a supported format"
            }
            Self::UnsupportedGpuAstcDecode => "the GPU hardware does not support ASTC decode",
            Self::UnsupportedGpuBasisDecode => "the GPU hardware does not support BASIS decode",
            Self::SizeMismatch => "the source and destination texture sizes do not match",
            Self::UnableToInitCodec => "unable to initialize the codec needed for conversion",
            Self::UnableToInitDecompressLib => {
                "unable to initialize the codec needed for decompression"
            }
            Self::UnableToInitComputeLib => "unable to initialize the codec needed for compression",
            Self::CompressDestination => "error in compressing the destination texture",
            Self::MemoryAllocationForMipSet => {
                "could not allocate the MIP-set compression level data buffer"
            }
            Self::UnknownDestinationFormat => "the destination codec type is unknown",
            Self::FailedHostSetup => "failed to set up the host for processing",
            Self::PluginFileNotFound => "the required plugin library was not found",
            Self::UnableToLoadFile => "the requested file was not loaded",
            Self::UnableToCreateEncoder => "the request to create an encoder failed",
            Self::UnableToLoadEncoder => "unable to load an encode library",
            Self::NoShaderCodeDefined => "no shader code is available for the requested framework",
            Self::GpuDoesNotSupportCompute => "the selected GPU device does not support compute",
            Self::Unknown => "an unknown error occurred",
        }
    }
}

impl Display for CmpError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl Error for CmpError {}

/// Folds a native status code into a `Result`, mapping codes the enum does
/// not know onto [`CmpError::Unknown`].
pub(crate) fn cmp_result(code: sys::CMP_ERROR) -> Result<(), CmpError> {
    match code {
        sys::CMP_OK => Ok(()),
        other => Err(CmpError::try_from(other).unwrap_or(CmpError::Unknown)),
    }
}
