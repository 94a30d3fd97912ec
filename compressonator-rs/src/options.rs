// SPDX-License-Identifier: Apache-2.0

//! The conversion options record and its native-layout conversion.

use crate::{
    enums::{CompressionSpeed, EncodeWith, Format, GpuDecode},
    sys,
};
use bitflags::bitflags;

bitflags! {
    /// The BC7 block modes the encoder is allowed to use.
    ///
    /// Modes are tried in mask order until one reaches the requested quality;
    /// clearing bits trades image quality for encode speed. Set the quality
    /// to 0.0 to force every enabled mode to be checked.
    pub struct ModeMask: u32 {
        const MODE0 = 0x01;
        const MODE1 = 0x02;
        const MODE2 = 0x04;
        const MODE3 = 0x08;
        const MODE4 = 0x10;
        const MODE5 = 0x20;
        const MODE6 = 0x40;
        const MODE7 = 0x80;
    }
}

/// Options for a conversion call.
///
/// This record is input only; the native library never mutates it. The
/// mesh/geometry fields (Draco level, quantization bits, vertex-cache and
/// overdraw tuning) only apply when the conversion target is a mesh
/// operation rather than a texture one.
#[derive(Debug, Clone, PartialEq)]
pub struct CompressOptions {
    /// Use channel weightings. With swizzled formats the weighting applies
    /// to the data within the channel, not the channel itself. Not
    /// implemented for BC6H and BC7.
    pub use_channel_weighting: bool,
    pub weighting_red: f32,
    pub weighting_green: f32,
    pub weighting_blue: f32,
    /// Adapt the weightings on a per-block basis.
    pub use_adaptive_weighting: bool,
    /// Encode single-bit alpha data. Only valid when compressing to DXT1/BC1.
    pub dxt1_use_alpha: bool,
    /// Decompress on the GPU, using the API selected by `gpu_decode`.
    pub use_gpu_decompress: bool,
    /// Compress on the GPU/SPMD, using the framework selected by `encode_with`.
    pub use_cg_compress: bool,
    /// Texels with alpha below this threshold are treated as transparent
    /// when compressing to DXT1/BC1 with `dxt1_use_alpha`.
    pub alpha_threshold: u8,
    /// Disable the library's own multi-threading, e.g. when the caller
    /// manages threads itself.
    pub disable_multithreading: bool,
    pub speed: CompressionSpeed,
    pub gpu_decode: GpuDecode,
    pub encode_with: EncodeWith,
    /// Threads to spawn for BC7 encoding (up to 128); 0 picks automatically.
    pub number_of_threads: u32,
    /// Encode quality in `0.0..=1.0`; higher is slower and better.
    pub quality: f32,
    /// BC7 tuning: avoid combined colour+alpha modes for blocks that do not
    /// need alpha, so opaque textures cannot come out slightly transparent.
    pub restrict_colour: bool,
    /// BC7 tuning: apply the same restriction to blocks with alpha, for
    /// punch-through or thresholded alpha content.
    pub restrict_alpha: bool,
    pub mode_mask: ModeMask,
    /// Tone-map defog for float images fed to a non-float codec.
    pub input_defog: f32,
    pub input_exposure: f32,
    pub input_knee_low: f32,
    pub input_knee_high: f32,
    pub input_gamma: f32,
    /// Draco compression level, 0-10; higher is more compressed.
    pub level: i32,
    /// Draco quantization bits for positions.
    pub position_bits: i32,
    /// Draco quantization bits for texture coordinates.
    pub texture_coordinate_bits: i32,
    /// Draco quantization bits for normals.
    pub normal_bits: i32,
    /// Draco quantization bits for everything else.
    pub generic_bits: i32,
    /// Simulated hardware vertex-cache size for mesh vertex optimization.
    pub vcache_size: i32,
    /// FIFO variant of the simulated vertex cache; 0 disables it.
    pub vcache_fifo_size: i32,
    /// Overdraw optimization threshold as an average-cache-miss-ratio value,
    /// 1-3 (1.05 allows results up to 5% worse).
    pub overdraw_acmr: f32,
    /// Simplify the mesh to this level of detail; higher means fewer
    /// triangles.
    pub simplify_lod: i32,
    /// Optimize vertex fetch order.
    pub vertex_fetch: bool,
    pub source_format: Format,
    pub destination_format: Format,
    pub format_support_gpu: bool,
}

impl CompressOptions {
    /// The native-layout equivalent of `self`.
    ///
    /// The extra-command set and the info-print callback are always emitted
    /// empty; this binding never populates them.
    pub fn to_native(&self) -> sys::CMP_CompressOptions {
        sys::CMP_CompressOptions {
            dwSize: std::mem::size_of::<sys::CMP_CompressOptions>() as sys::CMP_DWORD,
            bUseChannelWeighting: self.use_channel_weighting as sys::CMP_BOOL,
            fWeightingRed: self.weighting_red,
            fWeightingGreen: self.weighting_green,
            fWeightingBlue: self.weighting_blue,
            bUseAdaptiveWeighting: self.use_adaptive_weighting as sys::CMP_BOOL,
            bDXT1UseAlpha: self.dxt1_use_alpha as sys::CMP_BOOL,
            bUseGPUDecompress: self.use_gpu_decompress as sys::CMP_BOOL,
            bUseCGCompress: self.use_cg_compress as sys::CMP_BOOL,
            nAlphaThreshold: self.alpha_threshold,
            bDisableMultiThreading: self.disable_multithreading as sys::CMP_BOOL,
            nCompressionSpeed: self.speed as sys::CMP_Speed,
            nGPUDecode: self.gpu_decode as sys::CMP_GPUDecode,
            nEncodeWith: self.encode_with as sys::CMP_Compute_type,
            dwnumThreads: self.number_of_threads,
            fquality: self.quality,
            brestrictColour: self.restrict_colour as sys::CMP_BOOL,
            brestrictAlpha: self.restrict_alpha as sys::CMP_BOOL,
            dwmodeMask: self.mode_mask.bits(),
            NumCmds: 0,
            CmdSet: [sys::AMD_CMD_SET {
                strCommand: [0; sys::AMD_MAX_CMD_STR],
                strParameter: [0; sys::AMD_MAX_CMD_PARAM],
            }; sys::AMD_MAX_CMDS],
            fInputDefog: self.input_defog,
            fInputExposure: self.input_exposure,
            fInputKneeLow: self.input_knee_low,
            fInputKneeHigh: self.input_knee_high,
            fInputGamma: self.input_gamma,
            iCmpLevel: self.level,
            iPosBits: self.position_bits,
            iTexCBits: self.texture_coordinate_bits,
            iNormalBits: self.normal_bits,
            iGenericBits: self.generic_bits,
            iVcacheSize: self.vcache_size,
            iVcacheFIFOSize: self.vcache_fifo_size,
            fOverdrawACMR: self.overdraw_acmr,
            iSimplifyLOD: self.simplify_lod,
            bVertexFetch: self.vertex_fetch as sys::CMP_BOOL,
            SourceFormat: self.source_format as sys::CMP_FORMAT,
            DestFormat: self.destination_format as sys::CMP_FORMAT,
            format_support_gpu: self.format_support_gpu as sys::CMP_BOOL,
            m_PrintInfoStr: None,
        }
    }
}

/// The library's documented defaults.
impl Default for CompressOptions {
    fn default() -> Self {
        CompressOptions {
            use_channel_weighting: false,
            weighting_red: 0.0,
            weighting_green: 0.0,
            weighting_blue: 0.0,
            use_adaptive_weighting: false,
            dxt1_use_alpha: false,
            use_gpu_decompress: false,
            use_cg_compress: false,
            alpha_threshold: 0,
            disable_multithreading: false,
            speed: CompressionSpeed::Normal,
            gpu_decode: GpuDecode::OpenGl,
            encode_with: EncodeWith::Unknown,
            number_of_threads: 0,
            quality: 0.05,
            restrict_colour: false,
            restrict_alpha: false,
            mode_mask: ModeMask::all(),
            input_defog: 0.0,
            input_exposure: 0.0,
            input_knee_low: 0.0,
            input_knee_high: 0.0,
            input_gamma: 0.0,
            level: 7,
            position_bits: 14,
            texture_coordinate_bits: 12,
            normal_bits: 10,
            generic_bits: 8,
            vcache_size: 16,
            vcache_fifo_size: 0,
            overdraw_acmr: 1.05,
            simplify_lod: 0,
            vertex_fetch: true,
            source_format: Format::Unknown,
            destination_format: Format::Unknown,
            format_support_gpu: false,
        }
    }
}
