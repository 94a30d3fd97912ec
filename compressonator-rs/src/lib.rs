// SPDX-License-Identifier: Apache-2.0

//! A high-level Rust wrapper over [AMD Compressonator](https://gpuopen.com/compressonator/),
//! a library for compressing, decompressing and transcoding GPU texture formats.

pub use compressonator_rs_sys as sys;

pub mod enums;
pub use enums::*;

pub mod texture;
pub use texture::Texture;

pub mod options;
pub use options::{CompressOptions, ModeMask};

pub mod convert;
pub use convert::{calculate_buffer_size, convert_texture};
