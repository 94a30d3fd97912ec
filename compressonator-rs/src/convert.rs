// SPDX-License-Identifier: Apache-2.0

//! The two operations the native library exposes: the buffer-size query and
//! the texture conversion itself.

use crate::{
    enums::{cmp_result, CmpError},
    options::CompressOptions,
    sys,
    texture::Texture,
};
use log::trace;

/// Asks the native library how many bytes `texture`'s data buffer needs for
/// its declared dimensions and format.
///
/// Purely a query: no buffer is read or written. The library may normalize
/// metadata fields (pitch in particular) and those changes are copied back
/// into `texture`.
pub fn calculate_buffer_size(texture: &mut Texture) -> u32 {
    let mut native = texture.to_native();

    // SAFETY: `native.pData` is null and `dwDataSize` zero, so the query
    // touches no caller memory; it only reads and normalizes metadata.
    let size = unsafe { sys::CMP_CalculateBufferSize(&mut native) };

    texture.update_from_native(&native);
    trace!(
        "CMP_CalculateBufferSize: {}x{} {:?} -> {} bytes",
        texture.width,
        texture.height,
        texture.format,
        size
    );
    size
}

/// Converts `source`'s data into `destination`'s format, writing the result
/// into `destination.data`.
///
/// `destination.data` must be pre-allocated to the size reported by
/// [`calculate_buffer_size`] for the destination descriptor. When `options`
/// is `None` the library defaults ([`CompressOptions::default`]) apply.
///
/// Both descriptors may come back with normalized metadata. The returned
/// code is the native one, untranslated; each call is synchronous and cannot
/// be interrupted once dispatched.
pub fn convert_texture(
    source: &mut Texture,
    destination: &mut Texture,
    options: Option<&CompressOptions>,
) -> Result<(), CmpError> {
    let mut source_native = source.to_native();
    let mut destination_native = destination.to_native();
    let options_native = match options {
        Some(options) => options.to_native(),
        None => CompressOptions::default().to_native(),
    };

    // The exclusive borrows of the two data buffers are held across the
    // native call, so the addresses taken here stay valid until it returns,
    // on every exit path.
    source_native.dwDataSize = source.data.len() as sys::CMP_DWORD;
    source_native.pData = source.data.as_mut_ptr();
    destination_native.dwDataSize = destination.data.len() as sys::CMP_DWORD;
    destination_native.pData = destination.data.as_mut_ptr();

    trace!(
        "CMP_ConvertTexture: {}x{} {:?} ({} bytes) -> {:?} ({} bytes)",
        source.width,
        source.height,
        source.format,
        source_native.dwDataSize,
        destination.format,
        destination_native.dwDataSize
    );

    // SAFETY: both pData pointers point into live, fixed buffers for the
    // whole call (see above), and every record carries its dwSize stamp,
    // which is how the library verifies the structs match its ABI revision.
    // No feedback callback is passed; feedback is unused in this binding.
    let error = unsafe {
        sys::CMP_ConvertTexture(
            &mut source_native,
            &mut destination_native,
            &options_native,
            None,
        )
    };

    source.update_from_native(&source_native);
    destination.update_from_native(&destination_native);
    trace!("CMP_ConvertTexture returned {}", error);
    cmp_result(error)
}
