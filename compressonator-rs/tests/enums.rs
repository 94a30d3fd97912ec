// SPDX-License-Identifier: Apache-2.0

use compressonator_rs::{sys, CmpError, Format};
use std::convert::TryFrom;

#[test]
fn every_error_code_round_trips() {
    for code in sys::CMP_ABORTED..=sys::CMP_ERR_GENERIC {
        let error = CmpError::try_from(code).expect("a known CMP_ERROR code");
        assert_eq!(error as u32, code);
    }
    assert!(CmpError::try_from(sys::CMP_ERR_GENERIC + 1).is_err());
    // CMP_OK is success, not an error variant.
    assert!(CmpError::try_from(sys::CMP_OK).is_err());
}

#[test]
fn every_format_round_trips() {
    for value in sys::CMP_FORMAT_Unknown..=sys::CMP_FORMAT_BASIS {
        let format = Format::try_from(value).expect("a known CMP_FORMAT value");
        assert_eq!(format as u32, value);
    }
    assert!(Format::try_from(sys::CMP_FORMAT_BASIS + 1).is_err());
}

#[test]
fn errors_describe_themselves() {
    assert_eq!(
        CmpError::SizeMismatch.to_string(),
        "the source and destination texture sizes do not match"
    );
    assert_eq!(
        CmpError::Unknown.to_string(),
        "an unknown error occurred"
    );
}
