//! Header-length inference for headerless raw files.
//!
//! Generic raw files carry an arbitrary-length header with no reliable
//! signature, so the header length is inferred by subtraction: whatever
//! precedes the expected payload is header. Only UView files get
//! content-based validation (see [`crate::uview`]).

use crate::error::{Error, Result};
use leemdat_core::BitDepth;
use std::path::Path;

/// Returns the exact payload byte length for an image of the given shape
/// and depth.
#[must_use]
pub fn payload_length(height: usize, width: usize, depth: BitDepth) -> usize {
    height * width * depth.bytes_per_pixel()
}

/// Computes the header length of a raw file by subtracting the expected
/// payload size from the total file size.
///
/// No attempt is made to check that the result "looks like" a real
/// header; a non-negative remainder is the only requirement.
///
/// # Errors
/// Returns [`Error::DimensionsMismatch`] naming `path` when the file is
/// smaller than the payload the supplied parameters imply. This is the
/// primary defense against a wrong height/width/bit-depth combination.
pub fn header_length(
    path: &Path,
    file_len: usize,
    height: usize,
    width: usize,
    depth: BitDepth,
) -> Result<usize> {
    let payload_len = payload_length(height, width, depth);
    if file_len < payload_len {
        return Err(Error::DimensionsMismatch {
            path: path.to_path_buf(),
            file_len,
            payload_len,
        });
    }
    Ok(file_len - payload_len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_length() {
        assert_eq!(payload_length(600, 592, BitDepth::Bits16), 600 * 592 * 2);
        assert_eq!(payload_length(600, 592, BitDepth::Bits8), 600 * 592);
        assert_eq!(payload_length(0, 592, BitDepth::Bits16), 0);
    }

    #[test]
    fn test_header_length_recovers_exact_value() {
        let path = Path::new("a.dat");
        for header_len in [0usize, 1, 46, 104, 5000] {
            let file_len = header_len + payload_length(600, 592, BitDepth::Bits16);
            assert_eq!(
                header_length(path, file_len, 600, 592, BitDepth::Bits16).unwrap(),
                header_len
            );
        }
    }

    #[test]
    fn test_header_length_rejects_oversized_parameters() {
        // File sized for 600x592 u16, parameters claim 6000x5920.
        let path = Path::new("oversized.dat");
        let file_len = 104 + payload_length(600, 592, BitDepth::Bits16);
        let err = header_length(path, file_len, 6000, 5920, BitDepth::Bits16).unwrap_err();
        assert!(matches!(err, Error::DimensionsMismatch { .. }));
        let message = err.to_string();
        assert!(message.contains("do not match the data file."));
        assert!(message.contains("oversized.dat"));
    }
}
