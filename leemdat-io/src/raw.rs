//! Generic raw `.dat` file decoding.
//!
//! This is a "dumb" parse: the file is headerless as far as the decoder
//! can tell, so the caller must know the expected height, width, bit
//! depth, and byte order. With those, the header is inferred by
//! subtraction and discarded, and only the image payload is retained.

use crate::error::{Error, Result};
use crate::header::header_length;
use crate::reader::MappedFileReader;
use crate::util::has_extension;
use leemdat_core::{BitDepth, ByteOrder, ImagePlane, PixelFormat};
use std::path::Path;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The recognized raw-data extension.
pub const RAW_EXTENSION: &str = "dat";

/// Is the file at the specified path a supported raw data type?
#[must_use]
pub fn is_raw_file<P: AsRef<Path>>(path: P) -> bool {
    has_extension(path.as_ref(), &[RAW_EXTENSION])
}

/// Caller-supplied decode parameters for raw files.
///
/// Sourced from the user-edited experiment configuration. There are no
/// hidden defaults here: a wrong combination is caught by header
/// inference, not papered over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RawParams {
    /// Image height in pixels.
    pub height: usize,
    /// Image width in pixels.
    pub width: usize,
    /// Bits of file data per pixel; must be 8 or 16.
    pub bits_per_pixel: u16,
    /// Byte ordering of the payload samples. Generally
    /// [`ByteOrder::Little`]; some outlier files are big-endian.
    pub byte_order: ByteOrder,
}

impl RawParams {
    /// Resolves the element codec these parameters describe.
    ///
    /// # Errors
    /// Returns a core error when `bits_per_pixel` is unsupported.
    pub fn pixel_format(&self) -> leemdat_core::Result<PixelFormat> {
        Ok(PixelFormat::new(
            BitDepth::from_bits(self.bits_per_pixel)?,
            self.byte_order,
        ))
    }
}

/// Decodes a single raw data file into a 2D image plane.
///
/// # Errors
/// Returns [`Error::UnsupportedDataType`] for a non-`.dat` extension,
/// [`Error::DimensionsMismatch`] when the parameters exceed the file
/// size, and core errors for an unsupported bit depth.
pub fn decode_raw<P: AsRef<Path>>(path: P, params: &RawParams) -> Result<ImagePlane> {
    let path = path.as_ref();
    if !is_raw_file(path) {
        return Err(Error::UnsupportedDataType {
            path: path.to_path_buf(),
            detail: format!("expected a .{RAW_EXTENSION} raw data file"),
        });
    }

    let format = params.pixel_format()?;
    let reader = MappedFileReader::open(path)?;
    let bytes = reader.as_bytes();
    let header_len = header_length(path, bytes.len(), params.height, params.width, format.depth)?;
    let payload = &bytes[header_len..];
    Ok(format.decode_plane(payload, params.height, params.width)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    fn raw_file(header_len: usize, payload: &[u8]) -> tempfile::NamedTempFile {
        let mut file = Builder::new().suffix(".dat").tempfile().unwrap();
        file.write_all(&vec![0x5A; header_len]).unwrap();
        file.write_all(payload).unwrap();
        file.flush().unwrap();
        file
    }

    fn le_payload(samples: &[u16]) -> Vec<u8> {
        samples.iter().flat_map(|s| s.to_le_bytes()).collect()
    }

    #[test]
    fn test_decode_raw_with_header() {
        let payload = le_payload(&[1, 2, 3, 4, 5, 6]);
        let file = raw_file(104, &payload);
        let params = RawParams {
            height: 2,
            width: 3,
            bits_per_pixel: 16,
            byte_order: ByteOrder::Little,
        };
        let plane = decode_raw(file.path(), &params).unwrap();
        assert_eq!(plane.dim(), (2, 3));
        assert_eq!(plane.bit_depth(), BitDepth::Bits16);
        assert_eq!(plane.get(0, 0), Some(1));
        assert_eq!(plane.get(1, 2), Some(6));
    }

    #[test]
    fn test_decode_raw_headerless_round_trip() {
        let payload = le_payload(&[0, 1, 65535, 256]);
        let file = raw_file(0, &payload);
        let params = RawParams {
            height: 2,
            width: 2,
            bits_per_pixel: 16,
            byte_order: ByteOrder::Little,
        };
        let plane = decode_raw(file.path(), &params).unwrap();
        assert_eq!(plane.to_bytes(ByteOrder::Little), payload);
    }

    #[test]
    fn test_decode_raw_fixture_shape() {
        // A file sized for 600x592 16-bit little-endian samples.
        let file = raw_file(46, &vec![0u8; 600 * 592 * 2]);
        let params = RawParams {
            height: 600,
            width: 592,
            bits_per_pixel: 16,
            byte_order: ByteOrder::Little,
        };
        let plane = decode_raw(file.path(), &params).unwrap();
        assert_eq!(plane.dim(), (600, 592));
        assert_eq!(plane.bit_depth(), BitDepth::Bits16);
    }

    #[test]
    fn test_decode_raw_rejects_bad_dimensions() {
        let file = raw_file(0, &vec![0u8; 600 * 592 * 2]);
        let params = RawParams {
            height: 6000,
            width: 5920,
            bits_per_pixel: 16,
            byte_order: ByteOrder::Little,
        };
        let err = decode_raw(file.path(), &params).unwrap_err();
        assert!(matches!(err, Error::DimensionsMismatch { .. }));
        assert!(err.to_string().contains("do not match the data file."));
    }

    #[test]
    fn test_decode_raw_rejects_wrong_extension() {
        let mut file = Builder::new().suffix(".txt").tempfile().unwrap();
        file.write_all(&[0u8; 8]).unwrap();
        let params = RawParams {
            height: 2,
            width: 2,
            bits_per_pixel: 16,
            byte_order: ByteOrder::Little,
        };
        let err = decode_raw(file.path(), &params).unwrap_err();
        assert!(matches!(err, Error::UnsupportedDataType { .. }));
    }

    #[test]
    fn test_decode_raw_rejects_bad_bit_depth() {
        let file = raw_file(0, &[0u8; 16]);
        let params = RawParams {
            height: 2,
            width: 2,
            bits_per_pixel: 32,
            byte_order: ByteOrder::Little,
        };
        let err = decode_raw(file.path(), &params).unwrap_err();
        assert!(matches!(
            err,
            Error::Core(leemdat_core::Error::UnsupportedBitDepth(32))
        ));
    }

    #[test]
    fn test_is_raw_file() {
        assert!(is_raw_file("a.dat"));
        assert!(is_raw_file("a.DAT"));
        assert!(!is_raw_file("a.png"));
        assert!(!is_raw_file("no_extension"));
    }
}
