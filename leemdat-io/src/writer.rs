//! Headerless raw file output.

use crate::Result;
use leemdat_core::{ByteOrder, ImagePlane};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes a plane as a headerless row-major `.dat` payload, the exact
/// inverse of decoding a raw file with header length 0.
///
/// Used to convert image-container series into the compact raw form the
/// raw decoder reads back without any codec dependency.
///
/// # Errors
/// Returns an error if the file cannot be created or written.
pub fn write_raw<P: AsRef<Path>>(plane: &ImagePlane, path: P, order: ByteOrder) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(&plane.to_bytes(order))?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raw::{decode_raw, RawParams};
    use leemdat_core::BitDepth;
    use ndarray::array;
    use tempfile::tempdir;

    #[test]
    fn test_write_then_decode_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("frame.dat");
        let plane = ImagePlane::U16(array![[1u16, 2, 3], [4, 5, 60000]]);

        write_raw(&plane, &path, ByteOrder::Big).unwrap();

        let metadata = std::fs::metadata(&path).unwrap();
        assert_eq!(metadata.len(), 12);

        let params = RawParams {
            height: 2,
            width: 3,
            bits_per_pixel: 16,
            byte_order: ByteOrder::Big,
        };
        let decoded = decode_raw(&path, &params).unwrap();
        assert_eq!(decoded, plane);
    }

    #[test]
    fn test_write_u8_plane() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("frame8.dat");
        let plane = ImagePlane::U8(array![[9u8, 8], [7, 6]]);

        write_raw(&plane, &path, ByteOrder::Little).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(bytes, vec![9, 8, 7, 6]);

        let params = RawParams {
            height: 2,
            width: 2,
            bits_per_pixel: 8,
            byte_order: ByteOrder::Little,
        };
        let decoded = decode_raw(&path, &params).unwrap();
        assert_eq!(decoded.bit_depth(), BitDepth::Bits8);
        assert_eq!(decoded, plane);
    }
}
