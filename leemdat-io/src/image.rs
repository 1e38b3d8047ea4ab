//! Standard image container (PNG/TIFF) decoding.
//!
//! Pixel decoding is delegated to the image crate rather than
//! reimplemented; this module only reduces the result to a single
//! channel and sizes the samples. Color sources are converted with the
//! codec's ITU-R BT.709 luma weighting
//! (0.2126 R + 0.7152 G + 0.0722 B), noted here so a from-scratch decode
//! would use the same coefficients.

use crate::error::{Error, Result};
use crate::util::has_extension;
use image::DynamicImage;
use leemdat_core::{ByteOrder, ImagePlane};
use ndarray::Array2;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// The recognized image container extensions.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "tif", "tiff"];

/// Is the file at the specified path a supported image type?
#[must_use]
pub fn is_image_file<P: AsRef<Path>>(path: P) -> bool {
    has_extension(path.as_ref(), IMAGE_EXTENSIONS)
}

/// Decodes an image container file to a single-channel 2D plane.
///
/// 16-bit sources keep their 16-bit samples (instrument TIFFs are often
/// 16-bit grayscale); everything else reduces to 8-bit luma.
///
/// # Errors
/// Returns [`Error::UnsupportedDataType`] for an unrecognized extension
/// and [`Error::Image`] when the codec cannot decode the file.
pub fn decode_image<P: AsRef<Path>>(path: P) -> Result<ImagePlane> {
    let path = path.as_ref();
    if !is_image_file(path) {
        return Err(Error::UnsupportedDataType {
            path: path.to_path_buf(),
            detail: format!("expected one of {IMAGE_EXTENSIONS:?}"),
        });
    }

    let img = image::open(path)?;
    let wide = matches!(
        img,
        DynamicImage::ImageLuma16(_)
            | DynamicImage::ImageLumaA16(_)
            | DynamicImage::ImageRgb16(_)
            | DynamicImage::ImageRgba16(_)
    );

    if wide {
        let buf = img.into_luma16();
        let (width, height) = buf.dimensions();
        let data = Array2::from_shape_vec((height as usize, width as usize), buf.into_raw())
            .map_err(|_| plane_shape_error(height as usize, width as usize))?;
        Ok(ImagePlane::U16(data))
    } else {
        let buf = img.into_luma8();
        let (width, height) = buf.dimensions();
        let data = Array2::from_shape_vec((height as usize, width as usize), buf.into_raw())
            .map_err(|_| plane_shape_error(height as usize, width as usize))?;
        Ok(ImagePlane::U8(data))
    }
}

fn plane_shape_error(height: usize, width: usize) -> Error {
    Error::Core(leemdat_core::Error::PayloadLength {
        expected: height * width,
        actual: 0,
    })
}

/// Discovers the byte order of a TIFF file from its two-byte marker:
/// `II` is little-endian, `MM` big-endian.
///
/// This is the one place byte order is discovered rather than supplied.
/// The decoder surfaces an unrecognized marker instead of guessing; any
/// fallback default belongs to the configuration layer.
///
/// # Errors
/// Returns [`Error::ByteOrderMarker`] naming the unrecognized marker, or
/// [`Error::UnsupportedDataType`] when the file is shorter than two
/// bytes.
pub fn tiff_byte_order<P: AsRef<Path>>(path: P) -> Result<ByteOrder> {
    let path = path.as_ref();
    let mut file = File::open(path)?;
    let mut marker = [0u8; 2];
    if let Err(err) = file.read_exact(&mut marker) {
        if err.kind() == std::io::ErrorKind::UnexpectedEof {
            return Err(Error::UnsupportedDataType {
                path: path.to_path_buf(),
                detail: "file too short to hold a TIFF byte-order marker".to_string(),
            });
        }
        return Err(err.into());
    }

    match &marker {
        b"II" => Ok(ByteOrder::Little),
        b"MM" => Ok(ByteOrder::Big),
        _ => Err(Error::ByteOrderMarker {
            path: path.to_path_buf(),
            marker,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leemdat_core::BitDepth;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_decode_png_luma8() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("frame.png");
        let buf = image::GrayImage::from_raw(3, 2, vec![10, 20, 30, 40, 50, 60]).unwrap();
        buf.save(&path).unwrap();

        let plane = decode_image(&path).unwrap();
        assert_eq!(plane.bit_depth(), BitDepth::Bits8);
        assert_eq!(plane.dim(), (2, 3));
        assert_eq!(plane.get(0, 2), Some(30));
        assert_eq!(plane.get(1, 0), Some(40));
    }

    #[test]
    fn test_decode_png_luma16_keeps_width() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("frame16.png");
        let buf: image::ImageBuffer<image::Luma<u16>, Vec<u16>> =
            image::ImageBuffer::from_raw(2, 2, vec![300, 60000, 0, 12345]).unwrap();
        buf.save(&path).unwrap();

        let plane = decode_image(&path).unwrap();
        assert_eq!(plane.bit_depth(), BitDepth::Bits16);
        assert_eq!(plane.dim(), (2, 2));
        assert_eq!(plane.get(0, 1), Some(60000));
        assert_eq!(plane.get(1, 1), Some(12345));
    }

    #[test]
    fn test_decode_rgb_png_reduces_to_luma() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rgb.png");
        // Neutral gray pixels survive any luma weighting unchanged.
        let buf = image::RgbImage::from_pixel(2, 2, image::Rgb([77, 77, 77]));
        buf.save(&path).unwrap();

        let plane = decode_image(&path).unwrap();
        assert_eq!(plane.bit_depth(), BitDepth::Bits8);
        assert_eq!(plane.get(0, 0), Some(77));
    }

    #[test]
    fn test_decode_image_rejects_unknown_extension() {
        let err = decode_image("frame.bmp").unwrap_err();
        assert!(matches!(err, Error::UnsupportedDataType { .. }));
    }

    #[test]
    fn test_tiff_byte_order_markers() {
        let dir = tempdir().unwrap();

        let little = dir.path().join("little.tif");
        std::fs::File::create(&little)
            .unwrap()
            .write_all(b"II*\0 rest of file")
            .unwrap();
        assert_eq!(tiff_byte_order(&little).unwrap(), ByteOrder::Little);

        let big = dir.path().join("big.tif");
        std::fs::File::create(&big)
            .unwrap()
            .write_all(b"MM\0* rest of file")
            .unwrap();
        assert_eq!(tiff_byte_order(&big).unwrap(), ByteOrder::Big);
    }

    #[test]
    fn test_tiff_byte_order_rejects_unknown_marker() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("weird.tif");
        std::fs::File::create(&path)
            .unwrap()
            .write_all(b"XY rest")
            .unwrap();
        let err = tiff_byte_order(&path).unwrap_err();
        match err {
            Error::ByteOrderMarker { marker, .. } => assert_eq!(&marker, b"XY"),
            other => panic!("expected ByteOrderMarker, got {other:?}"),
        }
    }

    #[test]
    fn test_tiff_byte_order_rejects_tiny_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tiny.tif");
        std::fs::File::create(&path).unwrap().write_all(b"I").unwrap();
        assert!(matches!(
            tiff_byte_order(&path),
            Err(Error::UnsupportedDataType { .. })
        ));
    }
}
