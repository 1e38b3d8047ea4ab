//! Single-image extraction from UView file buffers.

use crate::error::{Error, Result};
use crate::header::{is_uview, UViewHeader};
use leemdat_core::{BitDepth, ByteOrder, ImagePlane, PixelFormat};

/// Validates the magic signature, parses the header, and locates the image
/// payload within a UView file buffer.
///
/// The exact header length is not independently known across UView
/// versions, so the payload is taken as the last
/// `width * height * bits / 8` bytes of the file; everything before it is
/// treated as header and metadata.
///
/// # Errors
/// Returns [`Error::NotUView`] when the magic signature is absent,
/// [`Error::HeaderParse`] for a truncated or nonsensical header,
/// [`Error::MultiImage`] when the header announces more than one image,
/// and [`Error::InsufficientData`] when the file is shorter than the
/// computed payload, the usual sign of a compressed variant.
pub fn parse_image(bytes: &[u8]) -> Result<(UViewHeader, &[u8])> {
    if !is_uview(bytes) {
        return Err(Error::NotUView);
    }
    let header = UViewHeader::parse(bytes)?;

    if header.num_images > 1 {
        return Err(Error::MultiImage(header.num_images));
    }

    let (height, width, depth) = image_shape(&header)?;
    let expected = width * height * depth.bytes_per_pixel();
    if bytes.len() < expected {
        return Err(Error::InsufficientData {
            expected,
            actual: bytes.len(),
        });
    }

    let payload = &bytes[bytes.len() - expected..];
    Ok((header, payload))
}

/// Decodes a UView file buffer into an image plane.
///
/// Payload samples are decoded with the same element codec used for
/// generic raw files; instrument files are little-endian unless recorded
/// otherwise.
///
/// # Errors
/// Propagates every failure from [`parse_image`], plus core codec errors.
pub fn decode(bytes: &[u8], order: ByteOrder) -> Result<ImagePlane> {
    let (header, payload) = parse_image(bytes)?;
    let (height, width, depth) = image_shape(&header)?;
    let format = PixelFormat::new(depth, order);
    Ok(format.decode_plane(payload, height, width)?)
}

/// Converts header-declared dimensions and bit depth into usable values.
fn image_shape(header: &UViewHeader) -> Result<(usize, usize, BitDepth)> {
    let height = dimension(header.height, "height")?;
    let width = dimension(header.width, "width")?;
    let bits = u16::try_from(header.bits_per_pixel)
        .map_err(|_| Error::HeaderParse(format!("negative bit depth {}", header.bits_per_pixel)))?;
    Ok((height, width, BitDepth::from_bits(bits)?))
}

fn dimension(value: i16, name: &str) -> Result<usize> {
    usize::try_from(value).map_err(|_| Error::HeaderParse(format!("negative {name} {value}")))
}
