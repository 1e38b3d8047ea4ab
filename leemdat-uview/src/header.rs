//! Fixed-offset UKSOFT2001 header parsing.
//!
//! Various UView versions carry slightly different header contents; only
//! the minimal field set needed to locate the image payload is parsed
//! here. All multi-byte fields are little-endian.

use crate::error::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Magic bytes at offset 0 of every UView file.
pub const UVIEW_MAGIC: &[u8; 10] = b"UKSOFT2001";

// Fixed byte offsets of the parsed header fields. Subject to change in
// future UView versions.
const ID_OFFSET: usize = 0;
const ID_LEN: usize = 20;
const SIZE_OFFSET: usize = 20;
const VERSION_OFFSET: usize = 22;
const BITS_PER_PIXEL_OFFSET: usize = 24;
// 6 unused alignment bytes at offset 26.
const START_TIME_OFFSET: usize = 32;
const WIDTH_OFFSET: usize = 40;
const HEIGHT_OFFSET: usize = 42;
const NUM_IMAGES_OFFSET: usize = 44;

/// Total length of the parsed header prefix.
pub const HEADER_LEN: usize = 46;

/// Checks whether a byte buffer begins with the UView magic signature.
#[must_use]
pub fn is_uview(bytes: &[u8]) -> bool {
    bytes.get(..UVIEW_MAGIC.len()) == Some(&UVIEW_MAGIC[..])
}

/// The parsed subset of a UKSOFT2001 file header.
///
/// Transient; exists only for the duration of a single-file decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UViewHeader {
    /// 20-byte identification field beginning with the magic signature.
    pub id: [u8; 20],
    /// Header size field.
    pub size: i16,
    /// UView format version.
    pub version: i16,
    /// Bits per pixel of the payload samples.
    pub bits_per_pixel: i16,
    /// Acquisition start time.
    pub start_time: i64,
    /// Image width in pixels.
    pub width: i16,
    /// Image height in pixels.
    pub height: i16,
    /// Number of images stored in the file.
    pub num_images: i16,
}

fn read_i16(bytes: &[u8], offset: usize) -> Option<i16> {
    let chunk: [u8; 2] = bytes.get(offset..offset + 2)?.try_into().ok()?;
    Some(i16::from_le_bytes(chunk))
}

fn read_i64(bytes: &[u8], offset: usize) -> Option<i64> {
    let chunk: [u8; 8] = bytes.get(offset..offset + 8)?.try_into().ok()?;
    Some(i64::from_le_bytes(chunk))
}

impl UViewHeader {
    /// Parses the fixed-offset header fields from the start of a file
    /// buffer. The magic signature is checked separately by the decoder.
    ///
    /// # Errors
    /// Returns [`Error::HeaderParse`] when the buffer is shorter than the
    /// parsed header prefix.
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < HEADER_LEN {
            return Err(Error::HeaderParse(format!(
                "file holds {} bytes, header needs {HEADER_LEN}",
                bytes.len()
            )));
        }

        let mut id = [0u8; ID_LEN];
        id.copy_from_slice(&bytes[ID_OFFSET..ID_OFFSET + ID_LEN]);

        let field = |offset: usize| {
            read_i16(bytes, offset)
                .ok_or_else(|| Error::HeaderParse(format!("short field at offset {offset}")))
        };

        Ok(Self {
            id,
            size: field(SIZE_OFFSET)?,
            version: field(VERSION_OFFSET)?,
            bits_per_pixel: field(BITS_PER_PIXEL_OFFSET)?,
            start_time: read_i64(bytes, START_TIME_OFFSET).ok_or_else(|| {
                Error::HeaderParse(format!("short field at offset {START_TIME_OFFSET}"))
            })?,
            width: field(WIDTH_OFFSET)?,
            height: field(HEIGHT_OFFSET)?,
            num_images: field(NUM_IMAGES_OFFSET)?,
        })
    }
}
