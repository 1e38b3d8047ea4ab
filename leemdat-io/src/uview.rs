//! UView (UKSOFT2001) file decoding.

use crate::error::{Error, Result};
use crate::reader::MappedFileReader;
use leemdat_core::{ByteOrder, ImagePlane};
use leemdat_uview::UVIEW_MAGIC;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Is the file at the specified path a UView data file?
///
/// Checks only the magic signature; the header may still turn out to be
/// unreadable.
///
/// # Errors
/// Returns an error if the file cannot be opened or read.
pub fn is_uview_file<P: AsRef<Path>>(path: P) -> Result<bool> {
    let mut file = File::open(path)?;
    let mut magic = [0u8; UVIEW_MAGIC.len()];
    match file.read_exact(&mut magic) {
        Ok(()) => Ok(&magic == UVIEW_MAGIC),
        // A file shorter than the magic cannot be UView.
        Err(err) if err.kind() == std::io::ErrorKind::UnexpectedEof => Ok(false),
        Err(err) => Err(err.into()),
    }
}

/// Decodes a UView data file, assuming the usual little-endian payload.
///
/// # Errors
/// See [`decode_uview_with_order`].
pub fn decode_uview<P: AsRef<Path>>(path: P) -> Result<ImagePlane> {
    decode_uview_with_order(path, ByteOrder::Little)
}

/// Decodes a UView data file with an explicit payload byte order.
///
/// The header is always little-endian; `order` applies only to the pixel
/// payload.
///
/// # Errors
/// Returns [`Error::UView`] wrapping the parse failure (missing magic,
/// unreadable header, multi-image file, or short/compressed payload)
/// together with the offending path.
pub fn decode_uview_with_order<P: AsRef<Path>>(path: P, order: ByteOrder) -> Result<ImagePlane> {
    let path = path.as_ref();
    let reader = MappedFileReader::open(path)?;
    leemdat_uview::decode(reader.as_bytes(), order).map_err(|source| Error::UView {
        path: path.to_path_buf(),
        source,
    })
}
