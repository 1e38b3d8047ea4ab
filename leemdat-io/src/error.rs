//! I/O error types.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for I/O operations.
pub type Result<T> = std::result::Result<T, Error>;

/// I/O error types.
#[derive(Error, Debug)]
pub enum Error {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file extension or magic signature does not match a format the
    /// requested decode path knows how to read.
    #[error(
        "the file {} could not be loaded because the data format is not supported: {detail}",
        .path.display()
    )]
    UnsupportedDataType {
        /// Offending file.
        path: PathBuf,
        /// What was wrong with it.
        detail: String,
    },

    /// Supplied height/width/bit-depth exceed the actual file size.
    #[error(
        "cannot read raw data file {}: image parameters do not match the data file. \
         (file is {file_len} bytes, payload needs {payload_len})",
        .path.display()
    )]
    DimensionsMismatch {
        /// Offending file.
        path: PathBuf,
        /// Actual file size in bytes.
        file_len: usize,
        /// Payload size implied by the supplied parameters.
        payload_len: usize,
    },

    /// UView parsing error, with the offending file attached.
    #[error("{}: {source}", .path.display())]
    UView {
        /// Offending file.
        path: PathBuf,
        /// Underlying UView error.
        #[source]
        source: leemdat_uview::Error,
    },

    /// The first two bytes of a TIFF file are neither "II" nor "MM".
    #[error(
        "unknown byte order in first two bytes of TIFF file {}: {marker:?}",
        .path.display()
    )]
    ByteOrderMarker {
        /// Offending file.
        path: PathBuf,
        /// The unrecognized marker bytes.
        marker: [u8; 2],
    },

    /// Image codec error.
    #[error("image codec error: {0}")]
    Image(#[from] image::ImageError),

    /// Core library error.
    #[error("core error: {0}")]
    Core(#[from] leemdat_core::Error),
}
