//! UView-specific error types.

use thiserror::Error;

/// Result type for UView operations.
pub type Result<T> = std::result::Result<T, Error>;

/// UView-specific error types.
#[derive(Error, Debug)]
pub enum Error {
    /// The file does not begin with the UKSOFT2001 magic signature.
    #[error("not a valid UView data file")]
    NotUView,

    /// The fixed-offset header fields could not be read.
    #[error("could not read UView header: {0}")]
    HeaderParse(String),

    /// The header announces more than one image per file.
    #[error("cannot read multi-image UView file ({0} images)")]
    MultiImage(i16),

    /// The file holds fewer bytes than the header-derived payload size.
    #[error(
        "not enough data: payload needs {expected} bytes but the file holds {actual}; \
         possibly compressed"
    )]
    InsufficientData {
        /// Payload size computed from the header.
        expected: usize,
        /// Actual file size.
        actual: usize,
    },

    /// Core library error.
    #[error("core error: {0}")]
    Core(#[from] leemdat_core::Error),
}
