//! leemdat-uview: UView (UKSOFT2001) file parsing.
//!
//! Elmitec's UView software writes LEEM images as a fixed-offset binary
//! header followed eventually by the raw pixel payload. This crate parses
//! the header and extracts the single-image payload from byte slices;
//! file access lives in leemdat-io.
//!

pub mod decoder;
pub mod error;
pub mod header;

pub use decoder::{decode, parse_image};
pub use error::{Error, Result};
pub use header::{is_uview, UViewHeader, HEADER_LEN, UVIEW_MAGIC};
