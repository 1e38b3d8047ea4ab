//! leemdat-io: File decoding and stack loading for LEEM/LEED data.
//!
//! This crate turns instrument files into [`leemdat_core`] planes and
//! stacks: generic raw `.dat` files with caller-supplied dimensions,
//! UView (UKSOFT2001) files, and PNG/TIFF containers. Whole-file access
//! uses memory-mapped reads via memmap2.
//!

mod error;
pub mod header;
pub mod image;
pub mod loader;
pub mod raw;
mod reader;
pub mod uview;
mod util;
mod writer;

pub use error::{Error, Result};
pub use header::{header_length, payload_length};
pub use self::image::{decode_image, is_image_file, tiff_byte_order, IMAGE_EXTENSIONS};
pub use loader::{
    decode_image_stack, decode_raw_stack, load_image_dir, load_raw_dir, scan_data_dir,
};
pub use raw::{decode_raw, is_raw_file, RawParams, RAW_EXTENSION};
pub use reader::MappedFileReader;
pub use uview::{decode_uview, decode_uview_with_order, is_uview_file};
pub use writer::write_raw;
