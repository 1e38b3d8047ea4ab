//! leemdat-core: Core types for LEEM/LEED image data.
//!
//! This crate provides the foundational abstractions for decoded image data:
//! pixel formats (bit depth and byte order), single image planes, and
//! 3D image stacks assembled along an energy/time axis.
//!

pub mod error;
pub mod format;
pub mod plane;
pub mod stack;

pub use error::{Error, Result};
pub use format::{BitDepth, ByteOrder, PixelFormat};
pub use plane::ImagePlane;
pub use stack::ImageStack;
