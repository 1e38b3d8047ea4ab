//! A single decoded image plane.

use crate::format::{BitDepth, ByteOrder};
use ndarray::Array2;

/// A 2D grid of unsigned samples with explicit (height, width) shape.
///
/// The element width is fixed at decode time by the [`crate::PixelFormat`]
/// that produced the plane. Planes are owned exclusively by the caller that
/// requested the decode and are not mutated afterwards; callers that need a
/// working copy (smoothing and the like) clone first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImagePlane {
    /// 8-bit samples.
    U8(Array2<u8>),
    /// 16-bit samples.
    U16(Array2<u16>),
}

impl ImagePlane {
    /// Returns the (height, width) shape.
    #[must_use]
    pub fn dim(&self) -> (usize, usize) {
        match self {
            ImagePlane::U8(data) => data.dim(),
            ImagePlane::U16(data) => data.dim(),
        }
    }

    /// Returns the height in pixels.
    #[must_use]
    pub fn height(&self) -> usize {
        self.dim().0
    }

    /// Returns the width in pixels.
    #[must_use]
    pub fn width(&self) -> usize {
        self.dim().1
    }

    /// Returns the sample width of this plane.
    #[must_use]
    pub fn bit_depth(&self) -> BitDepth {
        match self {
            ImagePlane::U8(_) => BitDepth::Bits8,
            ImagePlane::U16(_) => BitDepth::Bits16,
        }
    }

    /// Returns the number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            ImagePlane::U8(data) => data.len(),
            ImagePlane::U16(data) => data.len(),
        }
    }

    /// Returns true if the plane holds no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the sample at (row, col), widened to u16, or `None` when out
    /// of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<u16> {
        match self {
            ImagePlane::U8(data) => data.get((row, col)).copied().map(u16::from),
            ImagePlane::U16(data) => data.get((row, col)).copied(),
        }
    }

    /// Returns the underlying 8-bit array, if this is an 8-bit plane.
    #[must_use]
    pub fn as_u8(&self) -> Option<&Array2<u8>> {
        match self {
            ImagePlane::U8(data) => Some(data),
            ImagePlane::U16(_) => None,
        }
    }

    /// Returns the underlying 16-bit array, if this is a 16-bit plane.
    #[must_use]
    pub fn as_u16(&self) -> Option<&Array2<u16>> {
        match self {
            ImagePlane::U16(data) => Some(data),
            ImagePlane::U8(_) => None,
        }
    }

    /// Encodes the plane as a header-free row-major payload in the given
    /// byte order. The exact inverse of [`crate::PixelFormat::decode_plane`].
    #[must_use]
    pub fn to_bytes(&self, order: ByteOrder) -> Vec<u8> {
        match self {
            ImagePlane::U8(data) => data.iter().copied().collect(),
            ImagePlane::U16(data) => {
                let mut bytes = Vec::with_capacity(data.len() * 2);
                for &sample in data {
                    let pair = match order {
                        ByteOrder::Little => sample.to_le_bytes(),
                        ByteOrder::Big => sample.to_be_bytes(),
                    };
                    bytes.extend_from_slice(&pair);
                }
                bytes
            }
        }
    }
}

impl From<Array2<u8>> for ImagePlane {
    fn from(data: Array2<u8>) -> Self {
        ImagePlane::U8(data)
    }
}

impl From<Array2<u16>> for ImagePlane {
    fn from(data: Array2<u16>) -> Self {
        ImagePlane::U16(data)
    }
}
