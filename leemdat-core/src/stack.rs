//! 3D image stacks and stack assembly.
//!
//! A stack holds successive image planes along a third depth axis in
//! (height, width, depth) layout. The depth axis encodes a meaningful
//! physical ordering, ascending energy or time, so input order is
//! preserved exactly.

use crate::error::{Error, Result};
use crate::format::BitDepth;
use crate::plane::ImagePlane;
use ndarray::{s, Array2, Array3};

/// An ordered sequence of equal-shape image planes stacked along a depth
/// axis.
///
/// Built once per load operation and owned by the caller for the lifetime
/// of the displayed experiment; discarded wholesale on the next load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageStack {
    /// 8-bit samples.
    U8(Array3<u8>),
    /// 16-bit samples.
    U16(Array3<u16>),
}

impl ImageStack {
    /// Assembles ordered planes into a stack, preserving input order along
    /// the depth axis.
    ///
    /// # Errors
    /// Returns [`Error::EmptyStack`] for zero planes,
    /// [`Error::ShapeMismatch`] naming the first plane whose
    /// (height, width) differs from plane 0, and
    /// [`Error::BitDepthMismatch`] naming the first plane whose element
    /// width differs from plane 0.
    pub fn assemble(planes: &[ImagePlane]) -> Result<Self> {
        let first = planes.first().ok_or(Error::EmptyStack)?;
        let dim = first.dim();
        let depth = first.bit_depth();

        for (index, plane) in planes.iter().enumerate() {
            if plane.dim() != dim {
                return Err(Error::ShapeMismatch {
                    index,
                    expected: dim,
                    actual: plane.dim(),
                });
            }
            if plane.bit_depth() != depth {
                return Err(Error::BitDepthMismatch {
                    index,
                    expected: depth.bits(),
                    actual: plane.bit_depth().bits(),
                });
            }
        }

        let (height, width) = dim;
        match depth {
            BitDepth::Bits8 => {
                let mut data = Array3::<u8>::zeros((height, width, planes.len()));
                for (index, plane) in planes.iter().enumerate() {
                    if let Some(slice) = plane.as_u8() {
                        data.slice_mut(s![.., .., index]).assign(slice);
                    }
                }
                Ok(ImageStack::U8(data))
            }
            BitDepth::Bits16 => {
                let mut data = Array3::<u16>::zeros((height, width, planes.len()));
                for (index, plane) in planes.iter().enumerate() {
                    if let Some(slice) = plane.as_u16() {
                        data.slice_mut(s![.., .., index]).assign(slice);
                    }
                }
                Ok(ImageStack::U16(data))
            }
        }
    }

    /// Returns the (height, width, depth) shape.
    #[must_use]
    pub fn dim(&self) -> (usize, usize, usize) {
        match self {
            ImageStack::U8(data) => data.dim(),
            ImageStack::U16(data) => data.dim(),
        }
    }

    /// Returns the (height, width) shape shared by every plane.
    #[must_use]
    pub fn plane_dim(&self) -> (usize, usize) {
        let (height, width, _) = self.dim();
        (height, width)
    }

    /// Returns the number of planes in the stack.
    #[must_use]
    pub fn num_images(&self) -> usize {
        self.dim().2
    }

    /// Returns the sample width of the stack.
    #[must_use]
    pub fn bit_depth(&self) -> BitDepth {
        match self {
            ImageStack::U8(_) => BitDepth::Bits8,
            ImageStack::U16(_) => BitDepth::Bits16,
        }
    }

    /// Returns an owned copy of the plane at `index` along the depth axis,
    /// or `None` when out of range.
    #[must_use]
    pub fn plane(&self, index: usize) -> Option<ImagePlane> {
        if index >= self.num_images() {
            return None;
        }
        match self {
            ImageStack::U8(data) => {
                let slice: Array2<u8> = data.slice(s![.., .., index]).to_owned();
                Some(ImagePlane::U8(slice))
            }
            ImageStack::U16(data) => {
                let slice: Array2<u16> = data.slice(s![.., .., index]).to_owned();
                Some(ImagePlane::U16(slice))
            }
        }
    }

    /// Extracts the I(V) intensity profile of a single pixel along the
    /// depth axis.
    ///
    /// # Errors
    /// Returns [`Error::OutOfBounds`] when (row, col) falls outside the
    /// plane shape.
    pub fn pixel_curve(&self, row: usize, col: usize) -> Result<Vec<f64>> {
        self.window_curve(row, col, 1, 1)
    }

    /// Extracts the I(V) intensity profile of a rectangular window along
    /// the depth axis, averaging the samples inside the window for each
    /// plane.
    ///
    /// # Errors
    /// Returns [`Error::EmptyWindow`] for a zero-area window and
    /// [`Error::OutOfBounds`] when the window extends past the plane shape.
    pub fn window_curve(
        &self,
        top: usize,
        left: usize,
        height: usize,
        width: usize,
    ) -> Result<Vec<f64>> {
        if height == 0 || width == 0 {
            return Err(Error::EmptyWindow);
        }
        let dim = self.plane_dim();
        if top + height > dim.0 || left + width > dim.1 {
            return Err(Error::OutOfBounds {
                row: top + height - 1,
                col: left + width - 1,
                dim,
            });
        }

        #[allow(clippy::cast_precision_loss)]
        let count = (height * width) as f64;
        let curve = (0..self.num_images())
            .map(|index| {
                let sum: f64 = match self {
                    ImageStack::U8(data) => data
                        .slice(s![top..top + height, left..left + width, index])
                        .iter()
                        .map(|&sample| f64::from(sample))
                        .sum(),
                    ImageStack::U16(data) => data
                        .slice(s![top..top + height, left..left + width, index])
                        .iter()
                        .map(|&sample| f64::from(sample))
                        .sum(),
                };
                sum / count
            })
            .collect();
        Ok(curve)
    }
}
