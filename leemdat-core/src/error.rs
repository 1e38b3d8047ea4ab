//! Error types for leemdat-core.

use thiserror::Error;

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for pixel format resolution and stack assembly.
#[derive(Error, Debug)]
pub enum Error {
    /// Bit depth outside the supported set {8, 16}.
    #[error("unsupported bit depth: {0}; must be 8 or 16")]
    UnsupportedBitDepth(u16),

    /// Unrecognized byte-order token.
    #[error("unsupported byte order: {0:?}; must be 'L' or 'B'")]
    UnsupportedByteOrder(char),

    /// Payload byte length does not balance against the requested shape.
    #[error("payload is {actual} bytes but exactly {expected} are required for the requested shape")]
    PayloadLength {
        /// Byte length required by (height, width, bit depth).
        expected: usize,
        /// Byte length actually supplied.
        actual: usize,
    },

    /// A plane handed to stack assembly has an inconsistent shape.
    #[error("plane {index} has shape {actual:?}, expected {expected:?}")]
    ShapeMismatch {
        /// Index of the first offending plane.
        index: usize,
        /// (height, width) established by the first plane.
        expected: (usize, usize),
        /// (height, width) of the offending plane.
        actual: (usize, usize),
    },

    /// A plane handed to stack assembly has an inconsistent element width.
    #[error("plane {index} holds {actual}-bit samples, expected {expected}-bit")]
    BitDepthMismatch {
        /// Index of the first offending plane.
        index: usize,
        /// Bit depth established by the first plane.
        expected: u16,
        /// Bit depth of the offending plane.
        actual: u16,
    },

    /// Stack assembly was given no planes at all.
    #[error("cannot assemble a stack from zero planes")]
    EmptyStack,

    /// A curve-extraction position falls outside the plane.
    #[error("position ({row}, {col}) is outside the plane shape {dim:?}")]
    OutOfBounds {
        /// Requested row (or bottom row of a window).
        row: usize,
        /// Requested column (or right column of a window).
        col: usize,
        /// (height, width) of the stack's planes.
        dim: (usize, usize),
    },

    /// A curve-extraction window has zero area.
    #[error("extraction window must have nonzero height and width")]
    EmptyWindow,
}
