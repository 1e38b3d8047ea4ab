//! Pixel formats: bit depth, byte order, and the element codec.
//!
//! Instrument files carry unsigned 8- or 16-bit samples in either byte
//! order. Experiment configurations describe these as a bit count plus a
//! single-character token ('L' little-endian, 'B' big-endian), so both the
//! typed enums and token-based constructors are provided.

use crate::error::{Error, Result};
use crate::plane::ImagePlane;
use ndarray::Array2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Byte ordering of multi-byte samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ByteOrder {
    /// Little-endian, token 'L'. The common case for instrument files.
    Little,
    /// Big-endian, token 'B'. An explicit opt-in for outlier files.
    Big,
}

impl ByteOrder {
    /// Resolves a configuration token to a byte order.
    ///
    /// # Errors
    /// Returns [`Error::UnsupportedByteOrder`] for anything other than
    /// 'L' or 'B'.
    pub fn from_token(token: char) -> Result<Self> {
        match token {
            'L' => Ok(ByteOrder::Little),
            'B' => Ok(ByteOrder::Big),
            other => Err(Error::UnsupportedByteOrder(other)),
        }
    }

    /// Returns the configuration token for this byte order.
    #[must_use]
    pub fn token(self) -> char {
        match self {
            ByteOrder::Little => 'L',
            ByteOrder::Big => 'B',
        }
    }
}

/// Sample width of decoded pixel data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BitDepth {
    /// Unsigned 8-bit samples.
    Bits8,
    /// Unsigned 16-bit samples.
    Bits16,
}

impl BitDepth {
    /// Resolves a bit count to a supported depth.
    ///
    /// # Errors
    /// Returns [`Error::UnsupportedBitDepth`] unless `bits` is exactly
    /// 8 or 16. Values that are not a multiple of 8 are rejected by the
    /// same path.
    pub fn from_bits(bits: u16) -> Result<Self> {
        match bits {
            8 => Ok(BitDepth::Bits8),
            16 => Ok(BitDepth::Bits16),
            other => Err(Error::UnsupportedBitDepth(other)),
        }
    }

    /// Returns the number of bits per sample.
    #[must_use]
    pub fn bits(self) -> u16 {
        match self {
            BitDepth::Bits8 => 8,
            BitDepth::Bits16 => 16,
        }
    }

    /// Returns the number of bytes per sample.
    #[must_use]
    pub fn bytes_per_pixel(self) -> usize {
        usize::from(self.bits()) / 8
    }
}

/// A fully resolved element codec: sample width plus byte order.
///
/// Constructed fresh per decode call and never mutated. Either both
/// parameters are valid and a format is returned, or construction fails
/// outright; there is no best-guess fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PixelFormat {
    /// Sample width.
    pub depth: BitDepth,
    /// Sample byte order.
    pub order: ByteOrder,
}

impl PixelFormat {
    /// Creates a pixel format from already-validated parts.
    #[must_use]
    pub fn new(depth: BitDepth, order: ByteOrder) -> Self {
        Self { depth, order }
    }

    /// Resolves a (bit count, byte-order token) pair from an experiment
    /// configuration.
    ///
    /// # Errors
    /// Returns [`Error::UnsupportedBitDepth`] or
    /// [`Error::UnsupportedByteOrder`] when either parameter is invalid.
    pub fn from_tokens(bits: u16, order_token: char) -> Result<Self> {
        Ok(Self {
            depth: BitDepth::from_bits(bits)?,
            order: ByteOrder::from_token(order_token)?,
        })
    }

    /// Returns the number of bytes per sample.
    #[must_use]
    pub fn bytes_per_pixel(self) -> usize {
        self.depth.bytes_per_pixel()
    }

    /// Returns the exact payload byte length for an image of the given
    /// shape in this format.
    #[must_use]
    pub fn payload_len(self, height: usize, width: usize) -> usize {
        height * width * self.bytes_per_pixel()
    }

    /// Decodes a header-free payload buffer into a row-major
    /// (height, width) image plane.
    ///
    /// # Errors
    /// Returns [`Error::PayloadLength`] unless `bytes` holds exactly
    /// `height * width` samples of this format's width.
    ///
    /// # Panics
    /// Panics if a chunk is not exactly 2 bytes. This should be unreachable
    /// because `chunks_exact(2)` guarantees each chunk length.
    pub fn decode_plane(self, bytes: &[u8], height: usize, width: usize) -> Result<ImagePlane> {
        let expected = self.payload_len(height, width);
        if bytes.len() != expected {
            return Err(Error::PayloadLength {
                expected,
                actual: bytes.len(),
            });
        }

        match self.depth {
            // Single-byte samples are byte-order independent.
            BitDepth::Bits8 => {
                let data = Array2::from_shape_vec((height, width), bytes.to_vec())
                    .map_err(|_| Error::PayloadLength {
                        expected,
                        actual: bytes.len(),
                    })?;
                Ok(ImagePlane::U8(data))
            }
            BitDepth::Bits16 => {
                let samples: Vec<u16> = bytes
                    .chunks_exact(2)
                    .map(|pair| {
                        let pair: [u8; 2] = pair.try_into().unwrap();
                        match self.order {
                            ByteOrder::Little => u16::from_le_bytes(pair),
                            ByteOrder::Big => u16::from_be_bytes(pair),
                        }
                    })
                    .collect();
                let data = Array2::from_shape_vec((height, width), samples).map_err(|_| {
                    Error::PayloadLength {
                        expected,
                        actual: bytes.len(),
                    }
                })?;
                Ok(ImagePlane::U16(data))
            }
        }
    }
}
