//! Error types for raster construction.

use std::fmt;

/// Errors arising from grid, raster, mask, or surface configuration.
#[derive(Clone, Debug, PartialEq)]
pub enum RasterError {
    /// Attempted to construct a grid with zero rows or columns.
    EmptyGrid,
    /// Cell size is NaN, infinite, zero, or negative.
    InvalidCellSize {
        /// The invalid value.
        value: f64,
    },
    /// Grid origin has a non-finite coordinate.
    InvalidOrigin,
    /// A per-cell buffer does not match the grid's cell count.
    ShapeMismatch {
        /// The grid's cell count.
        expected: usize,
        /// The buffer length supplied.
        found: usize,
    },
    /// `chunk_size` must be at least 1.
    ZeroChunkSize,
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one row and one column"),
            Self::InvalidCellSize { value } => {
                write!(f, "cell_size must be finite and positive, got {value}")
            }
            Self::InvalidOrigin => write!(f, "grid origin must be finite"),
            Self::ShapeMismatch { expected, found } => {
                write!(f, "buffer has {found} cells, grid has {expected}")
            }
            Self::ZeroChunkSize => write!(f, "chunk_size must be at least 1"),
        }
    }
}

impl std::error::Error for RasterError {}
