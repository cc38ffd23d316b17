//! Invalid-observer mask.
//!
//! Observers cannot stand on some cells (rooftops, tree canopy). The
//! mask is applied to the summed surface before candidates are emitted,
//! so masked cells never appear as candidates.

use crate::error::RasterError;
use crate::grid::RasterGrid;

/// Per-cell flag: `true` where an observer may stand.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObserverMask {
    valid: Vec<bool>,
}

impl ObserverMask {
    /// A mask that allows every cell of `grid`.
    pub fn all_valid(grid: &RasterGrid) -> Self {
        Self {
            valid: vec![true; grid.cell_count()],
        }
    }

    /// Wrap a row-major validity buffer.
    pub fn from_cells(grid: &RasterGrid, valid: Vec<bool>) -> Result<Self, RasterError> {
        if valid.len() != grid.cell_count() {
            return Err(RasterError::ShapeMismatch {
                expected: grid.cell_count(),
                found: valid.len(),
            });
        }
        Ok(Self { valid })
    }

    /// Build from a binary raster: non-zero is valid, zero is masked.
    pub fn from_binary(grid: &RasterGrid, values: &[u8]) -> Result<Self, RasterError> {
        Self::from_cells(grid, values.iter().map(|&v| v != 0).collect())
    }

    /// Number of cells covered by the mask.
    pub fn len(&self) -> usize {
        self.valid.len()
    }

    /// Whether the mask covers no cells.
    pub fn is_empty(&self) -> bool {
        self.valid.is_empty()
    }

    /// Whether an observer may stand in cell `index`.
    pub fn is_valid(&self, index: usize) -> bool {
        self.valid.get(index).copied().unwrap_or(false)
    }

    /// Number of cells where observers may stand.
    pub fn valid_count(&self) -> usize {
        self.valid.iter().filter(|&&v| v).count()
    }
}
