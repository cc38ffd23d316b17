//! Per-target viewshed rasters.
//!
//! A viewshed raster records, for every cell of the shared grid, whether
//! an observer in that cell sees the raster's target. Cells may be
//! NoData (`None`); NoData and zero both mean "not visible", so holes in
//! a viewshed contribute nothing to candidate scores instead of
//! poisoning them.

use indexmap::IndexMap;
use vantage_core::TargetId;

use crate::error::RasterError;
use crate::grid::RasterGrid;

/// The visibility predicate shared by scoring and the oracle.
///
/// Any positive value is visible; zero and NoData are not.
#[inline]
pub fn cell_is_visible(value: Option<u16>) -> bool {
    matches!(value, Some(v) if v > 0)
}

/// One target's viewshed over a [`RasterGrid`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewshedRaster {
    cells: Vec<Option<u16>>,
}

impl ViewshedRaster {
    /// Wrap a row-major cell buffer. `None` marks NoData.
    pub fn new(grid: &RasterGrid, cells: Vec<Option<u16>>) -> Result<Self, RasterError> {
        if cells.len() != grid.cell_count() {
            return Err(RasterError::ShapeMismatch {
                expected: grid.cell_count(),
                found: cells.len(),
            });
        }
        Ok(Self { cells })
    }

    /// Build a raster where the listed cells are visible (value 1) and
    /// every other cell is NoData.
    pub fn from_visible_cells(
        grid: &RasterGrid,
        visible: impl IntoIterator<Item = usize>,
    ) -> Result<Self, RasterError> {
        let n = grid.cell_count();
        let mut cells = vec![None; n];
        for idx in visible {
            if idx >= n {
                return Err(RasterError::ShapeMismatch {
                    expected: n,
                    found: idx + 1,
                });
            }
            cells[idx] = Some(1);
        }
        Ok(Self { cells })
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the raster has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Raw value at `index` (`None` = NoData or out of range).
    pub fn value(&self, index: usize) -> Option<u16> {
        self.cells.get(index).copied().flatten()
    }

    /// Whether an observer in cell `index` sees this raster's target.
    pub fn is_visible(&self, index: usize) -> bool {
        cell_is_visible(self.value(index))
    }

    /// Add this raster's visibility (0 or 1 per cell) into `acc`.
    pub(crate) fn accumulate_into(&self, acc: &mut [u32]) {
        for (sum, &cell) in acc.iter_mut().zip(&self.cells) {
            *sum += u32::from(cell_is_visible(cell));
        }
    }
}

/// The viewsheds of every target, on one shared grid.
#[derive(Clone, Debug)]
pub struct ViewshedStack {
    grid: RasterGrid,
    rasters: IndexMap<TargetId, ViewshedRaster>,
}

impl ViewshedStack {
    /// Create an empty stack for `grid`.
    pub fn new(grid: RasterGrid) -> Self {
        Self {
            grid,
            rasters: IndexMap::new(),
        }
    }

    /// Add or replace the viewshed of `target`.
    pub fn insert(&mut self, target: TargetId, raster: ViewshedRaster) -> Result<(), RasterError> {
        if raster.len() != self.grid.cell_count() {
            return Err(RasterError::ShapeMismatch {
                expected: self.grid.cell_count(),
                found: raster.len(),
            });
        }
        self.rasters.insert(target, raster);
        Ok(())
    }

    /// The shared grid.
    pub fn grid(&self) -> &RasterGrid {
        &self.grid
    }

    /// Viewshed of `target`, if present.
    pub fn get(&self, target: TargetId) -> Option<&ViewshedRaster> {
        self.rasters.get(&target)
    }

    /// Number of targets with a viewshed.
    pub fn len(&self) -> usize {
        self.rasters.len()
    }

    /// Whether the stack holds no viewsheds.
    pub fn is_empty(&self) -> bool {
        self.rasters.is_empty()
    }
}
