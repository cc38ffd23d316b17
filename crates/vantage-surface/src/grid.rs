//! Raster grid geometry.
//!
//! Cells are addressed by a flat row-major index:
//! `index = row * cols + col`, row 0 at the top (north) edge.

use vantage_core::Location;

use crate::error::RasterError;

/// A north-up grid of square cells anchored at its top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RasterGrid {
    rows: u32,
    cols: u32,
    origin: Location,
    cell_size: f64,
}

impl RasterGrid {
    /// Create a grid of `rows x cols` cells of side `cell_size`, whose
    /// top-left corner sits at `origin`.
    pub fn new(rows: u32, cols: u32, origin: Location, cell_size: f64) -> Result<Self, RasterError> {
        if rows == 0 || cols == 0 {
            return Err(RasterError::EmptyGrid);
        }
        if !cell_size.is_finite() || cell_size <= 0.0 {
            return Err(RasterError::InvalidCellSize { value: cell_size });
        }
        if !origin.is_finite() {
            return Err(RasterError::InvalidOrigin);
        }
        Ok(Self {
            rows,
            cols,
            origin,
            cell_size,
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Side length of one cell.
    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Top-left corner of the grid.
    pub fn origin(&self) -> Location {
        self.origin
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// Flat index of `(row, col)`, or `None` if out of bounds.
    pub fn index(&self, row: u32, col: u32) -> Option<usize> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(row as usize * self.cols as usize + col as usize)
    }

    /// Centre of the cell at flat index `index`.
    ///
    /// `index` must be below [`cell_count`](Self::cell_count).
    pub fn cell_center(&self, index: usize) -> Location {
        let cols = self.cols as usize;
        let row = (index / cols) as f64;
        let col = (index % cols) as f64;
        Location::new(
            self.origin.x + (col + 0.5) * self.cell_size,
            self.origin.y - (row + 0.5) * self.cell_size,
        )
    }

    /// Flat index of the cell containing `location`, or `None` if the
    /// location lies outside the grid or is not finite.
    ///
    /// Cells are half-open: the west and north edges belong to the cell.
    pub fn cell_at(&self, location: Location) -> Option<usize> {
        if !location.is_finite() {
            return None;
        }
        let col = ((location.x - self.origin.x) / self.cell_size).floor();
        let row = ((self.origin.y - location.y) / self.cell_size).floor();
        if col < 0.0 || row < 0.0 || col >= self.cols as f64 || row >= self.rows as f64 {
            return None;
        }
        self.index(row as u32, col as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> RasterGrid {
        RasterGrid::new(3, 4, Location::new(100.0, 50.0), 2.0).unwrap()
    }

    #[test]
    fn new_rejects_degenerate_grids() {
        let o = Location::new(0.0, 0.0);
        assert_eq!(RasterGrid::new(0, 4, o, 1.0), Err(RasterError::EmptyGrid));
        assert_eq!(RasterGrid::new(4, 0, o, 1.0), Err(RasterError::EmptyGrid));
        assert!(matches!(
            RasterGrid::new(4, 4, o, 0.0),
            Err(RasterError::InvalidCellSize { .. })
        ));
        assert!(matches!(
            RasterGrid::new(4, 4, o, f64::NAN),
            Err(RasterError::InvalidCellSize { .. })
        ));
        assert_eq!(
            RasterGrid::new(4, 4, Location::new(f64::INFINITY, 0.0), 1.0),
            Err(RasterError::InvalidOrigin)
        );
    }

    #[test]
    fn cell_center_is_row_major_from_top_left() {
        let g = grid();
        assert_eq!(g.cell_count(), 12);
        assert_eq!(g.cell_center(0), Location::new(101.0, 49.0));
        assert_eq!(g.cell_center(3), Location::new(107.0, 49.0));
        assert_eq!(g.cell_center(4), Location::new(101.0, 47.0));
        assert_eq!(g.cell_center(11), Location::new(107.0, 45.0));
    }

    #[test]
    fn cell_at_inverts_cell_center() {
        let g = grid();
        for i in 0..g.cell_count() {
            assert_eq!(g.cell_at(g.cell_center(i)), Some(i));
        }
    }

    #[test]
    fn cell_at_outside_extent_is_none() {
        let g = grid();
        assert_eq!(g.cell_at(Location::new(99.9, 49.0)), None);
        assert_eq!(g.cell_at(Location::new(108.0, 49.0)), None);
        assert_eq!(g.cell_at(Location::new(101.0, 50.1)), None);
        assert_eq!(g.cell_at(Location::new(101.0, 44.0)), None);
        assert_eq!(g.cell_at(Location::new(f64::NAN, 49.0)), None);
    }

    #[test]
    fn cell_at_edges_belong_to_west_and_north_cell() {
        let g = grid();
        assert_eq!(g.cell_at(Location::new(100.0, 50.0)), Some(0));
        assert_eq!(g.cell_at(Location::new(102.0, 50.0)), Some(1));
    }
}
