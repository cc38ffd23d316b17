//! Cell-probe visibility oracle.

use std::sync::Arc;

use vantage_core::{Location, OracleError, TargetSet, TargetUniverse, VisibilityOracle};

use crate::raster::ViewshedStack;

/// Answers visibility by reading each target's viewshed at the cell
/// under the observer.
#[derive(Clone, Debug)]
pub struct RasterVisibilityOracle {
    stack: Arc<ViewshedStack>,
}

impl RasterVisibilityOracle {
    /// Create an oracle over `stack`.
    pub fn new(stack: Arc<ViewshedStack>) -> Self {
        Self { stack }
    }
}

impl VisibilityOracle for RasterVisibilityOracle {
    fn visible_from(
        &self,
        location: Location,
        universe: &TargetUniverse,
    ) -> Result<TargetSet, OracleError> {
        let cell = self
            .stack
            .grid()
            .cell_at(location)
            .ok_or_else(|| OracleError::Unavailable {
                location,
                reason: "location outside raster extent".to_string(),
            })?;
        let mut visible = TargetSet::new();
        for id in universe.ids() {
            let raster = self
                .stack
                .get(id)
                .ok_or(OracleError::MissingSurface { target: id })?;
            if raster.is_visible(cell) {
                visible.insert(id);
            }
        }
        Ok(visible)
    }
}
