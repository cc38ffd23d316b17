//! Candidate scoring over the summed viewshed surface.

use std::sync::Arc;

use tracing::debug;
use vantage_core::{CandidateObserver, CandidateSurfaceGenerator, SurfaceError, TargetSet};

use crate::chunk::chunked_sum;
use crate::config::SurfaceConfig;
use crate::error::RasterError;
use crate::mask::ObserverMask;
use crate::raster::ViewshedStack;

/// Scores every valid observer cell against the current unseen set.
///
/// Each pass: chunked sum of the unseen targets' viewsheds, multiply by
/// the observer mask, drop zero cells, and emit one candidate per
/// remaining cell at the cell centre. Candidates come out in row-major
/// scan order.
#[derive(Debug)]
pub struct RasterCandidateGenerator {
    stack: Arc<ViewshedStack>,
    mask: ObserverMask,
    config: SurfaceConfig,
}

impl RasterCandidateGenerator {
    /// Create a generator over `stack`, masking cells with `mask`.
    ///
    /// # Errors
    ///
    /// [`RasterError::ShapeMismatch`] if the mask does not cover the
    /// stack's grid; [`RasterError::ZeroChunkSize`] from config validation.
    pub fn new(
        stack: Arc<ViewshedStack>,
        mask: ObserverMask,
        config: SurfaceConfig,
    ) -> Result<Self, RasterError> {
        config.validate()?;
        let expected = stack.grid().cell_count();
        if mask.len() != expected {
            return Err(RasterError::ShapeMismatch {
                expected,
                found: mask.len(),
            });
        }
        Ok(Self {
            stack,
            mask,
            config,
        })
    }

    /// The viewshed stack this generator scores against.
    pub fn stack(&self) -> &Arc<ViewshedStack> {
        &self.stack
    }

    /// The summation configuration.
    pub fn config(&self) -> &SurfaceConfig {
        &self.config
    }

    /// Masked per-cell scores, before zero cells are dropped.
    ///
    /// Masked cells read as zero.
    pub fn masked_surface(&self, unseen: &TargetSet) -> Result<Vec<u32>, SurfaceError> {
        let mut surface = chunked_sum(&self.stack, unseen, &self.config)?;
        for (i, value) in surface.iter_mut().enumerate() {
            if !self.mask.is_valid(i) {
                *value = 0;
            }
        }
        Ok(surface)
    }
}

impl CandidateSurfaceGenerator for RasterCandidateGenerator {
    fn score_candidates(
        &self,
        unseen: &TargetSet,
    ) -> Result<Vec<CandidateObserver>, SurfaceError> {
        if unseen.is_empty() {
            return Ok(Vec::new());
        }
        let surface = self.masked_surface(unseen)?;
        let grid = self.stack.grid();
        let candidates: Vec<CandidateObserver> = surface
            .iter()
            .enumerate()
            .filter(|&(_, &score)| score > 0)
            .map(|(i, &score)| CandidateObserver::new(grid.cell_center(i), score))
            .collect();
        debug!(
            unseen = unseen.len(),
            candidates = candidates.len(),
            "candidate surface scored"
        );
        Ok(candidates)
    }
}
