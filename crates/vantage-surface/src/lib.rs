//! Raster implementations of the Vantage collaborator traits.
//!
//! Every target carries a viewshed raster on a shared [`RasterGrid`]:
//! a cell is "visible" when an observer standing in it can see the
//! target. From a stack of such rasters this crate provides:
//!
//! - [`RasterCandidateGenerator`]: sums the viewsheds of the unseen
//!   targets in bounded chunks (optionally across worker threads),
//!   applies the invalid-observer [`ObserverMask`], drops zero cells and
//!   emits one scored candidate per remaining cell in row-major order.
//! - [`RasterVisibilityOracle`]: probes each target's viewshed at the
//!   cell under an observer location.
//!
//! Both use the same visibility predicate ([`cell_is_visible`]), so a
//! candidate's score always equals the number of unseen targets the
//! oracle reports for its location.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod chunk;
pub mod config;
pub mod error;
pub mod generator;
pub mod grid;
pub mod mask;
pub mod oracle;
pub mod raster;

pub use chunk::{chunked_sum, make_chunks};
pub use config::{SurfaceConfig, DEFAULT_CHUNK_SIZE};
pub use error::RasterError;
pub use generator::RasterCandidateGenerator;
pub use grid::RasterGrid;
pub use mask::ObserverMask;
pub use oracle::RasterVisibilityOracle;
pub use raster::{cell_is_visible, ViewshedRaster, ViewshedStack};

use std::sync::Arc;

/// Build a paired generator and oracle over the same viewshed stack.
pub fn raster_collaborators(
    stack: ViewshedStack,
    mask: ObserverMask,
    config: SurfaceConfig,
) -> Result<(RasterCandidateGenerator, RasterVisibilityOracle), RasterError> {
    let stack = Arc::new(stack);
    let generator = RasterCandidateGenerator::new(Arc::clone(&stack), mask, config)?;
    let oracle = RasterVisibilityOracle::new(stack);
    Ok((generator, oracle))
}
