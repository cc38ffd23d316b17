//! Vantage: greedy maximum-coverage observer placement.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Vantage sub-crates. For most users, adding `vantage` as a single dependency
//! is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use vantage::prelude::*;
//!
//! // 2x2 grid of unit cells; target 1 is visible from cells 0 and 3,
//! // target 2 from cell 3 only.
//! let grid = RasterGrid::new(2, 2, Location::new(0.0, 2.0), 1.0).unwrap();
//! let mut stack = ViewshedStack::new(grid);
//! stack.insert(TargetId(1), ViewshedRaster::from_visible_cells(&grid, [0, 3]).unwrap()).unwrap();
//! stack.insert(TargetId(2), ViewshedRaster::from_visible_cells(&grid, [3]).unwrap()).unwrap();
//!
//! let universe = TargetUniverse::from_locations([
//!     Location::new(0.5, 0.5),
//!     Location::new(1.5, 0.5),
//! ]).unwrap();
//! let (generator, oracle) =
//!     raster_collaborators(stack, ObserverMask::all_valid(&grid), SurfaceConfig::default()).unwrap();
//!
//! let mut run = CoverageRun::new(RunConfig::new(universe, oracle, generator)).unwrap();
//! let report = run.run_to_completion().unwrap();
//! assert_eq!(report.termination, Some(Termination::FullCoverage));
//! assert_eq!(report.rows.len(), 1);
//! assert_eq!(report.rows[0].result.location, Location::new(1.5, 0.5));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `vantage-core` | IDs, locations, target universe, collaborator traits |
//! | [`surface`] | `vantage-surface` | Raster viewsheds, chunked scoring, raster oracle |
//! | [`engine`] | `vantage-engine` | Selection loop, statistics, annotation |
//! | [`export`] | `vantage-export` | Pass/annotation tables, GeoJSON observers |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits, and IDs (`vantage-core`).
///
/// Implement [`types::VisibilityOracle`] and
/// [`types::CandidateSurfaceGenerator`] to plug in a custom visibility
/// model.
pub use vantage_core as types;

/// Raster collaborators (`vantage-surface`).
pub use vantage_surface as surface;

/// The greedy selection engine (`vantage-engine`).
///
/// [`engine::CoverageRun`] drives the loop; [`engine::RunReport`]
/// carries the per-pass rows and the per-target annotation.
pub use vantage_engine as engine;

/// Result artifacts (`vantage-export`).
pub use vantage_export as export;

/// Common imports for typical Vantage usage.
///
/// ```rust
/// use vantage::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use vantage_core::{
        CandidateObserver, CandidateSurfaceGenerator, Location, PassIndex, TargetId, TargetSet,
        TargetUniverse, VisibilityOracle,
    };

    // Errors
    pub use vantage_core::{OracleError, SurfaceError};

    // Raster surface
    pub use vantage_surface::{
        raster_collaborators, ObserverMask, RasterGrid, SurfaceConfig, ViewshedRaster,
        ViewshedStack,
    };

    // Engine
    pub use vantage_engine::{
        ConfigError, CoverageRun, PassOutcome, RunConfig, RunError, RunReport, Termination,
    };

    // Export
    pub use vantage_export::{AnnotationWriter, PassTableWriter};
}
