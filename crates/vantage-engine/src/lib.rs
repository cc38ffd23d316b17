//! Greedy observer selection engine.
//!
//! Provides [`CoverageRun`], which repeatedly scores candidate observers
//! against the targets nobody has seen yet, picks the best one, records
//! what it covers, and stops on full coverage, the pass cap, or when no
//! candidate can see anything new. After the loop, every target is
//! annotated with the passes whose observer sees it.
//!
//! Two visibility views are kept apart throughout:
//!
//! - *newly covered* (visibility restricted to the unseen set) drives
//!   selection, the unseen-set update and `pass_vis`;
//! - *full visibility* (against the whole universe) drives `total_vis`
//!   and the per-target annotation.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod annotate;
pub mod config;
pub mod metrics;
pub mod recorder;
pub mod run;
pub mod select;
pub mod tracker;

pub use annotate::{annotate, ObserverAssignment};
pub use config::{ConfigError, RunConfig, DEFAULT_MAX_PASSES};
pub use metrics::PassMetrics;
pub use recorder::{PassRecorder, PassResult, PassRow, PassStatistics};
pub use run::{CoverageRun, PassOutcome, RunError, RunErrorKind, RunReport, RunState, Termination};
pub use select::{select_best, NoCandidates, Selection};
pub use tracker::CoverageTracker;
