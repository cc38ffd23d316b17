//! Core types and traits for greedy observer placement.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the Vantage workspace:
//! target and pass IDs, planar locations, the target universe, scored
//! candidate observers, and the two collaborator traits the selection
//! loop is built on ([`VisibilityOracle`] and [`CandidateSurfaceGenerator`]).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod candidate;
pub mod error;
pub mod geom;
pub mod id;
pub mod target;
pub mod traits;

pub use candidate::CandidateObserver;
pub use error::{OracleError, SurfaceError};
pub use geom::{mean_center, Location};
pub use id::{PassIndex, PassList, TargetId};
pub use target::{TargetPoint, TargetSet, TargetUniverse, UniverseError};
pub use traits::{CandidateSurfaceGenerator, VisibilityOracle};
