//! Error types for the external collaborators.
//!
//! Both collaborator failures are fatal for a run: the engine wraps
//! them with the pass index at which they occurred and stops.

use std::error::Error;
use std::fmt;

use crate::geom::Location;
use crate::id::TargetId;

/// Errors from a [`VisibilityOracle`](crate::VisibilityOracle).
///
/// "Not visible" is never an error: it is signalled by the target's
/// absence from the returned set.
#[derive(Clone, Debug, PartialEq)]
pub enum OracleError {
    /// The surface under `location` cannot be resolved (outside the
    /// surface extent, or the backing data is unavailable).
    Unavailable {
        /// The queried observer location.
        location: Location,
        /// Human-readable description of the failure.
        reason: String,
    },
    /// No visibility surface exists for a target in the queried universe.
    MissingSurface {
        /// The target without a surface.
        target: TargetId,
    },
}

impl fmt::Display for OracleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable { location, reason } => {
                write!(f, "visibility unavailable at {location}: {reason}")
            }
            Self::MissingSurface { target } => {
                write!(f, "no visibility surface for target {target}")
            }
        }
    }
}

impl Error for OracleError {}

/// Errors from a [`CandidateSurfaceGenerator`](crate::CandidateSurfaceGenerator).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SurfaceError {
    /// An input surface is malformed.
    Malformed {
        /// Description of the defect.
        reason: String,
    },
    /// An input surface does not match the expected grid shape.
    ShapeMismatch {
        /// Expected cell count.
        expected: usize,
        /// Cell count found.
        found: usize,
    },
    /// The unseen set names a target the generator has no surface for.
    UnknownTarget {
        /// The unknown target.
        target: TargetId,
    },
    /// A summation worker failed before producing its partial sum.
    WorkerFailed {
        /// Description of the failure.
        reason: String,
    },
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed { reason } => write!(f, "malformed surface: {reason}"),
            Self::ShapeMismatch { expected, found } => {
                write!(f, "surface has {found} cells, expected {expected}")
            }
            Self::UnknownTarget { target } => {
                write!(f, "no visibility surface for target {target}")
            }
            Self::WorkerFailed { reason } => write!(f, "summation worker failed: {reason}"),
        }
    }
}

impl Error for SurfaceError {}
