//! Collaborator traits consumed by the selection loop.
//!
//! The loop never computes line of sight itself. It asks a
//! [`CandidateSurfaceGenerator`] for scored candidates over the current
//! unseen set, and a [`VisibilityOracle`] for the full visibility set of
//! the chosen observer.

use crate::candidate::CandidateObserver;
use crate::error::{OracleError, SurfaceError};
use crate::geom::Location;
use crate::target::{TargetSet, TargetUniverse};

/// Answers "which targets can be seen from here?".
///
/// # Contract
///
/// - Absence of a target ID from the returned set means "not visible".
///   Errors are reserved for locations the oracle cannot resolve.
/// - The returned set is a subset of `universe`.
/// - Must be deterministic: the same location and universe yield the
///   same set.
///
/// # Examples
///
/// ```
/// use vantage_core::{Location, OracleError, TargetSet, TargetUniverse, VisibilityOracle};
///
/// /// Sees every target within a fixed radius.
/// struct Radius(f64);
///
/// impl VisibilityOracle for Radius {
///     fn visible_from(
///         &self,
///         location: Location,
///         universe: &TargetUniverse,
///     ) -> Result<TargetSet, OracleError> {
///         Ok(universe
///             .iter()
///             .filter(|t| t.location.distance(&location) <= self.0)
///             .map(|t| t.id)
///             .collect())
///     }
/// }
///
/// let universe = TargetUniverse::from_locations([
///     Location::new(0.0, 0.0),
///     Location::new(10.0, 0.0),
/// ])
/// .unwrap();
/// let seen = Radius(1.0).visible_from(Location::new(0.5, 0.0), &universe).unwrap();
/// assert_eq!(seen.len(), 1);
/// ```
pub trait VisibilityOracle: Send + 'static {
    /// The set of `universe` members visible from `location`.
    fn visible_from(
        &self,
        location: Location,
        universe: &TargetUniverse,
    ) -> Result<TargetSet, OracleError>;
}

/// Produces the scored candidate observers for one pass.
///
/// # Contract
///
/// - Every returned candidate's `unseen_score` is the number of
///   `unseen` members visible from its location, under the same
///   visibility predicate the paired [`VisibilityOracle`] uses.
/// - Invalid observer locations (masked surface) are never returned.
/// - Locations with a zero score may be omitted; an empty result means
///   no further coverage is possible.
/// - Output order must be deterministic; the selector breaks residual
///   ties by it.
pub trait CandidateSurfaceGenerator: Send + 'static {
    /// Score every available observer location against `unseen`.
    fn score_candidates(&self, unseen: &TargetSet)
        -> Result<Vec<CandidateObserver>, SurfaceError>;
}

impl<T: VisibilityOracle + ?Sized> VisibilityOracle for Box<T> {
    fn visible_from(
        &self,
        location: Location,
        universe: &TargetUniverse,
    ) -> Result<TargetSet, OracleError> {
        (**self).visible_from(location, universe)
    }
}

impl<T: CandidateSurfaceGenerator + ?Sized> CandidateSurfaceGenerator for Box<T> {
    fn score_candidates(
        &self,
        unseen: &TargetSet,
    ) -> Result<Vec<CandidateObserver>, SurfaceError> {
        (**self).score_candidates(unseen)
    }
}
