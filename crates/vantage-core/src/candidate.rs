//! Scored candidate observers.

use crate::geom::Location;

/// A per-pass proposal for the next observer.
///
/// `unseen_score` counts the members of the current unseen set that are
/// visible from `location`. Candidates are regenerated every pass
/// because the score depends on the unseen set; they are never
/// carried over.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CandidateObserver {
    /// Where the observer would stand.
    pub location: Location,
    /// Number of currently unseen targets visible from `location`.
    pub unseen_score: u32,
}

impl CandidateObserver {
    /// Construct a candidate.
    pub fn new(location: Location, unseen_score: u32) -> Self {
        Self {
            location,
            unseen_score,
        }
    }
}
