//! Best-candidate selection.
//!
//! Ranking, applied in order:
//!
//! 1. descending `unseen_score`;
//! 2. ascending planar distance to the mean center of all candidates
//!    in the pass;
//! 3. input order (first occurrence wins).
//!
//! Rule 3 makes selection a pure function of the candidate sequence:
//! the same list always yields the same choice.

use std::cmp::Ordering;
use std::error::Error;
use std::fmt;

use vantage_core::{mean_center, CandidateObserver, Location};

/// The candidate list was empty.
///
/// The loop treats this as "coverage has plateaued" and terminates; it
/// is never surfaced to callers as a failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NoCandidates;

impl fmt::Display for NoCandidates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no candidate observers")
    }
}

impl Error for NoCandidates {}

/// The chosen candidate and the context it was ranked in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Selection {
    /// Position of the winner in the input sequence.
    pub index: usize,
    /// The winning candidate.
    pub candidate: CandidateObserver,
    /// Mean center of every candidate location in the pass.
    pub centroid: Location,
    /// Distance from the winner to `centroid`.
    pub centroid_distance: f64,
}

/// Pick the best candidate.
///
/// # Errors
///
/// [`NoCandidates`] if `candidates` is empty.
pub fn select_best(candidates: &[CandidateObserver]) -> Result<Selection, NoCandidates> {
    let centroid = mean_center(candidates.iter().map(|c| &c.location)).ok_or(NoCandidates)?;

    let mut best: Option<Selection> = None;
    for (index, &candidate) in candidates.iter().enumerate() {
        let distance = candidate.location.distance(&centroid);
        let replace = match &best {
            None => true,
            Some(b) => {
                rank(
                    candidate.unseen_score,
                    distance,
                    b.candidate.unseen_score,
                    b.centroid_distance,
                ) == Ordering::Less
            }
        };
        if replace {
            best = Some(Selection {
                index,
                candidate,
                centroid,
                centroid_distance: distance,
            });
        }
    }
    best.ok_or(NoCandidates)
}

/// `Less` means `a` ranks ahead of `b`. Equal keys compare `Equal`, so
/// the earlier candidate is kept.
fn rank(a_score: u32, a_dist: f64, b_score: u32, b_dist: f64) -> Ordering {
    b_score
        .cmp(&a_score)
        .then_with(|| a_dist.total_cmp(&b_dist))
}
