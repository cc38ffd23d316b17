//! Unseen-set ownership and coverage bookkeeping.

use vantage_core::{TargetSet, TargetUniverse};

/// Owns the set of targets no chosen observer has covered yet.
///
/// Starts equal to the whole universe and only ever shrinks. It is
/// mutated once per pass, by [`cover`](Self::cover).
#[derive(Clone, Debug)]
pub struct CoverageTracker {
    universe_len: usize,
    unseen: TargetSet,
}

impl CoverageTracker {
    /// Start tracking with every target of `universe` unseen.
    pub fn new(universe: &TargetUniverse) -> Self {
        Self {
            universe_len: universe.len(),
            unseen: universe.id_set(),
        }
    }

    /// Targets not yet covered, in universe order.
    pub fn unseen(&self) -> &TargetSet {
        &self.unseen
    }

    /// Number of targets not yet covered.
    pub fn unseen_len(&self) -> usize {
        self.unseen.len()
    }

    /// Number of targets covered so far.
    pub fn covered_len(&self) -> usize {
        self.universe_len - self.unseen.len()
    }

    /// Size of the universe being tracked.
    pub fn universe_len(&self) -> usize {
        self.universe_len
    }

    /// Whether every target has been covered.
    pub fn is_complete(&self) -> bool {
        self.unseen.is_empty()
    }

    /// The members of `visible` that are still unseen, without mutating.
    pub fn newly_covered(&self, visible: &TargetSet) -> TargetSet {
        visible
            .iter()
            .filter(|id| self.unseen.contains(*id))
            .copied()
            .collect()
    }

    /// Credit an observer's full visibility set: remove the unseen
    /// members it contains and return them.
    pub fn cover(&mut self, visible: &TargetSet) -> TargetSet {
        let newly = self.newly_covered(visible);
        if !newly.is_empty() {
            self.unseen.retain(|id| !newly.contains(id));
        }
        newly
    }
}
