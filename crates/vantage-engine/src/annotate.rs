//! Per-target observer attribution.
//!
//! Built once after the loop from each pass's *full* visibility set.
//! A target seen by several chosen observers lists all of their passes,
//! even though only one of them received coverage credit for it.

use indexmap::IndexMap;
use vantage_core::{PassIndex, PassList, TargetId, TargetSet, TargetUniverse};

/// For every target, the passes whose observer sees it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ObserverAssignment {
    assignments: IndexMap<TargetId, PassList>,
}

impl ObserverAssignment {
    /// Passes that see `target`, in pass order. `None` if the target is
    /// not in the annotated universe.
    pub fn passes_for(&self, target: TargetId) -> Option<&[PassIndex]> {
        self.assignments.get(&target).map(|p| p.as_slice())
    }

    /// `(target, passes)` in universe order.
    pub fn iter(&self) -> impl Iterator<Item = (TargetId, &[PassIndex])> + '_ {
        self.assignments.iter().map(|(&id, p)| (id, p.as_slice()))
    }

    /// Number of annotated targets.
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Whether no targets were annotated.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Targets no chosen observer sees.
    pub fn unobserved(&self) -> impl Iterator<Item = TargetId> + '_ {
        self.assignments
            .iter()
            .filter(|(_, p)| p.is_empty())
            .map(|(&id, _)| id)
    }
}

/// Annotate every target of `universe` with the passes that see it.
///
/// `visibility` holds each pass's full visibility set, in pass order.
/// IDs outside the universe are ignored.
pub fn annotate<'a>(
    universe: &TargetUniverse,
    visibility: impl IntoIterator<Item = (PassIndex, &'a TargetSet)>,
) -> ObserverAssignment {
    let mut assignments: IndexMap<TargetId, PassList> =
        universe.ids().map(|id| (id, PassList::new())).collect();
    for (pass, visible) in visibility {
        for id in visible {
            if let Some(passes) = assignments.get_mut(id) {
                passes.push(pass);
            }
        }
    }
    ObserverAssignment { assignments }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vantage_core::Location;

    fn set(ids: &[u32]) -> TargetSet {
        ids.iter().map(|&n| TargetId(n)).collect()
    }

    #[test]
    fn overlapping_visibility_lists_every_pass() {
        let universe =
            TargetUniverse::from_locations((0..5).map(|i| Location::new(i as f64, 0.0))).unwrap();
        let p1 = set(&[1, 2, 3]);
        let p2 = set(&[3, 4, 42]);
        let a = annotate(&universe, [(PassIndex(1), &p1), (PassIndex(2), &p2)]);

        assert_eq!(a.len(), 5);
        assert_eq!(a.passes_for(TargetId(1)), Some(&[PassIndex(1)][..]));
        assert_eq!(a.passes_for(TargetId(3)), Some(&[PassIndex(1), PassIndex(2)][..]));
        assert_eq!(a.passes_for(TargetId(4)), Some(&[PassIndex(2)][..]));
        assert_eq!(a.passes_for(TargetId(5)), Some(&[][..]));
        assert_eq!(a.passes_for(TargetId(42)), None);
        assert_eq!(a.unobserved().collect::<Vec<_>>(), vec![TargetId(5)]);
    }

    #[test]
    fn no_passes_leaves_everything_unobserved() {
        let universe =
            TargetUniverse::from_locations([Location::new(0.0, 0.0), Location::new(1.0, 0.0)])
                .unwrap();
        let a = annotate(&universe, std::iter::empty());
        assert_eq!(a.unobserved().count(), 2);
    }
}
