//! Strongly-typed identifiers and the [`PassList`] type alias.

use smallvec::SmallVec;
use std::fmt;

/// Identifies a target point within a [`TargetUniverse`](crate::TargetUniverse).
///
/// Assigned once at universe construction, sequentially from 1.
/// `TargetId(n)` is the n-th point of the input dataset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TargetId(pub u32);

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for TargetId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// 1-based index of a pass of the selection loop.
///
/// `PassIndex(0)` is the "no pass has started" sentinel; the first
/// recorded pass is `PassIndex(1)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PassIndex(pub u32);

impl PassIndex {
    /// The index of the pass following this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// The index of the pass preceding this one, or `None` for pass 1
    /// and the sentinel.
    pub fn previous(self) -> Option<Self> {
        match self.0 {
            0 | 1 => None,
            n => Some(Self(n - 1)),
        }
    }
}

impl fmt::Display for PassIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for PassIndex {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Ordered list of passes whose observer sees a given target.
///
/// Uses `SmallVec<[PassIndex; 4]>`: most targets are seen by a handful
/// of the (at most `max_passes`) chosen observers, so the common case
/// stays off the heap.
pub type PassList = SmallVec<[PassIndex; 4]>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pass_index_neighbours() {
        assert_eq!(PassIndex(0).next(), PassIndex(1));
        assert_eq!(PassIndex(3).previous(), Some(PassIndex(2)));
        assert_eq!(PassIndex(1).previous(), None);
        assert_eq!(PassIndex(0).previous(), None);
    }

    #[test]
    fn ids_display_as_bare_numbers() {
        assert_eq!(TargetId(17).to_string(), "17");
        assert_eq!(PassIndex(2).to_string(), "2");
    }
}
