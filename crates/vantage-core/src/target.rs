//! The fixed universe of target points.
//!
//! A [`TargetUniverse`] is built once from the input dataset and never
//! changes afterwards. Coverage status is not stored on the points; it
//! is derived from the engine's unseen set.

use std::error::Error;
use std::fmt;

use indexmap::{IndexMap, IndexSet};

use crate::geom::Location;
use crate::id::TargetId;

/// An ordered set of target IDs.
///
/// Iteration follows insertion order, which keeps chunking and
/// candidate scoring deterministic across runs.
pub type TargetSet = IndexSet<TargetId>;

/// One immutable target point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TargetPoint {
    /// Stable identifier, unique within its universe.
    pub id: TargetId,
    /// Planar coordinates of the target.
    pub location: Location,
}

/// Errors from [`TargetUniverse`] construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UniverseError {
    /// Two points share an identifier.
    DuplicateId {
        /// The repeated identifier.
        id: TargetId,
    },
    /// More points than `TargetId` can address.
    TooManyTargets {
        /// Number of points supplied.
        len: usize,
    },
}

impl fmt::Display for UniverseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateId { id } => write!(f, "duplicate target id {id}"),
            Self::TooManyTargets { len } => {
                write!(f, "{len} targets exceed the addressable id range")
            }
        }
    }
}

impl Error for UniverseError {}

/// The fixed, immutable set of targets a run tries to cover.
///
/// Targets keep the order in which they were supplied. The universe
/// may be empty here; the run configuration rejects empty universes
/// before a run starts.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TargetUniverse {
    points: IndexMap<TargetId, Location>,
}

impl TargetUniverse {
    /// Build a universe from raw locations, assigning IDs `1..=N` in
    /// input order.
    pub fn from_locations(
        locations: impl IntoIterator<Item = Location>,
    ) -> Result<Self, UniverseError> {
        let mut points = IndexMap::new();
        for (i, location) in locations.into_iter().enumerate() {
            let id = u32::try_from(i + 1)
                .map_err(|_| UniverseError::TooManyTargets { len: i + 1 })?;
            points.insert(TargetId(id), location);
        }
        Ok(Self { points })
    }

    /// Build a universe from points that already carry identifiers.
    pub fn from_points(
        points: impl IntoIterator<Item = TargetPoint>,
    ) -> Result<Self, UniverseError> {
        let mut map = IndexMap::new();
        for p in points {
            if map.insert(p.id, p.location).is_some() {
                return Err(UniverseError::DuplicateId { id: p.id });
            }
        }
        Ok(Self { points: map })
    }

    /// Number of targets.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the universe has no targets.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether `id` belongs to this universe.
    pub fn contains(&self, id: TargetId) -> bool {
        self.points.contains_key(&id)
    }

    /// Look up a target by ID.
    pub fn get(&self, id: TargetId) -> Option<TargetPoint> {
        self.points
            .get(&id)
            .map(|&location| TargetPoint { id, location })
    }

    /// Target IDs in universe order.
    pub fn ids(&self) -> impl Iterator<Item = TargetId> + '_ {
        self.points.keys().copied()
    }

    /// All targets in universe order.
    pub fn iter(&self) -> impl Iterator<Item = TargetPoint> + '_ {
        self.points
            .iter()
            .map(|(&id, &location)| TargetPoint { id, location })
    }

    /// Every target ID collected into a [`TargetSet`].
    pub fn id_set(&self) -> TargetSet {
        self.ids().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_locations_assigns_sequential_ids() {
        let u = TargetUniverse::from_locations([
            Location::new(0.0, 0.0),
            Location::new(1.0, 0.0),
            Location::new(2.0, 0.0),
        ])
        .unwrap();
        assert_eq!(u.len(), 3);
        let ids: Vec<_> = u.ids().collect();
        assert_eq!(ids, vec![TargetId(1), TargetId(2), TargetId(3)]);
        assert_eq!(u.get(TargetId(2)).unwrap().location, Location::new(1.0, 0.0));
        assert!(u.get(TargetId(4)).is_none());
    }

    #[test]
    fn from_points_rejects_duplicates() {
        let p = TargetPoint {
            id: TargetId(7),
            location: Location::new(0.0, 0.0),
        };
        match TargetUniverse::from_points([p, p]) {
            Err(UniverseError::DuplicateId { id }) => assert_eq!(id, TargetId(7)),
            other => panic!("expected DuplicateId, got {other:?}"),
        }
    }

    #[test]
    fn from_points_keeps_input_order() {
        let pts = [9, 3, 5].map(|n| TargetPoint {
            id: TargetId(n),
            location: Location::new(n as f64, 0.0),
        });
        let u = TargetUniverse::from_points(pts).unwrap();
        let ids: Vec<_> = u.ids().collect();
        assert_eq!(ids, vec![TargetId(9), TargetId(3), TargetId(5)]);
        assert!(u.contains(TargetId(3)));
        assert!(!u.contains(TargetId(1)));
    }

    #[test]
    fn empty_universe() {
        let u = TargetUniverse::from_locations(std::iter::empty()).unwrap();
        assert!(u.is_empty());
        assert!(u.id_set().is_empty());
    }
}
