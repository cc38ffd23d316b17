//! Test utilities and mock collaborators for Vantage development.
//!
//! Provides table-driven implementations of the two collaborator traits
//! ([`VisibilityOracle`], [`CandidateSurfaceGenerator`]), failure
//! injectors for abort-path tests, and canned [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::sync::atomic::{AtomicUsize, Ordering};

use vantage_core::{
    CandidateObserver, CandidateSurfaceGenerator, Location, OracleError, SurfaceError,
    TargetSet, TargetUniverse, VisibilityOracle,
};

/// Location → visible targets table shared by both mocks.
pub type ViewTable = Vec<(Location, TargetSet)>;

/// Mock implementation of [`VisibilityOracle`].
///
/// Looks the queried location up by exact equality. Unknown locations
/// fail with [`OracleError::Unavailable`]. Targets outside the queried
/// universe are filtered from the answer.
#[derive(Clone, Debug, Default)]
pub struct MockVisibilityOracle {
    views: ViewTable,
}

impl MockVisibilityOracle {
    pub fn new(views: impl IntoIterator<Item = (Location, TargetSet)>) -> Self {
        Self {
            views: views.into_iter().collect(),
        }
    }

    pub fn views(&self) -> &[(Location, TargetSet)] {
        &self.views
    }
}

impl VisibilityOracle for MockVisibilityOracle {
    fn visible_from(
        &self,
        location: Location,
        universe: &TargetUniverse,
    ) -> Result<TargetSet, OracleError> {
        let (_, visible) = self
            .views
            .iter()
            .find(|(loc, _)| *loc == location)
            .ok_or_else(|| OracleError::Unavailable {
                location,
                reason: "location not in mock table".into(),
            })?;
        Ok(visible
            .iter()
            .copied()
            .filter(|id| universe.contains(*id))
            .collect())
    }
}

/// Mock implementation of [`CandidateSurfaceGenerator`].
///
/// Emits one candidate per table row, in table order, scored by how
/// many unseen targets that row sees. Zero scores are kept so callers
/// exercise their own filtering.
#[derive(Clone, Debug, Default)]
pub struct MockCandidateGenerator {
    views: ViewTable,
}

impl MockCandidateGenerator {
    pub fn new(views: impl IntoIterator<Item = (Location, TargetSet)>) -> Self {
        Self {
            views: views.into_iter().collect(),
        }
    }
}

impl CandidateSurfaceGenerator for MockCandidateGenerator {
    fn score_candidates(&self, unseen: &TargetSet) -> Result<Vec<CandidateObserver>, SurfaceError> {
        Ok(self
            .views
            .iter()
            .map(|(location, visible)| {
                let score = visible.iter().filter(|id| unseen.contains(*id)).count();
                CandidateObserver::new(*location, score as u32)
            })
            .collect())
    }
}

/// Wraps an oracle and fails deterministically after `succeed_count`
/// successful calls.
pub struct FailingOracle<O> {
    inner: O,
    pub succeed_count: usize,
    call_count: AtomicUsize,
}

impl<O: VisibilityOracle> FailingOracle<O> {
    pub fn new(inner: O, succeed_count: usize) -> Self {
        Self {
            inner,
            succeed_count,
            call_count: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.call_count.load(Ordering::Relaxed)
    }
}

impl<O: VisibilityOracle> VisibilityOracle for FailingOracle<O> {
    fn visible_from(
        &self,
        location: Location,
        universe: &TargetUniverse,
    ) -> Result<TargetSet, OracleError> {
        let n = self.call_count.fetch_add(1, Ordering::Relaxed);
        if n >= self.succeed_count {
            return Err(OracleError::Unavailable {
                location,
                reason: format!("injected failure after {} calls", self.succeed_count),
            });
        }
        self.inner.visible_from(location, universe)
    }
}

/// Wraps a generator and fails deterministically after `succeed_count`
/// successful calls.
pub struct FailingGenerator<G> {
    inner: G,
    pub succeed_count: usize,
    call_count: AtomicUsize,
}

impl<G: CandidateSurfaceGenerator> FailingGenerator<G> {
    pub fn new(inner: G, succeed_count: usize) -> Self {
        Self {
            inner,
            succeed_count,
            call_count: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.call_count.load(Ordering::Relaxed)
    }
}

impl<G: CandidateSurfaceGenerator> CandidateSurfaceGenerator for FailingGenerator<G> {
    fn score_candidates(&self, unseen: &TargetSet) -> Result<Vec<CandidateObserver>, SurfaceError> {
        let n = self.call_count.fetch_add(1, Ordering::Relaxed);
        if n >= self.succeed_count {
            return Err(SurfaceError::Malformed {
                reason: format!("injected failure after {} calls", self.succeed_count),
            });
        }
        self.inner.score_candidates(unseen)
    }
}
