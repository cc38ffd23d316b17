//! Canned scenarios for engine and export tests.
//!
//! - [`five_target_scenario`]: the small hand-checked run (two passes,
//!   80% coverage, terminates with no candidates).
//! - [`random_scenario`]: seeded random scene for property tests.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use vantage_core::{Location, TargetId, TargetSet, TargetUniverse};

use crate::{MockCandidateGenerator, MockVisibilityOracle};

/// A universe plus matching mock collaborators.
#[derive(Clone, Debug)]
pub struct Scenario {
    pub universe: TargetUniverse,
    pub oracle: MockVisibilityOracle,
    pub generator: MockCandidateGenerator,
}

impl Scenario {
    /// Build both mocks from one view table.
    pub fn from_views(universe: TargetUniverse, views: Vec<(Location, TargetSet)>) -> Self {
        Self {
            universe,
            oracle: MockVisibilityOracle::new(views.clone()),
            generator: MockCandidateGenerator::new(views),
        }
    }
}

fn set(ids: &[u32]) -> TargetSet {
    ids.iter().map(|&n| TargetId(n)).collect()
}

/// Targets 1..=5. Observer A at (0, 0) sees {1, 2, 3}; observer B at
/// (10, 0) sees {3, 4}; nothing sees 5.
pub fn five_target_scenario() -> Scenario {
    let universe =
        TargetUniverse::from_locations((1..=5).map(|i| Location::new(i as f64, i as f64)))
            .expect("five targets fit");
    Scenario::from_views(
        universe,
        vec![
            (Location::new(0.0, 0.0), set(&[1, 2, 3])),
            (Location::new(10.0, 0.0), set(&[3, 4])),
        ],
    )
}

/// Seeded random scene: `n_targets` targets, `n_locations` candidate
/// locations on a line, each seeing each target with probability
/// `density`.
pub fn random_scenario(seed: u64, n_targets: usize, n_locations: usize, density: f64) -> Scenario {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let universe = TargetUniverse::from_locations((0..n_targets).map(|_| {
        let x = rng.random::<f64>() * 100.0;
        let y = rng.random::<f64>() * 100.0;
        Location::new(x, y)
    }))
    .expect("target count fits in u32");
    let density = density.clamp(0.0, 1.0);
    let views = (0..n_locations)
        .map(|i| {
            let visible: TargetSet = universe
                .ids()
                .filter(|_| rng.random_bool(density))
                .collect();
            (Location::new(i as f64, 0.0), visible)
        })
        .collect();
    Scenario::from_views(universe, views)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_scenario_is_deterministic() {
        let a = random_scenario(7, 20, 8, 0.3);
        let b = random_scenario(7, 20, 8, 0.3);
        assert_eq!(a.universe, b.universe);
        assert_eq!(a.oracle.views(), b.oracle.views());
        assert_eq!(a.universe.len(), 20);
        assert_eq!(a.oracle.views().len(), 8);
    }
}
