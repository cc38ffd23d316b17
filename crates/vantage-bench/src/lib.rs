//! Benchmark scenes for the Vantage workspace.
//!
//! Provides seeded synthetic raster scenes:
//!
//! - [`reference_scene`]: 100x100 grid (10K cells), 200 targets
//! - [`stress_scene`]: 316x316 grid (~100K cells), 2000 targets
//!
//! Each target's viewshed is a disc of random radius with random cells
//! knocked out to imitate terrain occlusion. The same seed always
//! produces the same scene.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use vantage_core::{Location, TargetId, TargetUniverse};
use vantage_engine::RunConfig;
use vantage_surface::{
    raster_collaborators, ObserverMask, RasterGrid, SurfaceConfig, ViewshedRaster, ViewshedStack,
};

/// Shape of a synthetic scene.
#[derive(Clone, Copy, Debug)]
pub struct SceneProfile {
    /// Grid rows and columns (square grid).
    pub side: u32,
    /// Number of targets.
    pub targets: usize,
    /// Viewshed radius range, in cells.
    pub radius: (f64, f64),
    /// Probability that a cell inside the disc is occluded.
    pub occlusion: f64,
    /// Fraction of cells where observers may not stand.
    pub masked: f64,
}

/// 100x100 grid, 200 targets.
pub const REFERENCE: SceneProfile = SceneProfile {
    side: 100,
    targets: 200,
    radius: (5.0, 25.0),
    occlusion: 0.3,
    masked: 0.1,
};

/// 316x316 grid, 2000 targets.
pub const STRESS: SceneProfile = SceneProfile {
    side: 316,
    targets: 2000,
    radius: (10.0, 60.0),
    occlusion: 0.3,
    masked: 0.1,
};

/// A generated scene, ready to be turned into a run.
pub struct Scene {
    pub universe: TargetUniverse,
    pub stack: ViewshedStack,
    pub mask: ObserverMask,
}

impl Scene {
    /// Wire the scene into a run configuration.
    pub fn into_config(self, surface: SurfaceConfig, max_passes: u32) -> RunConfig {
        let (generator, oracle) = raster_collaborators(self.stack, self.mask, surface).unwrap();
        RunConfig::new(self.universe, oracle, generator).with_max_passes(max_passes)
    }
}

/// Build a scene for `profile` from `seed`.
pub fn build_scene(profile: SceneProfile, seed: u64) -> Scene {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let side = profile.side;
    let grid = RasterGrid::new(side, side, Location::new(0.0, side as f64), 1.0).unwrap();

    let mut centres = Vec::with_capacity(profile.targets);
    let mut stack = ViewshedStack::new(grid);
    for i in 0..profile.targets {
        let cell = rng.random_range(0..grid.cell_count());
        let centre = grid.cell_center(cell);
        let radius = rng.random_range(profile.radius.0..profile.radius.1);
        let visible: Vec<usize> = (0..grid.cell_count())
            .filter(|&c| grid.cell_center(c).distance(&centre) <= radius)
            .filter(|_| !rng.random_bool(profile.occlusion))
            .collect();
        let raster = ViewshedRaster::from_visible_cells(&grid, visible).unwrap();
        stack.insert(TargetId(i as u32 + 1), raster).unwrap();
        centres.push(centre);
    }

    let valid = (0..grid.cell_count())
        .map(|_| !rng.random_bool(profile.masked))
        .collect();
    let mask = ObserverMask::from_cells(&grid, valid).unwrap();
    let universe = TargetUniverse::from_locations(centres).unwrap();

    Scene {
        universe,
        stack,
        mask,
    }
}

/// [`REFERENCE`] scene.
pub fn reference_scene(seed: u64) -> Scene {
    build_scene(REFERENCE, seed)
}

/// [`STRESS`] scene.
pub fn stress_scene(seed: u64) -> Scene {
    build_scene(STRESS, seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenes_are_seed_deterministic() {
        let small = SceneProfile {
            side: 12,
            targets: 6,
            ..REFERENCE
        };
        let a = build_scene(small, 9);
        let b = build_scene(small, 9);
        assert_eq!(a.universe, b.universe);
        assert_eq!(a.mask.valid_count(), b.mask.valid_count());
        assert_eq!(a.stack.len(), 6);
    }
}
