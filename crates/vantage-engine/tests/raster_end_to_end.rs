//! Full runs over the raster collaborators.

use vantage_core::{Location, PassIndex, TargetId, TargetUniverse};
use vantage_engine::{CoverageRun, RunConfig, Termination};
use vantage_surface::{
    raster_collaborators, ObserverMask, RasterGrid, SurfaceConfig, ViewshedRaster, ViewshedStack,
};

// 3x3 grid of unit cells, top-left corner at (0, 3).
//
//   0 1 2
//   3 4 5
//   6 7 8
//
// Targets 1 and 2 are visible from cells 0 and 4; target 3 from cell 8.
fn scene() -> (TargetUniverse, ViewshedStack, RasterGrid) {
    let grid = RasterGrid::new(3, 3, Location::new(0.0, 3.0), 1.0).unwrap();
    let mut stack = ViewshedStack::new(grid);
    let visible: [&[usize]; 3] = [&[0, 4], &[0, 4], &[8]];
    for (i, cells) in visible.iter().enumerate() {
        let raster = ViewshedRaster::from_visible_cells(&grid, cells.iter().copied()).unwrap();
        stack.insert(TargetId(i as u32 + 1), raster).unwrap();
    }
    let universe = TargetUniverse::from_locations([
        Location::new(0.2, 0.2),
        Location::new(0.4, 0.4),
        Location::new(2.8, 2.8),
    ])
    .unwrap();
    (universe, stack, grid)
}

fn run(mask: impl FnOnce(&RasterGrid) -> ObserverMask, config: SurfaceConfig) -> CoverageRun {
    let (universe, stack, grid) = scene();
    let (generator, oracle) = raster_collaborators(stack, mask(&grid), config).unwrap();
    CoverageRun::new(RunConfig::new(universe, oracle, generator)).unwrap()
}

#[test]
fn equal_scores_resolve_toward_the_centroid() {
    let report = run(ObserverMask::all_valid, SurfaceConfig::default())
        .run_to_completion()
        .unwrap();

    assert_eq!(report.termination, Some(Termination::FullCoverage));
    assert_eq!(report.rows.len(), 2);
    // Cells 0 and 4 both score 2; cell 4 sits on the candidate centroid.
    assert_eq!(report.rows[0].result.location, Location::new(1.5, 1.5));
    assert_eq!(report.rows[0].result.pass_vis, 2);
    assert_eq!(report.rows[1].result.location, Location::new(2.5, 0.5));
    assert_eq!(report.rows[1].stats.cumulative_coverage_pct, 100.0);

    let a = &report.assignment;
    assert_eq!(a.passes_for(TargetId(1)).unwrap(), &[PassIndex(1)]);
    assert_eq!(a.passes_for(TargetId(3)).unwrap(), &[PassIndex(2)]);
}

#[test]
fn masked_cells_are_never_chosen() {
    let mask = |grid: &RasterGrid| {
        let mut valid = vec![true; grid.cell_count()];
        valid[4] = false;
        ObserverMask::from_cells(grid, valid).unwrap()
    };
    let report = run(mask, SurfaceConfig::default())
        .run_to_completion()
        .unwrap();
    assert_eq!(report.rows[0].result.location, Location::new(0.5, 2.5));
    assert_eq!(report.termination, Some(Termination::FullCoverage));
}

#[test]
fn worker_count_does_not_change_the_run() {
    let sequential = run(ObserverMask::all_valid, SurfaceConfig::sequential(1))
        .run_to_completion()
        .unwrap();
    let parallel = run(
        ObserverMask::all_valid,
        SurfaceConfig {
            chunk_size: 1,
            worker_count: Some(4),
        },
    )
    .run_to_completion()
    .unwrap();
    assert_eq!(sequential, parallel);
}

#[test]
fn unreachable_target_ends_with_no_candidates() {
    let (universe, stack, grid) = scene();
    let mut points: Vec<_> = universe.iter().collect();
    points.push(vantage_core::TargetPoint {
        id: TargetId(4),
        location: Location::new(1.0, 1.0),
    });
    let universe = TargetUniverse::from_points(points).unwrap();
    let mut stack = stack;
    stack
        .insert(TargetId(4), ViewshedRaster::new(&grid, vec![None; 9]).unwrap())
        .unwrap();
    let (generator, oracle) =
        raster_collaborators(stack, ObserverMask::all_valid(&grid), SurfaceConfig::default())
            .unwrap();

    let report = CoverageRun::new(RunConfig::new(universe, oracle, generator))
        .unwrap()
        .run_to_completion()
        .unwrap();
    assert_eq!(report.termination, Some(Termination::NoCandidates));
    assert_eq!(report.unseen_remaining, 1);
    assert_eq!(report.final_coverage_pct(), 75.0);
    assert!(report.assignment.passes_for(TargetId(4)).unwrap().is_empty());
}
