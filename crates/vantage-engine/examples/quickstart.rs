//! Vantage Quickstart: a complete greedy observer selection run.
//!
//! Demonstrates:
//!   1. Building a raster grid and one viewshed per target
//!   2. Masking out cells where observers may not stand
//!   3. Wiring the raster collaborators into a RunConfig
//!   4. Stepping passes one at a time, then reading the report
//!
//! Run with:
//!   cargo run --example quickstart

use vantage_core::{Location, TargetUniverse};
use vantage_engine::{CoverageRun, PassOutcome, RunConfig};
use vantage_surface::{
    raster_collaborators, ObserverMask, RasterGrid, SurfaceConfig, ViewshedRaster, ViewshedStack,
};

// ─── Grid parameters ────────────────────────────────────────────

const ROWS: u32 = 24;
const COLS: u32 = 24;
const CELL_SIZE: f64 = 10.0;

// Viewshed radius in metres. Terrain is flat, so each target is
// visible from every cell centre within this distance.
const RADIUS: f64 = 45.0;

// ─── Targets ────────────────────────────────────────────────────

const TARGETS: [(f64, f64); 8] = [
    (35.0, 205.0),
    (60.0, 180.0),
    (120.0, 120.0),
    (130.0, 110.0),
    (200.0, 40.0),
    (215.0, 55.0),
    (180.0, 200.0),
    (20.0, 20.0),
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = tracing_subscriber::fmt::try_init();

    let grid = RasterGrid::new(ROWS, COLS, Location::new(0.0, ROWS as f64 * CELL_SIZE), CELL_SIZE)?;
    let universe =
        TargetUniverse::from_locations(TARGETS.iter().map(|&(x, y)| Location::new(x, y)))?;

    let mut stack = ViewshedStack::new(grid);
    for point in universe.iter() {
        let visible = (0..grid.cell_count())
            .filter(|&i| grid.cell_center(i).distance(&point.location) <= RADIUS);
        stack.insert(point.id, ViewshedRaster::from_visible_cells(&grid, visible)?)?;
    }

    // Observers may not stand in the bottom row.
    let mask = ObserverMask::from_cells(
        &grid,
        (0..grid.cell_count())
            .map(|i| i < (ROWS - 1) as usize * COLS as usize)
            .collect(),
    )?;

    let (generator, oracle) = raster_collaborators(stack, mask, SurfaceConfig::default())?;
    let mut run = CoverageRun::new(RunConfig::new(universe, oracle, generator).with_max_passes(5))?;

    loop {
        match run.step_pass()? {
            PassOutcome::Recorded {
                result, metrics, ..
            } => println!(
                "pass {}: observer at {} covers {} new targets ({} candidates, {} us)",
                result.pass, result.location, result.pass_vis, metrics.candidate_count, metrics.total_us
            ),
            PassOutcome::Finished(termination) => {
                println!("stopped: {termination}");
                break;
            }
        }
    }

    let report = run.report()?;
    println!("\npass  pass%  obs%   cum%");
    for row in &report.rows {
        println!(
            "{:>4}  {:>5.1}  {:>5.1}  {:>5.1}",
            row.result.pass,
            row.stats.pass_coverage_pct,
            row.stats.observer_coverage_pct,
            row.stats.cumulative_coverage_pct
        );
    }

    println!("\ntarget  observers");
    for (id, passes) in report.assignment.iter() {
        let list: Vec<String> = passes.iter().map(|p| p.to_string()).collect();
        println!("{:>6}  {}", id, list.join(";"));
    }
    Ok(())
}
