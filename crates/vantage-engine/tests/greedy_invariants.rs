//! Loop invariants checked over seeded random scenes.

use proptest::prelude::*;
use vantage_core::TargetId;
use vantage_engine::{CoverageRun, RunConfig, Termination};
use vantage_test_utils::fixtures::random_scenario;

fn run_scene(seed: u64, targets: usize, locations: usize, density: f64, cap: u32) -> CoverageRun {
    let s = random_scenario(seed, targets, locations, density);
    let cfg = RunConfig::new(s.universe, s.oracle, s.generator).with_max_passes(cap);
    CoverageRun::new(cfg).unwrap()
}

proptest! {
    #[test]
    fn pass_records_are_consistent(
        seed in any::<u64>(),
        targets in 1usize..40,
        locations in 1usize..12,
        density in 0.0f64..0.6,
        cap in 1u32..12,
    ) {
        let mut run = run_scene(seed, targets, locations, density, cap);
        let report = run.run_to_completion().unwrap();

        prop_assert!(report.rows.len() <= cap as usize);
        let mut previous_unseen = targets;
        let mut previous_cumulative = 0.0;
        for (i, row) in report.rows.iter().enumerate() {
            let r = &row.result;
            prop_assert_eq!(r.pass.0 as usize, i + 1);
            prop_assert_eq!(r.unseen_before, previous_unseen);
            prop_assert!(r.pass_vis >= 1);
            prop_assert!(r.pass_vis <= r.unseen_before);
            prop_assert!(r.pass_vis <= r.total_vis);
            prop_assert!(r.total_vis <= targets);
            previous_unseen -= r.pass_vis;

            let c = row.stats.cumulative_coverage_pct;
            prop_assert!(c >= previous_cumulative);
            prop_assert!((0.0..=100.0).contains(&c));
            previous_cumulative = c;
        }
        prop_assert_eq!(report.unseen_remaining, previous_unseen);

        match report.termination {
            Some(Termination::FullCoverage) => prop_assert_eq!(report.unseen_remaining, 0),
            Some(Termination::MaxPasses) => prop_assert_eq!(report.rows.len(), cap as usize),
            Some(Termination::NoCandidates) => prop_assert!(report.unseen_remaining > 0),
            None => prop_assert!(false, "completed run has no termination"),
        }
    }

    #[test]
    fn annotation_lists_every_pass_that_sees_a_target(
        seed in any::<u64>(),
        targets in 1usize..30,
        locations in 1usize..10,
        density in 0.05f64..0.5,
    ) {
        let s = random_scenario(seed, targets, locations, density);
        let oracle = s.oracle.clone();
        let universe = s.universe.clone();
        let report = CoverageRun::new(RunConfig::new(s.universe, s.oracle, s.generator))
            .unwrap()
            .run_to_completion()
            .unwrap();

        prop_assert_eq!(report.assignment.len(), targets);
        for row in &report.rows {
            let vis = vantage_core::VisibilityOracle::visible_from(
                &oracle,
                row.result.location,
                &universe,
            )
            .unwrap();
            for id in universe.ids() {
                let passes = report.assignment.passes_for(id).unwrap();
                prop_assert_eq!(passes.contains(&row.result.pass), vis.contains(&id));
            }
        }
        let covered = targets - report.unseen_remaining;
        let annotated = report.assignment.iter().filter(|(_, p)| !p.is_empty()).count();
        prop_assert_eq!(annotated, covered);
    }

    #[test]
    fn identical_inputs_give_identical_runs(seed in any::<u64>()) {
        let a = run_scene(seed, 25, 8, 0.3, 10).run_to_completion().unwrap();
        let b = run_scene(seed, 25, 8, 0.3, 10).run_to_completion().unwrap();
        prop_assert_eq!(a, b);
    }
}

#[test]
fn unknown_target_ids_are_never_annotated() {
    let s = random_scenario(3, 5, 4, 0.5);
    let report = CoverageRun::new(RunConfig::new(s.universe, s.oracle, s.generator))
        .unwrap()
        .run_to_completion()
        .unwrap();
    assert!(report.assignment.passes_for(TargetId(99)).is_none());
}
