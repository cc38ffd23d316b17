//! The greedy selection loop.
//!
//! [`CoverageRun`] is a small state machine. Each
//! [`step_pass()`](CoverageRun::step_pass) call, while the run is
//! [`RunState::Running`]:
//!
//! 1. advances the pass index;
//! 2. scores candidates against the unseen set (an empty or all-zero
//!    result ends the run with [`Termination::NoCandidates`]);
//! 3. selects the best candidate;
//! 4. resolves that observer's visibility against the *whole* universe;
//! 5. credits the unseen members of that set and records the pass;
//! 6. ends the run on full coverage or when the pass cap is reached.
//!
//! Collaborator failures abort the run. Tracker and recorder state is
//! consistent at every pass boundary, so a caller may stop stepping at
//! any time and still take a [`report()`](CoverageRun::report).

use std::error::Error;
use std::fmt;
use std::time::Instant;

use tracing::{debug, info, info_span, warn};
use vantage_core::{
    CandidateSurfaceGenerator, OracleError, PassIndex, SurfaceError, TargetSet, TargetUniverse,
    VisibilityOracle,
};

use crate::annotate::{annotate, ObserverAssignment};
use crate::config::{ConfigError, RunConfig};
use crate::metrics::PassMetrics;
use crate::recorder::{percent, PassRecorder, PassResult, PassRow};
use crate::select::select_best;
use crate::tracker::CoverageTracker;

// ── Termination / state ────────────────────────────────────────────

/// Why a run stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Termination {
    /// Every target is covered.
    FullCoverage,
    /// The pass cap was reached with targets still unseen.
    MaxPasses,
    /// No candidate can see any unseen target.
    NoCandidates,
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FullCoverage => write!(f, "full coverage"),
            Self::MaxPasses => write!(f, "max passes reached"),
            Self::NoCandidates => write!(f, "no further candidates"),
        }
    }
}

/// Lifecycle of a [`CoverageRun`].
#[derive(Clone, Debug, PartialEq)]
pub enum RunState {
    /// More passes may be executed.
    Running,
    /// Terminal: the run finished normally.
    Done(Termination),
    /// Terminal: a collaborator failed. Further steps return this error.
    Aborted(RunError),
}

// ── RunError ───────────────────────────────────────────────────────

/// The collaborator failure behind a [`RunError`].
#[derive(Clone, Debug, PartialEq)]
pub enum RunErrorKind {
    /// The visibility oracle failed.
    Oracle(OracleError),
    /// The candidate surface generator failed.
    Surface(SurfaceError),
}

impl fmt::Display for RunErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Oracle(e) => write!(f, "visibility oracle: {e}"),
            Self::Surface(e) => write!(f, "candidate surface: {e}"),
        }
    }
}

/// A fatal collaborator failure, tagged with the pass it occurred in.
#[derive(Clone, Debug, PartialEq)]
pub struct RunError {
    /// The underlying failure.
    pub kind: RunErrorKind,
    /// The pass that was executing when the failure occurred.
    pub pass: PassIndex,
}

impl RunError {
    /// The last pass that completed before the failure, if any.
    pub fn last_completed_pass(&self) -> Option<PassIndex> {
        self.pass.previous()
    }
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pass {} aborted: {}", self.pass, self.kind)
    }
}

impl Error for RunError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.kind {
            RunErrorKind::Oracle(e) => Some(e),
            RunErrorKind::Surface(e) => Some(e),
        }
    }
}

// ── Outcomes ───────────────────────────────────────────────────────

/// Result of one [`CoverageRun::step_pass()`] call.
#[derive(Clone, Debug, PartialEq)]
pub enum PassOutcome {
    /// A pass was recorded.
    Recorded {
        /// The recorded pass.
        result: PassResult,
        /// Timing for the pass.
        metrics: PassMetrics,
        /// State after the pass; `Running` if another pass may follow.
        state: RunState,
    },
    /// The run is (now) finished; nothing was recorded.
    Finished(Termination),
}

/// Final (or partial) output of a run.
#[derive(Clone, Debug, PartialEq)]
pub struct RunReport {
    /// One row per recorded pass, with derived statistics.
    pub rows: Vec<PassRow>,
    /// Why the run stopped; `None` if it has not.
    pub termination: Option<Termination>,
    /// Per-target list of passes that see it.
    pub assignment: ObserverAssignment,
    /// Size of the target universe.
    pub universe_len: usize,
    /// Targets still unseen.
    pub unseen_remaining: usize,
}

impl RunReport {
    /// Cumulative coverage after the last recorded pass (0 if none).
    pub fn final_coverage_pct(&self) -> f64 {
        self.rows
            .last()
            .map_or(0.0, |r| r.stats.cumulative_coverage_pct)
    }
}

// ── CoverageRun ────────────────────────────────────────────────────

/// Greedy maximum-coverage observer selection.
///
/// Created from a [`RunConfig`]; drive it with
/// [`step_pass()`](Self::step_pass) or
/// [`run_to_completion()`](Self::run_to_completion).
///
/// # Example
///
/// ```ignore
/// let mut run = CoverageRun::new(config)?;
/// let report = run.run_to_completion()?;
/// for row in &report.rows {
///     println!("{} -> {:.1}%", row.result.pass, row.stats.cumulative_coverage_pct);
/// }
/// ```
pub struct CoverageRun {
    universe: TargetUniverse,
    oracle: Box<dyn VisibilityOracle>,
    generator: Box<dyn CandidateSurfaceGenerator>,
    max_passes: u32,
    retain_visibility: bool,
    tracker: CoverageTracker,
    recorder: PassRecorder,
    visibility: Vec<(PassIndex, TargetSet)>,
    current_pass: PassIndex,
    state: RunState,
    last_metrics: PassMetrics,
}

impl CoverageRun {
    /// Validate `config` and prepare a run at pass 0 with every target
    /// unseen.
    pub fn new(config: RunConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let tracker = CoverageTracker::new(&config.universe);
        Ok(Self {
            universe: config.universe,
            oracle: config.oracle,
            generator: config.generator,
            max_passes: config.max_passes,
            retain_visibility: config.retain_visibility,
            tracker,
            recorder: PassRecorder::new(),
            visibility: Vec::new(),
            current_pass: PassIndex(0),
            state: RunState::Running,
            last_metrics: PassMetrics::default(),
        })
    }

    /// Execute one pass.
    ///
    /// On a finished run this returns [`PassOutcome::Finished`] again;
    /// on an aborted run it returns the same error again.
    ///
    /// # Errors
    ///
    /// [`RunError`] if the generator or the oracle fails. The run is
    /// aborted; state from earlier passes is kept.
    pub fn step_pass(&mut self) -> Result<PassOutcome, RunError> {
        match &self.state {
            RunState::Running => {}
            RunState::Done(t) => return Ok(PassOutcome::Finished(*t)),
            RunState::Aborted(e) => return Err(e.clone()),
        }

        let pass = self.current_pass.next();
        self.current_pass = pass;
        let span = info_span!("pass", pass = pass.0);
        let _guard = span.enter();
        let pass_start = Instant::now();

        // 1. Score candidates against the unseen set.
        let mut candidates = match self.generator.score_candidates(self.tracker.unseen()) {
            Ok(c) => c,
            Err(e) => return Err(self.abort(pass, RunErrorKind::Surface(e))),
        };
        let scoring_us = pass_start.elapsed().as_micros() as u64;
        let candidate_count = candidates.len();
        candidates.retain(|c| c.unseen_score > 0);

        // 2. Select.
        let select_start = Instant::now();
        let Ok(selection) = select_best(&candidates) else {
            return Ok(self.finish(Termination::NoCandidates));
        };
        let selection_us = select_start.elapsed().as_micros() as u64;
        debug!(
            candidates = candidates.len(),
            score = selection.candidate.unseen_score,
            centroid_distance = selection.centroid_distance,
            "candidate selected"
        );

        // 3. Full visibility of the chosen observer.
        let vis_start = Instant::now();
        let location = selection.candidate.location;
        let full_vis = match self.oracle.visible_from(location, &self.universe) {
            Ok(v) => v,
            Err(e) => return Err(self.abort(pass, RunErrorKind::Oracle(e))),
        };
        let visibility_us = vis_start.elapsed().as_micros() as u64;

        // 4. Credit coverage and record.
        let unseen_before = self.tracker.unseen_len();
        let newly_covered = self.tracker.cover(&full_vis);
        if newly_covered.len() != selection.candidate.unseen_score as usize {
            warn!(
                score = selection.candidate.unseen_score,
                newly_covered = newly_covered.len(),
                "generator score disagrees with oracle visibility"
            );
        }
        let result = PassResult {
            pass,
            location,
            unseen_before,
            pass_vis: newly_covered.len(),
            total_vis: full_vis.len(),
        };
        self.recorder.record(result);
        if self.retain_visibility {
            self.visibility.push((pass, full_vis));
        }

        let metrics = PassMetrics {
            total_us: pass_start.elapsed().as_micros() as u64,
            scoring_us,
            selection_us,
            visibility_us,
            candidate_count,
        };
        self.last_metrics = metrics.clone();
        info!(
            x = location.x,
            y = location.y,
            pass_vis = result.pass_vis,
            total_vis = result.total_vis,
            remaining = self.tracker.unseen_len(),
            "pass recorded"
        );

        // 5. Termination check.
        if self.tracker.is_complete() {
            self.finish(Termination::FullCoverage);
        } else if pass.0 >= self.max_passes {
            self.finish(Termination::MaxPasses);
        }

        Ok(PassOutcome::Recorded {
            result,
            metrics,
            state: self.state.clone(),
        })
    }

    /// Step until the run reaches a terminal state, then build the report.
    ///
    /// # Errors
    ///
    /// The first [`RunError`] encountered; passes recorded before it are
    /// still available through [`recorder()`](Self::recorder) and
    /// [`report()`](Self::report).
    pub fn run_to_completion(&mut self) -> Result<RunReport, RunError> {
        while matches!(self.state, RunState::Running) {
            self.step_pass()?;
        }
        if let RunState::Aborted(e) = &self.state {
            return Err(e.clone());
        }
        self.report()
    }

    /// Build a report from the passes recorded so far.
    ///
    /// Works in any state. If visibility sets were not retained, the
    /// oracle is re-queried for each chosen observer.
    ///
    /// # Errors
    ///
    /// [`RunError`] if re-querying the oracle fails; `pass` names the
    /// pass whose observer could not be resolved.
    pub fn report(&self) -> Result<RunReport, RunError> {
        let assignment = if self.retain_visibility {
            annotate(&self.universe, self.visibility.iter().map(|(p, v)| (*p, v)))
        } else {
            let mut requeried = Vec::with_capacity(self.recorder.len());
            for r in self.recorder.passes() {
                let vis = self
                    .oracle
                    .visible_from(r.location, &self.universe)
                    .map_err(|e| RunError {
                        kind: RunErrorKind::Oracle(e),
                        pass: r.pass,
                    })?;
                requeried.push((r.pass, vis));
            }
            annotate(&self.universe, requeried.iter().map(|(p, v)| (*p, v)))
        };

        Ok(RunReport {
            rows: self.recorder.rows(self.universe.len()),
            termination: match self.state {
                RunState::Done(t) => Some(t),
                _ => None,
            },
            assignment,
            universe_len: self.universe.len(),
            unseen_remaining: self.tracker.unseen_len(),
        })
    }

    /// Current lifecycle state.
    pub fn state(&self) -> &RunState {
        &self.state
    }

    /// Index of the most recently started pass (0 before the first).
    pub fn current_pass(&self) -> PassIndex {
        self.current_pass
    }

    /// The coverage tracker.
    pub fn tracker(&self) -> &CoverageTracker {
        &self.tracker
    }

    /// The pass recorder.
    pub fn recorder(&self) -> &PassRecorder {
        &self.recorder
    }

    /// The target universe.
    pub fn universe(&self) -> &TargetUniverse {
        &self.universe
    }

    /// Metrics from the most recent recorded pass.
    pub fn last_metrics(&self) -> &PassMetrics {
        &self.last_metrics
    }

    /// Cumulative coverage so far, in percent.
    pub fn coverage_pct(&self) -> f64 {
        percent(self.tracker.covered_len(), self.universe.len())
    }

    fn finish(&mut self, termination: Termination) -> PassOutcome {
        info!(
            %termination,
            passes = self.recorder.len(),
            remaining = self.tracker.unseen_len(),
            "run finished"
        );
        self.state = RunState::Done(termination);
        PassOutcome::Finished(termination)
    }

    fn abort(&mut self, pass: PassIndex, kind: RunErrorKind) -> RunError {
        let err = RunError { kind, pass };
        warn!(error = %err, "run aborted");
        self.state = RunState::Aborted(err.clone());
        err
    }
}

impl fmt::Debug for CoverageRun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CoverageRun")
            .field("current_pass", &self.current_pass)
            .field("max_passes", &self.max_passes)
            .field("unseen", &self.tracker.unseen_len())
            .field("recorded", &self.recorder.len())
            .field("state", &self.state)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vantage_core::{Location, TargetId};
    use vantage_test_utils::fixtures::five_target_scenario;
    use vantage_test_utils::{FailingGenerator, FailingOracle};

    fn run_with(max_passes: u32, retain: bool) -> CoverageRun {
        let s = five_target_scenario();
        let cfg = RunConfig::new(s.universe, s.oracle, s.generator)
            .with_max_passes(max_passes)
            .with_retain_visibility(retain);
        CoverageRun::new(cfg).unwrap()
    }

    fn ids(passes: &[PassIndex]) -> Vec<u32> {
        passes.iter().map(|p| p.0).collect()
    }

    #[test]
    fn five_target_example_end_to_end() {
        let mut run = run_with(10, true);
        let report = run.run_to_completion().unwrap();

        assert_eq!(report.termination, Some(Termination::NoCandidates));
        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.unseen_remaining, 1);

        let first = &report.rows[0];
        assert_eq!(first.result.pass, PassIndex(1));
        assert_eq!(first.result.location, Location::new(0.0, 0.0));
        assert_eq!(first.result.pass_vis, 3);
        assert_eq!(first.result.total_vis, 3);
        assert_eq!(first.stats.pass_coverage_pct, 60.0);
        assert_eq!(first.stats.observer_coverage_pct, 60.0);
        assert_eq!(first.stats.cumulative_coverage_pct, 60.0);

        let second = &report.rows[1];
        assert_eq!(second.result.location, Location::new(10.0, 0.0));
        assert_eq!(second.result.unseen_before, 2);
        assert_eq!(second.result.pass_vis, 1);
        assert_eq!(second.result.total_vis, 2);
        assert_eq!(second.stats.pass_coverage_pct, 50.0);
        assert_eq!(second.stats.observer_coverage_pct, 40.0);
        assert_eq!(second.stats.cumulative_coverage_pct, 80.0);

        let a = &report.assignment;
        assert_eq!(ids(a.passes_for(TargetId(1)).unwrap()), vec![1]);
        assert_eq!(ids(a.passes_for(TargetId(3)).unwrap()), vec![1, 2]);
        assert_eq!(ids(a.passes_for(TargetId(4)).unwrap()), vec![2]);
        assert!(a.passes_for(TargetId(5)).unwrap().is_empty());
        assert_eq!(a.unobserved().collect::<Vec<_>>(), vec![TargetId(5)]);
        assert_eq!(report.final_coverage_pct(), 80.0);
    }

    #[test]
    fn requeried_annotation_matches_retained() {
        let retained = run_with(10, true).run_to_completion().unwrap();
        let requeried = run_with(10, false).run_to_completion().unwrap();
        assert_eq!(retained.assignment, requeried.assignment);
    }

    #[test]
    fn pass_cap_stops_the_run() {
        let mut run = run_with(1, true);
        let report = run.run_to_completion().unwrap();
        assert_eq!(report.termination, Some(Termination::MaxPasses));
        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.unseen_remaining, 2);
    }

    #[test]
    fn step_pass_reports_state_and_is_idempotent_when_done() {
        let mut run = run_with(10, true);
        match run.step_pass().unwrap() {
            PassOutcome::Recorded { result, state, .. } => {
                assert_eq!(result.pass, PassIndex(1));
                assert_eq!(state, RunState::Running);
            }
            other => panic!("expected a recorded pass, got {other:?}"),
        }
        assert!(matches!(
            run.step_pass().unwrap(),
            PassOutcome::Recorded { .. }
        ));
        assert_eq!(
            run.step_pass().unwrap(),
            PassOutcome::Finished(Termination::NoCandidates)
        );
        assert_eq!(
            run.step_pass().unwrap(),
            PassOutcome::Finished(Termination::NoCandidates)
        );
        assert_eq!(run.recorder().len(), 2);
        assert_eq!(run.current_pass(), PassIndex(3));
    }

    #[test]
    fn full_coverage_terminates_immediately() {
        let s = five_target_scenario();
        let all: TargetSet = s.universe.id_set();
        let oracle = vantage_test_utils::MockVisibilityOracle::new([(
            Location::new(0.0, 0.0),
            all.clone(),
        )]);
        let generator =
            vantage_test_utils::MockCandidateGenerator::new([(Location::new(0.0, 0.0), all)]);
        let mut run = CoverageRun::new(RunConfig::new(s.universe, oracle, generator)).unwrap();
        let report = run.run_to_completion().unwrap();
        assert_eq!(report.termination, Some(Termination::FullCoverage));
        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.final_coverage_pct(), 100.0);
        assert_eq!(run.coverage_pct(), 100.0);
    }

    #[test]
    fn oracle_failure_aborts_and_keeps_completed_passes() {
        let s = five_target_scenario();
        let oracle = FailingOracle::new(s.oracle, 1);
        let mut run = CoverageRun::new(RunConfig::new(s.universe, oracle, s.generator)).unwrap();

        let err = run.run_to_completion().unwrap_err();
        assert_eq!(err.pass, PassIndex(2));
        assert_eq!(err.last_completed_pass(), Some(PassIndex(1)));
        assert!(matches!(err.kind, RunErrorKind::Oracle(_)));
        assert!(matches!(run.state(), RunState::Aborted(_)));
        assert_eq!(run.recorder().len(), 1);

        // Aborted runs keep returning the same error.
        assert_eq!(run.step_pass().unwrap_err(), err);
    }

    #[test]
    fn surface_failure_on_first_pass_has_no_completed_pass() {
        let s = five_target_scenario();
        let generator = FailingGenerator::new(s.generator, 0);
        let mut run = CoverageRun::new(RunConfig::new(s.universe, s.oracle, generator)).unwrap();

        let err = run.step_pass().unwrap_err();
        assert_eq!(err.pass, PassIndex(1));
        assert_eq!(err.last_completed_pass(), None);
        assert!(matches!(err.kind, RunErrorKind::Surface(_)));
        assert!(err.to_string().starts_with("pass 1 aborted"));
        assert!(Error::source(&err).is_some());

        let partial = run.report().unwrap();
        assert!(partial.rows.is_empty());
        assert_eq!(partial.termination, None);
        assert_eq!(partial.unseen_remaining, 5);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let s = five_target_scenario();
        let cfg = RunConfig::new(s.universe, s.oracle, s.generator).with_max_passes(0);
        assert_eq!(CoverageRun::new(cfg).unwrap_err(), ConfigError::ZeroPassCap);
    }

    #[test]
    fn termination_display() {
        assert_eq!(Termination::FullCoverage.to_string(), "full coverage");
        assert_eq!(Termination::MaxPasses.to_string(), "max passes reached");
        assert_eq!(Termination::NoCandidates.to_string(), "no further candidates");
    }
}
