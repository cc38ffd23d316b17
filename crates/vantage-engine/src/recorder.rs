//! Per-pass results and coverage statistics.
//!
//! The recorder is append-only: a [`PassResult`] is immutable once
//! recorded. Percentages are derived from the stored integers on
//! demand and never re-query a collaborator.

use vantage_core::{Location, PassIndex};

/// One completed pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PassResult {
    /// 1-based pass index.
    pub pass: PassIndex,
    /// Where the chosen observer stands.
    pub location: Location,
    /// Size of the unseen set when the pass started.
    pub unseen_before: usize,
    /// Targets newly covered by this observer (its visibility
    /// intersected with the unseen set).
    pub pass_vis: usize,
    /// Targets this observer sees across the whole universe.
    pub total_vis: usize,
}

/// Derived percentages for one pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PassStatistics {
    /// `pass_vis / unseen_before * 100`: share of the remaining
    /// problem solved by this observer.
    pub pass_coverage_pct: f64,
    /// `total_vis / |universe| * 100`: share of the universe this
    /// observer sees on its own.
    pub observer_coverage_pct: f64,
    /// Running sum of `pass_vis` through this pass, over `|universe|`.
    pub cumulative_coverage_pct: f64,
}

/// A recorded pass together with its statistics.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PassRow {
    /// The raw pass record.
    pub result: PassResult,
    /// Percentages derived from `result` and its predecessors.
    pub stats: PassStatistics,
}

/// `part / whole * 100`, or 0 for an empty whole.
///
/// Multiplies first so integer ratios like 3/5 come out exact.
pub(crate) fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    (part as f64 * 100.0) / whole as f64
}

/// Ordered, append-only sequence of pass results.
#[derive(Clone, Debug, Default)]
pub struct PassRecorder {
    passes: Vec<PassResult>,
}

impl PassRecorder {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pass.
    pub fn record(&mut self, result: PassResult) {
        self.passes.push(result);
    }

    /// All recorded passes, in order.
    pub fn passes(&self) -> &[PassResult] {
        &self.passes
    }

    /// Number of recorded passes.
    pub fn len(&self) -> usize {
        self.passes.len()
    }

    /// Whether no pass has been recorded.
    pub fn is_empty(&self) -> bool {
        self.passes.is_empty()
    }

    /// The most recent pass.
    pub fn last(&self) -> Option<&PassResult> {
        self.passes.last()
    }

    /// Sum of `pass_vis` over every recorded pass.
    pub fn total_covered(&self) -> usize {
        self.passes.iter().map(|p| p.pass_vis).sum()
    }

    /// Statistics for every pass against a universe of `universe_len`.
    pub fn rows(&self, universe_len: usize) -> Vec<PassRow> {
        let mut cumulative = 0usize;
        self.passes
            .iter()
            .map(|&result| {
                cumulative += result.pass_vis;
                PassRow {
                    result,
                    stats: PassStatistics {
                        pass_coverage_pct: percent(result.pass_vis, result.unseen_before),
                        observer_coverage_pct: percent(result.total_vis, universe_len),
                        cumulative_coverage_pct: percent(cumulative, universe_len),
                    },
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(pass: u32, unseen_before: usize, pass_vis: usize, total_vis: usize) -> PassResult {
        PassResult {
            pass: PassIndex(pass),
            location: Location::new(0.0, 0.0),
            unseen_before,
            pass_vis,
            total_vis,
        }
    }

    #[test]
    fn percent_is_exact_for_simple_ratios() {
        assert_eq!(percent(3, 5), 60.0);
        assert_eq!(percent(1, 2), 50.0);
        assert_eq!(percent(4, 5), 80.0);
        assert_eq!(percent(0, 0), 0.0);
    }

    #[test]
    fn rows_derive_three_independent_views() {
        let mut r = PassRecorder::new();
        r.record(result(1, 5, 3, 3));
        r.record(result(2, 2, 1, 2));
        let rows = r.rows(5);
        assert_eq!(rows.len(), 2);

        assert_eq!(rows[0].stats.pass_coverage_pct, 60.0);
        assert_eq!(rows[0].stats.observer_coverage_pct, 60.0);
        assert_eq!(rows[0].stats.cumulative_coverage_pct, 60.0);

        assert_eq!(rows[1].stats.pass_coverage_pct, 50.0);
        assert_eq!(rows[1].stats.observer_coverage_pct, 40.0);
        assert_eq!(rows[1].stats.cumulative_coverage_pct, 80.0);
        assert_eq!(r.total_covered(), 4);
    }

    #[test]
    fn empty_recorder_has_no_rows() {
        let r = PassRecorder::new();
        assert!(r.is_empty());
        assert!(r.rows(10).is_empty());
        assert!(r.last().is_none());
    }
}
