//! Per-pass timing metrics.

/// Timing data collected during a single pass.
///
/// All durations are in microseconds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PassMetrics {
    /// Wall-clock time for the whole pass.
    pub total_us: u64,
    /// Time spent in candidate scoring.
    pub scoring_us: u64,
    /// Time spent ranking candidates.
    pub selection_us: u64,
    /// Time spent resolving the chosen observer's full visibility.
    pub visibility_us: u64,
    /// Candidates returned by the generator (before zero-score removal).
    pub candidate_count: usize,
}
