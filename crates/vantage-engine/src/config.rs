//! Run configuration, validation, and error types.
//!
//! [`RunConfig`] carries everything a run needs: the target universe,
//! both collaborators, and the pass cap. [`validate()`](RunConfig::validate)
//! rejects unusable configurations before the first pass starts.

use std::error::Error;
use std::fmt;

use vantage_core::{CandidateSurfaceGenerator, TargetUniverse, VisibilityOracle};

/// Default hard cap on the number of passes.
pub const DEFAULT_MAX_PASSES: u32 = 10;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`RunConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `max_passes` is zero.
    ZeroPassCap,
    /// The target universe has no targets.
    EmptyUniverse,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroPassCap => write!(f, "max_passes must be at least 1"),
            Self::EmptyUniverse => write!(f, "target universe is empty"),
        }
    }
}

impl Error for ConfigError {}

// ── RunConfig ──────────────────────────────────────────────────────

/// Complete configuration for one greedy selection run.
///
/// Consumed by [`CoverageRun::new`](crate::CoverageRun::new).
pub struct RunConfig {
    /// Targets to cover. IDs must match the collaborators' surfaces.
    pub universe: TargetUniverse,
    /// Full-visibility lookups for chosen observers.
    pub oracle: Box<dyn VisibilityOracle>,
    /// Per-pass candidate scoring.
    pub generator: Box<dyn CandidateSurfaceGenerator>,
    /// Hard cap on passes. Default: 10. Minimum: 1.
    pub max_passes: u32,
    /// Keep each pass's full visibility set for annotation. When
    /// `false`, annotation re-queries the oracle instead. Default: true.
    pub retain_visibility: bool,
}

impl RunConfig {
    /// Configuration with default pass cap and visibility retention.
    pub fn new(
        universe: TargetUniverse,
        oracle: impl VisibilityOracle,
        generator: impl CandidateSurfaceGenerator,
    ) -> Self {
        Self {
            universe,
            oracle: Box::new(oracle),
            generator: Box::new(generator),
            max_passes: DEFAULT_MAX_PASSES,
            retain_visibility: true,
        }
    }

    /// Override the pass cap.
    pub fn with_max_passes(mut self, max_passes: u32) -> Self {
        self.max_passes = max_passes;
        self
    }

    /// Override visibility retention.
    pub fn with_retain_visibility(mut self, retain: bool) -> Self {
        self.retain_visibility = retain;
        self
    }

    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_passes == 0 {
            return Err(ConfigError::ZeroPassCap);
        }
        if self.universe.is_empty() {
            return Err(ConfigError::EmptyUniverse);
        }
        Ok(())
    }
}

impl fmt::Debug for RunConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunConfig")
            .field("universe_len", &self.universe.len())
            .field("max_passes", &self.max_passes)
            .field("retain_visibility", &self.retain_visibility)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vantage_test_utils::fixtures::five_target_scenario;

    fn valid_config() -> RunConfig {
        let s = five_target_scenario();
        RunConfig::new(s.universe, s.oracle, s.generator)
    }

    #[test]
    fn defaults() {
        let cfg = valid_config();
        assert_eq!(cfg.max_passes, DEFAULT_MAX_PASSES);
        assert!(cfg.retain_visibility);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn zero_pass_cap_rejected() {
        let cfg = valid_config().with_max_passes(0);
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroPassCap));
    }

    #[test]
    fn empty_universe_rejected() {
        let mut cfg = valid_config();
        cfg.universe = TargetUniverse::default();
        assert_eq!(cfg.validate(), Err(ConfigError::EmptyUniverse));
    }

    #[test]
    fn debug_summarizes_collaborators() {
        let dbg = format!("{:?}", valid_config());
        assert!(dbg.contains("universe_len: 5"));
        assert!(dbg.contains("max_passes: 10"));
    }
}
