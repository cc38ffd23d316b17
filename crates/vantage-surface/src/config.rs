//! Chunking and worker configuration for candidate scoring.

use crate::error::RasterError;

/// Default number of viewsheds summed per chunk.
pub const DEFAULT_CHUNK_SIZE: usize = 500;

/// Configuration for [`RasterCandidateGenerator`](crate::RasterCandidateGenerator).
///
/// Chunking bounds how many viewsheds are summed into one partial
/// raster; partial rasters are then added together. With more than one
/// worker, chunks are summed concurrently.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SurfaceConfig {
    /// Viewsheds per chunk. Default: 500. Minimum: 1.
    pub chunk_size: usize,
    /// Number of summation threads. `None` = auto-detect
    /// (`available_parallelism / 2`, clamped to `[1, 16]`).
    pub worker_count: Option<usize>,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            worker_count: None,
        }
    }
}

impl SurfaceConfig {
    /// Single-threaded configuration with the given chunk size.
    pub fn sequential(chunk_size: usize) -> Self {
        Self {
            chunk_size,
            worker_count: Some(1),
        }
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), RasterError> {
        if self.chunk_size == 0 {
            return Err(RasterError::ZeroChunkSize);
        }
        Ok(())
    }

    /// Resolve the actual worker count, applying auto-detection if `None`.
    ///
    /// Explicit values are clamped to `[1, 64]`.
    pub fn resolved_worker_count(&self) -> usize {
        match self.worker_count {
            Some(n) => n.clamp(1, 64),
            None => {
                let cpus = std::thread::available_parallelism()
                    .map(|n| n.get())
                    .unwrap_or(2);
                (cpus / 2).clamp(1, 16)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(SurfaceConfig::default().validate().is_ok());
        assert_eq!(SurfaceConfig::default().chunk_size, 500);
    }

    #[test]
    fn zero_chunk_size_rejected() {
        let cfg = SurfaceConfig::sequential(0);
        assert_eq!(cfg.validate(), Err(RasterError::ZeroChunkSize));
    }

    #[test]
    fn resolved_worker_count_clamps() {
        let zero = SurfaceConfig {
            worker_count: Some(0),
            ..SurfaceConfig::default()
        };
        assert_eq!(zero.resolved_worker_count(), 1);
        let huge = SurfaceConfig {
            worker_count: Some(500),
            ..SurfaceConfig::default()
        };
        assert_eq!(huge.resolved_worker_count(), 64);
        let auto = SurfaceConfig::default().resolved_worker_count();
        assert!((1..=16).contains(&auto), "auto count {auto} out of [1,16]");
    }
}
