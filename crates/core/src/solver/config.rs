//! Solver configuration
//!
//! Worker count and dispatch granularity are passed explicitly into every
//! solver rather than read from global state, so the same code runs
//! single-threaded in tests and fanned out over a pool in production.

use super::error::SolverError;
use serde::{Deserialize, Serialize};

/// Ranges at or below this many columns are solved inline by default
pub const DEFAULT_MIN_PARALLEL_LEN: usize = 4096;

/// Default number of columns per chunk in chunked scans
pub const DEFAULT_CHUNK_LEN: usize = 1024;

/// Worker pool and dispatch settings
///
/// A `worker_count` of 1 selects the sequential backend. Larger values build a
/// pool of that many threads for each computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Number of worker threads in the pool
    pub worker_count: usize,
    /// A sub-range is dispatched to the pool only when it has more columns than this
    pub min_parallel_len: usize,
    /// Number of columns per chunk for parallel peak scans and accumulation
    pub chunk_len: usize,
}

impl SolverConfig {
    /// Single-threaded configuration; never builds a pool
    pub const fn sequential() -> Self {
        Self {
            worker_count: 1,
            min_parallel_len: DEFAULT_MIN_PARALLEL_LEN,
            chunk_len: DEFAULT_CHUNK_LEN,
        }
    }

    /// Pool of `worker_count` threads with default granularity
    pub const fn parallel(worker_count: usize) -> Self {
        Self {
            worker_count,
            min_parallel_len: DEFAULT_MIN_PARALLEL_LEN,
            chunk_len: DEFAULT_CHUNK_LEN,
        }
    }

    /// Set the dispatch threshold
    pub const fn with_min_parallel_len(mut self, min_parallel_len: usize) -> Self {
        self.min_parallel_len = min_parallel_len;
        self
    }

    /// Set the chunk length for chunked scans
    pub const fn with_chunk_len(mut self, chunk_len: usize) -> Self {
        self.chunk_len = chunk_len;
        self
    }

    /// Whether this configuration asks for a worker pool
    pub const fn is_parallel(&self) -> bool {
        self.worker_count > 1
    }

    /// Check the configuration before building anything from it
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::InvalidConfig`] if `worker_count` or `chunk_len`
    /// is zero.
    pub fn validate(&self) -> Result<(), SolverError> {
        if self.worker_count == 0 {
            return Err(SolverError::InvalidConfig(
                "worker_count must be at least 1".to_string(),
            ));
        }
        if self.chunk_len == 0 {
            return Err(SolverError::InvalidConfig(
                "chunk_len must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Recommended configuration for this machine
    ///
    /// One worker per available hardware thread, falling back to a single
    /// thread when the count cannot be queried.
    pub fn recommended() -> Self {
        let workers = std::thread::available_parallelism().map_or(1, std::num::NonZeroUsize::get);
        Self::parallel(workers)
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::recommended()
    }
}
