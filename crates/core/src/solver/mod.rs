//! Water-volume solver module
//!
//! Computes the water retained above a one-dimensional landscape by
//! divide and conquer over peaks. The core abstraction is the `WaterSolver`
//! trait, which has a sequential and a pooled implementation.
//!
//! # Backend Selection
//!
//! The backend follows the worker count in [`SolverConfig`]:
//! 1. More than one worker: a rayon pool is built for each computation
//! 2. Exactly one worker: everything runs inline on the calling thread
//!
//! Both backends return identical volumes for identical input.
//!
//! # Example
//!
//! ```rust
//! use water_pool_core::solver::{create_water_solver, SolverConfig};
//!
//! let solver = create_water_solver(&SolverConfig::parallel(4)).unwrap();
//! assert_eq!(solver.water_volume(&[5, 1, 5]).unwrap(), 4);
//! ```

mod accumulate;
mod config;
mod engine;
mod error;
mod peak;
mod pooled;
pub mod profiler;
mod reference;
mod scheduler;
mod sequential;
#[allow(clippy::module_name_repetitions)]
mod r#trait;

// Re-exports
pub use accumulate::{accumulate_region, accumulate_region_chunked};
pub use config::{SolverConfig, DEFAULT_CHUNK_LEN, DEFAULT_MIN_PARALLEL_LEN};
pub use error::SolverError;
pub use peak::{find_peak, find_peak_chunked, PeakEntry};
pub use pooled::PooledSolver;
pub use profiler::ProfilerScope;
pub use r#trait::WaterSolver;
pub use reference::brute_force_volume;
pub use sequential::SequentialSolver;

use tracing::info;

/// Create a water solver for the given configuration
///
/// Picks the pooled backend when the configuration asks for more than one
/// worker, otherwise the sequential one.
///
/// # Arguments
///
/// * `config` - Worker count and dispatch granularity
///
/// # Errors
///
/// Returns [`SolverError::InvalidConfig`] if the configuration does not validate.
pub fn create_water_solver(config: &SolverConfig) -> Result<Box<dyn WaterSolver>, SolverError> {
    config.validate()?;

    if config.is_parallel() {
        info!(
            "Using pooled backend ({} workers, parallel above {} columns, chunks of {})",
            config.worker_count, config.min_parallel_len, config.chunk_len
        );
        return Ok(Box::new(PooledSolver::new(*config)?));
    }

    info!("Using sequential backend");
    Ok(Box::new(SequentialSolver::new()))
}

/// Water retained above `heights`, computed on the calling thread
///
/// # Errors
///
/// Only fails if an internal invariant is broken; see [`SolverError`].
pub fn water_volume(heights: &[u32]) -> Result<u64, SolverError> {
    SequentialSolver::new().water_volume(heights)
}
