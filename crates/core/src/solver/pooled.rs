//! Worker-pool water solver
//!
//! Builds a dedicated rayon pool for each computation and fans peak scans,
//! accumulation chunks and the two open flanks out over it. The pool lives
//! exactly as long as one `water_volume` call and is dropped on every exit
//! path, including failures.

use super::config::SolverConfig;
use super::engine::{Engine, Frame};
use super::error::SolverError;
use super::profiler::ProfilerScope;
use super::scheduler::TaskScheduler;
use super::WaterSolver;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use tracing::debug;

/// Water solver backed by a bounded rayon pool
#[derive(Debug, Clone, Copy)]
pub struct PooledSolver {
    config: SolverConfig,
}

impl PooledSolver {
    /// Create a pooled solver
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::InvalidConfig`] if the configuration does not
    /// validate.
    pub fn new(config: SolverConfig) -> Result<Self, SolverError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Configuration this solver was built with
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Run `job` on a freshly built pool and release the pool afterwards
    ///
    /// A panic anywhere inside `job`, including in units it dispatched, is
    /// caught here once all of its siblings have finished and reported as
    /// [`SolverError::WorkerPanicked`].
    fn run<T, F>(&self, job: F) -> Result<T, SolverError>
    where
        T: Send,
        F: FnOnce() -> Result<T, SolverError> + Send,
    {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.worker_count)
            .thread_name(|index| format!("water-pool-{index}"))
            .build()
            .map_err(|e| SolverError::PoolCreation(e.to_string()))?;
        debug!(
            "Built worker pool with {} threads",
            pool.current_num_threads()
        );

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| pool.install(job)));
        drop(pool);
        debug!("Released worker pool");

        outcome.map_err(|payload| SolverError::WorkerPanicked(panic_message(payload.as_ref())))?
    }
}

impl WaterSolver for PooledSolver {
    fn water_volume(&self, heights: &[u32]) -> Result<u64, SolverError> {
        if heights.len() < 3 {
            return Ok(0);
        }

        let _scope = ProfilerScope::new("pooled water volume");
        let scheduler = TaskScheduler::pooled(&self.config);
        self.run(|| Engine::new(heights, scheduler).solve(Frame::root(heights.len())))
    }

    fn name(&self) -> &'static str {
        "pooled"
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
