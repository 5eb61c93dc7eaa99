//! Single-threaded water solver
//!
//! Runs every unit of work inline on the calling thread. This backend is always
//! available and serves as the reference for the pooled backend.

use super::engine::{Engine, Frame};
use super::error::SolverError;
use super::profiler::ProfilerScope;
use super::scheduler::TaskScheduler;
use super::WaterSolver;

/// Water solver that never spawns threads
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialSolver;

impl SequentialSolver {
    /// Create a sequential solver
    pub const fn new() -> Self {
        Self
    }
}

impl WaterSolver for SequentialSolver {
    fn water_volume(&self, heights: &[u32]) -> Result<u64, SolverError> {
        if heights.len() < 3 {
            return Ok(0);
        }

        let _scope = ProfilerScope::new("sequential water volume");
        Engine::new(heights, TaskScheduler::inline()).solve(Frame::root(heights.len()))
    }

    fn name(&self) -> &'static str {
        "sequential"
    }
}
