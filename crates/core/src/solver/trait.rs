//! Water solver trait definition
//!
//! This module defines the `WaterSolver` trait, the backend-agnostic interface
//! shared by the sequential and pooled solvers.

use super::error::SolverError;

/// Backend-agnostic interface for computing retained water
///
/// Implementations borrow the landscape for the duration of the call and never
/// mutate or copy it. All backends return bit-identical results for the same
/// input.
pub trait WaterSolver: Send + Sync {
    /// Total volume of water retained above `heights`
    ///
    /// Landscapes shorter than three columns always return 0.
    ///
    /// # Arguments
    ///
    /// * `heights` - Column heights, left to right
    ///
    /// # Errors
    ///
    /// Returns a [`SolverError`] if the backend could not run or a unit of work
    /// failed. Errors are never replaced by a default volume.
    fn water_volume(&self, heights: &[u32]) -> Result<u64, SolverError>;

    /// Backend name for logging
    fn name(&self) -> &'static str;
}
