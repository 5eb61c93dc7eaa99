//! Errors raised while computing a water volume

/// Failure of a water-volume computation
///
/// None of these are transient: the computation is deterministic, so an
/// error points at a bad configuration or a defect, never at something worth
/// retrying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// Solver configuration is unusable
    InvalidConfig(String),
    /// Worker pool could not be built
    PoolCreation(String),
    /// A unit of work running on the pool panicked
    WorkerPanicked(String),
    /// A column rose above the water level it was being filled to
    AboveWaterLine {
        /// Position of the offending column
        position: usize,
        /// Height of that column
        height: u32,
        /// Water level the surrounding region was filled to
        level: u32,
    },
}

impl std::fmt::Display for SolverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolverError::InvalidConfig(msg) => write!(f, "Invalid solver configuration: {msg}"),
            SolverError::PoolCreation(msg) => write!(f, "Failed to build worker pool: {msg}"),
            SolverError::WorkerPanicked(msg) => write!(f, "Worker panicked: {msg}"),
            SolverError::AboveWaterLine {
                position,
                height,
                level,
            } => write!(
                f,
                "Column {position} with height {height} lies above water level {level}"
            ),
        }
    }
}

impl std::error::Error for SolverError {}
