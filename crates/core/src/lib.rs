//! Water Pool Core Library
//!
//! Computes the volume of water retained above a one-dimensional landscape once
//! rain has settled: every column holds water up to the lower of the highest
//! columns on its left and right.
//!
//! ## Solver
//!
//! The solver works by divide and conquer over peaks:
//! - The highest columns of a range bound everything between them
//! - Water next to a known wall fills directly to the peak height
//! - Lower flanks are resolved with the peak as their new wall
//!
//! Peak scans, accumulation and the two open flanks can be fanned out over a
//! rayon worker pool. Sequential and pooled backends give identical results.
//!
//! ## Terrain
//!
//! Landscapes come from explicit heights, from bounded random generation, or
//! fully at random, with lengths and heights limited to 32000.

pub mod solver;
pub mod terrain;

// Re-export solver types
pub use solver::{
    brute_force_volume, create_water_solver, water_volume, PooledSolver, SequentialSolver,
    SolverConfig, SolverError, WaterSolver,
};

// Re-export terrain types
pub use terrain::{Landscape, RandomTerrain, TerrainError, TerrainProvider};
