//! Landscape data and the terrain provider that produces it

pub mod generator;
pub mod landscape;

pub use generator::{
    RandomTerrain, TerrainError, TerrainProvider, MAX_HEIGHT, MAX_LENGTH, MIN_HEIGHT, MIN_LENGTH,
};
pub use landscape::Landscape;
