//! Landscape generation
//!
//! Supplies landscapes from explicit heights, from `(length, max_height)`
//! bounds, or fully at random. Bounded generation validates its parameters
//! against the global limits and fails with a [`TerrainError`] otherwise.

use super::landscape::Landscape;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Shortest landscape that may be generated
pub const MIN_LENGTH: usize = 0;
/// Longest landscape that may be generated
pub const MAX_LENGTH: usize = 32_000;
/// Lowest column height
pub const MIN_HEIGHT: u32 = 0;
/// Highest column height
pub const MAX_HEIGHT: u32 = 32_000;

/// Number of leading columns shown in the debug preview
const PREVIEW_LEN: usize = 30;

/// Source of landscapes for the solver
pub trait TerrainProvider {
    /// Landscape made of exactly `heights`
    fn manual_landscape(&self, heights: &[u32]) -> Landscape {
        Landscape::from(heights)
    }

    /// Landscape of `length` columns, each uniform in `[MIN_HEIGHT, max_height]`
    ///
    /// # Errors
    ///
    /// Returns [`TerrainError::InvalidLength`] if `length` exceeds
    /// [`MAX_LENGTH`], or [`TerrainError::InvalidMaxHeight`] if `max_height`
    /// exceeds [`MAX_HEIGHT`].
    fn generate(&mut self, length: usize, max_height: u32) -> Result<Landscape, TerrainError>;

    /// Landscape with random length and random height bound
    fn generate_random(&mut self) -> Landscape;
}

/// Terrain provider drawing heights from a seedable RNG
#[derive(Debug, Clone)]
pub struct RandomTerrain {
    rng: StdRng,
}

impl RandomTerrain {
    /// Provider seeded from the operating system
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Provider with a fixed seed, for reproducible landscapes
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn draw(&mut self, length: usize, max_height: u32) -> Vec<u32> {
        (0..length)
            .map(|_| self.rng.random_range(MIN_HEIGHT..=max_height))
            .collect()
    }
}

impl Default for RandomTerrain {
    fn default() -> Self {
        Self::new()
    }
}

impl TerrainProvider for RandomTerrain {
    fn generate(&mut self, length: usize, max_height: u32) -> Result<Landscape, TerrainError> {
        if length > MAX_LENGTH {
            return Err(TerrainError::InvalidLength { length });
        }
        if max_height > MAX_HEIGHT {
            return Err(TerrainError::InvalidMaxHeight { max_height });
        }

        let heights = self.draw(length, max_height);
        debug!(
            "Generated landscape (length = {}, max_height = {}): {:?}",
            length,
            max_height,
            &heights[..heights.len().min(PREVIEW_LEN)]
        );

        Ok(Landscape::new(heights))
    }

    fn generate_random(&mut self) -> Landscape {
        let length = self.rng.random_range(MIN_LENGTH..MAX_LENGTH);
        let max_height = self.rng.random_range(MIN_HEIGHT..MAX_HEIGHT);

        // Both draws sit inside the global bounds, so no validation here
        let heights = self.draw(length, max_height);
        debug!(
            "Generated random landscape (length = {}, max_height = {})",
            length, max_height
        );
        Landscape::new(heights)
    }
}

/// Rejected landscape parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerrainError {
    /// Requested length is above [`MAX_LENGTH`]
    InvalidLength {
        /// Requested length
        length: usize,
    },
    /// Requested height bound is above [`MAX_HEIGHT`]
    InvalidMaxHeight {
        /// Requested height bound
        max_height: u32,
    },
}

impl std::fmt::Display for TerrainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerrainError::InvalidLength { length } => write!(
                f,
                "Incorrect length = {length}, should be between {MIN_LENGTH} and {MAX_LENGTH}"
            ),
            TerrainError::InvalidMaxHeight { max_height } => write!(
                f,
                "Incorrect max height = {max_height}, should be between {MIN_HEIGHT} and {MAX_HEIGHT}"
            ),
        }
    }
}

impl std::error::Error for TerrainError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_within(landscape: &Landscape, max_len: usize, max_height: u32) {
        assert!(landscape.len() <= max_len);
        assert!(landscape.iter().all(|&h| h <= max_height));
    }

    #[test]
    fn test_explicit_heights_are_copied() {
        let heights = [2, 3, 3, 1, 2, 1, 0, 5, 1, 3, 2, 0, 2, 0, 1, 5, 2, 1, 1, 2];
        let landscape = RandomTerrain::seeded(1).manual_landscape(&heights);
        assert_eq!(landscape.heights(), &heights);
    }

    #[test]
    fn test_bounded_generation() {
        let mut terrain = RandomTerrain::seeded(7);
        let landscape = terrain.generate(100, 100).unwrap();
        assert_eq!(landscape.len(), 100);
        assert_within(&landscape, 100, 100);
    }

    #[test]
    fn test_length_limits() {
        let mut terrain = RandomTerrain::seeded(11);
        assert_eq!(terrain.generate(MIN_LENGTH, 100).unwrap().len(), 0);
        assert_eq!(terrain.generate(MAX_LENGTH, 100).unwrap().len(), MAX_LENGTH);
        assert_eq!(
            terrain.generate(MAX_LENGTH + 1, 100),
            Err(TerrainError::InvalidLength {
                length: MAX_LENGTH + 1
            })
        );
    }

    #[test]
    fn test_height_limits() {
        let mut terrain = RandomTerrain::seeded(13);
        let flat = terrain.generate(100, MIN_HEIGHT).unwrap();
        assert!(flat.iter().all(|&h| h == 0));

        let tall = terrain.generate(100, MAX_HEIGHT).unwrap();
        assert_within(&tall, 100, MAX_HEIGHT);

        assert_eq!(
            terrain.generate(100, MAX_HEIGHT + 1),
            Err(TerrainError::InvalidMaxHeight {
                max_height: MAX_HEIGHT + 1
            })
        );
    }

    #[test]
    fn test_random_landscape_within_global_bounds() {
        let mut terrain = RandomTerrain::seeded(17);
        for _ in 0..5 {
            let landscape = terrain.generate_random();
            assert_within(&landscape, MAX_LENGTH, MAX_HEIGHT);
        }
    }

    #[test]
    fn test_same_seed_same_landscape() {
        let a = RandomTerrain::seeded(42).generate(500, 1000).unwrap();
        let b = RandomTerrain::seeded(42).generate(500, 1000).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_error_messages_name_the_bounds() {
        let err = TerrainError::InvalidLength { length: 40_000 };
        assert_eq!(
            err.to_string(),
            "Incorrect length = 40000, should be between 0 and 32000"
        );
    }
}
