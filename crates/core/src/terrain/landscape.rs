//! One-dimensional landscape of column heights

use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// Column heights from left to right
///
/// Serializes as a plain JSON array of heights. Derefs to `[u32]`, so a
/// `&Landscape` can be handed straight to a solver.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Landscape {
    heights: Vec<u32>,
}

impl Landscape {
    /// Wrap an owned vector of heights
    pub fn new(heights: Vec<u32>) -> Self {
        Self { heights }
    }

    /// Heights as a slice
    #[inline]
    pub fn heights(&self) -> &[u32] {
        &self.heights
    }

    /// Highest column, or `None` when the landscape is empty
    pub fn max_height(&self) -> Option<u32> {
        self.heights.iter().copied().max()
    }

    /// Give back the underlying vector
    pub fn into_heights(self) -> Vec<u32> {
        self.heights
    }
}

impl Deref for Landscape {
    type Target = [u32];

    fn deref(&self) -> &[u32] {
        &self.heights
    }
}

impl From<Vec<u32>> for Landscape {
    fn from(heights: Vec<u32>) -> Self {
        Self::new(heights)
    }
}

impl From<&[u32]> for Landscape {
    fn from(heights: &[u32]) -> Self {
        Self::new(heights.to_vec())
    }
}
