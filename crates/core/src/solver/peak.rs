//! Peak finding over landscape sub-ranges
//!
//! A peak is the maximum height of a range together with the leftmost and
//! rightmost positions that reach it. The solver uses the two extremes to split
//! a range into an enclosed interior and two lower flanks.
//!
//! The chunked variant scans fixed-size chunks on the current rayon pool and
//! merges the partial results with [`PeakEntry::merge`].

use rayon::prelude::*;
use std::ops::Range;

/// Maximum height of a scanned range and the extreme positions attaining it
///
/// Positions are absolute indices into the landscape, not offsets into the
/// scanned range. `leftmost <= rightmost` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeakEntry {
    /// Maximum height found in the range
    pub height: u32,
    /// First position holding `height`
    pub leftmost: usize,
    /// Last position holding `height`
    pub rightmost: usize,
}

impl PeakEntry {
    /// Peak made of a single column
    #[inline]
    pub const fn at(position: usize, height: u32) -> Self {
        Self {
            height,
            leftmost: position,
            rightmost: position,
        }
    }

    /// Combine the peaks of two scanned ranges
    ///
    /// A strictly higher peak replaces the other one outright. On equal
    /// heights the interval is widened to cover both entries, so neither
    /// extreme position is lost when a plateau spans a chunk boundary.
    ///
    /// The merge is associative and commutative, so partial peaks may be
    /// combined in any order.
    #[inline]
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        match self.height.cmp(&other.height) {
            std::cmp::Ordering::Greater => self,
            std::cmp::Ordering::Less => other,
            std::cmp::Ordering::Equal => Self {
                height: self.height,
                leftmost: self.leftmost.min(other.leftmost),
                rightmost: self.rightmost.max(other.rightmost),
            },
        }
    }
}

/// Scan `range` sequentially
///
/// Returns `None` for an empty range.
pub fn find_peak(heights: &[u32], range: Range<usize>) -> Option<PeakEntry> {
    let offset = range.start;
    scan(&heights[range], offset)
}

/// Scan `range` as parallel chunks of `chunk_len` columns and merge the results
///
/// Runs on whichever rayon pool is current. Produces exactly the same entry as
/// [`find_peak`] for any chunk length.
pub fn find_peak_chunked(
    heights: &[u32],
    range: Range<usize>,
    chunk_len: usize,
) -> Option<PeakEntry> {
    let offset = range.start;
    let chunk_len = chunk_len.max(1);

    heights[range]
        .par_chunks(chunk_len)
        .enumerate()
        .filter_map(|(index, chunk)| scan(chunk, offset + index * chunk_len))
        .reduce_with(PeakEntry::merge)
}

/// Single pass over `columns`, whose first element sits at `offset`
fn scan(columns: &[u32], offset: usize) -> Option<PeakEntry> {
    let (&first, rest) = columns.split_first()?;
    let mut peak = PeakEntry::at(offset, first);

    for (i, &height) in rest.iter().enumerate() {
        let position = offset + 1 + i;
        if height > peak.height {
            peak = PeakEntry::at(position, height);
        } else if height == peak.height {
            peak.rightmost = position;
        }
    }

    Some(peak)
}
