//! Water accumulation over a region filled to a known level

use super::error::SolverError;
use rayon::prelude::*;
use std::ops::Range;

/// Sum `level - heights[i]` over `range`
///
/// An empty or reversed range holds no water.
///
/// Every column in the range must lie at or below `level`; the caller
/// guarantees this by only filling regions bounded by a peak of that height.
///
/// # Errors
///
/// Returns [`SolverError::AboveWaterLine`] for the first column found above
/// `level`.
pub fn accumulate_region(
    heights: &[u32],
    range: Range<usize>,
    level: u32,
) -> Result<u64, SolverError> {
    if range.is_empty() {
        return Ok(0);
    }
    let offset = range.start;
    fill(&heights[range], offset, level)
}

/// Chunked variant of [`accumulate_region`] running on the current rayon pool
///
/// Partial sums are combined in whatever order the pool finishes them.
///
/// # Errors
///
/// Returns [`SolverError::AboveWaterLine`] if any chunk contains a column above
/// `level`. Which offending column is reported is unspecified when there are
/// several.
pub fn accumulate_region_chunked(
    heights: &[u32],
    range: Range<usize>,
    level: u32,
    chunk_len: usize,
) -> Result<u64, SolverError> {
    if range.is_empty() {
        return Ok(0);
    }
    let offset = range.start;
    let chunk_len = chunk_len.max(1);

    heights[range]
        .par_chunks(chunk_len)
        .enumerate()
        .map(|(index, chunk)| fill(chunk, offset + index * chunk_len, level))
        .try_reduce(|| 0, |a, b| Ok(a + b))
}

fn fill(columns: &[u32], offset: usize, level: u32) -> Result<u64, SolverError> {
    columns
        .iter()
        .enumerate()
        .try_fold(0_u64, |sum, (i, &height)| {
            let depth = level
                .checked_sub(height)
                .ok_or(SolverError::AboveWaterLine {
                    position: offset + i,
                    height,
                    level,
                })?;
            Ok(sum + u64::from(depth))
        })
}
