//! Dispatch of independent units of work
//!
//! The scheduler decides, per unit, whether to run inline on the calling thread
//! or to fan out over the current rayon pool. Units at or below the configured
//! granularity always run inline; an inline scheduler never dispatches.

use super::accumulate::{accumulate_region, accumulate_region_chunked};
use super::config::SolverConfig;
use super::error::SolverError;
use super::peak::{find_peak, find_peak_chunked, PeakEntry};
use std::ops::Range;

/// Per-computation dispatch policy
#[derive(Debug, Clone, Copy)]
pub(crate) struct TaskScheduler {
    pooled: bool,
    min_parallel_len: usize,
    chunk_len: usize,
}

impl TaskScheduler {
    /// Scheduler that runs every unit on the calling thread
    pub(crate) const fn inline() -> Self {
        Self {
            pooled: false,
            min_parallel_len: usize::MAX,
            chunk_len: usize::MAX,
        }
    }

    /// Scheduler that dispatches onto the current rayon pool
    ///
    /// Only meaningful inside `ThreadPool::install`; outside it, rayon falls
    /// back to its global pool.
    pub(crate) const fn pooled(config: &SolverConfig) -> Self {
        Self {
            pooled: true,
            min_parallel_len: config.min_parallel_len,
            chunk_len: config.chunk_len,
        }
    }

    #[inline]
    fn dispatches(&self, len: usize) -> bool {
        self.pooled && len > self.min_parallel_len
    }

    /// Peak of `range`, scanned in parallel chunks when the range is large enough
    pub(crate) fn find_peak(&self, heights: &[u32], range: Range<usize>) -> Option<PeakEntry> {
        if self.dispatches(range.len()) {
            find_peak_chunked(heights, range, self.chunk_len)
        } else {
            find_peak(heights, range)
        }
    }

    /// Water of `range` filled to `level`, summed in parallel chunks when large enough
    pub(crate) fn accumulate(
        &self,
        heights: &[u32],
        range: Range<usize>,
        level: u32,
    ) -> Result<u64, SolverError> {
        if self.dispatches(range.len()) {
            accumulate_region_chunked(heights, range, level, self.chunk_len)
        } else {
            accumulate_region(heights, range, level)
        }
    }

    #[inline]
    fn forks(&self, sizes: (usize, usize)) -> bool {
        self.dispatches(sizes.0) || self.dispatches(sizes.1)
    }

    /// Run two independent units and wait for both
    ///
    /// The units are forked with `rayon::join` when either size exceeds the
    /// granularity, so a large flank runs as its own task even beside a small
    /// one. If either unit panics, the panic is re-raised here after the other
    /// unit has finished.
    pub(crate) fn join<A, B, RA, RB>(&self, sizes: (usize, usize), a: A, b: B) -> (RA, RB)
    where
        A: FnOnce() -> RA + Send,
        B: FnOnce() -> RB + Send,
        RA: Send,
        RB: Send,
    {
        if self.forks(sizes) {
            rayon::join(a, b)
        } else {
            (a(), b())
        }
    }
}
