//! Divide-and-conquer water computation
//!
//! Each step finds the peak of the current range. Water between the peak and a
//! known wall (or between the two extremes of a plateau-level peak) is filled
//! to the peak height directly; the lower flanks are resolved with the peak
//! acting as their new wall.
//!
//! Once a frame has a wall on either side, only one flank remains to resolve,
//! so the engine iterates on it instead of recursing. The only fork is the
//! two-flank case, where both borders are still open.

use super::error::SolverError;
use super::scheduler::TaskScheduler;

/// What bounds a sub-range on one side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Border {
    /// No bounding wall is known yet
    Open,
    /// The adjacent column outside the range is at least as high as any water in it
    Wall,
}

/// View of a sub-range into the landscape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Frame {
    pub start: usize,
    pub end: usize,
    pub left: Border,
    pub right: Border,
}

impl Frame {
    /// Whole landscape, both sides open
    pub(crate) const fn root(len: usize) -> Self {
        Self {
            start: 0,
            end: len,
            left: Border::Open,
            right: Border::Open,
        }
    }

    #[inline]
    const fn len(&self) -> usize {
        self.end - self.start
    }
}

/// Borrowed landscape plus dispatch policy for one computation
pub(crate) struct Engine<'a> {
    heights: &'a [u32],
    scheduler: TaskScheduler,
}

impl<'a> Engine<'a> {
    pub(crate) const fn new(heights: &'a [u32], scheduler: TaskScheduler) -> Self {
        Self { heights, scheduler }
    }

    /// Water retained within `frame`
    ///
    /// # Errors
    ///
    /// Propagates [`SolverError::AboveWaterLine`] if a wall invariant is broken.
    pub(crate) fn solve(&self, mut frame: Frame) -> Result<u64, SolverError> {
        let mut total = 0_u64;

        loop {
            match frame.len() {
                0 => return Ok(total),
                1 => return Ok(total + self.single_column(frame)?),
                _ => {}
            }

            let Some(peak) = self.scheduler.find_peak(self.heights, frame.start..frame.end) else {
                return Ok(total);
            };

            match (frame.left, frame.right) {
                (_, Border::Wall) => {
                    total += self.scheduler.accumulate(
                        self.heights,
                        peak.leftmost + 1..frame.end,
                        peak.height,
                    )?;
                    frame = Frame {
                        start: frame.start,
                        end: peak.leftmost,
                        left: frame.left,
                        right: Border::Wall,
                    };
                }
                (Border::Wall, Border::Open) => {
                    total += self.scheduler.accumulate(
                        self.heights,
                        frame.start..peak.rightmost,
                        peak.height,
                    )?;
                    frame = Frame {
                        start: peak.rightmost + 1,
                        end: frame.end,
                        left: Border::Wall,
                        right: frame.right,
                    };
                }
                (Border::Open, Border::Open) => {
                    // A unique peak has no interior to fill
                    if peak.leftmost < peak.rightmost {
                        total += self.scheduler.accumulate(
                            self.heights,
                            peak.leftmost + 1..peak.rightmost,
                            peak.height,
                        )?;
                    }

                    let left = Frame {
                        start: frame.start,
                        end: peak.leftmost,
                        left: frame.left,
                        right: Border::Wall,
                    };
                    let right = Frame {
                        start: peak.rightmost + 1,
                        end: frame.end,
                        left: Border::Wall,
                        right: frame.right,
                    };

                    let (left_water, right_water) = self.scheduler.join(
                        (left.len(), right.len()),
                        || self.solve(left),
                        || self.solve(right),
                    );
                    return Ok(total + left_water? + right_water?);
                }
            }
        }
    }

    /// A lone column holds water only when walled in on both sides
    fn single_column(&self, frame: Frame) -> Result<u64, SolverError> {
        if frame.left != Border::Wall || frame.right != Border::Wall {
            return Ok(0);
        }

        let height = self.heights[frame.start];
        let level = self.heights[frame.start - 1].min(self.heights[frame.end]);
        level
            .checked_sub(height)
            .map(u64::from)
            .ok_or(SolverError::AboveWaterLine {
                position: frame.start,
                height,
                level,
            })
    }
}
