//! Column-by-column reference computation
//!
//! Each column holds `min(highest to its left, highest to its right) - height`.
//! Used to cross-check the divide-and-conquer solvers.

/// Water retained above `heights`, one column at a time
pub fn brute_force_volume(heights: &[u32]) -> u64 {
    let n = heights.len();
    if n < 3 {
        return 0;
    }

    let mut max_right = vec![0_u32; n];
    let mut running = 0_u32;
    for i in (0..n).rev() {
        running = running.max(heights[i]);
        max_right[i] = running;
    }

    let mut max_left = 0_u32;
    let mut total = 0_u64;
    for i in 0..n {
        max_left = max_left.max(heights[i]);
        let level = max_left.min(max_right[i]);
        total += u64::from(level.saturating_sub(heights[i]));
    }
    total
}
