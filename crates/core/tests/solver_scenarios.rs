//! Hand-checked landscapes run through every backend
//!
//! Each scenario is solved sequentially, on a pool with default granularity,
//! and on a pool fine-grained enough that every peak scan, accumulation and
//! flank split is dispatched.

use water_pool_core::terrain::{RandomTerrain, TerrainProvider};
use water_pool_core::{
    create_water_solver, PooledSolver, SequentialSolver, SolverConfig, WaterSolver,
};

#[ctor::ctor]
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn backends() -> Vec<Box<dyn WaterSolver>> {
    let fine = SolverConfig::parallel(4)
        .with_min_parallel_len(2)
        .with_chunk_len(3);
    vec![
        Box::new(SequentialSolver::new()),
        Box::new(PooledSolver::new(SolverConfig::parallel(2)).unwrap()),
        Box::new(PooledSolver::new(fine).unwrap()),
    ]
}

fn assert_volume(heights: &[u32], expected: u64) {
    let landscape = RandomTerrain::seeded(0).manual_landscape(heights);
    for solver in backends() {
        assert_eq!(
            solver.water_volume(&landscape),
            Ok(expected),
            "{} backend on {:?}",
            solver.name(),
            heights
        );
    }
}

#[test]
fn test_two_equal_summits() {
    assert_volume(
        &[2, 3, 3, 1, 2, 1, 0, 5, 1, 3, 2, 0, 2, 0, 1, 5, 2, 1, 1, 2],
        36,
    );
}

#[test]
fn test_summit_at_right_edge() {
    assert_volume(
        &[2, 4, 3, 5, 1, 1, 0, 3, 2, 4, 1, 0, 0, 0, 1, 3, 2, 2, 2, 6],
        54,
    );
}

#[test]
fn test_single_summit_near_left_edge() {
    assert_volume(
        &[2, 3, 6, 2, 4, 1, 0, 2, 1, 3, 2, 0, 2, 0, 1, 3, 2, 1, 1, 2],
        22,
    );
}

#[test]
fn test_uneven_summits() {
    assert_volume(
        &[2, 3, 3, 2, 4, 1, 0, 5, 1, 3, 2, 0, 2, 0, 1, 4, 2, 1, 1, 2],
        29,
    );
}

#[test]
fn test_small_basin() {
    assert_volume(&[5, 1, 5], 4);
}

#[test]
fn test_short_landscapes_are_dry() {
    assert_volume(&[], 0);
    assert_volume(&[0], 0);
    assert_volume(&[32_000], 0);
    assert_volume(&[4, 1], 0);
    assert_volume(&[1, 4], 0);
    assert_volume(&[7, 7], 0);
}

#[test]
fn test_flat_and_monotone_landscapes_are_dry() {
    assert_volume(&[3; 50], 0);
    assert_volume(&(0..500).collect::<Vec<u32>>(), 0);
    assert_volume(&(0..500).rev().collect::<Vec<u32>>(), 0);
    assert_volume(&[1, 2, 3, 4, 5, 4, 3, 2, 1], 0);
}

#[test]
fn test_valley_between_max_height_walls() {
    let mut heights = vec![0_u32; 32_000];
    heights[0] = 32_000;
    heights[31_999] = 32_000;
    // 31998 interior columns filled 32000 deep
    let solver = create_water_solver(&SolverConfig::parallel(4)).unwrap();
    assert_eq!(solver.water_volume(&heights), Ok(31_998 * 32_000));
    assert_eq!(
        SequentialSolver::new().water_volume(&heights),
        Ok(31_998 * 32_000)
    );
}

#[test]
fn test_input_is_left_untouched() {
    let mut terrain = RandomTerrain::seeded(99);
    let landscape = terrain.generate(2_000, 500).unwrap();
    let snapshot = landscape.clone();

    for solver in backends() {
        solver.water_volume(&landscape).unwrap();
        assert_eq!(landscape, snapshot, "{} backend", solver.name());
    }
}

#[test]
fn test_repeated_calls_agree() {
    let mut terrain = RandomTerrain::seeded(5);
    let landscape = terrain.generate(3_000, 1_000).unwrap();

    for solver in backends() {
        let first = solver.water_volume(&landscape).unwrap();
        for _ in 0..3 {
            assert_eq!(solver.water_volume(&landscape), Ok(first));
        }
    }
}
