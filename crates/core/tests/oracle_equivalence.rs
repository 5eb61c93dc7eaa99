//! Divide-and-conquer against the column-by-column reference
//!
//! Random landscapes are drawn from fixed seeds so failures reproduce.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use water_pool_core::terrain::{RandomTerrain, TerrainProvider, MAX_HEIGHT, MAX_LENGTH};
use water_pool_core::{brute_force_volume, PooledSolver, SequentialSolver, SolverConfig, WaterSolver};

#[ctor::ctor]
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn test_small_landscapes_match_reference() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let sequential = SequentialSolver::new();
    let pooled = PooledSolver::new(
        SolverConfig::parallel(3)
            .with_min_parallel_len(1)
            .with_chunk_len(2),
    )
    .unwrap();

    for _ in 0..500 {
        let len = rng.random_range(0..40);
        let max_height = rng.random_range(0..8);
        let heights: Vec<u32> = (0..len).map(|_| rng.random_range(0..=max_height)).collect();

        let expected = brute_force_volume(&heights);
        assert_eq!(sequential.water_volume(&heights), Ok(expected), "{heights:?}");
        assert_eq!(pooled.water_volume(&heights), Ok(expected), "{heights:?}");
    }
}

#[test]
fn test_plateaus_across_chunk_boundaries_match_reference() {
    // Few distinct heights make ties between chunks the common case
    let mut rng = StdRng::seed_from_u64(21);
    for chunk_len in [1, 2, 5, 16] {
        let pooled = PooledSolver::new(
            SolverConfig::parallel(4)
                .with_min_parallel_len(3)
                .with_chunk_len(chunk_len),
        )
        .unwrap();

        for _ in 0..50 {
            let heights: Vec<u32> = (0..300).map(|_| rng.random_range(0..=3)).collect();
            assert_eq!(
                pooled.water_volume(&heights),
                Ok(brute_force_volume(&heights)),
                "chunk_len {chunk_len}"
            );
        }
    }
}

#[test]
fn test_full_size_landscapes_match_reference() {
    let mut terrain = RandomTerrain::seeded(2024);
    let sequential = SequentialSolver::new();
    let pooled = PooledSolver::new(SolverConfig::parallel(4)).unwrap();

    for _ in 0..3 {
        let landscape = terrain.generate(MAX_LENGTH, MAX_HEIGHT).unwrap();
        let expected = brute_force_volume(&landscape);

        assert_eq!(sequential.water_volume(&landscape), Ok(expected));
        assert_eq!(pooled.water_volume(&landscape), Ok(expected));
    }
}

#[test]
fn test_random_landscapes_match_across_backends() {
    let mut terrain = RandomTerrain::seeded(7);
    let sequential = SequentialSolver::new();
    let pooled = PooledSolver::new(
        SolverConfig::parallel(4)
            .with_min_parallel_len(64)
            .with_chunk_len(32),
    )
    .unwrap();

    for _ in 0..5 {
        let landscape = terrain.generate_random();
        let expected = sequential.water_volume(&landscape).unwrap();
        assert_eq!(pooled.water_volume(&landscape), Ok(expected));
        assert_eq!(expected, brute_force_volume(&landscape));
    }
}
