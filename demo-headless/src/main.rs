use clap::Parser;
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use water_pool_core::{
    brute_force_volume, create_water_solver, Landscape, RandomTerrain, SolverConfig,
    TerrainProvider,
};

/// Water pool solver demo with configurable landscape and worker pool
#[derive(Parser, Debug)]
#[command(name = "water-pool-demo")]
#[command(about = "Computes the water retained above a 1-D landscape", long_about = None)]
struct Args {
    /// Number of columns to generate (requires --max-height)
    #[arg(short, long, requires = "max_height")]
    length: Option<usize>,

    /// Highest column height to generate (requires --length)
    #[arg(short = 'm', long, requires = "length")]
    max_height: Option<u32>,

    /// Seed for reproducible landscapes
    #[arg(short, long)]
    seed: Option<u64>,

    /// Read the landscape from a JSON array of heights instead of generating it
    #[arg(short, long, conflicts_with_all = ["length", "max_height"])]
    input: Option<PathBuf>,

    /// Solver settings as JSON; missing fields take their defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Worker threads (1 = sequential, default = available parallelism)
    #[arg(short, long)]
    workers: Option<usize>,

    /// Ranges with at most this many columns are solved inline [default: 4096]
    #[arg(long)]
    min_parallel_len: Option<usize>,

    /// Columns per chunk for parallel scans [default: 1024]
    #[arg(long)]
    chunk_len: Option<usize>,

    /// Cross-check the result against the column-by-column reference
    #[arg(short, long)]
    verify: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let landscape = load_landscape(args)?;
    println!(
        "Landscape: {} columns, highest {}",
        landscape.len(),
        landscape.max_height().unwrap_or(0)
    );

    let config = solver_config(args)?;
    let solver = create_water_solver(&config)?;

    let start = Instant::now();
    let water = solver.water_volume(&landscape)?;
    let elapsed = start.elapsed();

    println!("millis = {}, water amount = {}", elapsed.as_millis(), water);

    if args.verify {
        let expected = brute_force_volume(&landscape);
        if expected != water {
            return Err(format!(
                "{} backend returned {water}, reference computed {expected}",
                solver.name()
            )
            .into());
        }
        info!("Verified against reference: {}", expected);
        println!("verified");
    }

    Ok(())
}

/// Settings from `--config` (or the recommended defaults), with flags on top
fn solver_config(args: &Args) -> Result<SolverConfig, Box<dyn Error>> {
    let mut config = match &args.config {
        Some(path) => {
            let contents = std::fs::read_to_string(path)
                .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
            serde_json::from_str::<SolverConfig>(&contents)
                .map_err(|e| format!("Failed to parse {}: {e}", path.display()))?
        }
        None => SolverConfig::recommended(),
    };

    if let Some(workers) = args.workers {
        config.worker_count = workers;
    }
    if let Some(min_parallel_len) = args.min_parallel_len {
        config = config.with_min_parallel_len(min_parallel_len);
    }
    if let Some(chunk_len) = args.chunk_len {
        config = config.with_chunk_len(chunk_len);
    }
    Ok(config)
}

fn load_landscape(args: &Args) -> Result<Landscape, Box<dyn Error>> {
    if let Some(path) = &args.input {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
        let landscape: Landscape = serde_json::from_str(&contents)
            .map_err(|e| format!("Failed to parse {}: {e}", path.display()))?;
        info!("Loaded {} columns from {}", landscape.len(), path.display());
        return Ok(landscape);
    }

    let mut terrain = args.seed.map_or_else(RandomTerrain::new, RandomTerrain::seeded);

    match (args.length, args.max_height) {
        (Some(length), Some(max_height)) => Ok(terrain.generate(length, max_height)?),
        _ => Ok(terrain.generate_random()),
    }
}
