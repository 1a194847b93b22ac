//! Performance benchmark comparing the serial and parallel step

use std::time::Instant;

use rand::{SeedableRng, rngs::StdRng};
use torus_life::{Algorithm, Grid, GridError};
use tracing_subscriber::EnvFilter;

const SEED: u64 = 42;
const DENSITY: f64 = 0.3;

fn benchmark(algorithm: Algorithm, size: usize, iterations: u32) -> Result<f64, GridError> {
    let mut grid = Grid::new(size, size)?;
    grid.randomize(&mut StdRng::seed_from_u64(SEED), DENSITY);

    let start = Instant::now();
    for _ in 0..iterations {
        grid = algorithm.step(&grid);
    }
    let ms = start.elapsed().as_secs_f64() * 1000.0 / iterations as f64;
    tracing::debug!(algorithm = algorithm.name(), size, population = grid.population(), "finished");
    Ok(ms)
}

fn main() -> Result<(), GridError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    println!("=== Game of Life Step Benchmark ===\n");

    let sizes = [64, 128, 256, 512, 1024, 2048];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Speedup");
    println!("{:-<48}", "");

    for size in sizes {
        let serial_ms = benchmark(Algorithm::Serial, size, iterations)?;
        let parallel_ms = benchmark(Algorithm::Parallel, size, iterations)?;

        println!(
            "{:>10} {:>12.3} {:>12.3} {:>9.1}x",
            format!("{}x{}", size, size),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }

    Ok(())
}
