//! Benchmark runner: naive or blocked multiply on random N×N matrices.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use blocked_matmul::{Algorithm, DEFAULT_SIZE, RunConfig, UniformSource, run};

#[derive(Parser, Debug)]
#[command(version, about = "Time naive vs cache-blocked matrix multiplication")]
struct Args {
    /// Tile size for blocked multiplication; absent or 0 runs the naive loop
    #[arg(value_parser = Algorithm::parse, allow_negative_numbers = true)]
    block: Option<Algorithm>,

    /// Matrix dimension N
    #[arg(short, long, default_value_t = DEFAULT_SIZE)]
    size: usize,

    /// Also run the naive multiply and report the largest deviation
    #[arg(long)]
    verify: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let algorithm = args.block.unwrap_or_default();
    let config = RunConfig::new(args.size, algorithm).with_verify(args.verify);

    if let Some(tile) = algorithm.tile() {
        println!("Using Block Multiplication with Block size: {}", tile);
    }

    let report = run(&config, &mut UniformSource::from_entropy())
        .with_context(|| format!("{} multiply of {}x{} failed", algorithm, args.size, args.size))?;

    println!("{}", report);
    Ok(())
}
