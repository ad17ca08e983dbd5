#![forbid(unsafe_code)]

use clap::Parser;
use log::{info, LevelFilter};
use perc::ThresholdStats;
use rand::{rngs::StdRng, SeedableRng};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

////////////////////////////////////////////////////////////////////////////////

/// Estimates the percolation threshold of an n-by-n grid by Monte Carlo simulation.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Grid dimension.
    dimension: usize,

    /// Number of independent experiments.
    trials: usize,

    /// Seed for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,

    /// Run experiments on all cores. Uses seed 0 unless `--seed` is given.
    #[arg(long)]
    parallel: bool,

    #[arg(long, default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    TermLogger::init(
        args.log_level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    info!(
        "running {} trials on {}x{} grid",
        args.trials, args.dimension, args.dimension
    );
    let stats = match (args.parallel, args.seed) {
        (true, seed) => {
            ThresholdStats::with_seed_parallel(args.dimension, args.trials, seed.unwrap_or(0))?
        }
        (false, Some(seed)) => ThresholdStats::with_rng(
            args.dimension,
            args.trials,
            &mut StdRng::seed_from_u64(seed),
        )?,
        (false, None) => ThresholdStats::new(args.dimension, args.trials)?,
    };

    println!(
        "Arguments, grid size = {}, number of experiments = {}",
        stats.dimension(),
        stats.trials()
    );
    println!("<<<------------------------>>>");
    println!("Mean = {:.6}", stats.mean());
    println!("Standard deviation = {:.6}", stats.stddev());
    println!(
        "95% confidence interval = [{:.6}, {:.6}]",
        stats.confidence_lo(),
        stats.confidence_hi()
    );

    Ok(())
}
