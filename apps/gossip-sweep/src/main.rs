//! gossip-sweep — Monte Carlo convergence sweep for gossip broadcast.
//!
//! For every population size in the configured range, runs the epidemic
//! simulator `repetitions` times with plain random peer sampling and with
//! seed-biased sampling, then writes one row per run to a CSV table.

mod cli;
mod progress;

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use gs_core::SimRng;
use gs_output::{CsvWriter, ResultWriter};
use gs_sweep::Sweep;

use cli::Cli;
use progress::ProgressObserver;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("gossip_sweep=info".parse()?)
                .add_directive("gs_sweep=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.sweep_config();
    let sweep = Sweep::new(config.clone())?;

    println!("=== gossip-sweep ===");
    println!(
        "Sizes: {}..{} step {}  |  Repetitions: {}  |  Peers: {}  |  Seeds: {} (p = {})",
        config.sizes.start,
        config.sizes.stop,
        config.sizes.step,
        config.repetitions,
        config.peers,
        config.seeds,
        config.seed_bias,
    );
    println!();

    let mut rng = match config.rng_seed {
        Some(seed) => SimRng::new(seed),
        None => SimRng::from_entropy(),
    };
    let mut obs = ProgressObserver::new(config.sizes.len());

    // A single worker keeps every run on one shared stream.
    let t0 = Instant::now();
    let records = if config.num_threads == Some(1) {
        sweep.run(&mut rng, &mut obs)?
    } else {
        sweep.run_partitioned(&mut rng, &mut obs)?
    };
    let elapsed = t0.elapsed();

    let mut writer = CsvWriter::create(&cli.output)
        .with_context(|| format!("creating {}", cli.output.display()))?;
    writer.write_records(&records)?;
    writer.finish()?;

    println!();
    println!("Sweep complete in {:.3} s", elapsed.as_secs_f64());
    println!("  {} : {} rows ({} runs)", cli.output.display(), records.len(), obs.trials);

    Ok(())
}
