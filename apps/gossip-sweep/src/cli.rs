//! Command-line surface mapped onto `SweepConfig`.

use std::path::PathBuf;

use clap::Parser;
use gs_core::{SizeRange, SweepConfig, DEFAULT_SEED_BIAS};

#[derive(Parser, Debug)]
#[command(name = "gossip-sweep")]
#[command(about = "Measure gossip broadcast convergence rounds across population sizes")]
pub struct Cli {
    /// Smallest population size
    #[arg(long, default_value_t = 100)]
    pub start: usize,

    /// Upper bound on population size (exclusive)
    #[arg(long, default_value_t = 5_001)]
    pub stop: usize,

    /// Step between population sizes
    #[arg(long, default_value_t = 200)]
    pub step: usize,

    /// Runs per (size, policy) combination
    #[arg(short, long, default_value_t = 30)]
    pub repetitions: usize,

    /// Peers each node contacts per round
    #[arg(long, default_value_t = 1)]
    pub peers: usize,

    /// Seed-set size for the seeded policy
    #[arg(long, default_value_t = 3)]
    pub seeds: usize,

    /// Probability of the extra seed contact per node step
    #[arg(long, default_value_t = DEFAULT_SEED_BIAS)]
    pub seed_bias: f64,

    /// Abort a run that has not converged by this round counter
    #[arg(long)]
    pub max_rounds: Option<u64>,

    /// Master RNG seed; omit to draw fresh entropy
    #[arg(long)]
    pub rng_seed: Option<u64>,

    /// Worker threads; 1 runs the sweep on a single shared stream
    #[arg(short = 'j', long)]
    pub threads: Option<usize>,

    /// Where to write the result table
    #[arg(short, long, default_value = "data.csv")]
    pub output: PathBuf,
}

impl Cli {
    pub fn sweep_config(&self) -> SweepConfig {
        SweepConfig {
            sizes:       SizeRange::new(self.start, self.stop, self.step),
            repetitions: self.repetitions,
            peers:       self.peers,
            seeds:       self.seeds,
            seed_bias:   self.seed_bias,
            max_rounds:  self.max_rounds,
            rng_seed:    self.rng_seed,
            num_threads: self.threads,
        }
    }
}
