//! Sweep configuration.
//!
//! Defaults reproduce the reference experiment: sizes `100..5001` by 200,
//! 30 repetitions, fan-out 1, seed set of 3 contacted with probability 0.3.

use std::iter::StepBy;
use std::ops::Range;

use crate::{GossipParams, GsError, GsResult, SamplingPolicy, DEFAULT_SEED_BIAS};

// ── SizeRange ─────────────────────────────────────────────────────────────────

/// Arithmetic range of population sizes, `start..stop` by `step`
/// (stop exclusive).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SizeRange {
    pub start: usize,
    pub stop:  usize,
    pub step:  usize,
}

impl SizeRange {
    pub fn new(start: usize, stop: usize, step: usize) -> Self {
        Self { start, stop, step }
    }

    /// Population sizes in ascending order.
    ///
    /// Yields nothing when `step == 0`; [`SweepConfig::validate`] rejects that.
    pub fn iter(&self) -> StepBy<Range<usize>> {
        let end = if self.step == 0 { self.start } else { self.stop };
        (self.start..end).step_by(self.step.max(1))
    }

    /// Number of sizes in the range.
    pub fn len(&self) -> usize {
        if self.step == 0 || self.start >= self.stop {
            return 0;
        }
        (self.stop - self.start).div_ceil(self.step)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for SizeRange {
    fn default() -> Self {
        Self { start: 100, stop: 5_001, step: 200 }
    }
}

// ── SweepConfig ───────────────────────────────────────────────────────────────

/// Top-level sweep configuration.
///
/// Typically built from CLI flags by the application crate and passed to the
/// sweep harness.
#[derive(Clone, Debug, PartialEq)]
pub struct SweepConfig {
    /// Population sizes to sweep.
    pub sizes: SizeRange,

    /// Repetitions per (size, policy) combination.
    pub repetitions: usize,

    /// Peer fan-out used by every run.
    pub peers: usize,

    /// Seed-set size for the seeded policy variant.
    pub seeds: usize,

    /// Probability of the extra seed contact in the seeded variant.
    pub seed_bias: f64,

    /// Optional per-run round cap.  `None` = run until converged.
    pub max_rounds: Option<u64>,

    /// Master RNG seed.  `None` draws fresh OS entropy every execution.
    pub rng_seed: Option<u64>,

    /// Worker thread count passed to Rayon.  `None` uses all logical cores.
    pub num_threads: Option<usize>,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            sizes:       SizeRange::default(),
            repetitions: 30,
            peers:       1,
            seeds:       3,
            seed_bias:   DEFAULT_SEED_BIAS,
            max_rounds:  None,
            rng_seed:    None,
            num_threads: None,
        }
    }
}

impl SweepConfig {
    /// Parameters for one run at population size `n`, with or without the
    /// seed-biased policy.
    pub fn params_for(&self, n: usize, seeded: bool) -> GossipParams {
        let policy = if seeded {
            SamplingPolicy::from_seed_count(self.seeds, self.seed_bias)
        } else {
            SamplingPolicy::Uniform
        };
        GossipParams {
            n,
            peers: self.peers,
            policy,
            max_rounds: self.max_rounds,
        }
    }

    /// Check the whole sweep up front so no run fails on a bad constant.
    pub fn validate(&self) -> GsResult<()> {
        let SizeRange { start, stop, step } = self.sizes;
        if step == 0 {
            return Err(GsError::Config("size step must be at least 1".into()));
        }
        if start == 0 {
            return Err(GsError::Config("smallest population size must be at least 1".into()));
        }
        if start >= stop {
            return Err(GsError::Config(format!(
                "empty size range {start}..{stop}"
            )));
        }
        if self.repetitions == 0 {
            return Err(GsError::Config("repetitions must be at least 1".into()));
        }
        if self.num_threads == Some(0) {
            return Err(GsError::Config("thread count must be at least 1".into()));
        }
        // Largest size is checked for the NodeId range.
        let largest = self.sizes.iter().last().unwrap_or(start);
        for n in [start, largest] {
            self.params_for(n, false).validate()?;
            self.params_for(n, true).validate()?;
        }
        Ok(())
    }
}
