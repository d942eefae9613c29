//! Parameters of a single epidemic run.

use crate::{GsError, GsResult};

/// Probability that a node adds one seed-set contact to its step.
pub const DEFAULT_SEED_BIAS: f64 = 0.3;

// ── SamplingPolicy ────────────────────────────────────────────────────────────

/// How a node picks the peers it contacts during its step.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SamplingPolicy {
    /// `peers` indices drawn uniformly with replacement from the population.
    Uniform,

    /// Uniform sampling, plus — with probability `bias` — one extra index
    /// drawn uniformly from the seed set `0..seeds`.  A seed set larger than
    /// the population is clamped to the whole population.
    SeedBiased { seeds: usize, bias: f64 },
}

impl SamplingPolicy {
    /// Map a seed-set size onto a policy.  `0` disables seed-biased sampling.
    pub fn from_seed_count(seeds: usize, bias: f64) -> Self {
        if seeds == 0 {
            SamplingPolicy::Uniform
        } else {
            SamplingPolicy::SeedBiased { seeds, bias }
        }
    }

    /// Size of the privileged seed subset (`0` for `Uniform`).
    #[inline]
    pub fn seed_count(&self) -> usize {
        match *self {
            SamplingPolicy::Uniform => 0,
            SamplingPolicy::SeedBiased { seeds, .. } => seeds,
        }
    }

    #[inline]
    pub fn is_seeded(&self) -> bool {
        matches!(self, SamplingPolicy::SeedBiased { .. })
    }
}

// ── GossipParams ──────────────────────────────────────────────────────────────

/// Inputs to one simulation run.
#[derive(Clone, Debug, PartialEq)]
pub struct GossipParams {
    /// Population size `N`.
    pub n: usize,

    /// Fan-out: peers each node contacts per round.
    pub peers: usize,

    /// Peer-selection policy.
    pub policy: SamplingPolicy,

    /// Fail with "did not converge" once the round counter passes this value.
    /// `None` runs until full infection.
    pub max_rounds: Option<u64>,
}

impl GossipParams {
    /// Build parameters in the `simulate(n, peers, seeds)` shape, using
    /// [`DEFAULT_SEED_BIAS`] when `seeds > 0`.
    pub fn new(n: usize, peers: usize, seeds: usize) -> Self {
        Self {
            n,
            peers,
            policy: SamplingPolicy::from_seed_count(seeds, DEFAULT_SEED_BIAS),
            max_rounds: None,
        }
    }

    pub fn with_policy(mut self, policy: SamplingPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_max_rounds(mut self, cap: u64) -> Self {
        self.max_rounds = Some(cap);
        self
    }

    /// Reject parameter combinations the simulator cannot run.
    pub fn validate(&self) -> GsResult<()> {
        if self.n == 0 {
            return Err(GsError::Config("population size must be at least 1".into()));
        }
        if u32::try_from(self.n).is_err() {
            return Err(GsError::Config(format!(
                "population size {} exceeds the NodeId range",
                self.n
            )));
        }
        if self.peers == 0 {
            return Err(GsError::Config("peer fan-out must be at least 1".into()));
        }
        if let SamplingPolicy::SeedBiased { seeds, bias } = self.policy {
            if seeds == 0 {
                return Err(GsError::Config("seed-biased sampling needs a non-empty seed set".into()));
            }
            if !(0.0..=1.0).contains(&bias) {
                return Err(GsError::Config(format!("seed bias {bias} outside [0, 1]")));
            }
        }
        Ok(())
    }
}
