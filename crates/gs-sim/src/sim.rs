//! The `Simulator` struct and its round loop.

use gs_core::{GossipParams, NodeId, SamplingPolicy, SimRng};

use crate::{NoopObserver, Population, RoundObserver, SimError, SimResult};

/// Value of the round counter before the first pass.
const INITIAL_ROUND: u64 = 1;

// ── Simulator ─────────────────────────────────────────────────────────────────

/// One epidemic run from a single infected node to full infection.
///
/// Each node step:
///
/// 1. **Sample**: draw `peers` contacts uniformly with replacement from the
///    whole population (self-contact allowed).  Under
///    [`SamplingPolicy::SeedBiased`] add one extra contact from the seed set
///    with probability `bias`.
/// 2. **Exchange**: [`Population::exchange`] on the live state.
///
/// Nodes are visited in ascending index order every round.
pub struct Simulator {
    /// Run parameters (validated by [`Simulator::new`]).
    pub params: GossipParams,

    /// Infection flags, mutated in place during each pass.
    pub population: Population,

    /// Round counter; starts at 1, incremented after each full pass.
    pub round: u64,

    /// Population size as `u32`, the sampling bound for `NodeId`s.
    node_count: u32,

    /// Seed-set sampling bound, clamped to `node_count`.
    seed_count: u32,

    converged: bool,

    /// Reused per-step contact buffer.
    contacts: Vec<NodeId>,
}

impl Simulator {
    /// Validate `params` and set up a fresh population.
    pub fn new(params: GossipParams) -> SimResult<Self> {
        params.validate()?;
        let node_count = u32::try_from(params.n)
            .map_err(|_| gs_core::GsError::Config(format!("population size {} too large", params.n)))?;
        let seed_count = u32::try_from(params.policy.seed_count())
            .map_or(node_count, |s| s.min(node_count));
        Ok(Self {
            population: Population::new(params.n),
            contacts:   Vec::with_capacity(params.peers + 1),
            round:      INITIAL_ROUND,
            converged:  false,
            node_count,
            seed_count,
            params,
        })
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run rounds until every node is infected and return the round counter.
    ///
    /// At least one pass always runs.  With `params.max_rounds = Some(cap)`
    /// the run fails with [`SimError::DidNotConverge`] once the counter
    /// reaches `cap` without full infection.  Calling `run` again after
    /// convergence returns the same count without drawing.
    pub fn run<O: RoundObserver>(&mut self, rng: &mut SimRng, observer: &mut O) -> SimResult<u64> {
        if self.converged {
            return Ok(self.round);
        }
        loop {
            self.step_round(rng);
            observer.on_round_end(self.round, self.population.infected_count());

            if self.population.all_infected() {
                self.converged = true;
                observer.on_converged(self.round);
                return Ok(self.round);
            }

            if let Some(cap) = self.params.max_rounds {
                if self.round >= cap {
                    return Err(SimError::DidNotConverge {
                        n:        self.params.n,
                        rounds:   self.round,
                        infected: self.population.infected_count(),
                    });
                }
            }
        }
    }

    /// Execute one full pass over the population and advance the counter.
    pub fn step_round(&mut self, rng: &mut SimRng) {
        for i in 0..self.node_count {
            self.node_step(NodeId(i), rng);
        }
        self.round += 1;
    }

    /// `true` once a run has observed full infection.
    pub fn is_converged(&self) -> bool {
        self.converged
    }

    // ── Per-node step ─────────────────────────────────────────────────────

    fn node_step(&mut self, node: NodeId, rng: &mut SimRng) {
        self.sample_contacts(rng);
        self.population.exchange(node, &self.contacts);
    }

    /// Fill the contact buffer for one node step.
    ///
    /// Draw order is fan-out contacts, then the bias coin, then the seed
    /// contact.
    fn sample_contacts(&mut self, rng: &mut SimRng) {
        self.contacts.clear();
        for _ in 0..self.params.peers {
            self.contacts.push(NodeId(rng.gen_range(0..self.node_count)));
        }
        if let SamplingPolicy::SeedBiased { bias, .. } = self.params.policy {
            if rng.gen_bool(bias) {
                self.contacts.push(NodeId(rng.gen_range(0..self.seed_count)));
            }
        }
    }
}

// ── Convenience entry point ───────────────────────────────────────────────────

/// `simulate(n, peers, seeds) -> rounds`: run one epidemic to completion.
pub fn simulate(params: &GossipParams, rng: &mut SimRng) -> SimResult<u64> {
    Simulator::new(params.clone())?.run(rng, &mut NoopObserver)
}
