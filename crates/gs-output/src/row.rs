//! Plain data row written per simulation run.

/// Outcome of one simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultRecord {
    /// Population size of the run.
    pub n_servers: usize,
    /// Whether the seed-biased sampling policy was used.
    pub seeds:     bool,
    /// Round counter returned by the simulator.
    pub rounds:    u64,
}

impl ResultRecord {
    pub fn new(n_servers: usize, seeds: bool, rounds: u64) -> Self {
        Self { n_servers, seeds, rounds }
    }
}
