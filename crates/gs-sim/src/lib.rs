//! `gs-sim` — epidemic round simulator.
//!
//! # Round loop
//!
//! ```text
//! round = 1
//! loop:
//!   for i in 0..n (ascending):
//!     ① Sample  — draw `peers` contacts uniformly with replacement;
//!                 seeded policy: with prob. `bias` add one from 0..seeds.
//!     ② Push    — if i is infected, every contact becomes infected.
//!     ③ Pull    — if any contact is infected, i becomes infected.
//!   round += 1
//!   if every node is infected: return round
//! ```
//!
//! Updates are applied in place while scanning, so nodes later in the pass
//! already see infections spread earlier in the same round.  The loop body
//! always runs at least once: a single-node population reports 2 rounds.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use gs_core::{GossipParams, SimRng};
//!
//! let mut rng = SimRng::from_entropy();
//! let rounds = gs_sim::simulate(&GossipParams::new(1_000, 1, 3), &mut rng)?;
//! ```

pub mod error;
pub mod observer;
pub mod population;
pub mod sim;

#[cfg(test)]
mod tests;

pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, RoundObserver};
pub use population::Population;
pub use sim::{simulate, Simulator};
