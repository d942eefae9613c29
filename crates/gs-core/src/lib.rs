//! `gs-core` — foundational types for the gossip convergence sweep.
//!
//! This crate is a dependency of every other `gs-*` crate.  It has no `gs-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `NodeId`                                              |
//! | [`rng`]         | `SimRng` (explicit, passable random stream)           |
//! | [`params`]      | `GossipParams`, `SamplingPolicy`                      |
//! | [`config`]      | `SweepConfig`, `SizeRange`                            |
//! | [`error`]       | `GsError`, `GsResult`                                 |

pub mod config;
pub mod error;
pub mod ids;
pub mod params;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{SizeRange, SweepConfig};
pub use error::{GsError, GsResult};
pub use ids::NodeId;
pub use params::{GossipParams, SamplingPolicy, DEFAULT_SEED_BIAS};
pub use rng::SimRng;
