//! `gs-sweep` — experiment sweep over population sizes.
//!
//! ```text
//! for n in sizes (start..stop by step):
//!   for rep in 0..repetitions:
//!     simulate(n, peers, seeds = 0)  → record (n, false, rounds)
//!     simulate(n, peers, seeds = S)  → record (n, true,  rounds)
//! ```
//!
//! # Two execution modes
//!
//! | Method                   | Randomness                          | Threads                      |
//! |--------------------------|-------------------------------------|------------------------------|
//! | [`Sweep::run`]           | one shared stream                   | caller's thread              |
//! | [`Sweep::run_partitioned`] | one child stream per population size | Rayon with `parallel`, else caller's |
//!
//! Both return records in the same order: ascending size, then repetition,
//! then plain before seeded.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | `run_partitioned` fans sizes out to Rayon.             |

pub mod error;
pub mod observer;
pub mod sweep;


pub use error::{SweepError, SweepResult};
pub use observer::{NoopObserver, SweepObserver};
pub use sweep::Sweep;
