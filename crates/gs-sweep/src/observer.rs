//! Sweep observer trait for progress reporting.

use gs_output::ResultRecord;

/// Callbacks invoked by [`Sweep::run`][crate::Sweep::run] and
/// [`Sweep::run_partitioned`][crate::Sweep::run_partitioned].
///
/// All methods have default no-op implementations.  `run` calls each hook as
/// the event happens; `run_partitioned` replays them in sweep order after its
/// workers have finished.
pub trait SweepObserver {
    /// Called as each population size begins.
    fn on_size_start(&mut self, _n: usize) {}

    /// Called after each simulation run with its record.
    fn on_trial_end(&mut self, _record: &ResultRecord) {}

    /// Called once after the final run, with the total record count.
    fn on_sweep_end(&mut self, _records: usize) {}
}

/// A [`SweepObserver`] that does nothing.
pub struct NoopObserver;

impl SweepObserver for NoopObserver {}
