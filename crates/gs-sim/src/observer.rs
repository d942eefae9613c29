//! Round observer trait for tracing a run's progress.

/// Callbacks invoked by [`Simulator::run`][crate::Simulator::run].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — infection curve
///
/// ```rust,ignore
/// struct Curve(Vec<usize>);
///
/// impl RoundObserver for Curve {
///     fn on_round_end(&mut self, _round: u64, infected: usize) {
///         self.0.push(infected);
///     }
/// }
/// ```
pub trait RoundObserver {
    /// Called after each full pass over the population.
    ///
    /// `round` is the counter value after the increment; `infected` is the
    /// number of infected nodes at that point.
    fn on_round_end(&mut self, _round: u64, _infected: usize) {}

    /// Called once when every node is infected, with the final counter.
    fn on_converged(&mut self, _rounds: u64) {}
}

/// A [`RoundObserver`] that does nothing.
pub struct NoopObserver;

impl RoundObserver for NoopObserver {}
