//! Progress reporting for the sweep.

use std::time::Instant;

use gs_output::ResultRecord;
use gs_sweep::SweepObserver;
use tracing::{debug, info};

/// Tracks sweep position and counts finished runs.
///
/// The per-size progress line itself comes from `gs_sweep` as each size
/// starts on its worker; this observer adds the sweep-order position.
pub struct ProgressObserver {
    total_sizes: usize,
    sizes_seen:  usize,
    pub trials:  usize,
    started:     Instant,
}

impl ProgressObserver {
    pub fn new(total_sizes: usize) -> Self {
        Self {
            total_sizes,
            sizes_seen: 0,
            trials:     0,
            started:    Instant::now(),
        }
    }
}

impl SweepObserver for ProgressObserver {
    fn on_size_start(&mut self, n: usize) {
        self.sizes_seen += 1;
        debug!(
            n,
            progress = %format_args!("{}/{}", self.sizes_seen, self.total_sizes),
            "sweep position"
        );
    }

    fn on_trial_end(&mut self, _record: &ResultRecord) {
        self.trials += 1;
    }

    fn on_sweep_end(&mut self, records: usize) {
        info!(
            records,
            elapsed_secs = self.started.elapsed().as_secs_f64(),
            "all population sizes done"
        );
    }
}
