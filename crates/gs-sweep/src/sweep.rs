//! The `Sweep` harness.

use std::iter::StepBy;
use std::ops::Range;

use gs_core::{SimRng, SweepConfig};
use gs_output::ResultRecord;
use gs_sim::simulate;
use tracing::{debug, info, trace};

use crate::{SweepError, SweepObserver, SweepResult};

/// Policy order within one repetition: plain sampling, then seed-biased.
const POLICY_ORDER: [bool; 2] = [false, true];

/// Runs the simulator across every (size, repetition, policy) combination.
///
/// Create via [`Sweep::new`], which validates the whole configuration so no
/// run can fail on a bad constant halfway through.
#[derive(Clone, Debug)]
pub struct Sweep {
    config: SweepConfig,
}

impl Sweep {
    pub fn new(config: SweepConfig) -> SweepResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Population sizes in sweep order.
    pub fn population_sizes(&self) -> StepBy<Range<usize>> {
        self.config.sizes.iter()
    }

    /// `2 * repetitions * sizes` — the number of records a sweep produces.
    pub fn expected_records(&self) -> usize {
        POLICY_ORDER.len() * self.config.repetitions * self.config.sizes.len()
    }

    // ── Sequential sweep ──────────────────────────────────────────────────

    /// Run the sweep on the caller's thread, drawing every run from `rng`.
    ///
    /// The first simulator error aborts the sweep; no partial result is
    /// returned.
    pub fn run<O: SweepObserver>(
        &self,
        rng:      &mut SimRng,
        observer: &mut O,
    ) -> SweepResult<Vec<ResultRecord>> {
        let mut records = Vec::with_capacity(self.expected_records());
        for n in self.population_sizes() {
            observer.on_size_start(n);
            run_size(&self.config, n, rng, &mut records, |r| observer.on_trial_end(r))?;
        }
        debug!(records = records.len(), "sweep finished");
        observer.on_sweep_end(records.len());
        Ok(records)
    }

    // ── Partition-then-merge sweep ────────────────────────────────────────

    /// Run each population size on its own child stream of `rng`, then merge
    /// the per-size results back into sweep order.
    ///
    /// Child streams are derived up front in size order, so the output for a
    /// given seed does not depend on the thread count.  With the `parallel`
    /// feature sizes run on Rayon (`config.num_threads` workers, or the
    /// global pool when `None`).
    pub fn run_partitioned<O: SweepObserver>(
        &self,
        rng:      &mut SimRng,
        observer: &mut O,
    ) -> SweepResult<Vec<ResultRecord>> {
        let partitions: Vec<(usize, SimRng)> = self
            .population_sizes()
            .map(|n| (n, rng.child(n as u64)))
            .collect();

        let per_size = self.run_partitions(partitions)?;

        let mut records = Vec::with_capacity(self.expected_records());
        for (n, batch) in per_size {
            observer.on_size_start(n);
            for record in &batch {
                observer.on_trial_end(record);
            }
            records.extend(batch);
        }
        debug!(records = records.len(), "sweep finished");
        observer.on_sweep_end(records.len());
        Ok(records)
    }

    #[cfg(not(feature = "parallel"))]
    fn run_partitions(
        &self,
        partitions: Vec<(usize, SimRng)>,
    ) -> SweepResult<Vec<(usize, Vec<ResultRecord>)>> {
        partitions
            .into_iter()
            .map(|(n, mut rng)| self.run_partition(n, &mut rng))
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn run_partitions(
        &self,
        partitions: Vec<(usize, SimRng)>,
    ) -> SweepResult<Vec<(usize, Vec<ResultRecord>)>> {
        use rayon::prelude::*;

        // `collect` on an indexed parallel iterator keeps input order.
        let work = || {
            partitions
                .into_par_iter()
                .map(|(n, mut rng)| self.run_partition(n, &mut rng))
                .collect::<SweepResult<Vec<_>>>()
        };

        match self.config.num_threads {
            None => work(),
            Some(threads) => rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .map_err(|e| SweepError::ThreadPool(e.to_string()))?
                .install(work),
        }
    }

    fn run_partition(
        &self,
        n:   usize,
        rng: &mut SimRng,
    ) -> SweepResult<(usize, Vec<ResultRecord>)> {
        let mut batch = Vec::with_capacity(POLICY_ORDER.len() * self.config.repetitions);
        run_size(&self.config, n, rng, &mut batch, |_| {})?;
        Ok((n, batch))
    }
}

/// All repetitions for one population size, appended to `out`.
///
/// `on_record` sees each record as soon as its run finishes.
fn run_size(
    config:        &SweepConfig,
    n:             usize,
    rng:           &mut SimRng,
    out:           &mut Vec<ResultRecord>,
    mut on_record: impl FnMut(&ResultRecord),
) -> SweepResult<()> {
    info!(n, "population size started");
    for rep in 0..config.repetitions {
        for seeded in POLICY_ORDER {
            let params = config.params_for(n, seeded);
            let rounds = simulate(&params, rng).map_err(|source| SweepError::Sim { n, source })?;
            trace!(n, rep, seeded, rounds, "trial finished");
            let record = ResultRecord::new(n, seeded, rounds);
            on_record(&record);
            out.push(record);
        }
    }
    Ok(())
}
