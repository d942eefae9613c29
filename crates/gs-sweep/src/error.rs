use gs_core::GsError;
use gs_sim::SimError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SweepError {
    #[error(transparent)]
    Config(#[from] GsError),

    #[error("simulation failed at population size {n}: {source}")]
    Sim {
        n:      usize,
        #[source]
        source: SimError,
    },

    #[error("could not build worker pool: {0}")]
    ThreadPool(String),
}

pub type SweepResult<T> = Result<T, SweepError>;
