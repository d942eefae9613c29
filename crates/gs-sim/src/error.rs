use gs_core::GsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] GsError),

    #[error("population of {n} did not converge within {rounds} rounds ({infected} infected)")]
    DidNotConverge {
        n:        usize,
        rounds:   u64,
        infected: usize,
    },
}

pub type SimResult<T> = Result<T, SimError>;
