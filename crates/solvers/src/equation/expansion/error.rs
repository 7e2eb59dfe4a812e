use std::error::Error as StdError;

use thiserror::Error;

use crate::equation::{EvalError, bisection::BracketError};

use super::config::ConfigError;

/// Errors that can occur during the expansion search.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("non-finite initial guess: {x0}")]
    NonFiniteGuess { x0: f64 },

    #[error("invalid seed interval: {0}")]
    InvalidSeed(#[from] BracketError),

    #[error("non-finite residual {residual} at x = {x}")]
    NonFiniteResidual { x: f64, residual: f64 },

    #[error(
        "failed to bracket a root after {expansions} expansions, last interval [{left}, {right}]"
    )]
    Failed {
        left: f64,
        right: f64,
        expansions: usize,
    },

    #[error("stopped by observer while testing [{left}, {right}]")]
    StoppedByObserver { left: f64, right: f64 },

    #[error("problem error")]
    Problem(#[source] Box<dyn StdError + Send + Sync>),

    #[error("model call failed")]
    Model(#[source] Box<dyn StdError + Send + Sync>),
}

impl<ME, PE> From<EvalError<ME, PE>> for Error
where
    ME: StdError + Send + Sync + 'static,
    PE: StdError + Send + Sync + 'static,
{
    fn from(err: EvalError<ME, PE>) -> Self {
        match err {
            EvalError::Model(e) => Self::Model(Box::new(e)),
            EvalError::Problem(e) => Self::Problem(Box::new(e)),
        }
    }
}
