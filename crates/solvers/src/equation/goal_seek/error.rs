use std::error::Error as StdError;

use thiserror::Error;

use crate::equation::{
    bisection::{self, BracketError},
    expansion,
};

use super::ConfigError;

/// Errors that can occur during goal seek.
///
/// Every variant is terminal for the call. Exhausting the bisection budget is
/// not an error; it is reported through [`Status::MaxIters`](super::Status).
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("invalid bracket: {0}")]
    InvalidBracket(BracketError),

    #[error("non-finite initial guess: {x0}")]
    NonFiniteGuess { x0: f64 },

    #[error("positive root requested, but bracket [{left}, {right}] is non-positive")]
    InvalidDomain { left: f64, right: f64 },

    #[error("non-finite function value at x = {x} (residual {residual})")]
    NonFiniteEvaluation { x: f64, residual: f64 },

    #[error(
        "provided bracket has no sign change: g({left})={left_residual}, g({right})={right_residual}"
    )]
    NoBracket {
        left: f64,
        right: f64,
        left_residual: f64,
        right_residual: f64,
    },

    #[error(
        "failed to bracket a root after {expansions} expansions (last interval [{left}, {right}]); provide a better guess or an explicit bracket"
    )]
    BracketingFailed {
        left: f64,
        right: f64,
        expansions: usize,
    },

    #[error("stopped by observer while searching [{left}, {right}]")]
    StoppedByObserver { left: f64, right: f64 },

    #[error("problem error")]
    Problem(#[source] Box<dyn StdError + Send + Sync>),

    #[error("model call failed")]
    Model(#[source] Box<dyn StdError + Send + Sync>),
}

impl From<bisection::Error> for Error {
    fn from(err: bisection::Error) -> Self {
        match err {
            bisection::Error::InvalidBracket(e) => Self::InvalidBracket(e),
            bisection::Error::InvalidConfig(e) => Self::InvalidConfig(e.into()),
            bisection::Error::NoBracket {
                left,
                right,
                left_residual,
                right_residual,
            } => Self::NoBracket {
                left,
                right,
                left_residual,
                right_residual,
            },
            bisection::Error::NonFiniteResidual { x, residual } => {
                Self::NonFiniteEvaluation { x, residual }
            }
            bisection::Error::Problem(e) => Self::Problem(e),
            bisection::Error::Model(e) => Self::Model(e),
        }
    }
}

impl From<expansion::Error> for Error {
    fn from(err: expansion::Error) -> Self {
        match err {
            expansion::Error::InvalidConfig(e) => Self::InvalidConfig(e.into()),
            expansion::Error::NonFiniteGuess { x0 } => Self::NonFiniteGuess { x0 },
            expansion::Error::InvalidSeed(e) => Self::InvalidBracket(e),
            expansion::Error::NonFiniteResidual { x, residual } => {
                Self::NonFiniteEvaluation { x, residual }
            }
            expansion::Error::Failed {
                left,
                right,
                expansions,
            } => Self::BracketingFailed {
                left,
                right,
                expansions,
            },
            expansion::Error::StoppedByObserver { left, right } => {
                Self::StoppedByObserver { left, right }
            }
            expansion::Error::Problem(e) => Self::Problem(e),
            expansion::Error::Model(e) => Self::Model(e),
        }
    }
}
