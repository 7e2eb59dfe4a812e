use thiserror::Error;

/// Configuration for the bisection solver.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Config {
    /// Maximum number of midpoint evaluations.
    pub max_iters: usize,
    /// Convergence threshold on the residual magnitude.
    pub residual_tol: f64,
}

/// Errors that can occur when validating a bisection solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_iters must be at least 1")]
    MaxIters,

    #[error("residual_tol must be finite and non-negative")]
    ResidualTol,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 200,
            residual_tol: 1e-6,
        }
    }
}

impl Config {
    /// Validates the iteration budget and tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_iters` is zero or the tolerance is negative
    /// or non-finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }
        if !self.residual_tol.is_finite() || self.residual_tol < 0.0 {
            return Err(ConfigError::ResidualTol);
        }
        Ok(())
    }
}
