use thiserror::Error;

use crate::equation::{bisection, expansion};

use super::Domain;

/// Configuration for goal seek.
///
/// The defaults mirror spreadsheet goal seek: an absolute tolerance of `1e-6`
/// on `|f(x) - goal|`, up to 200 bisection steps, and an unconstrained domain.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Config {
    /// Convergence threshold on `|f(x) - goal|`.
    pub residual_tol: f64,
    /// Maximum number of bisection steps.
    pub max_iters: usize,
    /// Admissible region for `x`.
    pub domain: Domain,
    /// Bracket search settings, used when starting from a guess.
    pub expansion: expansion::Config,
}

/// Errors that can occur when validating a goal seek config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error(transparent)]
    Bisection(#[from] bisection::ConfigError),

    #[error(transparent)]
    Expansion(#[from] expansion::ConfigError),
}

impl Default for Config {
    fn default() -> Self {
        let bisection = bisection::Config::default();
        Self {
            residual_tol: bisection.residual_tol,
            max_iters: bisection.max_iters,
            domain: Domain::Real,
            expansion: expansion::Config::default(),
        }
    }
}

impl Config {
    /// Returns the default config restricted to `x > 0`.
    #[must_use]
    pub fn positive() -> Self {
        Self {
            domain: Domain::Positive,
            ..Self::default()
        }
    }

    /// Returns the settings passed to the bisection phase.
    #[must_use]
    pub fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            residual_tol: self.residual_tol,
        }
    }

    /// Validates both the bisection and expansion settings.
    ///
    /// # Errors
    ///
    /// Returns the first invalid setting found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.bisection().validate()?;
        self.expansion.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_spreadsheet_goal_seek() {
        let config = Config::default();
        assert_eq!(config.max_iters, 200);
        assert!((config.residual_tol - 1e-6).abs() < f64::EPSILON);
        assert_eq!(config.domain, Domain::Real);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn positive_only_changes_domain() {
        let config = Config::positive();
        assert_eq!(config.domain, Domain::Positive);
        assert_eq!(config.bisection(), Config::default().bisection());
    }

    #[test]
    fn validation_covers_both_phases() {
        let config = Config {
            max_iters: 0,
            ..Config::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::Bisection(bisection::ConfigError::MaxIters))
        );

        let mut config = Config::default();
        config.expansion.factor = 0.5;
        assert_eq!(
            config.validate(),
            Err(ConfigError::Expansion(expansion::ConfigError::Factor))
        );
    }
}
