use thiserror::Error;

/// Configuration for the bracket expansion search.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Config {
    /// Half-width of the seed interval around the initial guess.
    pub initial_half_width: f64,
    /// Growth factor applied to the interval width on each expansion.
    pub factor: f64,
    /// Width beyond which the search gives up.
    pub max_width: f64,
    /// Maximum number of expansions before the search gives up.
    pub max_expansions: usize,
}

/// Errors that can occur when validating an expansion config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("initial_half_width must be finite and positive")]
    InitialHalfWidth,

    #[error("factor must be finite and greater than 1")]
    Factor,

    #[error("max_width must be finite and greater than the seed interval width")]
    MaxWidth,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_half_width: 1.0,
            factor: 2.0,
            max_width: 1e16,
            max_expansions: 200,
        }
    }
}

impl Config {
    /// Validates the seed width, growth factor, and width ceiling.
    ///
    /// # Errors
    ///
    /// Returns an error if any value is non-finite or out of range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.initial_half_width.is_finite() || self.initial_half_width <= 0.0 {
            return Err(ConfigError::InitialHalfWidth);
        }
        if !self.factor.is_finite() || self.factor <= 1.0 {
            return Err(ConfigError::Factor);
        }
        if !self.max_width.is_finite() || self.max_width <= 2.0 * self.initial_half_width {
            return Err(ConfigError::MaxWidth);
        }
        Ok(())
    }
}
