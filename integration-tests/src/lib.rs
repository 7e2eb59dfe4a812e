//! Shared fixtures for the goal seek integration tests.

pub mod commission {
    use std::convert::Infallible;

    use goalseek_core::{EquationProblem, Model};
    use serde::{Deserialize, Serialize};

    /// A mock sales model: revenue earned from selling items at a fixed price
    /// after commission.
    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct Commission {
        /// Price per item.
        pub price: f64,
        /// Fraction of the price kept after commission.
        pub keep: f64,
    }

    /// Represents the sales input.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
    pub struct Sales {
        pub items: f64,
    }

    /// Represents the revenue output.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
    pub struct Revenue {
        pub amount: f64,
    }

    impl Model for Commission {
        type Input = Sales;
        type Output = Revenue;
        type Error = Infallible;

        fn call(&self, input: &Sales) -> Result<Revenue, Self::Error> {
            Ok(Revenue {
                amount: self.price * input.items * self.keep,
            })
        }
    }

    impl Default for Commission {
        fn default() -> Self {
            Self {
                price: 5.0,
                keep: 0.9,
            }
        }
    }

    /// Seeks the number of items that earns `target` in revenue.
    #[derive(Debug, Clone, Copy, Serialize, Deserialize)]
    pub struct RevenueTarget {
        pub target: f64,
    }

    impl EquationProblem<1> for RevenueTarget {
        type Input = Sales;
        type Output = Revenue;
        type Error = Infallible;

        fn input(&self, x: &[f64; 1]) -> Result<Sales, Self::Error> {
            Ok(Sales { items: x[0] })
        }

        fn residuals(&self, _input: &Sales, output: &Revenue) -> Result<[f64; 1], Self::Error> {
            Ok([output.amount - self.target])
        }
    }
}

pub mod metered {
    use goalseek_core::Model;
    use thiserror::Error;

    /// A model that refuses to run outside its valid range.
    ///
    /// Wraps `sqrt`, which is only defined for non-negative inputs.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct SqrtModel;

    /// Returned when [`SqrtModel`] is called with a negative input.
    #[derive(Debug, Error, Clone, Copy, PartialEq)]
    #[error("sqrt is undefined for {0}")]
    pub struct OutOfRange(pub f64);

    impl Model for SqrtModel {
        type Input = f64;
        type Output = f64;
        type Error = OutOfRange;

        fn call(&self, input: &f64) -> Result<f64, Self::Error> {
            if *input < 0.0 {
                Err(OutOfRange(*input))
            } else {
                Ok(input.sqrt())
            }
        }
    }
}

pub mod request {
    use goalseek_solvers::equation::goal_seek::{Config, Start};
    use serde::{Deserialize, Serialize};

    /// A goal seek request as it would appear in a settings file.
    ///
    /// When `bracket` is present it takes the place of `x0`.
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct Request {
        pub goal: f64,
        #[serde(default)]
        pub x0: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub bracket: Option<[f64; 2]>,
        #[serde(default)]
        pub config: Config,
    }

    impl Request {
        /// Returns where the search should start.
        #[must_use]
        pub fn start(&self) -> Start {
            self.bracket.map_or(Start::Guess(self.x0), Start::Bracket)
        }
    }
}
