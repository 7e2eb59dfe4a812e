use crate::equation::Evaluation;

use super::Bracket;

/// Event emitted by the bisection solver for each successful evaluation.
///
/// Evaluations that fail or produce a non-finite residual end the solve with
/// an error and are not reported.
pub enum Event<'a, I, O> {
    /// Evaluation of a supplied bracket endpoint.
    Endpoint {
        /// The endpoint evaluation.
        eval: &'a Evaluation<I, O, 1>,
    },
    /// Midpoint evaluation within a validated bracket.
    Midpoint {
        /// Iteration counter (1-based within the bisection loop).
        iter: usize,
        /// Search bracket the midpoint was taken from.
        bracket: &'a Bracket,
        /// The midpoint evaluation.
        eval: &'a Evaluation<I, O, 1>,
    },
}

impl<'a, I, O> Event<'a, I, O> {
    /// Returns the evaluation carried by this event.
    #[must_use]
    pub fn eval(&self) -> &'a Evaluation<I, O, 1> {
        match self {
            Event::Endpoint { eval } | Event::Midpoint { eval, .. } => eval,
        }
    }

    /// Returns the evaluated x value.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.eval().point()
    }

    /// Returns the residual at the evaluated x value.
    #[must_use]
    pub fn residual(&self) -> f64 {
        self.eval().residual()
    }
}
