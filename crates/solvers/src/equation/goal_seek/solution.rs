use crate::equation::{Evaluation, bisection};

use super::Status;

/// The result of a goal seek.
#[derive(Debug, Clone)]
pub struct Solution<I, O> {
    /// Final solver status.
    pub status: Status,

    /// Reported solution of `f(x) = goal`.
    pub x: f64,

    /// Bracket the solution was taken from.
    pub bracket: [f64; 2],

    /// Evaluation at `x`.
    ///
    /// `None` only for [`Status::MaxIters`], where `x` is the midpoint of the
    /// final bracket and was not evaluated.
    pub eval: Option<Evaluation<I, O, 1>>,

    /// Number of bisection steps.
    pub iters: usize,

    /// Number of bracket expansions (zero for a supplied bracket).
    pub expansions: usize,
}

impl<I, O> Solution<I, O> {
    /// Builds a solution at an exact root found during the bracket search.
    pub(super) fn exact(eval: Evaluation<I, O, 1>, bracket: [f64; 2], expansions: usize) -> Self {
        Self {
            status: Status::Converged,
            x: eval.point(),
            bracket,
            eval: Some(eval),
            iters: 0,
            expansions,
        }
    }

    /// Builds a solution from the bisection phase.
    pub(super) fn from_bisection(solution: bisection::Solution<I, O>, expansions: usize) -> Self {
        Self {
            status: solution.status,
            x: solution.x,
            bracket: solution.bracket,
            eval: solution.eval,
            iters: solution.iters,
            expansions,
        }
    }

    /// Returns true if `|f(x) - goal|` is within tolerance.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }

    /// Returns the residual `f(x) - goal`, if `x` was evaluated.
    #[must_use]
    pub fn residual(&self) -> Option<f64> {
        self.eval.as_ref().map(Evaluation::residual)
    }
}
