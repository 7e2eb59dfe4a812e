use crate::equation::Evaluation;

use super::bracket::midpoint;

/// Indicates whether the solver converged or hit the iteration limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// Residual magnitude is within the configured tolerance.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a bisection solve.
#[derive(Debug, Clone)]
pub struct Solution<I, O> {
    /// Final solver status.
    pub status: Status,

    /// Reported root estimate.
    pub x: f64,

    /// Bracket the estimate was taken from.
    pub bracket: [f64; 2],

    /// Evaluation at `x`.
    ///
    /// `None` when the iteration budget ran out and `x` is the midpoint of the
    /// final bracket, which is returned without being evaluated.
    pub eval: Option<Evaluation<I, O, 1>>,

    /// Iteration count when the solver finished.
    pub iters: usize,
}

impl<I, O> Solution<I, O> {
    /// Builds a solution reported at an evaluated point.
    pub(crate) fn evaluated(
        status: Status,
        eval: Evaluation<I, O, 1>,
        bracket: [f64; 2],
        iters: usize,
    ) -> Self {
        Self {
            status,
            x: eval.point(),
            bracket,
            eval: Some(eval),
            iters,
        }
    }

    /// Builds the best-effort solution at the midpoint of the final bracket.
    pub(crate) fn best_effort(bracket: [f64; 2], iters: usize) -> Self {
        let [left, right] = bracket;
        Self {
            status: Status::MaxIters,
            x: midpoint(left, right),
            bracket,
            eval: None,
            iters,
        }
    }

    /// Returns true if the residual tolerance was met.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }

    /// Returns the residual at `x`, if `x` was evaluated.
    #[must_use]
    pub fn residual(&self) -> Option<f64> {
        self.eval.as_ref().map(Evaluation::residual)
    }
}
