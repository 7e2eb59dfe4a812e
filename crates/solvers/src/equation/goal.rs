use std::convert::Infallible;

use goalseek_core::EquationProblem;

/// Equation problem that drives a scalar model output to a goal value.
///
/// The residual is the shifted function `g(x) = f(x) - goal`, so a root of
/// the residual is a solution of `f(x) = goal`. The goal offset is applied
/// here once per evaluation and nowhere else.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalProblem {
    goal: f64,
}

impl GoalProblem {
    /// Creates a problem targeting `goal`.
    #[must_use]
    pub const fn new(goal: f64) -> Self {
        Self { goal }
    }

    /// Returns the goal value.
    #[must_use]
    pub const fn goal(&self) -> f64 {
        self.goal
    }
}

impl EquationProblem<1> for GoalProblem {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(x[0])
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([output - self.goal])
    }
}
