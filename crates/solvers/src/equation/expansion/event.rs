use crate::equation::Evaluation;

/// Event emitted by the expansion search for each endpoint evaluation.
pub struct Event<'a, I, O> {
    /// Expansion round (0 for the seed interval).
    pub round: usize,
    /// Interval being tested for a sign change.
    pub bounds: [f64; 2],
    /// Evaluation at one of the interval endpoints.
    pub eval: &'a Evaluation<I, O, 1>,
}

impl<I, O> Event<'_, I, O> {
    /// Returns the evaluated x value.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.eval.point()
    }

    /// Returns the residual at the evaluated x value.
    #[must_use]
    pub fn residual(&self) -> f64 {
        self.eval.residual()
    }
}
