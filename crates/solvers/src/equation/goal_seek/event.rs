use crate::equation::{Evaluation, bisection, expansion};

/// Event emitted by goal seek, tagged with the phase that produced it.
pub enum Event<'a, I, O> {
    /// Endpoint evaluation during the bracket search.
    Expansion(&'a expansion::Event<'a, I, O>),
    /// Endpoint or midpoint evaluation during bisection.
    Bisection(&'a bisection::Event<'a, I, O>),
}

impl<'a, I, O> Event<'a, I, O> {
    /// Returns the evaluation carried by this event.
    #[must_use]
    pub fn eval(&self) -> &'a Evaluation<I, O, 1> {
        match self {
            Event::Expansion(event) => event.eval,
            Event::Bisection(event) => event.eval(),
        }
    }

    /// Returns the evaluated x value.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.eval().point()
    }

    /// Returns the residual `f(x) - goal` at the evaluated x value.
    #[must_use]
    pub fn residual(&self) -> f64 {
        self.eval().residual()
    }
}
