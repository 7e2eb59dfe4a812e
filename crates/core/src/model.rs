use std::convert::Infallible;

/// A callable model that maps a typed input to a typed output.
///
/// Models must be deterministic, always producing the same result for a given
/// input. Solvers rely on this to avoid re-evaluating points they have
/// already seen.
pub trait Model {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Calls the model with the given input.
    ///
    /// # Errors
    ///
    /// Each model defines its own `Error` type to represent domain-specific failures.
    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error>;
}

/// A captured input/output pair from a model call.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<I, O> {
    pub input: I,
    pub output: O,
}

impl<I, O> Snapshot<I, O> {
    /// Creates a new snapshot from input and output values.
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }
}

/// A model backed by a scalar function.
///
/// The wrapped function is infallible; non-finite outputs are passed through
/// unchanged and left for solvers to reject.
#[derive(Debug, Clone, Copy)]
pub struct FnModel<F> {
    function: F,
}

impl<F> FnModel<F>
where
    F: Fn(f64) -> f64,
{
    /// Wraps a scalar function as a model.
    pub const fn new(function: F) -> Self {
        Self { function }
    }
}

impl<F> Model for FnModel<F>
where
    F: Fn(f64) -> f64,
{
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, input: &f64) -> Result<f64, Self::Error> {
        Ok((self.function)(*input))
    }
}

impl<F> From<F> for FnModel<F>
where
    F: Fn(f64) -> f64,
{
    fn from(function: F) -> Self {
        Self::new(function)
    }
}
