/// Where goal seek starts its search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Start {
    /// Search outward from an initial guess for a bracket.
    Guess(f64),
    /// Use the given interval as the bracket; it must contain a sign change.
    Bracket([f64; 2]),
}

impl From<f64> for Start {
    fn from(x0: f64) -> Self {
        Start::Guess(x0)
    }
}

impl From<[f64; 2]> for Start {
    fn from(bracket: [f64; 2]) -> Self {
        Start::Bracket(bracket)
    }
}

impl From<(f64, f64)> for Start {
    fn from((a, b): (f64, f64)) -> Self {
        Start::Bracket([a, b])
    }
}
