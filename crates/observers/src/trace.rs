use goalseek_core::Observer;

use crate::traits::{HasResidual, HasX};

/// An observer that records every evaluated `(x, residual)` pair.
///
/// Useful for inspecting how a search progressed, or for plotting the path
/// afterwards with a tool of your choice.
///
/// # Example
///
/// ```
/// use goalseek_core::FnModel;
/// use goalseek_observers::TraceObserver;
/// use goalseek_solvers::equation::{GoalProblem, bisection};
///
/// let model = FnModel::new(|x: f64| x * x);
/// let problem = GoalProblem::new(4.0);
/// let mut trace = TraceObserver::new();
///
/// bisection::solve(&model, &problem, [0.0, 3.0], &bisection::Config::default(), &mut trace)
///     .unwrap();
///
/// let [left, right] = [trace.points()[0], trace.points()[1]];
/// assert_eq!(left, [0.0, -4.0]);
/// assert_eq!(right, [3.0, 5.0]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TraceObserver {
    points: Vec<[f64; 2]>,
}

impl TraceObserver {
    /// Creates an empty trace.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded `[x, residual]` pairs in evaluation order.
    #[must_use]
    pub fn points(&self) -> &[[f64; 2]] {
        &self.points
    }

    /// Returns the recorded point with the smallest absolute residual.
    #[must_use]
    pub fn best(&self) -> Option<[f64; 2]> {
        self.points
            .iter()
            .copied()
            .min_by(|a, b| a[1].abs().total_cmp(&b[1].abs()))
    }

    /// Consumes the trace, returning the recorded pairs.
    #[must_use]
    pub fn into_points(self) -> Vec<[f64; 2]> {
        self.points
    }
}

impl<E, A> Observer<E, A> for TraceObserver
where
    E: HasX + HasResidual,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.points.push([event.x(), event.residual()]);
        None
    }
}

/// Allows `&mut TraceObserver` to be passed to solvers that take an observer
/// by value, so the trace can be read after the solve completes.
impl<E, A> Observer<E, A> for &mut TraceObserver
where
    E: HasX + HasResidual,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use goalseek_core::FnModel;
    use goalseek_solvers::equation::{
        GoalProblem,
        goal_seek::{Config, Start, solve},
    };

    #[test]
    fn records_both_phases_in_order() {
        let model = FnModel::new(|x: f64| x * x * x);
        let problem = GoalProblem::new(20.0);
        let mut trace = TraceObserver::new();

        let solution = solve(&model, &problem, Start::Guess(0.0), &Config::default(), &mut trace)
            .expect("should converge");

        // Seed endpoints come first.
        assert_eq!(trace.points()[0], [-1.0, -21.0]);
        assert_eq!(trace.points()[1], [1.0, -19.0]);

        // The last recorded point is the converged midpoint.
        let last = *trace.points().last().expect("non-empty");
        assert_eq!(last[0].to_bits(), solution.x.to_bits());
        assert!(last[1].abs() <= 1e-6);
    }

    #[test]
    fn best_picks_smallest_residual() {
        let model = FnModel::new(|x: f64| x * x);
        let problem = GoalProblem::new(2.0);
        let mut trace = TraceObserver::new();

        solve(&model, &problem, Start::Bracket([0.0, 2.0]), &Config::default(), &mut trace)
            .expect("should converge");

        let [x, residual] = trace.best().expect("non-empty");
        assert_relative_eq!(x, 2.0_f64.sqrt(), epsilon = 1e-6);
        assert!(residual.abs() <= 1e-6);
    }

    #[test]
    fn empty_trace_has_no_best() {
        assert!(TraceObserver::new().best().is_none());
        assert!(TraceObserver::new().into_points().is_empty());
    }
}
