use goalseek_core::Observer;
use log::Level;

use crate::traits::{HasResidual, HasX};

/// An observer that reports every evaluation through the [`log`] facade.
///
/// Each event is logged as one record containing the running evaluation
/// count, the evaluated point, and its residual. The observer never returns
/// an action, so the search proceeds exactly as it would unobserved.
///
/// No logger is installed here; records go wherever the application's
/// `log` implementation sends them.
///
/// # Example
///
/// ```
/// use goalseek_core::FnModel;
/// use goalseek_observers::LogObserver;
/// use goalseek_solvers::equation::{
///     GoalProblem,
///     goal_seek::{Config, Start, solve},
/// };
///
/// let model = FnModel::new(|x: f64| x * x);
/// let problem = GoalProblem::new(10.0);
/// let mut obs = LogObserver::new().level(log::Level::Debug);
///
/// let solution = solve(&model, &problem, Start::Guess(3.0), &Config::default(), &mut obs)
///     .unwrap();
///
/// assert!(solution.is_converged());
/// assert!(obs.evaluations() > 0);
/// ```
#[derive(Debug, Clone)]
pub struct LogObserver {
    level: Level,
    target: String,
    evaluations: usize,
}

impl LogObserver {
    /// Creates an observer that logs at [`Level::Trace`] with target `goalseek`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            level: Level::Trace,
            target: String::from("goalseek"),
            evaluations: 0,
        }
    }

    /// Sets the level records are emitted at.
    #[must_use]
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Sets the log target.
    #[must_use]
    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    /// Returns the number of events observed so far.
    #[must_use]
    pub fn evaluations(&self) -> usize {
        self.evaluations
    }
}

impl Default for LogObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, A> Observer<E, A> for LogObserver
where
    E: HasX + HasResidual,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.evaluations += 1;
        log::log!(
            target: self.target.as_str(),
            self.level,
            "eval {}: x = {:e}, residual = {:e}",
            self.evaluations,
            event.x(),
            event.residual()
        );
        None
    }
}

/// Allows `&mut LogObserver` to be passed to solvers that take an observer by
/// value, so the evaluation count can be read after the solve completes.
impl<E, A> Observer<E, A> for &mut LogObserver
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

    use goalseek_core::FnModel;
    use goalseek_solvers::equation::{
        GoalProblem, bisection,
        goal_seek::{self, Start},
    };

    #[test]
    fn builder_sets_fields() {
        let obs = LogObserver::new().level(Level::Info).target("pricing");
        assert_eq!(obs.level, Level::Info);
        assert_eq!(obs.target, "pricing");
        assert_eq!(obs.evaluations(), 0);
    }

    #[test]
    fn counts_bisection_evaluations() {
        let model = FnModel::new(|x: f64| x * x);
        let problem = GoalProblem::new(2.0);
        let config = bisection::Config::default();
        let mut obs = LogObserver::new();

        let solution = bisection::solve(&model, &problem, [0.0, 2.0], &config, &mut obs)
            .expect("should converge");

        // Two endpoints plus one event per midpoint.
        assert_eq!(obs.evaluations(), solution.iters + 2);
    }

    #[test]
    fn does_not_change_the_result() {
        let model = FnModel::new(|x: f64| x.powi(3) - x);
        let problem = GoalProblem::new(5.0);
        let config = goal_seek::Config::default();

        let plain = goal_seek::solve_unobserved(&model, &problem, Start::Guess(0.5), &config)
            .expect("should converge");

        let mut obs = LogObserver::new();
        let logged = goal_seek::solve(&model, &problem, Start::Guess(0.5), &config, &mut obs)
            .expect("should converge");

        assert_eq!(plain.x.to_bits(), logged.x.to_bits());
        assert_eq!(plain.iters, logged.iters);
        assert!(obs.evaluations() > logged.iters);
    }
}
