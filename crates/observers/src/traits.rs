//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across different solvers.
//!
//! # Event traits
//!
//! - [`HasX`] — events that carry the evaluated point
//! - [`HasResidual`] — events that carry a residual value
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use goalseek_core::Observer;
//! use goalseek_observers::traits::{CanStopEarly, HasResidual};
//!
//! struct GoodEnough {
//!     tolerance: f64,
//!     min_iters: usize,
//!     iter: usize,
//! }
//!
//! impl<E: HasResidual, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         self.iter += 1;
//!         if self.iter >= self.min_iters && event.residual().abs() < self.tolerance {
//!             return Some(A::stop_early());
//!         }
//!         None
//!     }
//! }
//! ```

use goalseek_solvers::equation::{bisection, expansion, goal_seek};

/// An event that carries the evaluated point.
pub trait HasX {
    /// Returns the evaluated x value for this event.
    fn x(&self) -> f64;
}

/// An event that carries a residual value.
pub trait HasResidual {
    /// Returns the residual for this event.
    fn residual(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- HasX / HasResidual for solver events ---

impl<I, O> HasX for bisection::Event<'_, I, O> {
    fn x(&self) -> f64 {
        bisection::Event::x(self)
    }
}

impl<I, O> HasResidual for bisection::Event<'_, I, O> {
    fn residual(&self) -> f64 {
        bisection::Event::residual(self)
    }
}

impl<I, O> HasX for expansion::Event<'_, I, O> {
    fn x(&self) -> f64 {
        expansion::Event::x(self)
    }
}

impl<I, O> HasResidual for expansion::Event<'_, I, O> {
    fn residual(&self) -> f64 {
        expansion::Event::residual(self)
    }
}

impl<I, O> HasX for goal_seek::Event<'_, I, O> {
    fn x(&self) -> f64 {
        goal_seek::Event::x(self)
    }
}

impl<I, O> HasResidual for goal_seek::Event<'_, I, O> {
    fn residual(&self) -> f64 {
        goal_seek::Event::residual(self)
    }
}

// --- CanStopEarly impls ---

impl CanStopEarly for bisection::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for expansion::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for goal_seek::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use goalseek_core::{FnModel, Observer};
    use goalseek_solvers::equation::{
        GoalProblem,
        goal_seek::{Config, Start, Status, solve},
    };

    /// Stops once the residual is below a loose threshold.
    struct Loose(f64);

    impl<E: HasResidual, A: CanStopEarly> Observer<E, A> for Loose {
        fn observe(&mut self, event: &E) -> Option<A> {
            (event.residual().abs() < self.0).then(A::stop_early)
        }
    }

    #[test]
    fn generic_observer_stops_goal_seek() {
        let model = FnModel::new(|x: f64| x * x);
        let problem = GoalProblem::new(2.0);
        let config = Config {
            residual_tol: 1e-12,
            ..Config::default()
        };

        let solution = solve(&model, &problem, Start::Bracket([0.0, 2.0]), &config, Loose(0.1))
            .expect("should stop cleanly");

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert!(solution.residual().expect("evaluated").abs() < 0.1);
        assert_relative_eq!(solution.x, 2.0_f64.sqrt(), epsilon = 0.1);
    }

    #[test]
    fn actions_stop_early() {
        assert_eq!(bisection::Action::stop_early(), bisection::Action::StopEarly);
        assert_eq!(expansion::Action::stop_early(), expansion::Action::StopEarly);
        assert_eq!(goal_seek::Action::stop_early(), goal_seek::Action::StopEarly);
    }
}
