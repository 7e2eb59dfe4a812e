//! Spreadsheet-style goal seek: find `x` such that `f(x) = goal`.
//!
//! # Algorithm
//!
//! Goal seek works on the shifted function `g(x) = f(x) - goal` and runs in
//! two phases:
//!
//! 1. **Bracket.** From a [`Start::Guess`], an interval around the guess is
//!    grown by [`expansion::expand`] until `g` changes sign across it. A
//!    [`Start::Bracket`] is used as given after normalizing its order and,
//!    under [`Domain::Positive`], clamping its lower bound.
//! 2. **Refine.** The bracket is halved by [`bisection`] until
//!    `|g(m)| <= residual_tol` at a midpoint `m`.
//!
//! An exact zero of `g` at any probed point ends the search immediately.
//! If the bisection budget runs out, the midpoint of the final bracket is
//! returned with [`Status::MaxIters`] rather than an error.
//!
//! # Example
//!
//! ```
//! use goalseek_solvers::equation::goal_seek::{Config, seek};
//!
//! // How many items at $5 with 10% commission make $1000?
//! let items = seek(|x| 5.0 * x * 0.9, 1000.0, 100.0, &Config::default()).unwrap();
//! assert!((items - 222.222).abs() < 1e-3);
//!
//! // Only accept the positive square root.
//! let root = seek(|x| x * x, 9.0, 1.0, &Config::positive()).unwrap();
//! assert!((root - 3.0).abs() < 1e-6);
//! ```
//!
//! # Observer Events
//!
//! Observers receive an [`Event`] tagged with the phase that produced it and
//! may return [`Action::StopEarly`].

mod action;
mod config;
mod error;
mod event;
mod solution;
mod start;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::Solution;
pub use start::Start;

pub use crate::equation::bisection::Status;
pub use crate::equation::expansion::Domain;

use goalseek_core::{EquationProblem, FnModel, Model, Observer};

use crate::equation::{
    GoalProblem,
    bisection::{self, Bounds},
    expansion::{self, Expansion},
};

/// Solves the equation problem starting from `start`.
///
/// The problem's residual plays the role of `g(x) = f(x) - goal`; use
/// [`GoalProblem`] for a plain scalar goal.
///
/// # Errors
///
/// Returns an error if the config or start is invalid, a supplied bracket
/// conflicts with the domain or has no sign change, a probed value is
/// non-finite, no bracket is found within the expansion limits, the observer
/// stops the bracket search, or the model or problem fails.
pub fn solve<M, P, Obs>(
    model: &M,
    problem: &P,
    start: Start,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M::Input, M::Output>, Action>,
{
    config.validate()?;
    let bisection_config = config.bisection();

    let solution = match start {
        Start::Bracket(bracket) => {
            let [left, right] = Bounds::new(bracket)
                .map_err(Error::InvalidBracket)?
                .as_array();
            if !config.domain.admits_upper(right) {
                return Err(Error::InvalidDomain { left, right });
            }
            let left = config.domain.clamp_lower(left);

            log::debug!("goal seek: bisecting supplied bracket [{left}, {right}]");
            let solution = bisection::solve(
                model,
                problem,
                [left, right],
                &bisection_config,
                |event: &bisection::Event<'_, M::Input, M::Output>| {
                    observer
                        .observe(&Event::Bisection(event))
                        .map(bisection::Action::from)
                },
            )?;
            Solution::from_bisection(solution, 0)
        }
        Start::Guess(x0) => {
            let expansion = expansion::expand(
                model,
                problem,
                x0,
                config.domain,
                &config.expansion,
                |event: &expansion::Event<'_, M::Input, M::Output>| {
                    observer
                        .observe(&Event::Expansion(event))
                        .map(expansion::Action::from)
                },
            )?;

            let expansions = expansion.expansions();
            match expansion {
                Expansion::Root { eval, bounds, .. } => {
                    log::debug!(
                        "goal seek: exact root at x = {} after {expansions} expansions",
                        eval.point()
                    );
                    Solution::exact(eval, bounds, expansions)
                }
                Expansion::Bracketed { bracket, .. } => {
                    let [left, right] = bracket.as_array();
                    log::debug!(
                        "goal seek: bracketed root in [{left}, {right}] after {expansions} expansions"
                    );
                    let solution = bisection::refine(
                        model,
                        problem,
                        bracket,
                        &bisection_config,
                        |event: &bisection::Event<'_, M::Input, M::Output>| {
                            observer
                                .observe(&Event::Bisection(event))
                                .map(bisection::Action::from)
                        },
                    )?;
                    Solution::from_bisection(solution, expansions)
                }
            }
        }
    };

    match solution.status {
        Status::Converged => log::debug!(
            "goal seek: converged to x = {} in {} iterations",
            solution.x,
            solution.iters
        ),
        Status::MaxIters => log::debug!(
            "goal seek: iteration budget of {} exhausted, returning midpoint x = {}",
            solution.iters,
            solution.x
        ),
        Status::StoppedByObserver => {
            log::debug!("goal seek: stopped by observer at x = {}", solution.x);
        }
    }

    Ok(solution)
}

/// Solves the equation problem without observation.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<M, P>(
    model: &M,
    problem: &P,
    start: Start,
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    solve(model, problem, start, config, ())
}

/// Finds `x` such that `f(x) = goal`.
///
/// `start` is either an initial guess (`f64`) or a bracket (`[f64; 2]` or
/// `(f64, f64)`); a bracket takes the place of the guess.
///
/// The returned value is the best estimate even when the iteration budget
/// runs out before `|f(x) - goal| <= residual_tol`. Use [`solve`] with
/// [`GoalProblem`] to see the [`Status`].
///
/// # Errors
///
/// See [`solve`].
pub fn seek<F>(f: F, goal: f64, start: impl Into<Start>, config: &Config) -> Result<f64, Error>
where
    F: Fn(f64) -> f64,
{
    let model = FnModel::new(f);
    let problem = GoalProblem::new(goal);
    log::trace!("goal seek: seeking f(x) = {}", problem.goal());
    solve_unobserved(&model, &problem, start.into(), config).map(|solution| solution.x)
}
