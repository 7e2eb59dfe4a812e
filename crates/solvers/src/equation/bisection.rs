//! Bisection for scalar equation problems.
//!
//! # Algorithm
//!
//! Bisection keeps an interval whose endpoint residuals differ in sign. Each
//! iteration evaluates the midpoint and keeps the half that still contains the
//! sign change, until the residual at a midpoint is within tolerance.
//!
//! # Convergence
//!
//! Convergence is judged on the residual only: a midpoint `m` is accepted when
//! `|g(m)| <= residual_tol`. An exact zero at a supplied endpoint is accepted
//! immediately without bisecting.
//!
//! Running out of iterations is not an error. The solver returns the midpoint
//! of the final bracket with [`Status::MaxIters`]; that point is not evaluated,
//! so [`Solution::eval`] is `None`. Callers that need the tolerance guaranteed
//! must check the status.
//!
//! # Observer Events
//!
//! - [`Event::Endpoint`] — a supplied endpoint was evaluated ([`solve`] only)
//! - [`Event::Midpoint`] — a midpoint was evaluated
//!
//! Observers can return [`Action::StopEarly`] to halt and report the point
//! just evaluated.

mod action;
mod bracket;
mod config;
mod error;
mod event;
mod solution;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use bracket::{Bracket, BracketError, Sign};
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

pub(crate) use bracket::Bounds;

use goalseek_core::{EquationProblem, Model, Observer};

use crate::equation::{Evaluation, evaluate};

/// Finds a root of the equation inside `bracket` using bisection.
///
/// The bracket is normalized so that `left < right`. Observers see each
/// endpoint and midpoint evaluation.
///
/// # Errors
///
/// Returns an error if the config or bracket is invalid, the endpoint
/// residuals share a sign, a residual is non-finite, or the model or problem
/// fails during evaluation.
pub fn solve<M, P, Obs>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M::Input, M::Output>, Action>,
{
    config.validate()?;

    let bounds = Bounds::new(bracket)?;
    let [left, right] = bounds.as_array();

    let left_eval = evaluate_finite(model, problem, left)?;
    if let Some(status) = endpoint_status(&left_eval, &mut observer) {
        return Ok(Solution::evaluated(status, left_eval, [left, right], 0));
    }

    let right_eval = evaluate_finite(model, problem, right)?;
    if let Some(status) = endpoint_status(&right_eval, &mut observer) {
        return Ok(Solution::evaluated(status, right_eval, [left, right], 0));
    }

    let left_residual = left_eval.residual();
    let right_residual = right_eval.residual();

    let bracket = Bracket::new(bounds, Sign::of(left_residual), Sign::of(right_residual))
        .map_err(|_| Error::NoBracket {
            left,
            right,
            left_residual,
            right_residual,
        })?;

    bisect(model, problem, bracket, config, &mut observer)
}

/// Runs bisection without observation.
///
/// # Errors
///
/// Returns an error if the config or bracket is invalid, the endpoint
/// residuals share a sign, a residual is non-finite, or the model or problem
/// fails during evaluation.
pub fn solve_unobserved<M, P>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    solve(model, problem, bracket, config, ())
}

/// Refines an established bracket without re-evaluating its endpoints.
///
/// Use this when the endpoint residual signs are already known, for example
/// after [`expansion::expand`](crate::equation::expansion::expand).
///
/// # Errors
///
/// Returns an error if the config is invalid, a midpoint residual is
/// non-finite, or the model or problem fails during evaluation.
pub fn refine<M, P, Obs>(
    model: &M,
    problem: &P,
    bracket: Bracket,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M::Input, M::Output>, Action>,
{
    config.validate()?;
    bisect(model, problem, bracket, config, &mut observer)
}

/// The bisection loop over a validated bracket.
fn bisect<M, P, Obs>(
    model: &M,
    problem: &P,
    mut bracket: Bracket,
    config: &Config,
    observer: &mut Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M::Input, M::Output>, Action>,
{
    for iter in 1..=config.max_iters {
        let mid = bracket.midpoint();
        let mid_eval = evaluate_finite(model, problem, mid)?;
        let mid_residual = mid_eval.residual();

        let action = observer.observe(&Event::Midpoint {
            iter,
            bracket: &bracket,
            eval: &mid_eval,
        });

        if let Some(Action::StopEarly) = action {
            return Ok(Solution::evaluated(
                Status::StoppedByObserver,
                mid_eval,
                bracket.as_array(),
                iter,
            ));
        }

        if mid_residual.abs() <= config.residual_tol {
            return Ok(Solution::evaluated(
                Status::Converged,
                mid_eval,
                bracket.as_array(),
                iter,
            ));
        }

        bracket.shrink(mid, Sign::of(mid_residual));
    }

    Ok(Solution::best_effort(bracket.as_array(), config.max_iters))
}

/// Evaluates at `x` and rejects non-finite residuals.
fn evaluate_finite<M, P>(
    model: &M,
    problem: &P,
    x: f64,
) -> Result<Evaluation<M::Input, M::Output, 1>, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    let eval = evaluate(model, problem, [x])?;
    let residual = eval.residual();
    if !residual.is_finite() {
        return Err(Error::NonFiniteResidual { x, residual });
    }
    Ok(eval)
}

/// Reports an endpoint and returns a status if the solve ends there.
///
/// The solve ends at an endpoint that is an exact root or that the observer
/// stops on.
fn endpoint_status<I, O, Obs>(eval: &Evaluation<I, O, 1>, observer: &mut Obs) -> Option<Status>
where
    Obs: for<'a> Observer<Event<'a, I, O>, Action>,
{
    if let Some(Action::StopEarly) = observer.observe(&Event::Endpoint { eval }) {
        return Some(Status::StoppedByObserver);
    }

    if Sign::of(eval.residual()) == Sign::Zero {
        return Some(Status::Converged);
    }

    None
}
