//! Bracket search by geometric expansion around an initial guess.
//!
//! # Algorithm
//!
//! The search starts from the seed interval `[x0 - h, x0 + h]` and tests the
//! endpoint residuals for a sign change. While there is none, the interval is
//! widened by `width * (factor - 1)` on each side, so with the default factor
//! of 2 its width triples on the first step and keeps growing geometrically.
//! The first sign change found wins; no attempt is made to find every root.
//!
//! Under [`Domain::Positive`] the seed's lower bound is clamped to the domain
//! floor and then held fixed; each step grows only the upper bound, so the
//! interval doubles instead of tripling. If clamping collapses the seed
//! interval, the upper bound is moved to `floor + 2h`.
//!
//! A guess so large that `x0 - h` and `x0 + h` round to the same value is
//! still evaluated. Unless it is an exact root, the first step widens the
//! point by `|left| + |right| + 1`.
//!
//! An endpoint whose residual is exactly zero ends the search with
//! [`Expansion::Root`]. Endpoints that did not move are not re-evaluated.
//!
//! # Limits
//!
//! The search fails with [`Error::Failed`] once the interval would grow past
//! `max_width` or more than `max_expansions` expansions are needed.

mod action;
mod config;
mod domain;
mod error;
mod event;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use domain::Domain;
pub use error::Error;
pub use event::Event;

use goalseek_core::{EquationProblem, Model, Observer};

use crate::equation::{
    Evaluation,
    bisection::{Bounds, Bracket, Sign},
    evaluate,
};

/// The outcome of a successful expansion search.
#[derive(Debug, Clone)]
pub enum Expansion<I, O> {
    /// The residual changes sign across the bracket.
    Bracketed {
        /// Bracket ready for refinement.
        bracket: Bracket,
        /// Number of expansions performed.
        expansions: usize,
    },
    /// An endpoint is an exact root.
    Root {
        /// Evaluation at the root.
        eval: Evaluation<I, O, 1>,
        /// Interval the root was found on.
        bounds: [f64; 2],
        /// Number of expansions performed.
        expansions: usize,
    },
}

impl<I, O> Expansion<I, O> {
    /// Returns the number of expansions performed.
    #[must_use]
    pub fn expansions(&self) -> usize {
        match self {
            Expansion::Bracketed { expansions, .. } | Expansion::Root { expansions, .. } => {
                *expansions
            }
        }
    }
}

/// Expands an interval around `x0` until it brackets a root.
///
/// Observers receive an [`Event`] for every endpoint evaluation.
/// See the [module docs](self) for the expansion rule.
///
/// # Errors
///
/// Returns an error if the config or guess is invalid, a residual is
/// non-finite, the model or problem fails, the observer stops the search, or
/// no sign change is found within the configured limits.
pub fn expand<M, P, Obs>(
    model: &M,
    problem: &P,
    x0: f64,
    domain: Domain,
    config: &Config,
    mut observer: Obs,
) -> Result<Expansion<M::Input, M::Output>, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M::Input, M::Output>, Action>,
{
    config.validate()?;

    if !x0.is_finite() {
        return Err(Error::NonFiniteGuess { x0 });
    }

    let half_width = config.initial_half_width;
    let mut left = domain.clamp_lower(x0 - half_width);
    let mut right = x0 + half_width;
    if right <= left {
        right = left + 2.0 * half_width;
    }
    if !(right - left).is_finite() {
        return Err(Error::Failed {
            left,
            right,
            expansions: 0,
        });
    }

    let mut round = 0;
    let mut left_eval = probe(model, problem, left, round, [left, right], &mut observer)?;
    let mut right_eval = probe(model, problem, right, round, [left, right], &mut observer)?;

    loop {
        let left_sign = Sign::of(left_eval.residual());
        let right_sign = Sign::of(right_eval.residual());

        if left_sign == Sign::Zero {
            return Ok(Expansion::Root {
                eval: left_eval,
                bounds: [left, right],
                expansions: round,
            });
        }
        if right_sign == Sign::Zero {
            return Ok(Expansion::Root {
                eval: right_eval,
                bounds: [left, right],
                expansions: round,
            });
        }
        if left_sign != right_sign {
            let bracket = Bracket::new(Bounds::new([left, right])?, left_sign, right_sign)?;
            return Ok(Expansion::Bracketed {
                bracket,
                expansions: round,
            });
        }

        // A guess too large for the seed half-width collapses to a point.
        let width = right - left;
        let width = if width > 0.0 {
            width
        } else {
            left.abs() + right.abs() + 1.0
        };
        let step = width * (config.factor - 1.0);

        let next_left = match domain.floor() {
            Some(_) => left,
            None => left - step,
        };
        let next_right = right + step;

        if round >= config.max_expansions || next_right - next_left > config.max_width {
            return Err(Error::Failed {
                left,
                right,
                expansions: round,
            });
        }
        round += 1;

        #[allow(clippy::float_cmp)]
        let left_moved = next_left != left;

        left = next_left;
        right = next_right;

        if left_moved {
            left_eval = probe(model, problem, left, round, [left, right], &mut observer)?;
        }
        right_eval = probe(model, problem, right, round, [left, right], &mut observer)?;
    }
}

/// Expands an interval around `x0` without observation.
///
/// # Errors
///
/// See [`expand`].
pub fn expand_unobserved<M, P>(
    model: &M,
    problem: &P,
    x0: f64,
    domain: Domain,
    config: &Config,
) -> Result<Expansion<M::Input, M::Output>, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    expand(model, problem, x0, domain, config, ())
}

/// Evaluates one endpoint, rejects non-finite residuals, and notifies the observer.
fn probe<M, P, Obs>(
    model: &M,
    problem: &P,
    x: f64,
    round: usize,
    bounds: [f64; 2],
    observer: &mut Obs,
) -> Result<Evaluation<M::Input, M::Output, 1>, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M::Input, M::Output>, Action>,
{
    let eval = evaluate(model, problem, [x])?;
    let residual = eval.residual();
    if !residual.is_finite() {
        return Err(Error::NonFiniteResidual { x, residual });
    }

    let event = Event {
        round,
        bounds,
        eval: &eval,
    };
    if let Some(Action::StopEarly) = observer.observe(&event) {
        let [left, right] = bounds;
        return Err(Error::StoppedByObserver { left, right });
    }

    Ok(eval)
}
