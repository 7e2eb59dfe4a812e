//! Solvers for equation problems: roots of scalar equations.
//!
//! An [`EquationProblem`] maps solver variables `x: [f64; N]` to model inputs,
//! calls the model, and computes residuals. Solvers in this module drive those
//! residuals toward zero.
//!
//! # Solvers
//!
//! - [`bisection`] — guaranteed convergence on a bracketed interval
//! - [`expansion`] — automatic bracket search around an initial guess
//! - [`goal_seek`] — spreadsheet-style goal seek built on the two above
//!
//! [`EquationProblem`]: goalseek_core::EquationProblem

mod evaluate;
mod goal;

pub use evaluate::{EvalError, EvaluateResult, Evaluation, evaluate};
pub use goal::GoalProblem;

pub mod bisection;
pub mod expansion;
pub mod goal_seek;
