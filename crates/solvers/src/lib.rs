//! Numerical solvers for goal seek problems.
//!
//! Solvers are organized by problem type. Goal seek is a scalar equation
//! problem, so everything lives under [`equation`]:
//!
//! - [`equation::bisection`] — refines a sign-change bracket by halving
//! - [`equation::expansion`] — grows an interval around a guess until it
//!   brackets a root
//! - [`equation::goal_seek`] — combines both to solve `f(x) = goal`

pub mod equation;
