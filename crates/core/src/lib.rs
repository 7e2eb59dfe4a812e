//! Core traits and types for goal seek problems.
//!
//! This crate defines the shared abstractions that solvers and observers
//! build on:
//!
//! - [`Model`] — a callable that maps a typed input to a typed output
//! - [`FnModel`] — adapts a plain `f64 -> f64` function into a [`Model`]
//! - [`Snapshot`] — a captured input/output pair from a model call
//! - [`Observer`] — receives solver events and optionally returns control actions
//! - [`EquationProblem`] — adapts solver variables to model inputs and
//!   computes residuals from outputs

mod model;
mod observer;
mod problems;

pub use observer::Observer;
pub use problems::EquationProblem;
pub use {model::FnModel, model::Model, model::Snapshot};
