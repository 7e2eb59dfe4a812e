//! Reusable observers for goal seek solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across the bisection, expansion, and goal seek solvers.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`HasX`], [`HasResidual`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`LogObserver`] — reports every evaluation through the [`log`] facade
//! - [`TraceObserver`] — records `(x, residual)` pairs for later inspection
//!
//! [`Observer`]: goalseek_core::Observer
//! [`HasX`]: traits::HasX
//! [`HasResidual`]: traits::HasResidual
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod logging;
mod trace;

pub use logging::LogObserver;
pub use trace::TraceObserver;
