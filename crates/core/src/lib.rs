//! Core traits and types for fixed-step simulation of coupled ODE systems.
//!
//! This crate defines the shared abstractions that integrators, the simulation
//! loop, observers, and models build on:
//!
//! - [`Derivative`] — the time derivative of one scalar state variable, given
//!   its value, the time, and a fixed-length array of auxiliary inputs
//! - [`Integrator`] — advances one scalar state variable by one step
//! - [`Staged`] — live and frozen copies of a state, so every derivative within
//!   a step reads the same simultaneously-valid inputs
//! - [`CoupledProblem`] — a multi-variable system advanced from a frozen snapshot
//! - [`Observer`] — receives solver events and optionally returns control actions,
//!   with [`Tee`] to run two observers side by side
//! - [`Finite`] — detects states that have diverged to infinity or NaN

mod derivative;
mod finite;
mod integrator;
mod observer;
mod problem;
mod staged;

pub use derivative::Derivative;
pub use finite::Finite;
pub use integrator::Integrator;
pub use observer::{Observer, Tee};
pub use problem::CoupledProblem;
pub use staged::Staged;
