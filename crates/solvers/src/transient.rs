//! Time-stepping drivers for coupled problems.
//!
//! - [`fixed_step`] — advances a [`CoupledProblem`] with a constant step size
//!   from `t = 0` to a configured end time
//!
//! [`CoupledProblem`]: rotorsim_core::CoupledProblem

pub mod fixed_step;
