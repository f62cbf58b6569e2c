//! Integrators and the fixed-step simulation loop.
//!
//! - [`integrators`] — explicit one-step schemes implementing
//!   [`Integrator`](rotorsim_core::Integrator)
//! - [`transient`] — time-stepping drivers for
//!   [`CoupledProblem`](rotorsim_core::CoupledProblem)s

pub mod integrators;
pub mod transient;
