//! Fixed-step explicit integration schemes.
//!
//! - [`Rk4`] — classical fourth-order Runge–Kutta, the default for simulations
//! - [`ForwardEuler`] — first-order reference scheme
//!
//! Neither scheme estimates or controls local error. Choosing a step size that
//! is small relative to the system's time constants is the caller's job.

mod forward_euler;
mod rk4;

pub use forward_euler::ForwardEuler;
pub use rk4::Rk4;
