use crate::Derivative;

/// A fixed-step explicit scheme that advances one scalar state variable.
///
/// Given a derivative `f`, the current value `x`, the time `t`, the step size
/// `h`, and the auxiliary values `aux` frozen at the start of the step, an
/// integrator returns the value of `x` at `t + h`.
///
/// The auxiliary values are held constant for every evaluation of `f` within
/// one call; they are never re-integrated mid-step.
///
/// Implementations must be total: a step size of zero returns `x` unchanged.
pub trait Integrator {
    /// Returns the value of `x` after one step of size `h`.
    fn step<const N: usize, F>(&self, f: &F, x: f64, t: f64, h: f64, aux: &[f64; N]) -> f64
    where
        F: Derivative<N> + ?Sized;
}
