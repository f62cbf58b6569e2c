/// The time derivative of a single scalar state variable.
///
/// Every derivative shares the same shape: the value being differentiated, the
/// current time, and an ordered array of `N` auxiliary values it depends on.
/// The auxiliary values are other state variables taken from the step's frozen
/// snapshot, so they stay constant across all stage evaluations of one
/// integration step.
///
/// The array length is part of the type, which keeps each call site's
/// dependency list checked at compile time.
///
/// Closures of the form `Fn(f64, f64, &[f64; N]) -> f64` implement this trait
/// automatically.
///
/// # Example
///
/// ```
/// use rotorsim_core::Derivative;
///
/// // dx/dt = -k * x, with k supplied as an auxiliary value.
/// let decay = |x: f64, _t: f64, aux: &[f64; 1]| -aux[0] * x;
///
/// assert_eq!(decay.derivative(2.0, 0.0, &[0.5]), -1.0);
/// ```
pub trait Derivative<const N: usize> {
    /// Returns `dx/dt` at `(x, t)` for the given auxiliary values.
    fn derivative(&self, x: f64, t: f64, aux: &[f64; N]) -> f64;
}

impl<F, const N: usize> Derivative<N> for F
where
    F: Fn(f64, f64, &[f64; N]) -> f64,
{
    fn derivative(&self, x: f64, t: f64, aux: &[f64; N]) -> f64 {
        self(x, t, aux)
    }
}
