use rotorsim_core::{Derivative, Integrator};

/// Explicit forward Euler method.
///
/// ```text
/// x' = x + h·f(x, t, aux)
/// ```
///
/// First-order accurate. Useful as a baseline when checking how much the
/// higher-order scheme buys for a given step size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ForwardEuler;

impl Integrator for ForwardEuler {
    fn step<const N: usize, F>(&self, f: &F, x: f64, t: f64, h: f64, aux: &[f64; N]) -> f64
    where
        F: Derivative<N> + ?Sized,
    {
        if h == 0.0 {
            return x;
        }
        x + h * f.derivative(x, t, aux)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::integrators::Rk4;

    #[test]
    fn single_step_uses_start_of_step_slope() {
        let f = |x: f64, t: f64, aux: &[f64; 1]| x * aux[0] + t;

        let next = ForwardEuler.step(&f, 2.0, 1.0, 0.5, &[3.0]);

        // 2 + 0.5 * (2·3 + 1)
        assert_relative_eq!(next, 5.5);
    }

    #[test]
    fn less_accurate_than_rk4_on_decay() {
        let decay = |x: f64, _t: f64, _aux: &[f64; 0]| -x;
        let exact = (-0.2_f64).exp();

        let euler_error = (ForwardEuler.step(&decay, 1.0, 0.0, 0.2, &[]) - exact).abs();
        let rk4_error = (Rk4.step(&decay, 1.0, 0.0, 0.2, &[]) - exact).abs();

        assert!(rk4_error < euler_error * 1e-3);
    }

    #[test]
    fn zero_step_returns_input() {
        let f = |_x: f64, _t: f64, _aux: &[f64; 0]| f64::NAN;
        assert_eq!(ForwardEuler.step(&f, -1.0, 0.0, 0.0, &[]), -1.0);
    }
}
