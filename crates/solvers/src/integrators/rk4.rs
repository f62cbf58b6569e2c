use rotorsim_core::{Derivative, Integrator};

/// Classic fixed-step 4th-order Runge–Kutta method.
///
/// ```text
/// k1 = h·f(x,        t,       aux)
/// k2 = h·f(x + k1/2, t + h/2, aux)
/// k3 = h·f(x + k2/2, t + h/2, aux)
/// k4 = h·f(x + k3,   t + h,   aux)
/// x' = x + (k1 + 2·k2 + 2·k3 + k4)/6
/// ```
///
/// The auxiliary values are the same for all four stages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rk4;

impl Integrator for Rk4 {
    fn step<const N: usize, F>(&self, f: &F, x: f64, t: f64, h: f64, aux: &[f64; N]) -> f64
    where
        F: Derivative<N> + ?Sized,
    {
        if h == 0.0 {
            return x;
        }

        let half = 0.5 * h;

        let k1 = h * f.derivative(x, t, aux);
        let k2 = h * f.derivative(x + 0.5 * k1, t + half, aux);
        let k3 = h * f.derivative(x + 0.5 * k2, t + half, aux);
        let k4 = h * f.derivative(x + k3, t + h, aux);

        x + (k1 + 2.0 * k2 + 2.0 * k3 + k4) / 6.0
    }
}
