//! Time derivatives of the twin-rotor state variables.
//!
//! Each derivative borrows the constants it needs and receives the other
//! state variables it depends on as a fixed-length auxiliary array:
//!
//! | Derivative | Variable | Auxiliary inputs |
//! |---|---|---|
//! | [`CurrentRate`] | motor current `i` | `[ω, u]` |
//! | [`SpeedRate`] | motor angular velocity `ω` | `[i]` |
//! | [`RollRate`] | roll rate `q` | `[ω_R, ω_L]` |
//! | [`AttitudeRate`] | roll angle `θ` | `[q]` |
//!
//! None of them depend on time.

use rotorsim_core::Derivative;

use crate::{AirframeParameters, MotorParameters};

/// Motor electrical equation: `L·di/dt + R·i + K·ω = u`.
#[derive(Debug, Clone, Copy)]
pub struct CurrentRate<'a> {
    pub motor: &'a MotorParameters,
}

impl Derivative<2> for CurrentRate<'_> {
    fn derivative(&self, current: f64, _t: f64, aux: &[f64; 2]) -> f64 {
        let [angular_velocity, voltage] = *aux;
        let MotorParameters {
            inductance,
            resistance,
            torque_constant,
            ..
        } = *self.motor;

        (voltage - resistance * current - torque_constant * angular_velocity) / inductance
    }
}

/// Motor equation of motion: `J·dω/dt + D·ω + C_q·ω² = K·i`.
#[derive(Debug, Clone, Copy)]
pub struct SpeedRate<'a> {
    pub motor: &'a MotorParameters,
}

impl Derivative<1> for SpeedRate<'_> {
    fn derivative(&self, angular_velocity: f64, _t: f64, aux: &[f64; 1]) -> f64 {
        let [current] = *aux;
        let MotorParameters {
            torque_constant,
            inertia,
            drag_coefficient,
            damping,
            ..
        } = *self.motor;

        let drag = drag_coefficient * angular_velocity * angular_velocity;
        (torque_constant * current - damping * angular_velocity - drag) / inertia
    }
}

/// Airframe roll equation: `J·dq/dt = (T_R − T_L)·l` with `T = C_t·ω²`.
#[derive(Debug, Clone, Copy)]
pub struct RollRate<'a> {
    pub airframe: &'a AirframeParameters,
}

impl RollRate<'_> {
    /// Thrust of a rotor spinning at `angular_velocity`, in N.
    #[must_use]
    pub fn thrust(&self, angular_velocity: f64) -> f64 {
        self.airframe.thrust_coefficient * angular_velocity * angular_velocity
    }
}

impl Derivative<2> for RollRate<'_> {
    fn derivative(&self, _rate: f64, _t: f64, aux: &[f64; 2]) -> f64 {
        let [right, left] = *aux;
        let AirframeParameters {
            arm_length,
            inertia,
            ..
        } = *self.airframe;

        (self.thrust(right) - self.thrust(left)) * arm_length / inertia
    }
}

/// Roll kinematics: `dθ/dt = q`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AttitudeRate;

impl Derivative<1> for AttitudeRate {
    fn derivative(&self, _attitude: f64, _t: f64, aux: &[f64; 1]) -> f64 {
        aux[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::Parameters;

    #[test]
    fn current_starts_at_voltage_over_inductance() {
        let p = Parameters::default();
        let f = CurrentRate { motor: &p.motor };

        assert_relative_eq!(f.derivative(0.0, 0.0, &[0.0, 7.5]), 7.5 / 3.7e-4);
    }

    #[test]
    fn back_emf_and_resistance_oppose_the_voltage() {
        let p = Parameters::default();
        let f = CurrentRate { motor: &p.motor };

        // u = R·i + K·ω leaves nothing to drive the current.
        let (i, omega) = (2.0, 100.0);
        let u = 0.12 * i + 3.3e-3 * omega;

        assert_relative_eq!(f.derivative(i, 0.0, &[omega, u]), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn drag_balances_torque_at_steady_speed() {
        let p = Parameters::default();
        let f = SpeedRate { motor: &p.motor };

        let omega: f64 = 1500.0;
        let i = 3.0e-8 * omega.powi(2) / 3.3e-3;

        assert_relative_eq!(f.derivative(omega, 0.0, &[i]), 0.0, epsilon = 1e-6);
        assert!(f.derivative(omega, 0.0, &[i * 1.1]) > 0.0);
    }

    #[test]
    fn faster_right_rotor_rolls_positive() {
        let p = Parameters::default();
        let f = RollRate {
            airframe: &p.airframe,
        };

        let expected = 3.5e-6 * (1000.0_f64.powi(2) - 900.0_f64.powi(2)) * 0.09 / 6.0e-3;

        assert_relative_eq!(
            f.derivative(0.0, 0.0, &[1000.0, 900.0]),
            expected,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            f.derivative(0.0, 0.0, &[900.0, 1000.0]),
            -expected,
            max_relative = 1e-12
        );
        assert_eq!(f.derivative(0.3, 0.0, &[800.0, 800.0]), 0.0);
    }

    #[test]
    fn attitude_follows_rate() {
        assert_eq!(AttitudeRate.derivative(1.0, 2.0, &[-0.4]), -0.4);
    }
}
