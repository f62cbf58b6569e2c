use rotorsim_core::Finite;
use rotorsim_observers::traits::Tabular;
use uom::si::{
    angular_velocity::{radian_per_second, revolution_per_minute},
    f64::AngularVelocity,
};

use crate::{Pair, Side};

/// State of one motor.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MotorState {
    /// Winding current, in A.
    pub current: f64,

    /// Rotor angular velocity, in rad/s.
    pub angular_velocity: f64,

    /// Applied voltage, in V. Held fixed for a run.
    pub voltage: f64,
}

impl MotorState {
    /// A motor at rest with `voltage` applied.
    #[must_use]
    pub fn at_rest(voltage: f64) -> Self {
        Self {
            current: 0.0,
            angular_velocity: 0.0,
            voltage,
        }
    }

    /// Rotor speed in rev/min.
    #[must_use]
    pub fn speed_rpm(&self) -> f64 {
        AngularVelocity::new::<radian_per_second>(self.angular_velocity)
            .get::<revolution_per_minute>()
    }
}

impl Finite for MotorState {
    fn is_finite(&self) -> bool {
        [self.current, self.angular_velocity, self.voltage].is_finite()
    }
}

/// Roll state of the airframe.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DroneState {
    /// Roll rate `q`, in rad/s.
    pub rate: f64,

    /// Roll angle `theta`, in rad.
    pub attitude: f64,
}

impl Finite for DroneState {
    fn is_finite(&self) -> bool {
        [self.rate, self.attitude].is_finite()
    }
}

/// Complete state of the twin-rotor model.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TwinRotorState {
    pub motors: Pair<MotorState>,
    pub drone: DroneState,
}

impl TwinRotorState {
    /// Both motors at rest with the given voltages, and a level airframe that
    /// is not rotating.
    #[must_use]
    pub fn initial(voltages: Pair<f64>) -> Self {
        Self {
            motors: voltages.map(MotorState::at_rest),
            drone: DroneState::default(),
        }
    }

    /// Returns the state of one motor.
    #[must_use]
    pub fn motor(&self, side: Side) -> &MotorState {
        &self.motors[side]
    }
}

impl Finite for TwinRotorState {
    fn is_finite(&self) -> bool {
        self.motors.iter().all(|(_, motor)| motor.is_finite()) && self.drone.is_finite()
    }
}

impl Tabular<6> for TwinRotorState {
    const HEADERS: [&'static str; 6] = [
        "i_R [A]",
        "i_L [A]",
        "n_R [rpm]",
        "n_L [rpm]",
        "q [rad/s]",
        "theta [rad]",
    ];

    fn row(&self) -> [f64; 6] {
        let Self { motors, drone } = self;
        [
            motors.right.current,
            motors.left.current,
            motors.right.speed_rpm(),
            motors.left.speed_rpm(),
            drone.rate,
            drone.attitude,
        ]
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn one_revolution_per_second_is_sixty_rpm() {
        let motor = MotorState {
            angular_velocity: 2.0 * PI,
            ..MotorState::default()
        };
        assert_relative_eq!(motor.speed_rpm(), 60.0, max_relative = 1e-12);
    }

    #[test]
    fn initial_state_is_at_rest() {
        let state = TwinRotorState::initial(Pair::new(7.5, 7.4));

        assert_eq!(state.motor(Side::Right), &MotorState::at_rest(7.5));
        assert_eq!(state.motor(Side::Left), &MotorState::at_rest(7.4));
        assert_eq!(state.drone, DroneState::default());
        assert_eq!(state.row(), [0.0; 6]);
    }

    #[test]
    fn any_non_finite_field_makes_the_state_non_finite() {
        let mut state = TwinRotorState::initial(Pair::splat(1.0));
        assert!(state.is_finite());

        state.motors.left.angular_velocity = f64::INFINITY;
        assert!(!state.is_finite());

        state.motors.left.angular_velocity = 0.0;
        state.drone.attitude = f64::NAN;
        assert!(!state.is_finite());
    }
}
