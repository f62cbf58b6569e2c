use rotorsim_core::{CoupledProblem, Integrator};

use crate::{
    DroneState, MotorState, Parameters, Side, TwinRotorState,
    dynamics::{AttitudeRate, CurrentRate, RollRate, SpeedRate},
};

/// Two motors driving a single roll axis.
///
/// Each step advances, from the frozen start-of-step state:
///
/// - every motor's current from `[ω, u]` and angular velocity from `[i]`
/// - the roll rate from both motors' `[ω_R, ω_L]`
/// - the roll angle from `[q]`
///
/// The motor updates write disjoint fields and read only frozen values, so
/// they may run in any order.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TwinRotor {
    parameters: Parameters,
}

impl TwinRotor {
    #[must_use]
    pub fn new(parameters: Parameters) -> Self {
        Self { parameters }
    }

    /// Advances one motor's current and angular velocity.
    pub fn advance_motor<I: Integrator>(
        &self,
        integrator: &I,
        frozen: &MotorState,
        live: &mut MotorState,
        t: f64,
        h: f64,
    ) {
        let motor = &self.parameters.motor;

        live.current = integrator.step(
            &CurrentRate { motor },
            frozen.current,
            t,
            h,
            &[frozen.angular_velocity, frozen.voltage],
        );
        live.angular_velocity = integrator.step(
            &SpeedRate { motor },
            frozen.angular_velocity,
            t,
            h,
            &[frozen.current],
        );
    }

    /// Advances the airframe's roll rate and roll angle.
    ///
    /// Reads the motor speeds from `frozen`, never from motors already
    /// advanced in this step.
    pub fn advance_drone<I: Integrator>(
        &self,
        integrator: &I,
        frozen: &TwinRotorState,
        live: &mut DroneState,
        t: f64,
        h: f64,
    ) {
        let speeds = frozen.motors.map(|motor| motor.angular_velocity);
        let drone = &frozen.drone;

        live.rate = integrator.step(
            &RollRate {
                airframe: &self.parameters.airframe,
            },
            drone.rate,
            t,
            h,
            &[speeds.right, speeds.left],
        );
        live.attitude = integrator.step(&AttitudeRate, drone.attitude, t, h, &[drone.rate]);
    }
}

impl CoupledProblem for TwinRotor {
    type State = TwinRotorState;

    fn advance<I: Integrator>(
        &self,
        integrator: &I,
        frozen: &TwinRotorState,
        live: &mut TwinRotorState,
        t: f64,
        h: f64,
    ) {
        for side in Side::ALL {
            self.advance_motor(integrator, frozen.motor(side), &mut live.motors[side], t, h);
        }
        self.advance_drone(integrator, frozen, &mut live.drone, t, h);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use rotorsim_core::Staged;
    use rotorsim_solvers::integrators::Rk4;

    use crate::Pair;

    const H: f64 = 1e-4;

    fn spun_up() -> TwinRotorState {
        TwinRotorState {
            motors: Pair::new(
                MotorState {
                    current: 20.0,
                    angular_velocity: 1500.0,
                    voltage: 7.5,
                },
                MotorState {
                    current: 19.0,
                    angular_velocity: 1490.0,
                    voltage: 7.4,
                },
            ),
            drone: DroneState {
                rate: 0.2,
                attitude: 0.01,
            },
        }
    }

    #[test]
    fn motor_order_does_not_matter() {
        let model = TwinRotor::default();
        let mut forward = Staged::new(spun_up());
        let mut reverse = Staged::new(spun_up());

        for step in 0..100_u32 {
            let t = f64::from(step) * H;

            forward.freeze();
            let (frozen, live) = forward.split();
            for side in [Side::Right, Side::Left] {
                model.advance_motor(&Rk4, frozen.motor(side), &mut live.motors[side], t, H);
            }
            model.advance_drone(&Rk4, frozen, &mut live.drone, t, H);

            reverse.freeze();
            let (frozen, live) = reverse.split();
            model.advance_drone(&Rk4, frozen, &mut live.drone, t, H);
            for side in [Side::Left, Side::Right] {
                model.advance_motor(&Rk4, frozen.motor(side), &mut live.motors[side], t, H);
            }
        }

        assert_eq!(forward.live(), reverse.live());
    }

    #[test]
    fn drone_reads_start_of_step_motor_speeds() {
        let model = TwinRotor::default();
        let initial = spun_up();

        let mut live = initial;
        model.advance(&Rk4, &initial, &mut live, 0.0, H);

        // Only the frozen speeds determine the new roll rate.
        let mut drone = initial.drone;
        model.advance_drone(&Rk4, &initial, &mut drone, 0.0, H);
        assert_eq!(live.drone, drone);

        let thrust = |omega: f64| 3.5e-6 * omega * omega;
        let accel = (thrust(1500.0) - thrust(1490.0)) * 0.09 / 6.0e-3;
        assert_relative_eq!(live.drone.rate, 0.2 + accel * H, max_relative = 1e-12);
        assert_relative_eq!(live.drone.attitude, 0.01 + 0.2 * H, max_relative = 1e-12);
    }

    #[test]
    fn voltage_is_not_integrated() {
        let model = TwinRotor::default();
        let initial = spun_up();

        let mut live = initial;
        model.advance(&Rk4, &initial, &mut live, 0.0, H);

        assert_eq!(live.motors.map(|m| m.voltage), Pair::new(7.5, 7.4));
    }

    #[test]
    fn unpowered_motors_stay_at_rest() {
        let model = TwinRotor::default();
        let initial = TwinRotorState::initial(Pair::splat(0.0));

        let mut live = initial;
        for step in 0..10_u32 {
            let frozen = live;
            model.advance(&Rk4, &frozen, &mut live, f64::from(step) * H, H);
        }

        assert_eq!(live, initial);
    }
}
