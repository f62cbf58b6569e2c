use rotorsim_solvers::transient::fixed_step::Sample;

use crate::{Pair, TwinRotorState};

/// The seven output quantities of the twin-rotor model at one instant.
///
/// Motor speeds are reported in rev/min; everything else keeps its state
/// units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    /// Simulation time, in s.
    pub time: f64,

    /// Motor currents, in A.
    pub current: Pair<f64>,

    /// Motor speeds, in rev/min.
    pub speed_rpm: Pair<f64>,

    /// Roll rate, in rad/s.
    pub rate: f64,

    /// Roll angle, in rad.
    pub attitude: f64,
}

impl Record {
    #[must_use]
    pub fn new(time: f64, state: &TwinRotorState) -> Self {
        Self {
            time,
            current: state.motors.map(|motor| motor.current),
            speed_rpm: state.motors.map(|motor| motor.speed_rpm()),
            rate: state.drone.rate,
            attitude: state.drone.attitude,
        }
    }
}

impl From<&Sample<TwinRotorState>> for Record {
    fn from(sample: &Sample<TwinRotorState>) -> Self {
        Self::new(sample.time, &sample.state)
    }
}

impl From<Record> for [f64; 7] {
    fn from(record: Record) -> Self {
        [
            record.time,
            record.current.right,
            record.current.left,
            record.speed_rpm.right,
            record.speed_rpm.left,
            record.rate,
            record.attitude,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use rotorsim_observers::traits::Tabular;

    use crate::{DroneState, MotorState};

    #[test]
    fn columns_match_the_table_row() {
        let state = TwinRotorState {
            motors: Pair::new(
                MotorState {
                    current: 1.0,
                    angular_velocity: 100.0,
                    voltage: 7.5,
                },
                MotorState {
                    current: 2.0,
                    angular_velocity: 50.0,
                    voltage: 7.4,
                },
            ),
            drone: DroneState {
                rate: 0.5,
                attitude: 0.25,
            },
        };

        let columns: [f64; 7] = Record::new(0.125, &state).into();

        assert_eq!(columns[0], 0.125);
        assert_eq!(columns[1..], state.row());
        assert_relative_eq!(
            columns[3],
            100.0 * 60.0 / (2.0 * std::f64::consts::PI),
            max_relative = 1e-12
        );
    }
}
