//! Twin-rotor multicopter model.
//!
//! Two DC motors, each with an electrical and a mechanical equation, drive
//! propellers on either side of an airframe that rolls about a single axis
//! under their thrust difference:
//!
//! ```text
//! L·di/dt = u − R·i − K·ω
//! J·dω/dt = K·i − D·ω − C_q·ω²
//! J_d·dq/dt = C_t·(ω_R² − ω_L²)·l
//! dθ/dt = q
//! ```
//!
//! [`simulate`] runs the model from rest with the classical fourth-order
//! Runge–Kutta scheme and a fixed step, handing every state to an observer.
//! Inside a step, every derivative reads the frozen start-of-step state.
//!
//! # Example
//!
//! ```no_run
//! use std::io;
//!
//! use rotorsim_multicopter::{SimulationConfig, simulate};
//! use rotorsim_observers::TableWriter;
//!
//! let mut table = TableWriter::<_, 6>::new(io::stdout().lock());
//! let solution = simulate(&SimulationConfig::default(), &mut table)?;
//! table.into_inner()?;
//!
//! println!("roll angle after {} s: {} rad", solution.time, solution.state.drone.attitude);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod config;
mod parameters;
mod record;
mod side;
mod state;
mod twin_rotor;

pub mod dynamics;

pub use config::{ConfigError, SimulationConfig};
pub use parameters::{AirframeParameters, MotorParameters, Parameters};
pub use record::Record;
pub use side::{Pair, Side};
pub use state::{DroneState, MotorState, TwinRotorState};
pub use twin_rotor::TwinRotor;

use rotorsim_core::Observer;
use rotorsim_solvers::{
    integrators::Rk4,
    transient::fixed_step::{self, Action, Event, Solution},
};

/// Simulates the twin-rotor model described by `config`.
///
/// Both motors start at rest with their configured voltages and the airframe
/// starts level and still. The observer receives the initial state and the
/// state after every step, and may stop the run early.
///
/// # Errors
///
/// Returns an error if the config fails [`SimulationConfig::validate`]. The
/// run itself cannot fail.
pub fn simulate<Obs>(
    config: &SimulationConfig,
    observer: Obs,
) -> Result<Solution<TwinRotorState>, ConfigError>
where
    Obs: Observer<Event<TwinRotorState>, Action>,
{
    let solver = config.validate()?;
    let model = TwinRotor::new(config.parameters);
    let initial = TwinRotorState::initial(config.voltages);

    Ok(fixed_step::solve(&model, &Rk4, initial, &solver, observer))
}
