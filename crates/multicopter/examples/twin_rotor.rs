//! Twin-rotor simulation printed as a text table.
//!
//! To run this example with the nominal scenario:
//!
//! ```sh
//! cargo run --example twin_rotor
//! ```
//!
//! Pass a TOML file to override any part of the configuration:
//!
//! ```sh
//! cargo run --example twin_rotor -- my_run.toml
//! ```
//!
//! Each output row holds seven columns: time [s], right and left motor
//! current [A], right and left motor speed [rpm], roll rate [rad/s], and roll
//! angle [rad].

use std::{error::Error, io, process::ExitCode};

use rotorsim_core::Tee;
use rotorsim_multicopter::{SimulationConfig, simulate};
use rotorsim_observers::{NonFiniteGuard, TableWriter};

fn main() -> Result<ExitCode, Box<dyn Error>> {
    let config = match std::env::args().nth(1) {
        Some(path) => SimulationConfig::from_path(path)?,
        None => SimulationConfig::default(),
    };

    let mut table = TableWriter::<_, 6>::new(io::stdout().lock());
    let mut guard = NonFiniteGuard::new();

    simulate(&config, Tee::new(&mut guard, &mut table))?;

    table.into_inner()?;

    if let Some((step, time)) = guard.tripped() {
        eprintln!("State diverged at step {step} (t = {time} s); try a smaller step_size.");
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}
