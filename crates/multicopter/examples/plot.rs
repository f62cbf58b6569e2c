//! Interactive plot of a twin-rotor run.
//!
//! # Usage
//!
//! ```text
//! cargo run --example plot --features plot
//! cargo run --example plot --features plot -- my_run.toml
//! ```

use std::error::Error;

use rotorsim_multicopter::{SimulationConfig, TwinRotorState, simulate};
use rotorsim_observers::{PlotObserver, ShowConfig};

fn main() -> Result<(), Box<dyn Error>> {
    let config = match std::env::args().nth(1) {
        Some(path) => SimulationConfig::from_path(path)?,
        None => SimulationConfig::default(),
    };

    let mut obs = PlotObserver::<6>::for_state::<TwinRotorState>();
    let solution = simulate(&config, &mut obs)?;

    obs.show(
        ShowConfig::new()
            .title(format!(
                "Twin rotor: {} V / {} V, {} steps",
                config.voltages.right, config.voltages.left, solution.steps
            ))
            .legend(),
    )?;

    Ok(())
}
