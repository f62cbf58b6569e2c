use std::{fs, io, path::Path};

use rotorsim_solvers::transient::fixed_step;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Pair, Parameters, parameters::finite};

/// Everything that defines one simulation run.
///
/// Every field has a default, so a TOML file only needs the values it
/// changes:
///
/// ```toml
/// end_time = 2.0
///
/// [voltages]
/// right = 7.6
/// left = 7.4
///
/// [parameters.airframe]
/// arm_length = 0.12
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    /// Fixed integration step, in s.
    pub step_size: f64,

    /// Time at which the run ends, in s.
    pub end_time: f64,

    /// Voltage applied to each motor for the whole run, in V.
    pub voltages: Pair<f64>,

    pub parameters: Parameters,
}

/// Errors that can occur when loading or validating a [`SimulationConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("{name} must be finite and positive")]
    NonPositive { name: &'static str },

    #[error("{name} must be finite")]
    NonFinite { name: &'static str },

    #[error("invalid solver settings: {0}")]
    Solver(#[from] fixed_step::ConfigError),
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            step_size: 1e-4,
            end_time: 0.5,
            voltages: Pair::new(7.5, 7.4),
            parameters: Parameters::default(),
        }
    }
}

impl SimulationConfig {
    /// Parses a config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the text is not valid TOML or names
    /// an unknown field.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a TOML config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Parse`] if it cannot be parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Validates the config and returns the matching solver config.
    ///
    /// # Errors
    ///
    /// Returns an error if a physical constant or voltage is unusable, or if
    /// the step size and end time do not describe a valid run.
    pub fn validate(&self) -> Result<fixed_step::Config, ConfigError> {
        self.parameters.validate()?;
        finite("voltages.right", self.voltages.right)?;
        finite("voltages.left", self.voltages.left)?;

        Ok(fixed_step::Config::new(self.step_size, self.end_time)?)
    }
}
