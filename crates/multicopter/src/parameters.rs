//! Physical constants of the motors and the airframe.
//!
//! Parameters are plain immutable data. A [`TwinRotor`](crate::TwinRotor)
//! captures them at construction, so runs with different parameters can
//! coexist in one process.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Electrical and mechanical constants shared by both motors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MotorParameters {
    /// Winding inductance `L`, in H.
    pub inductance: f64,

    /// Winding resistance `R`, in Ω.
    pub resistance: f64,

    /// Torque and back-EMF constant `K`, in N·m/A.
    pub torque_constant: f64,

    /// Rotor and propeller moment of inertia `J`, in kg·m².
    pub inertia: f64,

    /// Propeller drag torque coefficient `C_q`, in N·m·s².
    pub drag_coefficient: f64,

    /// Viscous damping `D`, in N·m·s.
    pub damping: f64,
}

impl Default for MotorParameters {
    fn default() -> Self {
        Self {
            inductance: 3.7e-4,
            resistance: 1.2e-1,
            torque_constant: 3.3e-3,
            inertia: 8.1e-6,
            drag_coefficient: 3.0e-8,
            damping: 0.0,
        }
    }
}

/// Constants of the airframe rolling about the differential-thrust axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AirframeParameters {
    /// Propeller thrust coefficient `C_t`, in N·s².
    pub thrust_coefficient: f64,

    /// Distance from the roll axis to each rotor, in m.
    pub arm_length: f64,

    /// Moment of inertia about the roll axis, in kg·m².
    pub inertia: f64,

    /// Total mass, in kg.
    ///
    /// Not used by the roll dynamics. Carried so a future vertical or gravity
    /// term has a home.
    pub mass: f64,
}

impl Default for AirframeParameters {
    fn default() -> Self {
        Self {
            thrust_coefficient: 3.5e-6,
            arm_length: 0.09,
            inertia: 6.0e-3,
            mass: 0.35,
        }
    }
}

/// All physical constants of the twin-rotor model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Parameters {
    pub motor: MotorParameters,
    pub airframe: AirframeParameters,
}

impl Parameters {
    /// Checks that every constant is finite and that the constants the
    /// dynamics divide by are positive.
    ///
    /// # Errors
    ///
    /// Returns the name of the first offending constant.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let MotorParameters {
            inductance,
            resistance,
            torque_constant,
            inertia,
            drag_coefficient,
            damping,
        } = self.motor;
        let AirframeParameters {
            thrust_coefficient,
            arm_length,
            inertia: airframe_inertia,
            mass,
        } = self.airframe;

        positive("motor.inductance", inductance)?;
        positive("motor.inertia", inertia)?;
        positive("airframe.inertia", airframe_inertia)?;

        finite("motor.resistance", resistance)?;
        finite("motor.torque_constant", torque_constant)?;
        finite("motor.drag_coefficient", drag_coefficient)?;
        finite("motor.damping", damping)?;
        finite("airframe.thrust_coefficient", thrust_coefficient)?;
        finite("airframe.arm_length", arm_length)?;
        finite("airframe.mass", mass)
    }
}

pub(crate) fn positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { name })
    }
}

pub(crate) fn finite(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite { name })
    }
}
