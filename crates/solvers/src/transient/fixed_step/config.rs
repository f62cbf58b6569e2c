use thiserror::Error;

/// Largest number of steps a single run may take.
const MAX_STEPS: f64 = u32::MAX as f64;

/// Distance from an integer, in units of rounding error, below which
/// `end_time / step_size` is treated as that integer.
const STEP_COUNT_ULPS: f64 = 4.0;

/// Configuration for the fixed-step solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    step_size: f64,
    end_time: f64,
    keep_history: bool,
}

/// Errors that can occur when validating a fixed-step solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("step_size must be finite and positive")]
    StepSize,

    #[error("end_time must be finite and non-negative")]
    EndTime,

    #[error("end_time / step_size exceeds the maximum step count")]
    TooManySteps,
}

impl Config {
    /// Creates a new config with a validated step size and end time.
    ///
    /// # Errors
    ///
    /// Returns an error if the step size is not finite and positive, if the
    /// end time is not finite and non-negative, or if the run would take more
    /// than `u32::MAX` steps.
    pub fn new(step_size: f64, end_time: f64) -> Result<Self, ConfigError> {
        if !step_size.is_finite() || step_size <= 0.0 {
            return Err(ConfigError::StepSize);
        }
        if !end_time.is_finite() || end_time < 0.0 {
            return Err(ConfigError::EndTime);
        }
        if end_time / step_size > MAX_STEPS {
            return Err(ConfigError::TooManySteps);
        }

        Ok(Self {
            step_size,
            end_time,
            keep_history: true,
        })
    }

    /// Disables recording of the per-step history in the [`Solution`].
    ///
    /// Observers still receive every event.
    ///
    /// [`Solution`]: super::Solution
    #[must_use]
    pub fn discard_history(mut self) -> Self {
        self.keep_history = false;
        self
    }

    /// Returns the fixed step size.
    #[must_use]
    pub fn step_size(&self) -> f64 {
        self.step_size
    }

    /// Returns the end time.
    #[must_use]
    pub fn end_time(&self) -> f64 {
        self.end_time
    }

    /// Returns whether the solution records every step.
    #[must_use]
    pub fn keeps_history(&self) -> bool {
        self.keep_history
    }

    /// Returns the number of steps needed to reach the end time.
    ///
    /// This is `ceil(end_time / step_size)`, except that a quotient within a
    /// few ulps of an integer counts as that integer. A run from 0 to 0.5 with
    /// a step of 1e-4 therefore takes exactly 5000 steps, and a run from 0 to
    /// 0.3 with a step of 0.1 takes 3.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn steps(&self) -> usize {
        let ratio = self.end_time / self.step_size;
        let nearest = ratio.round();

        let tolerance = STEP_COUNT_ULPS * f64::EPSILON * nearest.max(1.0);
        let steps = if (ratio - nearest).abs() <= tolerance {
            nearest
        } else {
            ratio.ceil()
        };

        steps as usize
    }

    /// Returns the simulation time after `step` steps.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn time_at(&self, step: usize) -> f64 {
        step as f64 * self.step_size
    }
}
