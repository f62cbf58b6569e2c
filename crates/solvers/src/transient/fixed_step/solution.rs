/// Indicates how the solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Reached the configured end time.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// A state recorded at a point in time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample<S> {
    pub time: f64,
    pub state: S,
}

/// The result of a fixed-step run.
#[derive(Debug, Clone)]
pub struct Solution<S> {
    /// How the solver terminated.
    pub status: Status,

    /// Number of integration steps completed.
    pub steps: usize,

    /// Simulation time of the final state.
    pub time: f64,

    /// The final state.
    pub state: S,

    /// States from each step, including the initial state.
    ///
    /// Empty if the run was configured with [`Config::discard_history`].
    ///
    /// [`Config::discard_history`]: super::Config::discard_history
    pub history: Vec<Sample<S>>,
}
