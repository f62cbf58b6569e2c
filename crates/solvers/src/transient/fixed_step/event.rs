/// Event emitted by the fixed-step solver for each state.
///
/// Step 0 is the initial state before any integration.
/// Steps 1..N are emitted after each integration step.
#[derive(Debug, Clone)]
pub struct Event<S> {
    /// The step number (0 for initial, 1..N for integration steps).
    pub step: usize,

    /// Simulation time of `state`.
    pub time: f64,

    /// The state at `time`.
    pub state: S,
}
