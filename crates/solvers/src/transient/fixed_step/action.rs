/// Control actions supported by the fixed-step solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver after the current event and return the solution so far.
    StopEarly,
}
