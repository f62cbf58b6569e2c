//! Capability traits for observers.
//!
//! These traits abstract over state and action types, so observers in this
//! crate work with any model driven by the fixed-step solver.
//!
//! # State traits
//!
//! - [`Tabular`] — states that flatten into a fixed number of named columns
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use rotorsim_core::Observer;
//! use rotorsim_observers::traits::CanStopEarly;
//! use rotorsim_solvers::transient::fixed_step::Event;
//!
//! struct StopAfter {
//!     time: f64,
//! }
//!
//! impl<S, A: CanStopEarly> Observer<Event<S>, A> for StopAfter {
//!     fn observe(&mut self, event: &Event<S>) -> Option<A> {
//!         (event.time >= self.time).then(A::stop_early)
//!     }
//! }
//! ```

use rotorsim_solvers::transient::fixed_step;

/// A state that can be written as a row of `N` numeric columns.
///
/// Time is not part of the row; observers prepend it from the event.
pub trait Tabular<const N: usize> {
    /// Column names, in row order, including units.
    const HEADERS: [&'static str; N];

    /// Returns the column values of this state.
    fn row(&self) -> [f64; N];
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl CanStopEarly for fixed_step::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
