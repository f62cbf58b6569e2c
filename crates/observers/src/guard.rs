use rotorsim_core::{Finite, Observer};
use rotorsim_solvers::transient::fixed_step::Event;

use crate::traits::CanStopEarly;

/// An observer that stops a run when the state stops being finite.
///
/// A step size that is too large for an explicit scheme makes the state blow
/// up instead of failing loudly. The guard turns that into an early stop and
/// remembers where it happened.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NonFiniteGuard {
    tripped: Option<(usize, f64)>,
}

impl NonFiniteGuard {
    /// Creates a guard that has not seen a non-finite state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the step and time of the first non-finite state, if any.
    #[must_use]
    pub fn tripped(&self) -> Option<(usize, f64)> {
        self.tripped
    }

    /// Returns `true` if every observed state was finite.
    #[must_use]
    pub fn is_clear(&self) -> bool {
        self.tripped.is_none()
    }
}

impl<S, A> Observer<Event<S>, A> for NonFiniteGuard
where
    S: Finite,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &Event<S>) -> Option<A> {
        if event.state.is_finite() {
            return None;
        }
        self.tripped.get_or_insert((event.step, event.time));
        Some(A::stop_early())
    }
}

impl<S, A> Observer<Event<S>, A> for &mut NonFiniteGuard
where
    S: Finite,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &Event<S>) -> Option<A> {
        (**self).observe(event)
    }
}
