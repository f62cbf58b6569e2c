/// Live and frozen copies of a simulation state.
///
/// At the start of each step the live state is frozen, and every derivative
/// evaluated during the step reads only the frozen copy while the integrator
/// writes into the live one. This makes one step a synchronous update of the
/// whole coupled system: the order in which state variables are advanced
/// within the step cannot change the result.
///
/// [`Staged::split`] hands out `(&frozen, &mut live)`, so the borrow checker
/// rejects any attempt to read an in-progress value as an auxiliary input.
#[derive(Debug, Clone, PartialEq)]
pub struct Staged<S> {
    live: S,
    frozen: S,
}

impl<S: Clone> Staged<S> {
    /// Creates a staged state whose live and frozen copies both equal `initial`.
    pub fn new(initial: S) -> Self {
        Self {
            frozen: initial.clone(),
            live: initial,
        }
    }

    /// Copies every live value into the frozen copy.
    ///
    /// Call exactly once per step, before any variable is advanced.
    pub fn freeze(&mut self) {
        self.frozen.clone_from(&self.live);
    }
}

impl<S> Staged<S> {
    /// Returns the live state.
    pub fn live(&self) -> &S {
        &self.live
    }

    /// Returns the frozen state captured by the last [`freeze`](Self::freeze).
    pub fn frozen(&self) -> &S {
        &self.frozen
    }

    /// Splits into the read-only frozen copy and the writable live copy.
    pub fn split(&mut self) -> (&S, &mut S) {
        (&self.frozen, &mut self.live)
    }

    /// Consumes the staged state and returns the live copy.
    pub fn into_live(self) -> S {
        self.live
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Pendulum {
        angle: f64,
        rate: f64,
    }

    #[test]
    fn new_starts_with_equal_copies() {
        let staged = Staged::new(Pendulum {
            angle: 0.1,
            rate: 0.0,
        });
        assert_eq!(staged.live(), staged.frozen());
    }

    #[test]
    fn writes_to_live_do_not_touch_frozen() {
        let mut staged = Staged::new(Pendulum {
            angle: 0.1,
            rate: 0.0,
        });

        let (frozen, live) = staged.split();
        live.rate = frozen.rate - frozen.angle;
        live.angle = frozen.angle + frozen.rate;

        assert_eq!(staged.frozen().rate, 0.0);
        assert_eq!(staged.live().rate, -0.1);
        // The angle update saw the frozen rate, not the just-written one.
        assert_eq!(staged.live().angle, 0.1);
    }

    #[test]
    fn freeze_copies_live_into_frozen() {
        let mut staged = Staged::new(Pendulum {
            angle: 0.0,
            rate: 0.0,
        });
        staged.split().1.angle = 2.0;
        assert_eq!(staged.frozen().angle, 0.0);

        staged.freeze();

        assert_eq!(staged.frozen().angle, 2.0);
        assert_eq!(staged.into_live().angle, 2.0);
    }
}
