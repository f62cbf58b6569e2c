/// Watches a simulation run, one event at a time.
///
/// The solver hands every event to its observer and inspects the reply:
/// `None` means carry on, `Some(action)` asks for a solver-defined action such
/// as stopping early. Writing output and guarding against divergence are both
/// observers.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer, and `()` is the
/// observer that never acts. [`Tee`] runs two observers on the same events.
pub trait Observer<E, A> {
    /// Looks at one event and optionally requests an action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

/// Two observers fed the same events in order.
///
/// Both observers see every event, so a table writer placed second still
/// records the row on which the first one stopped the run. When both request
/// an action, the first one's wins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tee<First, Second> {
    pub first: First,
    pub second: Second,
}

impl<First, Second> Tee<First, Second> {
    #[must_use]
    pub fn new(first: First, second: Second) -> Self {
        Self { first, second }
    }

    pub fn into_inner(self) -> (First, Second) {
        (self.first, self.second)
    }
}

impl<E, A, First, Second> Observer<E, A> for Tee<First, Second>
where
    First: Observer<E, A>,
    Second: Observer<E, A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        let first = self.first.observe(event);
        let second = self.second.observe(event);
        first.or(second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed<O>(observer: &mut O, events: &[u32]) -> Vec<&'static str>
    where
        O: Observer<u32, &'static str>,
    {
        events.iter().filter_map(|e| observer.observe(e)).collect()
    }

    #[test]
    fn unit_never_acts() {
        assert!(feed(&mut (), &[1, 2, 3]).is_empty());
    }

    #[test]
    fn closures_keep_their_state() {
        let mut seen = 0;
        let mut observer = |event: &u32| {
            seen += event;
            (seen > 4).then_some("enough")
        };

        assert_eq!(feed(&mut observer, &[1, 2, 3]), vec!["enough"]);
        assert_eq!(seen, 6);
    }

    #[test]
    fn tee_feeds_both_and_prefers_the_first() {
        let mut first_seen = Vec::new();
        let mut second_seen = Vec::new();

        let mut tee = Tee::new(
            |event: &u32| {
                first_seen.push(*event);
                (*event == 2).then_some("first")
            },
            |event: &u32| {
                second_seen.push(*event);
                (*event >= 2).then_some("second")
            },
        );

        assert_eq!(feed(&mut tee, &[1, 2, 3]), vec!["first", "second"]);

        assert_eq!(first_seen, [1, 2, 3]);
        assert_eq!(second_seen, [1, 2, 3]);
    }
}
