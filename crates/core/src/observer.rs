/// Receives solver events as the solution is computed.
///
/// Observers let callers watch a solve step by step without changing what the
/// solver returns. Typical uses are logging intermediate values, collecting
/// data for a plot, or checking a property of every step in a test.
///
/// The `observe` method returns `Option<A>`, where `Some(action)` requests a
/// solver-specific action and `None` lets the solver continue unchanged. A
/// solver that only permits observation uses an uninhabited action type, so
/// `None` is the only value an observer can return.
///
/// Closures automatically implement `Observer`, and a built-in impl for `()`
/// provides a no-op observer that always returns `None`.
pub trait Observer<E, A> {
    /// Observes a solver event and optionally returns a control action.
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

#[cfg(test)]
mod tests {
    use super::*;

    fn feed<O: Observer<u32, ()>>(mut observer: O, events: &[u32]) -> usize {
        events
            .iter()
            .filter(|event| observer.observe(event).is_some())
            .count()
    }

    #[test]
    fn closure_observer_sees_every_event() {
        let mut seen = Vec::new();
        let hits = feed(
            |event: &u32| {
                seen.push(*event);
                (*event % 2 == 0).then_some(())
            },
            &[1, 2, 3, 4],
        );

        assert_eq!(seen, vec![1, 2, 3, 4]);
        assert_eq!(hits, 2);
    }

    #[test]
    fn unit_observer_never_acts() {
        assert_eq!(feed((), &[1, 2, 3]), 0);
    }
}
