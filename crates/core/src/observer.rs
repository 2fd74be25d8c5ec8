/// Receives oracle events and decides whether the run should continue.
///
/// Observers let callers watch trials as they pass (to log counterexample
/// candidates, collect statistics, or cap a long run) without changing the
/// oracle's API.
///
/// `observe` returns `Option<A>`: `Some(action)` requests an oracle-specific
/// action, `None` lets the run continue unchanged.
///
/// Closures implement `Observer` automatically, and `()` is a no-op observer
/// that always returns `None`.
pub trait Observer<E, A> {
    /// Observes an event and optionally returns a control action.
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
