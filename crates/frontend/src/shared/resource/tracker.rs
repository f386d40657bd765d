//! Supersession of in-flight list fetches.
//!
//! Each fetch takes a [`FetchTicket`]. Starting a new fetch aborts the one
//! in flight, and a response arriving under an older ticket is dropped.

/// Something that can cancel an in-flight request.
pub trait AbortHandle {
    fn abort(&self);
}

impl AbortHandle for web_sys::AbortController {
    fn abort(&self) {
        web_sys::AbortController::abort(self);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

pub struct FetchTracker<H: AbortHandle> {
    generation: u64,
    in_flight: Option<H>,
}

impl<H: AbortHandle> Default for FetchTracker<H> {
    fn default() -> Self {
        Self {
            generation: 0,
            in_flight: None,
        }
    }
}

impl<H: AbortHandle> FetchTracker<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a fetch, aborting whichever one is still running.
    pub fn begin(&mut self, handle: Option<H>) -> FetchTicket {
        if let Some(previous) = self.in_flight.take() {
            previous.abort();
        }
        self.generation += 1;
        self.in_flight = handle;
        FetchTicket(self.generation)
    }

    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        ticket.0 == self.generation
    }

    /// Marks `ticket` as settled. Returns whether its result should be used.
    pub fn finish(&mut self, ticket: FetchTicket) -> bool {
        if self.is_current(ticket) {
            self.in_flight = None;
            true
        } else {
            false
        }
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct Recorder(Rc<Cell<bool>>);

    impl AbortHandle for Recorder {
        fn abort(&self) {
            self.0.set(true);
        }
    }

    #[test]
    fn new_fetch_aborts_the_previous_one() {
        let mut tracker = FetchTracker::new();
        let first = Recorder::default();
        let second = Recorder::default();

        let stale = tracker.begin(Some(first.clone()));
        let fresh = tracker.begin(Some(second.clone()));

        assert!(first.0.get());
        assert!(!second.0.get());
        assert!(!tracker.is_current(stale));
        assert!(tracker.is_current(fresh));
    }

    #[test]
    fn late_response_is_discarded() {
        let mut tracker = FetchTracker::<Recorder>::new();
        let stale = tracker.begin(None);
        let fresh = tracker.begin(None);

        assert!(tracker.finish(fresh));
        assert!(!tracker.finish(stale));
    }

    #[test]
    fn finished_fetch_is_not_aborted_later() {
        let mut tracker = FetchTracker::new();
        let handle = Recorder::default();
        let ticket = tracker.begin(Some(handle.clone()));
        assert!(tracker.is_busy());
        assert!(tracker.finish(ticket));
        assert!(!tracker.is_busy());

        tracker.begin(None);
        assert!(!handle.0.get());
    }
}
