//! Insertion-ordered accumulation of status events.

use crate::event::StatusEvent;

/// An ordered, growable sequence of events awaiting the next poll.
///
/// Append order is preserved. A drain hands back every held record and
/// resets the queue in a single step, so no event is returned twice and
/// none is lost.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventQueue {
    events: Vec<StatusEvent>,
}

impl EventQueue {
    /// Create an empty queue.
    #[must_use]
    pub const fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Add `event` to the end of the sequence. Always succeeds.
    pub fn append(&mut self, event: StatusEvent) {
        self.events.push(event);
    }

    /// Return every held record in insertion order and empty the queue.
    ///
    /// The returned vector is a value independent of the queue; later
    /// appends do not affect it. Draining an empty queue returns an empty
    /// vector.
    pub fn drain_all(&mut self) -> Vec<StatusEvent> {
        std::mem::take(&mut self.events)
    }

    /// Number of events currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the queue holds no events.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
