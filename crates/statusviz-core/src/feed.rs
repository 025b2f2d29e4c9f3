//! The single owning component behind the visualizer endpoints.

use std::collections::BTreeMap;

use chrono::Utc;

use crate::event::StatusEvent;
use crate::queue::EventQueue;
use crate::registry::StatusColorRegistry;

/// In-memory feed backing the particle visualizer: the color palette plus
/// the drainable queue of recorded events.
///
/// One instance is constructed at process start and shared into the request
/// handlers; nothing here is module-level global state, so each test can
/// build a fresh feed. Every method is a complete operation. Callers
/// serialize access (the API layer holds the feed behind a single lock),
/// and no operation spans another.
#[derive(Debug, Clone, Default)]
pub struct EventFeed {
    palette: StatusColorRegistry,
    queue: EventQueue,
    last_timestamp: i64,
}

impl EventFeed {
    /// Create a feed with the default seed palette and an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a feed seeded from a configured palette.
    ///
    /// Seed colors pass through the same normalization as runtime upserts.
    #[must_use]
    pub fn with_palette(seed: &BTreeMap<u16, String>) -> Self {
        let mut palette = StatusColorRegistry::empty();
        for (code, color) in seed {
            palette.upsert(*code, color);
        }
        Self {
            palette,
            queue: EventQueue::new(),
            last_timestamp: 0,
        }
    }

    /// Record an event for `code`, stamped with the current wall clock.
    ///
    /// Returns `None` when the code has no configured color, leaving the
    /// queue untouched -- an unconfigured code is a normal outcome, not an
    /// error. Otherwise appends exactly one event and echoes it back.
    pub fn record(&mut self, code: u16) -> Option<StatusEvent> {
        self.record_at(code, Utc::now().timestamp_millis())
    }

    /// Record an event for `code` with an explicit timestamp.
    ///
    /// The stored timestamp is clamped to the previous append, so the queue
    /// never observes a decrease even if the supplied clock regresses.
    pub fn record_at(&mut self, code: u16, timestamp: i64) -> Option<StatusEvent> {
        let color = self.palette.lookup(code)?.to_owned();

        let timestamp = timestamp.max(self.last_timestamp);
        self.last_timestamp = timestamp;

        let event = StatusEvent::at(code, color, timestamp);
        self.queue.append(event.clone());
        Some(event)
    }

    /// Map `code` to `color`, overwriting any previous mapping.
    ///
    /// Returns the normalized color actually stored. Events already queued
    /// keep the color they were created with.
    pub fn set_color(&mut self, code: u16, color: &str) -> String {
        self.palette.upsert(code, color)
    }

    /// The configured color for `code`, if any.
    #[must_use]
    pub fn color_of(&self, code: u16) -> Option<&str> {
        self.palette.lookup(code)
    }

    /// An independent copy of the full palette, keyed by status code.
    #[must_use]
    pub fn palette_snapshot(&self) -> BTreeMap<u16, String> {
        self.palette.snapshot()
    }

    /// Return all queued events in insertion order and empty the queue.
    pub fn drain(&mut self) -> Vec<StatusEvent> {
        self.queue.drain_all()
    }

    /// Number of events awaiting the next poll.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_configured_code_appends_exactly_one_event() {
        let mut feed = EventFeed::new();
        let event = feed.record_at(200, 1_000);

        assert_eq!(feed.pending(), 1);
        let event = event.unwrap_or_else(|| StatusEvent::at(0, "", 0));
        assert_eq!(event.status_code, 200);
        assert_eq!(event.color, "green");
        assert_eq!(Some(event.color.as_str()), feed.color_of(200));
    }

    #[test]
    fn record_unconfigured_code_leaves_queue_untouched() {
        let mut feed = EventFeed::new();
        assert!(feed.record_at(999, 1_000).is_none());
        assert_eq!(feed.pending(), 0);
    }

    #[test]
    fn drain_returns_insertion_order_then_empties() {
        let mut feed = EventFeed::new();
        feed.record_at(200, 1);
        feed.record_at(404, 2);

        let drained = feed.drain();
        let codes: Vec<u16> = drained.iter().map(|e| e.status_code).collect();
        assert_eq!(codes, vec![200, 404]);
        assert!(feed.drain().is_empty());
    }

    #[test]
    fn poll_scenario_from_defaults() {
        // Defaults -> generate 200 -> generate 999 (no append) -> poll
        // returns the single 200 record -> poll again returns empty.
        let mut feed = EventFeed::new();

        assert!(feed.record_at(200, 10).is_some());
        assert!(feed.record_at(999, 11).is_none());
        assert_eq!(feed.pending(), 1);

        let drained = feed.drain();
        assert_eq!(drained.len(), 1);
        assert_eq!(drained.first().map(|e| e.status_code), Some(200));
        assert_eq!(drained.first().map(|e| e.color.as_str()), Some("green"));

        assert!(feed.drain().is_empty());
    }

    #[test]
    fn reconfiguring_a_code_is_not_retroactive() {
        let mut feed = EventFeed::new();
        feed.record_at(200, 1);
        feed.set_color(200, "purple");
        feed.record_at(200, 2);

        let drained = feed.drain();
        let colors: Vec<&str> = drained.iter().map(|e| e.color.as_str()).collect();
        assert_eq!(colors, vec!["green", "purple"]);
    }

    #[test]
    fn timestamps_never_decrease_across_appends() {
        let mut feed = EventFeed::new();
        feed.record_at(200, 100);
        // A regressing clock value is clamped to the previous append.
        feed.record_at(404, 50);
        feed.record_at(500, 120);

        let stamps: Vec<i64> = feed.drain().iter().map(|e| e.timestamp).collect();
        assert_eq!(stamps, vec![100, 100, 120]);
    }

    #[test]
    fn seeded_palette_is_normalized() {
        let mut seed = BTreeMap::new();
        seed.insert(201, String::from(" Teal "));
        let feed = EventFeed::with_palette(&seed);

        assert_eq!(feed.color_of(201), Some("teal"));
        assert_eq!(feed.color_of(200), None);
    }
}
