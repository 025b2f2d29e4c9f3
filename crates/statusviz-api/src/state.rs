//! Shared application state for the visualizer API server.

use std::sync::Arc;

use statusviz_core::EventFeed;
use tokio::sync::RwLock;

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`] and injected via Axum's `State` extractor. The feed
/// is the one process-wide owner of the palette and the event queue; the
/// lock around it is the critical section its mutations require. Every
/// handler performs exactly one feed operation under one guard, so
/// concurrent appends, upserts, and drains cannot lose or duplicate
/// records.
#[derive(Clone)]
pub struct AppState {
    /// The event feed shared by all request handlers.
    pub feed: Arc<RwLock<EventFeed>>,
}

impl AppState {
    /// Create state around a feed with the default seed palette.
    #[must_use]
    pub fn new() -> Self {
        Self::with_feed(EventFeed::new())
    }

    /// Create state around an already-seeded feed.
    #[must_use]
    pub fn with_feed(feed: EventFeed) -> Self {
        Self {
            feed: Arc::new(RwLock::new(feed)),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
