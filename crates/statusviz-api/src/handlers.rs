//! REST endpoint handlers for the visualizer API.
//!
//! All handlers go through the shared [`EventFeed`](statusviz_core::EventFeed)
//! owned by [`AppState`]; no handler keeps state of its own.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | Redirect to the static visualizer entry page |
//! | `GET` | `/api/{status_code}` | Record an event for a status code |
//! | `GET` | `/api/events/poll` | Drain and return accumulated events |
//!
//! Palette configuration (`POST /api/config/add_code`) lives in
//! [`crate::palette`].

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Redirect};
use statusviz_core::StatusEvent;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::AppState;

/// Path of the static visualizer entry page the root redirects to.
const ENTRY_PAGE: &str = "/static/index.html";

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Response body for `GET /api/{status_code}`.
///
/// `status_code` and `color` are present only when an event was actually
/// recorded; an unconfigured code carries the message alone.
#[derive(Debug, serde::Serialize)]
pub struct GenerateResponse {
    /// Human-readable outcome description.
    pub message: String,
    /// The recorded code, when an event was appended.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    /// The resolved color, when an event was appended.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Response body for `GET /api/events/poll`.
#[derive(Debug, serde::Serialize)]
pub struct PollResponse {
    /// Drained events in insertion order.
    pub events: Vec<StatusEvent>,
}

// ---------------------------------------------------------------------------
// GET / -- redirect to the visualizer
// ---------------------------------------------------------------------------

/// Redirect the root path to the static visualizer entry page.
#[allow(clippy::unused_async)]
pub async fn index() -> Redirect {
    Redirect::temporary(ENTRY_PAGE)
}

// ---------------------------------------------------------------------------
// GET /api/{status_code} -- record an event
// ---------------------------------------------------------------------------

/// Record a particle event for `status_code`.
///
/// Looks up the code in the palette. A configured code appends exactly one
/// event (color resolved now, wall-clock timestamp) and echoes code and
/// color back. An unconfigured code appends nothing and reports how to
/// configure it -- a normal outcome, not an error. Any `u16` is accepted;
/// path values that do not parse as one are rejected by the extractor
/// before this handler runs.
pub async fn generate_event(
    State(state): State<Arc<AppState>>,
    Path(status_code): Path<u16>,
) -> Result<impl IntoResponse, ApiError> {
    let recorded = state.feed.write().await.record(status_code);

    let Some(event) = recorded else {
        let body = GenerateResponse {
            message: format!(
                "Status code {status_code} is not configured for visualization. \
                 Add it via POST /api/config/add_code."
            ),
            status_code: None,
            color: None,
        };
        return Ok(Json(serde_json::to_value(&body)?));
    };

    info!(status_code, color = %event.color, "event recorded");

    let body = GenerateResponse {
        message: String::from("Event recorded"),
        status_code: Some(event.status_code),
        color: Some(event.color),
    };
    Ok(Json(serde_json::to_value(&body)?))
}

// ---------------------------------------------------------------------------
// GET /api/events/poll -- destructive read
// ---------------------------------------------------------------------------

/// Return all accumulated events in insertion order and empty the queue.
///
/// Polling twice without an intervening event yields an empty list the
/// second time. The drain is destructive; concurrent pollers never receive
/// the same batch twice.
pub async fn poll_events(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let events = state.feed.write().await.drain();

    debug!(count = events.len(), "events drained");

    let body = PollResponse { events };
    Ok(Json(serde_json::to_value(&body)?))
}
