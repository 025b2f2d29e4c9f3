//! Visualizer API server for the statusviz backend.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - **Event endpoint** (`GET /api/{status_code}`) registering a colored
//!   particle event for a status code
//! - **Configuration endpoint** (`POST /api/config/add_code`) upserting
//!   the status-to-color palette
//! - **Polling endpoint** (`GET /api/events/poll`) draining accumulated
//!   events in insertion order
//! - **Static assets** (`/static`) plus a root redirect to the visualizer
//!   entry page
//!
//! # Architecture
//!
//! Handlers are stateless. All shared state is the single
//! [`EventFeed`](statusviz_core::EventFeed) held by [`AppState`] behind one
//! lock; each request takes the lock for exactly one feed operation, which
//! provides the mutual exclusion the drain and upsert semantics rely on.

pub mod error;
pub mod handlers;
pub mod palette;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use router::build_router;
pub use server::{ServerConfig, ServerError, start_server};
pub use state::AppState;
