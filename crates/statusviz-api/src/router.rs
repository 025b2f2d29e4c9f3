//! Axum router construction for the visualizer API.
//!
//! Assembles all routes into a single [`Router`] with CORS middleware
//! enabled and the front-end assets mounted under `/static`.

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::palette;
use crate::state::AppState;

/// Build the complete Axum router for the visualizer server.
///
/// The router includes:
/// - `GET /` -- redirect to the static visualizer entry page
/// - `GET /api/events/poll` -- drain accumulated events
/// - `POST /api/config/add_code` -- add or update a code's color
/// - `GET /api/{status_code}` -- record an event for a status code
/// - `/static` -- the visualizer front-end assets from `static_dir`
///
/// CORS is configured to allow any origin so the page can be served from
/// elsewhere during development. In production this should be restricted.
pub fn build_router(state: Arc<AppState>, static_dir: impl AsRef<Path>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Visualizer entry
        .route("/", get(handlers::index))
        // REST API
        .route("/api/events/poll", get(handlers::poll_events))
        .route("/api/config/add_code", post(palette::add_code))
        .route("/api/{status_code}", get(handlers::generate_event))
        // Front-end assets
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
