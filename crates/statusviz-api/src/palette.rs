//! Palette configuration handlers for the visualizer API.
//!
//! Separate from the event endpoints: these mutate the status-to-color
//! registry rather than the queue. Codes configured here take effect for
//! all later event generation; events already queued keep the color they
//! were created with.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `POST` | `/api/config/add_code` | Add or update a code's color |

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use tracing::info;

use crate::error::ApiError;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /api/config/add_code`.
#[derive(Debug, serde::Deserialize)]
pub struct AddCodeRequest {
    /// Status code to configure. Any `u16` is accepted; the conventional
    /// 100-599 range is not enforced.
    pub code: u16,
    /// Color for the code -- a CSS color name or hex string, accepted as
    /// opaque text. Trimmed and lowercased before storage.
    pub color: String,
}

/// Response body for `POST /api/config/add_code`.
#[derive(Debug, serde::Serialize)]
pub struct AddCodeResponse {
    /// Human-readable confirmation.
    pub message: String,
    /// Snapshot of the full active mapping after the update.
    pub active_codes: BTreeMap<u16, String>,
}

// ---------------------------------------------------------------------------
// POST /api/config/add_code
// ---------------------------------------------------------------------------

/// Add or update the color mapping for a status code.
///
/// Always succeeds for a well-typed payload; malformed bodies are rejected
/// by the `Json` extractor with a 4xx before this handler runs. Responds
/// with a confirmation plus a snapshot of the full active mapping.
pub async fn add_code(
    State(state): State<Arc<AppState>>,
    Json(body): Json<AddCodeRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let mut feed = state.feed.write().await;
    let color = feed.set_color(body.code, &body.color);
    let active_codes = feed.palette_snapshot();
    drop(feed);

    info!(code = body.code, color = %color, "palette updated");

    let response = AddCodeResponse {
        message: format!("Status code {} mapped to color '{color}'.", body.code),
        active_codes,
    };
    Ok(Json(serde_json::to_value(&response)?))
}
