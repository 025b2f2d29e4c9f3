//! The immutable event record delivered to the visualizer.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// A single simulated status-code occurrence.
///
/// The color is resolved from the registry when the event is created and
/// never changes afterwards; reconfiguring a code does not rewrite events
/// already queued. Events leave the queue only through a drain, never
/// individually.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEvent {
    /// The HTTP-like status code that triggered the event.
    pub status_code: u16,
    /// Color resolved from the registry at creation time.
    pub color: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
}

impl StatusEvent {
    /// Create an event stamped with the current wall-clock time.
    #[must_use]
    pub fn now(status_code: u16, color: impl Into<String>) -> Self {
        Self::at(status_code, color, Utc::now().timestamp_millis())
    }

    /// Create an event with an explicit timestamp.
    #[must_use]
    pub fn at(status_code: u16, color: impl Into<String>, timestamp: i64) -> Self {
        Self {
            status_code,
            color: color.into(),
            timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_wire_field_names() {
        let event = StatusEvent::at(200, "green", 1_700_000_000_000);
        let json = serde_json::to_value(&event).ok();
        assert_eq!(
            json,
            Some(serde_json::json!({
                "status_code": 200,
                "color": "green",
                "timestamp": 1_700_000_000_000_i64,
            }))
        );
    }

    #[test]
    fn now_stamps_a_positive_epoch_time() {
        let event = StatusEvent::now(404, "red");
        assert!(event.timestamp > 0);
        assert_eq!(event.status_code, 404);
        assert_eq!(event.color, "red");
    }
}
