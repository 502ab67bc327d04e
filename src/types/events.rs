//! Wire-level event types
//!
//! This module contains the inbound and outbound frame shapes used on the
//! console WebSocket. Inbound frames are JSON objects carrying at minimum a
//! `type` field, which is the discriminator the transport routes on. Outbound
//! frames are `{type, message}` objects.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::identifiers::AgentId;

// ============================================================================
// Event names (inbound `type` discriminators)
// ============================================================================

/// Generic conversation message event (monitoring endpoint)
pub const EVENT_MESSAGE: &str = "message";

/// Trace update event (preview endpoint)
pub const EVENT_TRACE_UPDATE: &str = "trace_update";

/// Preview status event (preview endpoint)
pub const EVENT_PREVIEW: &str = "preview";

// ============================================================================
// Outbound frames
// ============================================================================

/// Outbound `{type, message}` frame
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutboundFrame {
    /// Frame discriminator
    #[serde(rename = "type")]
    pub frame_type: String,
    /// Frame payload
    pub message: serde_json::Value,
}

impl OutboundFrame {
    /// Create an outbound frame with the given type and payload
    pub fn new(frame_type: impl Into<String>, message: serde_json::Value) -> Self {
        Self {
            frame_type: frame_type.into(),
            message,
        }
    }

    /// Create the keep-alive ping frame: `{"type":"ping","message":{}}`
    #[must_use]
    pub fn ping() -> Self {
        Self::new("ping", serde_json::json!({}))
    }
}

// ============================================================================
// Trace events
// ============================================================================

/// A single trace step pushed by the server during a preview session
///
/// Immutable once received; appended to the session's trace log in arrival
/// order and cleared when the preview session resets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceEvent {
    /// Identifier of the agent that emitted this step
    pub agent_id: AgentId,
    /// Human-readable description of the current step
    pub summary: String,
    /// Wall-clock time the event was received by this client
    pub received_at: DateTime<Utc>,
}

impl TraceEvent {
    /// Create a trace event stamped with the current time
    pub fn new(agent_id: impl Into<AgentId>, summary: impl Into<String>) -> Self {
        Self {
            agent_id: agent_id.into(),
            summary: summary.into(),
            received_at: Utc::now(),
        }
    }
}
