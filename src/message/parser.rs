//! Parser for server-pushed payloads

use serde::Deserialize;

use crate::error::{PreviewError, Result};
use crate::types::events::TraceEvent;
use crate::types::identifiers::AgentId;

/// Nested trace object inside a `trace_update` frame
#[derive(Deserialize)]
struct RawTrace {
    summary: String,
    #[serde(rename = "agentId", alias = "agent_id")]
    agent_id: String,
}

#[derive(Deserialize)]
struct RawTraceUpdate {
    trace: RawTrace,
}

/// Parse a raw `trace_update` payload into a typed [`TraceEvent`]
///
/// The event is stamped with the current wall-clock time on success.
///
/// # Errors
/// Returns `PreviewError::EventParse` carrying the raw payload if the nested
/// trace object is missing or malformed.
pub fn parse_trace_event(payload: serde_json::Value) -> Result<TraceEvent> {
    let raw: RawTraceUpdate = serde_json::from_value(payload.clone()).map_err(|e| {
        PreviewError::event_parse(format!("Failed to parse trace update: {e}"), Some(payload))
    })?;

    Ok(TraceEvent::new(
        AgentId::new(raw.trace.agent_id),
        raw.trace.summary,
    ))
}
