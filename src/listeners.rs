//! Endpoint-keyed listener registration
//!
//! Given an endpoint tag, this module registers the correct set of named
//! handlers onto a transport and forwards payloads into caller-provided
//! sinks. The indirection keeps both the transport and the connection
//! manager endpoint-agnostic: all endpoint-specific routing lives here.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::transport::Transport;
use crate::types::events::{EVENT_MESSAGE, EVENT_PREVIEW, EVENT_TRACE_UPDATE};
use crate::types::options::Endpoint;

/// Consumer-side channels the dispatched payloads are forwarded into
///
/// Sinks are optional; an endpoint only wires the sinks it uses. Dropped
/// receivers are tolerated: forwarding into a closed sink is a no-op.
#[derive(Clone, Default)]
pub struct EventSinks {
    /// Monitoring: every conversation message, unchanged
    pub messages: Option<mpsc::UnboundedSender<serde_json::Value>>,
    /// Preview: every trace update payload, unchanged
    pub traces: Option<mpsc::UnboundedSender<serde_json::Value>>,
    /// Preview: status payloads whose own `type` field is `"preview"`
    pub status: Option<mpsc::UnboundedSender<serde_json::Value>>,
}

impl EventSinks {
    /// Sinks for a monitoring session
    #[must_use]
    pub fn monitoring(messages: mpsc::UnboundedSender<serde_json::Value>) -> Self {
        Self {
            messages: Some(messages),
            ..Self::default()
        }
    }

    /// Sinks for a preview session
    #[must_use]
    pub fn preview(
        traces: mpsc::UnboundedSender<serde_json::Value>,
        status: Option<mpsc::UnboundedSender<serde_json::Value>>,
    ) -> Self {
        Self {
            messages: None,
            traces: Some(traces),
            status,
        }
    }
}

/// Register the handler set for `endpoint` onto `transport`
pub fn register_listeners<T: Transport>(transport: &mut T, endpoint: Endpoint, sinks: &EventSinks) {
    match endpoint {
        Endpoint::Monitoring => {
            if let Some(tx) = sinks.messages.clone() {
                transport.subscribe(
                    EVENT_MESSAGE,
                    Arc::new(move |payload| {
                        let _ = tx.send(payload);
                    }),
                );
            }
        }
        Endpoint::Preview => {
            if let Some(tx) = sinks.traces.clone() {
                transport.subscribe(
                    EVENT_TRACE_UPDATE,
                    Arc::new(move |payload| {
                        let _ = tx.send(payload);
                    }),
                );
            }
            if let Some(tx) = sinks.status.clone() {
                transport.subscribe(
                    EVENT_PREVIEW,
                    Arc::new(move |payload| {
                        // Secondary filter layered on the coarse event-name
                        // routing: only true preview status payloads pass
                        let is_preview = payload
                            .get("type")
                            .and_then(|t| t.as_str())
                            .is_some_and(|t| t == EVENT_PREVIEW);
                        if is_preview {
                            let _ = tx.send(payload);
                        }
                    }),
                );
            }
        }
    }
}
