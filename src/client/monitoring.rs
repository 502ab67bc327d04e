//! `MonitoringClient` implementation

use tokio::sync::mpsc;

use crate::connection::ConnectionManager;
use crate::error::{PreviewError, Result};
use crate::listeners::EventSinks;
use crate::types::options::{ConnectionOptions, Endpoint};

/// High-level handle for a conversation supervision session
///
/// Exposes the raw message stream of the monitoring endpoint; payloads are
/// forwarded unchanged.
pub struct MonitoringClient {
    manager: ConnectionManager,
    message_rx: mpsc::UnboundedReceiver<serde_json::Value>,
}

impl MonitoringClient {
    /// Connect a monitoring session for the given options
    ///
    /// # Errors
    /// Returns `InvalidConfig` if the options do not target the monitoring
    /// endpoint, or a connection error if the dial fails.
    pub async fn connect(options: ConnectionOptions) -> Result<Self> {
        if options.endpoint != Endpoint::Monitoring {
            return Err(PreviewError::invalid_config(
                "MonitoringClient requires the monitoring endpoint",
            ));
        }

        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let mut manager = ConnectionManager::new(options, EventSinks::monitoring(message_tx));
        manager.connect().await?;

        Ok(Self {
            manager,
            message_rx,
        })
    }

    /// Get the next conversation message
    ///
    /// Returns `None` when the session has been torn down.
    pub async fn next_message(&mut self) -> Option<serde_json::Value> {
        self.message_rx.recv().await
    }

    /// Close the session and clean up resources
    ///
    /// # Errors
    /// Returns error if the transport cannot be closed cleanly
    pub async fn close(&mut self) -> Result<()> {
        self.manager.disconnect().await
    }
}
