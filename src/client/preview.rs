//! `PreviewClient` implementation

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::connection::ConnectionManager;
use crate::error::{PreviewError, Result};
use crate::listeners::EventSinks;
use crate::message::parse_trace_event;
use crate::trace::{ActiveAgent, LogEntry, TraceLog};
use crate::types::options::{ConnectionOptions, Endpoint};
use crate::types::team::TeamRoster;

/// High-level handle for one live preview session
///
/// Owns the connection, accumulates incoming traces into a [`TraceLog`], and
/// exposes the display-ready derivations against the session's team roster.
pub struct PreviewClient {
    session_id: Uuid,
    manager: ConnectionManager,
    roster: TeamRoster,
    log: Arc<Mutex<TraceLog>>,
    status_rx: Option<mpsc::UnboundedReceiver<serde_json::Value>>,
    drain_task: Option<JoinHandle<()>>,
}

impl PreviewClient {
    /// Connect a preview session for the given options and roster
    ///
    /// # Errors
    /// Returns `InvalidConfig` if the options do not target the preview
    /// endpoint, or a connection error if the dial fails.
    pub async fn connect(options: ConnectionOptions, roster: TeamRoster) -> Result<Self> {
        if options.endpoint != Endpoint::Preview {
            return Err(PreviewError::invalid_config(
                "PreviewClient requires the preview endpoint",
            ));
        }

        let (trace_tx, mut trace_rx) = mpsc::unbounded_channel();
        let (status_tx, status_rx) = mpsc::unbounded_channel();

        let mut manager =
            ConnectionManager::new(options, EventSinks::preview(trace_tx, Some(status_tx)));
        manager.connect().await?;

        let log = Arc::new(Mutex::new(TraceLog::new()));

        // Drain raw trace payloads into the shared log. Malformed payloads
        // are logged and skipped; the session keeps running.
        let drain_log = Arc::clone(&log);
        let drain_task = tokio::spawn(async move {
            while let Some(payload) = trace_rx.recv().await {
                match parse_trace_event(payload) {
                    Ok(event) => drain_log.lock().record(event),
                    Err(e) => log::warn!("Ignoring malformed trace update: {e}"),
                }
            }
        });

        Ok(Self {
            session_id: Uuid::new_v4(),
            manager,
            roster,
            log,
            status_rx: Some(status_rx),
            drain_task: Some(drain_task),
        })
    }

    /// Unique identifier of this preview session
    #[must_use]
    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// The team roster this session resolves agents against
    #[must_use]
    pub fn roster(&self) -> &TeamRoster {
        &self.roster
    }

    /// Grouped activity log for display
    #[must_use]
    pub fn processed_logs(&self) -> Vec<LogEntry> {
        self.log.lock().processed_logs(&self.roster)
    }

    /// The currently acting agent, or `None` while the session is on standby
    #[must_use]
    pub fn active_agent(&self) -> Option<ActiveAgent> {
        self.log.lock().active_agent(&self.roster)
    }

    /// Number of traces received so far
    #[must_use]
    pub fn trace_count(&self) -> usize {
        self.log.lock().len()
    }

    /// Reset the session's trace log (the UI "refresh" action)
    pub fn refresh(&self) {
        self.log.lock().clear();
    }

    /// Take the preview status receiver
    ///
    /// This allows the caller to consume status updates independently.
    pub fn take_status_receiver(
        &mut self,
    ) -> Option<mpsc::UnboundedReceiver<serde_json::Value>> {
        self.status_rx.take()
    }

    /// Close the session and clean up resources
    ///
    /// # Errors
    /// Returns error if the transport cannot be closed cleanly
    pub async fn close(&mut self) -> Result<()> {
        if let Some(task) = self.drain_task.take() {
            task.abort();
        }
        self.manager.disconnect().await
    }
}

impl Drop for PreviewClient {
    fn drop(&mut self) {
        if let Some(task) = self.drain_task.take() {
            task.abort();
        }
    }
}
