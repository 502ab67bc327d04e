//! Connection lifecycle management
//!
//! The `ConnectionManager` owns at most one WebSocket transport for a
//! `{project, token, endpoint}` triple, runs the periodic keep-alive ping,
//! and repairs dead sockets by re-running the full connect procedure. Closed
//! sockets are detected by polling at ping time, so detection latency is
//! bounded by the ping interval.

use std::sync::Arc;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::error::Result;
use crate::listeners::{register_listeners, EventSinks};
use crate::transport::{Transport, WebSocketTransport};
use crate::types::events::OutboundFrame;
use crate::types::options::ConnectionOptions;

type TransportSlot = Arc<Mutex<Option<WebSocketTransport>>>;

/// Owns the lifecycle of exactly one transport per session
pub struct ConnectionManager {
    options: ConnectionOptions,
    sinks: EventSinks,
    transport: TransportSlot,
    keepalive_task: Option<JoinHandle<()>>,
}

impl ConnectionManager {
    /// Create a manager for the given options and consumer sinks
    ///
    /// No connection is made until [`connect`](Self::connect) is called.
    #[must_use]
    pub fn new(options: ConnectionOptions, sinks: EventSinks) -> Self {
        Self {
            options,
            sinks,
            transport: Arc::new(Mutex::new(None)),
            keepalive_task: None,
        }
    }

    /// Open the connection and start the keep-alive loop
    ///
    /// Idempotent: if a transport is already owned this is a no-op, so
    /// repeated calls never produce more than one live transport.
    ///
    /// # Errors
    /// Returns error if the URL is invalid or the initial dial fails.
    pub async fn connect(&mut self) -> Result<()> {
        {
            let guard = self.transport.lock().await;
            if guard.is_some() {
                log::debug!("connect() called while already connected; ignoring");
                return Ok(());
            }
        }

        open_transport(&self.transport, &self.options, &self.sinks).await?;
        self.spawn_keepalive();
        Ok(())
    }

    /// Stop the keep-alive loop and close the owned transport
    ///
    /// Safe no-op when nothing is owned. No pings fire after this returns.
    ///
    /// # Errors
    /// Returns error if closing the transport fails
    pub async fn disconnect(&mut self) -> Result<()> {
        if let Some(task) = self.keepalive_task.take() {
            task.abort();
        }

        if let Some(mut transport) = self.transport.lock().await.take() {
            transport.close().await?;
        }

        Ok(())
    }

    /// Whether a transport is currently owned and open
    pub async fn is_connected(&self) -> bool {
        self.transport
            .lock()
            .await
            .as_ref()
            .is_some_and(Transport::is_open)
    }

    /// Spawn the keep-alive task if it is not already running
    fn spawn_keepalive(&mut self) {
        if self.keepalive_task.is_some() {
            return;
        }

        let slot = Arc::clone(&self.transport);
        let options = self.options.clone();
        let sinks = self.sinks.clone();
        let interval = self.options.ping_interval;

        self.keepalive_task = Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // interval yields immediately on the first tick; the first ping
            // belongs one full interval after connect
            ticker.tick().await;

            loop {
                ticker.tick().await;

                let mut guard = slot.lock().await;
                let alive = guard.as_ref().is_some_and(Transport::is_open);

                if alive {
                    if let Some(transport) = guard.as_mut() {
                        if let Err(e) = transport.send(&OutboundFrame::ping()).await {
                            log::warn!("Keep-alive ping failed: {e}");
                        }
                    }
                    continue;
                }

                // Dead socket: close the stale handle, then dial again once.
                // A failed reconnect leaves the slot empty and the next ping
                // cycle tries again.
                if let Some(mut stale) = guard.take() {
                    let _ = stale.close().await;
                }
                drop(guard);

                log::info!("Dead socket detected at ping time; reconnecting");
                if let Err(e) = open_transport(&slot, &options, &sinks).await {
                    log::warn!("Reconnect failed: {e}");
                }
            }
        }));
    }
}

impl Drop for ConnectionManager {
    fn drop(&mut self) {
        if let Some(task) = self.keepalive_task.take() {
            task.abort();
        }
    }
}

/// Build the URL, construct a transport, register the endpoint listeners,
/// dial, and store the handle in the slot
///
/// Shared between the initial connect and the keep-alive reconnect path so
/// listeners are always re-registered on a fresh transport.
async fn open_transport(
    slot: &TransportSlot,
    options: &ConnectionOptions,
    sinks: &EventSinks,
) -> Result<()> {
    let url = options.connection_url()?;
    let mut transport = WebSocketTransport::new(url);

    // Subscribe before dialing so no frame can arrive unrouted
    register_listeners(&mut transport, options.endpoint, sinks);
    transport.connect().await?;

    *slot.lock().await = Some(transport);
    log::info!(
        "Connected to {endpoint} endpoint for project {project}",
        endpoint = options.endpoint,
        project = options.project
    );
    Ok(())
}
