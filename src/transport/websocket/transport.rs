//! WebSocket transport over tokio-tungstenite

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use futures::stream::{SplitSink, StreamExt};
use futures::SinkExt;
use parking_lot::RwLock;
use tokio::net::TcpStream;
use tokio::task::JoinHandle;
use tokio_tungstenite::tungstenite::Message as WsMessage;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};

use crate::error::{PreviewError, Result};
use crate::transport::{EventHandler, Transport};
use crate::types::events::OutboundFrame;

pub(super) type WsSink = SplitSink<WebSocketStream<MaybeTlsStream<TcpStream>>, WsMessage>;

/// Handler registry shared with the background reader task
pub(super) type HandlerRegistry = Arc<RwLock<HashMap<String, Vec<EventHandler>>>>;

/// WebSocket transport for the console backend
///
/// One transport wraps one socket. Inbound text frames are parsed as JSON by
/// a background reader task and redispatched to registered handlers by the
/// frame's `type` field.
pub struct WebSocketTransport {
    pub(super) url: String,
    pub(super) writer: Option<WsSink>,
    pub(super) handlers: HandlerRegistry,
    pub(super) open: Arc<AtomicBool>,
    pub(super) reader_task: Option<JoinHandle<()>>,
}

impl WebSocketTransport {
    /// Create a new transport for the given connection URL
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            writer: None,
            handlers: Arc::new(RwLock::new(HashMap::new())),
            open: Arc::new(AtomicBool::new(false)),
            reader_task: None,
        }
    }
}

impl Transport for WebSocketTransport {
    async fn connect(&mut self) -> Result<()> {
        if self.writer.is_some() {
            return Ok(());
        }

        let (stream, _response) = connect_async(self.url.as_str())
            .await
            .map_err(|e| PreviewError::connection(format!("WebSocket dial failed: {e}")))?;

        let (sink, source) = stream.split();

        self.open.store(true, Ordering::SeqCst);
        self.writer = Some(sink);
        self.reader_task = Some(super::reader::spawn_reader(
            source,
            Arc::clone(&self.handlers),
            Arc::clone(&self.open),
        ));

        log::debug!("WebSocket transport connected");
        Ok(())
    }

    async fn send(&mut self, frame: &OutboundFrame) -> Result<()> {
        if !self.is_open() {
            return Err(PreviewError::transport(
                "Transport is not open for sending",
            ));
        }

        let writer = self
            .writer
            .as_mut()
            .ok_or_else(|| PreviewError::transport("writer not available"))?;

        let json = serde_json::to_string(frame)?;
        writer
            .send(WsMessage::Text(json))
            .await
            .map_err(|e| PreviewError::transport(format!("Failed to send frame: {e}")))?;

        Ok(())
    }

    fn subscribe(&mut self, event_name: &str, handler: EventHandler) {
        self.handlers
            .write()
            .entry(event_name.to_string())
            .or_default()
            .push(handler);
    }

    fn is_open(&self) -> bool {
        self.open.load(Ordering::SeqCst) && self.writer.is_some()
    }

    async fn close(&mut self) -> Result<()> {
        self.open.store(false, Ordering::SeqCst);

        if let Some(task) = self.reader_task.take() {
            task.abort();
        }

        if let Some(mut writer) = self.writer.take() {
            // Best-effort close handshake; the peer may already be gone
            let _ = writer.send(WsMessage::Close(None)).await;
            let _ = writer.close().await;
        }

        Ok(())
    }
}

impl Drop for WebSocketTransport {
    fn drop(&mut self) {
        self.open.store(false, Ordering::SeqCst);
        if let Some(task) = self.reader_task.take() {
            task.abort();
        }
    }
}
