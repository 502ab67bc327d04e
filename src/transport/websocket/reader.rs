//! Inbound frame reading and handler dispatch

use std::sync::atomic::Ordering;
use std::sync::Arc;

use futures::stream::{SplitStream, StreamExt};
use tokio::net::TcpStream;
use tokio::task::JoinHandle;
use tokio_tungstenite::tungstenite::Message as WsMessage;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream};

use super::transport::HandlerRegistry;

type WsSource = SplitStream<WebSocketStream<MaybeTlsStream<TcpStream>>>;

/// Spawn the background task that drains the socket and dispatches frames
///
/// The task runs until the peer closes the connection, a read error occurs,
/// or the task is aborted. On exit it flips the shared open flag so the
/// keep-alive loop can observe the dead socket.
pub(super) fn spawn_reader(
    mut source: WsSource,
    handlers: HandlerRegistry,
    open: Arc<std::sync::atomic::AtomicBool>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(result) = source.next().await {
            match result {
                Ok(WsMessage::Text(text)) => dispatch(&handlers, &text),
                Ok(WsMessage::Close(_)) => {
                    log::debug!("Server closed the WebSocket");
                    break;
                }
                // Pongs are handled by the protocol layer; binary frames are
                // not part of the console wire format
                Ok(_) => {}
                Err(e) => {
                    log::warn!("WebSocket read error: {e}");
                    break;
                }
            }
        }
        open.store(false, Ordering::SeqCst);
    })
}

/// Parse one inbound frame and invoke the handlers registered for its type
///
/// Frames that are not JSON objects or carry no `type` field are logged and
/// dropped; they never reach handlers.
fn dispatch(handlers: &HandlerRegistry, text: &str) {
    let payload: serde_json::Value = match serde_json::from_str(text) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("Dropping non-JSON frame: {e}");
            return;
        }
    };

    let Some(event_name) = payload.get("type").and_then(|t| t.as_str()) else {
        log::warn!("Dropping frame without a type discriminator");
        return;
    };

    // Clone the handler list out of the lock so handlers run unlocked
    let matched: Vec<_> = handlers
        .read()
        .get(event_name)
        .map(|list| list.to_vec())
        .unwrap_or_default();

    if matched.is_empty() {
        log::debug!("No handler registered for event {event_name:?}");
        return;
    }

    for handler in matched {
        handler(payload.clone());
    }
}
