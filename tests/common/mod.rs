//! In-process WebSocket console server used by the integration tests
//!
//! Accepts connections on an ephemeral port, counts them, forwards every
//! inbound JSON frame to the test, and pushes broadcast frames to all live
//! connections.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use futures::{SinkExt, StreamExt};
use tokio::net::TcpListener;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;
use tokio_tungstenite::tungstenite::Message;

pub struct ConsoleServer {
    pub addr: SocketAddr,
    pub accepted: Arc<AtomicUsize>,
    pub inbound_rx: mpsc::UnboundedReceiver<serde_json::Value>,
    pub push_tx: broadcast::Sender<String>,
    handle: JoinHandle<()>,
}

impl ConsoleServer {
    pub fn base_ws_url(&self) -> String {
        format!("ws://{}", self.addr)
    }

    pub fn connection_count(&self) -> usize {
        self.accepted.load(Ordering::SeqCst)
    }

    /// Push a JSON frame to every live connection
    pub fn push(&self, frame: serde_json::Value) {
        let _ = self.push_tx.send(frame.to_string());
    }
}

impl Drop for ConsoleServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Start the server; with `drop_first` the first accepted connection is
/// closed immediately after the handshake (dead-socket simulation)
pub async fn start_console_server(drop_first: bool) -> ConsoleServer {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind listener");
    let addr = listener.local_addr().expect("Failed to get addr");

    let accepted = Arc::new(AtomicUsize::new(0));
    let (inbound_tx, inbound_rx) = mpsc::unbounded_channel();
    let (push_tx, _) = broadcast::channel(64);

    let accepted_task = Arc::clone(&accepted);
    let push_task = push_tx.clone();
    let handle = tokio::spawn(async move {
        loop {
            let Ok((stream, _)) = listener.accept().await else {
                break;
            };
            let connection_number = accepted_task.fetch_add(1, Ordering::SeqCst) + 1;

            let ws = match tokio_tungstenite::accept_async(stream).await {
                Ok(ws) => ws,
                Err(_) => continue,
            };

            if drop_first && connection_number == 1 {
                drop(ws);
                continue;
            }

            let inbound = inbound_tx.clone();
            let mut push_rx = push_task.subscribe();
            tokio::spawn(async move {
                let (mut sink, mut source) = ws.split();
                loop {
                    tokio::select! {
                        frame = source.next() => match frame {
                            Some(Ok(Message::Text(text))) => {
                                if let Ok(value) = serde_json::from_str(&text) {
                                    let _ = inbound.send(value);
                                }
                            }
                            Some(Ok(Message::Close(_))) | None => break,
                            Some(Ok(_)) => {}
                            Some(Err(_)) => break,
                        },
                        pushed = push_rx.recv() => {
                            if let Ok(text) = pushed {
                                if sink.send(Message::Text(text)).await.is_err() {
                                    break;
                                }
                            }
                        }
                    }
                }
            });
        }
    });

    ConsoleServer {
        addr,
        accepted,
        inbound_rx,
        push_tx,
        handle,
    }
}
