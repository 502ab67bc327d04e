//! WebSocket transport implementation (tokio-tungstenite)

mod reader;
mod transport;

pub use transport::WebSocketTransport;
