//! # Agent Preview Client
//!
//! A WebSocket client for AI agent consoles: streams server-pushed trace
//! events for a project-scoped preview session, groups them into a
//! display-ready activity log, derives the currently acting agent, and keeps
//! the connection alive with a periodic ping and a reconnect-on-dead-socket
//! policy.
//!
//! ## Quick Start
//!
//! ```no_run
//! use agent_preview::{
//!     AgentProfile, ConnectionOptions, Endpoint, PreviewClient, TeamRoster,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let options = ConnectionOptions::builder()
//!         .base_ws_url("wss://console.example.com/ws")
//!         .project("proj-42")
//!         .token("secret")
//!         .endpoint(Endpoint::Preview)
//!         .build()?;
//!
//!     let roster = TeamRoster::new(
//!         AgentProfile::new("mgr-1", "Manager"),
//!         vec![AgentProfile::new("agent-1", "Researcher")],
//!     );
//!
//!     let client = PreviewClient::connect(options, roster).await?;
//!
//!     for entry in client.processed_logs() {
//!         println!("{}: {} step(s)", entry.agent_name, entry.steps.len());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`types`]: identifiers, wire events, team roster, connection options
//! - [`transport`]: `Transport` trait and the tokio-tungstenite WebSocket
//!   implementation with handler-based inbound dispatch
//! - [`listeners`]: endpoint-keyed handler registration (monitoring/preview)
//! - [`connection`]: `ConnectionManager` with keep-alive and reconnect
//! - [`trace`]: trace log accumulation, grouping, active-agent derivation
//! - [`message`]: raw payload parsing into typed trace events
//! - [`client`]: high-level `PreviewClient` / `MonitoringClient` handles
//! - [`error`]: error types and handling

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod connection;
pub mod error;
pub mod listeners;
pub mod message;
pub mod trace;
pub mod transport;
pub mod types;

// Re-export commonly used types for external API
pub use client::{MonitoringClient, PreviewClient};
pub use connection::ConnectionManager;
pub use error::{PreviewError, Result};
pub use listeners::{register_listeners, EventSinks};
pub use message::parse_trace_event;
pub use trace::{ActiveAgent, LogEntry, TraceLog};
pub use transport::{EventHandler, Transport, WebSocketTransport};
pub use types::events::{
    OutboundFrame, TraceEvent, EVENT_MESSAGE, EVENT_PREVIEW, EVENT_TRACE_UPDATE,
};
pub use types::identifiers::{AgentId, AuthToken, ProjectId};
pub use types::options::{
    ConnectionOptions, ConnectionOptionsBuilder, Endpoint, DEFAULT_PING_INTERVAL,
};
pub use types::team::{AgentProfile, TeamRoster};

/// Version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
