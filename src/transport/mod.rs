//! Transport layer for the console WebSocket
//!
//! This module provides the transport abstraction and the WebSocket
//! implementation used to talk to the console backend.

pub mod websocket;

use std::sync::Arc;

use crate::error::Result;
use crate::types::events::OutboundFrame;

/// Handler invoked with the raw payload of an inbound frame
///
/// Handlers receive the full parsed JSON value of every frame whose `type`
/// discriminator matches the event name they were registered under.
pub type EventHandler = Arc<dyn Fn(serde_json::Value) + Send + Sync>;

/// Transport trait for a single bidirectional message channel
///
/// Implementations parse inbound frames as JSON and redispatch them to
/// registered handlers keyed by the frame's `type` field.
pub trait Transport: Send + Sync {
    /// Open the channel
    ///
    /// # Errors
    /// Returns error if the connection cannot be established
    fn connect(&mut self) -> impl std::future::Future<Output = Result<()>> + Send;

    /// Serialize and transmit a structured `{type, message}` frame
    ///
    /// # Errors
    /// Returns error if the channel is not open or the write fails; callers
    /// that must not surface failures check `is_open` first.
    fn send(&mut self, frame: &OutboundFrame)
        -> impl std::future::Future<Output = Result<()>> + Send;

    /// Register a handler for inbound frames whose `type` equals `event_name`
    ///
    /// Multiple handlers per event name are supported; there is no
    /// unregistration.
    fn subscribe(&mut self, event_name: &str, handler: EventHandler);

    /// Check whether the channel is currently usable
    fn is_open(&self) -> bool;

    /// Close the channel and clean up resources
    ///
    /// # Errors
    /// Returns error if cleanup fails
    fn close(&mut self) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub use websocket::WebSocketTransport;
