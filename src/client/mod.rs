//! High-level session clients
//!
//! [`PreviewClient`] wires a connection manager, the preview sinks and a
//! trace log into one handle for driving a live preview pane.
//! [`MonitoringClient`] is the supervision counterpart exposing the raw
//! conversation message stream.

mod monitoring;
mod preview;

pub use monitoring::MonitoringClient;
pub use preview::PreviewClient;
