//! Core type definitions
//!
//! Identifiers, wire-level events, team roster types and connection options.

pub mod events;
pub mod identifiers;
pub mod options;
pub mod team;

pub use events::{OutboundFrame, TraceEvent, EVENT_MESSAGE, EVENT_PREVIEW, EVENT_TRACE_UPDATE};
pub use identifiers::{AgentId, AuthToken, ProjectId};
pub use options::{ConnectionOptions, ConnectionOptionsBuilder, Endpoint, DEFAULT_PING_INTERVAL};
pub use team::{AgentProfile, TeamRoster};
