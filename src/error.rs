//! Error types for the agent preview client

use thiserror::Error;

/// Main error type for the preview client
#[derive(Error, Debug)]
pub enum PreviewError {
    /// Connection error while dialing or upgrading the WebSocket
    #[error("Connection error: {0}")]
    Connection(String),

    /// Transport layer error (channel closed, send failure)
    #[error("Transport error: {0}")]
    Transport(String),

    /// JSON decode error when parsing an inbound frame
    #[error("JSON decode error: {0}")]
    JsonDecode(#[from] serde_json::Error),

    /// Event parse error with optional raw payload
    #[error("Event parse error: {message}")]
    EventParse {
        /// Error message
        message: String,
        /// Raw payload that failed to parse
        data: Option<serde_json::Value>,
    },

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration (bad URL, empty project id, ...)
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for preview client operations
pub type Result<T> = std::result::Result<T, PreviewError>;

impl PreviewError {
    /// Create a connection error
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    /// Create a transport error
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Create an event parse error
    pub fn event_parse(msg: impl Into<String>, data: Option<serde_json::Value>) -> Self {
        Self::EventParse {
            message: msg.into(),
            data,
        }
    }

    /// Create an invalid configuration error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
