//! Connection options and configuration
//!
//! This module contains the configuration for one console WebSocket session,
//! including a builder pattern for easy configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::identifiers::{AuthToken, ProjectId};
use crate::error::{PreviewError, Result};

/// Default keep-alive ping interval (30 seconds)
pub const DEFAULT_PING_INTERVAL: Duration = Duration::from_secs(30);

// ============================================================================
// Endpoint
// ============================================================================

/// Endpoint path segment selecting which event set the server pushes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Endpoint {
    /// Conversation supervision stream
    Monitoring,
    /// Live preview / trace stream
    Preview,
}

impl Endpoint {
    /// Path segment used in the connection URL
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Monitoring => "monitoring",
            Self::Preview => "preview",
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Connection Options
// ============================================================================

/// Options for one `{project, token, endpoint}` connection
#[derive(Debug, Clone)]
pub struct ConnectionOptions {
    /// Base WebSocket URL of the console backend (`ws://...` or `wss://...`)
    pub base_ws_url: String,
    /// Project the session is scoped to
    pub project: ProjectId,
    /// Auth token embedded as a query parameter
    pub token: AuthToken,
    /// Endpoint selecting the event set
    pub endpoint: Endpoint,
    /// Keep-alive ping interval
    pub ping_interval: Duration,
}

impl ConnectionOptions {
    /// Create a new builder for `ConnectionOptions`
    #[must_use]
    pub fn builder() -> ConnectionOptionsBuilder {
        ConnectionOptionsBuilder::default()
    }

    /// Build the connection URL: `{base}/{endpoint}/{project}/?Token={token}`
    ///
    /// # Errors
    /// Returns `InvalidConfig` if the base URL is empty or not a WebSocket
    /// scheme, or if the project id is empty.
    pub fn connection_url(&self) -> Result<String> {
        let base = self.base_ws_url.trim_end_matches('/');
        if base.is_empty() {
            return Err(PreviewError::invalid_config("base WebSocket URL is empty"));
        }
        if !base.starts_with("ws://") && !base.starts_with("wss://") {
            return Err(PreviewError::invalid_config(format!(
                "base URL must use ws:// or wss:// scheme: {base}"
            )));
        }
        if self.project.as_str().is_empty() {
            return Err(PreviewError::invalid_config("project id is empty"));
        }

        Ok(format!(
            "{base}/{endpoint}/{project}/?Token={token}",
            endpoint = self.endpoint,
            project = self.project,
            token = self.token.as_str(),
        ))
    }
}

// ============================================================================
// Builder for ConnectionOptions
// ============================================================================

/// Builder for `ConnectionOptions`
#[derive(Debug, Default)]
pub struct ConnectionOptionsBuilder {
    base_ws_url: Option<String>,
    project: Option<ProjectId>,
    token: Option<AuthToken>,
    endpoint: Option<Endpoint>,
    ping_interval: Option<Duration>,
}

impl ConnectionOptionsBuilder {
    /// Set the base WebSocket URL
    #[must_use]
    pub fn base_ws_url(mut self, url: impl Into<String>) -> Self {
        self.base_ws_url = Some(url.into());
        self
    }

    /// Set the project id
    #[must_use]
    pub fn project(mut self, project: impl Into<ProjectId>) -> Self {
        self.project = Some(project.into());
        self
    }

    /// Set the auth token
    #[must_use]
    pub fn token(mut self, token: impl Into<AuthToken>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the endpoint
    #[must_use]
    pub fn endpoint(mut self, endpoint: Endpoint) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Override the keep-alive ping interval (default 30 s)
    #[must_use]
    pub fn ping_interval(mut self, interval: Duration) -> Self {
        self.ping_interval = Some(interval);
        self
    }

    /// Build the options
    ///
    /// # Errors
    /// Returns `InvalidConfig` if a required field is missing.
    pub fn build(self) -> Result<ConnectionOptions> {
        Ok(ConnectionOptions {
            base_ws_url: self
                .base_ws_url
                .ok_or_else(|| PreviewError::invalid_config("base_ws_url is required"))?,
            project: self
                .project
                .ok_or_else(|| PreviewError::invalid_config("project is required"))?,
            token: self
                .token
                .ok_or_else(|| PreviewError::invalid_config("token is required"))?,
            endpoint: self
                .endpoint
                .ok_or_else(|| PreviewError::invalid_config("endpoint is required"))?,
            ping_interval: self.ping_interval.unwrap_or(DEFAULT_PING_INTERVAL),
        })
    }
}
