//! Team roster types
//!
//! The roster is a read-only lookup sourced from the separately loaded
//! "active team" resource: one manager (coordinator) plus zero or more team
//! agents. The trace pipeline never mutates it.

use serde::{Deserialize, Serialize};

use super::identifiers::AgentId;

/// A participant in the simulated conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentProfile {
    /// External identifier
    pub id: AgentId,
    /// Display name
    pub name: String,
}

impl AgentProfile {
    /// Create a new agent profile
    pub fn new(id: impl Into<AgentId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// The active team: a manager plus its agents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRoster {
    /// The coordinating manager agent
    pub manager: AgentProfile,
    /// Team agents
    pub agents: Vec<AgentProfile>,
}

impl TeamRoster {
    /// Create a roster from a manager and its agents
    #[must_use]
    pub fn new(manager: AgentProfile, agents: Vec<AgentProfile>) -> Self {
        Self { manager, agents }
    }

    /// Resolve an agent id against the roster, falling back to the manager
    ///
    /// Unknown ids resolve to the manager. This is the explicit attribution
    /// policy for the whole pipeline: a trace is never dropped for carrying
    /// an id the roster does not know.
    #[must_use]
    pub fn resolve(&self, id: &AgentId) -> &AgentProfile {
        if self.manager.id == *id {
            return &self.manager;
        }
        self.agents
            .iter()
            .find(|agent| agent.id == *id)
            .unwrap_or(&self.manager)
    }

    /// Whether the id names the manager or a known team agent
    #[must_use]
    pub fn contains(&self, id: &AgentId) -> bool {
        self.manager.id == *id || self.agents.iter().any(|agent| agent.id == *id)
    }
}
