//! Trace accumulation and display-ready processing
//!
//! Turns the flat, time-ordered trace list into a grouped activity log and
//! derives which agent is currently acting. Processing is a recomputation
//! over the full list, not an incremental mutation: the grouping is a single
//! linear scan that starts a new group whenever the resolved acting agent
//! changes.

use serde::{Deserialize, Serialize};

use crate::types::events::TraceEvent;
use crate::types::identifiers::AgentId;
use crate::types::team::TeamRoster;

/// One group of consecutive traces attributed to the same agent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// External identifier of the attributed agent
    pub agent_id: AgentId,
    /// Display name of the attributed agent
    pub agent_name: String,
    /// Ordered step summaries
    pub steps: Vec<String>,
}

/// The agent associated with the most recent trace
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveAgent {
    /// External identifier
    pub id: AgentId,
    /// Display name
    pub name: String,
    /// Summary of the most recent trace
    pub current_task: String,
}

/// Ordered accumulator of trace events for one preview session
#[derive(Debug, Default)]
pub struct TraceLog {
    traces: Vec<TraceEvent>,
}

impl TraceLog {
    /// Create an empty trace log
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a trace event in arrival order
    pub fn record(&mut self, event: TraceEvent) {
        self.traces.push(event);
    }

    /// Reset the session (user refresh / drawer close)
    pub fn clear(&mut self) {
        self.traces.clear();
    }

    /// Number of accumulated traces
    #[must_use]
    pub fn len(&self) -> usize {
        self.traces.len()
    }

    /// Whether the log holds no traces
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.traces.is_empty()
    }

    /// The raw traces in arrival order
    #[must_use]
    pub fn traces(&self) -> &[TraceEvent] {
        &self.traces
    }

    /// Group consecutive same-agent traces into ordered log entries
    ///
    /// Each trace's agent is resolved against the roster with the manager
    /// fallback, so a trace with an unknown id is attributed to the manager
    /// rather than dropped. Non-contiguous runs of the same agent are never
    /// merged.
    #[must_use]
    pub fn processed_logs(&self, roster: &TeamRoster) -> Vec<LogEntry> {
        let mut entries: Vec<LogEntry> = Vec::new();

        for trace in &self.traces {
            let agent = roster.resolve(&trace.agent_id);

            match entries.last_mut() {
                Some(current) if current.agent_id == agent.id => {
                    current.steps.push(trace.summary.clone());
                }
                _ => {
                    entries.push(LogEntry {
                        agent_id: agent.id.clone(),
                        agent_name: agent.name.clone(),
                        steps: vec![trace.summary.clone()],
                    });
                }
            }
        }

        entries
    }

    /// The agent acting in the most recent trace, annotated with its summary
    ///
    /// Resolution uses the same manager fallback as the grouped log. An empty
    /// log yields `None`; callers treat that as a standby state, not an
    /// error.
    #[must_use]
    pub fn active_agent(&self, roster: &TeamRoster) -> Option<ActiveAgent> {
        let last = self.traces.last()?;
        let agent = roster.resolve(&last.agent_id);

        Some(ActiveAgent {
            id: agent.id.clone(),
            name: agent.name.clone(),
            current_task: last.summary.clone(),
        })
    }
}
