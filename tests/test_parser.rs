//! Unit tests for trace payload parsing

use agent_preview::{parse_trace_event, AgentId, PreviewError};
use serde_json::json;

#[test]
fn test_parse_trace_update() {
    let payload = json!({
        "type": "trace_update",
        "trace": {"summary": "Searching the knowledge base", "agentId": "agent-a"}
    });

    let event = parse_trace_event(payload).expect("valid trace update");
    assert_eq!(event.agent_id, AgentId::new("agent-a"));
    assert_eq!(event.summary, "Searching the knowledge base");
}

#[test]
fn test_parse_accepts_snake_case_agent_id() {
    let payload = json!({
        "type": "trace_update",
        "trace": {"summary": "Calling an action", "agent_id": "agent-b"}
    });

    let event = parse_trace_event(payload).expect("valid trace update");
    assert_eq!(event.agent_id, AgentId::new("agent-b"));
}

#[test]
fn test_parse_rejects_missing_trace() {
    let payload = json!({"type": "trace_update"});
    let err = parse_trace_event(payload.clone()).expect_err("missing trace object");

    match err {
        PreviewError::EventParse { data, .. } => {
            assert_eq!(data, Some(payload), "raw payload is preserved");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_parse_rejects_malformed_trace() {
    let payload = json!({
        "type": "trace_update",
        "trace": {"summary": 42, "agentId": "agent-a"}
    });
    assert!(parse_trace_event(payload).is_err());
}
