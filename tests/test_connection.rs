//! Integration tests for `ConnectionManager`
//!
//! Exercises the connection lifecycle against an in-process WebSocket
//! server: idempotent connect, keep-alive pings, dead-socket reconnect and
//! teardown.

mod common;

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::timeout;

use agent_preview::{ConnectionManager, ConnectionOptions, Endpoint, EventSinks};

use common::{start_console_server, ConsoleServer};

fn options_for(server: &ConsoleServer, endpoint: Endpoint, ping: Duration) -> ConnectionOptions {
    ConnectionOptions::builder()
        .base_ws_url(server.base_ws_url())
        .project("proj-1")
        .token("test-token")
        .endpoint(endpoint)
        .ping_interval(ping)
        .build()
        .expect("valid options")
}

fn preview_sinks() -> (EventSinks, mpsc::UnboundedReceiver<serde_json::Value>) {
    let (trace_tx, trace_rx) = mpsc::unbounded_channel();
    (EventSinks::preview(trace_tx, None), trace_rx)
}

#[tokio::test]
async fn test_connect_is_idempotent() {
    let server = start_console_server(false).await;
    let (sinks, _trace_rx) = preview_sinks();
    let mut manager = ConnectionManager::new(
        options_for(&server, Endpoint::Preview, Duration::from_secs(30)),
        sinks,
    );

    manager.connect().await.expect("first connect");
    manager.connect().await.expect("second connect");
    tokio::time::sleep(Duration::from_millis(100)).await;

    assert_eq!(server.connection_count(), 1);
    assert!(manager.is_connected().await);

    manager.disconnect().await.expect("disconnect");
}

#[tokio::test]
async fn test_keepalive_sends_ping_frame() {
    let mut server = start_console_server(false).await;
    let (sinks, _trace_rx) = preview_sinks();
    let mut manager = ConnectionManager::new(
        options_for(&server, Endpoint::Preview, Duration::from_millis(150)),
        sinks,
    );

    manager.connect().await.expect("connect");

    let frame = timeout(Duration::from_secs(2), server.inbound_rx.recv())
        .await
        .expect("ping within two seconds")
        .expect("server running");
    assert_eq!(frame["type"], "ping");
    assert_eq!(frame["message"], serde_json::json!({}));

    manager.disconnect().await.expect("disconnect");
}

#[tokio::test]
async fn test_dead_socket_triggers_reconnect_with_listeners() {
    // Server kills the first connection right after the handshake; the
    // keep-alive loop must notice and dial a second one.
    let server = start_console_server(true).await;
    let (sinks, mut trace_rx) = preview_sinks();
    let mut manager = ConnectionManager::new(
        options_for(&server, Endpoint::Preview, Duration::from_millis(150)),
        sinks,
    );

    manager.connect().await.expect("connect");

    let deadline = tokio::time::Instant::now() + Duration::from_secs(3);
    while server.connection_count() < 2 && tokio::time::Instant::now() < deadline {
        tokio::time::sleep(Duration::from_millis(25)).await;
    }
    assert_eq!(server.connection_count(), 2, "expected one reconnect cycle");

    // Listeners were re-registered on the fresh transport: a pushed trace
    // still reaches the sink.
    tokio::time::sleep(Duration::from_millis(50)).await;
    server.push(serde_json::json!({
        "type": "trace_update",
        "trace": {"summary": "Resuming", "agentId": "agent-1"}
    }));

    let payload = timeout(Duration::from_secs(2), trace_rx.recv())
        .await
        .expect("trace after reconnect")
        .expect("sink open");
    assert_eq!(payload["trace"]["summary"], "Resuming");

    manager.disconnect().await.expect("disconnect");
}

#[tokio::test]
async fn test_no_pings_after_disconnect() {
    let mut server = start_console_server(false).await;
    let (sinks, _trace_rx) = preview_sinks();
    let ping = Duration::from_millis(120);
    let mut manager =
        ConnectionManager::new(options_for(&server, Endpoint::Preview, ping), sinks);

    manager.connect().await.expect("connect");

    // Let at least one ping through to prove the loop was running
    let frame = timeout(Duration::from_secs(2), server.inbound_rx.recv())
        .await
        .expect("ping before disconnect")
        .expect("server running");
    assert_eq!(frame["type"], "ping");

    manager.disconnect().await.expect("disconnect");
    assert!(!manager.is_connected().await);

    // Several intervals later: no further frames and no reconnect attempt
    tokio::time::sleep(ping * 4).await;
    assert!(
        server.inbound_rx.try_recv().is_err(),
        "no frames after disconnect"
    );
    assert_eq!(server.connection_count(), 1);
}

#[tokio::test]
async fn test_disconnect_without_connect_is_noop() {
    let server = start_console_server(false).await;
    let (sinks, _trace_rx) = preview_sinks();
    let mut manager = ConnectionManager::new(
        options_for(&server, Endpoint::Preview, Duration::from_secs(30)),
        sinks,
    );

    manager.disconnect().await.expect("disconnect with nothing owned");
    assert_eq!(server.connection_count(), 0);
}
