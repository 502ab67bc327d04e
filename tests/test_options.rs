//! Unit tests for connection options and URL building

use std::time::Duration;

use agent_preview::{ConnectionOptions, Endpoint, DEFAULT_PING_INTERVAL};

#[test]
fn test_connection_url_format() {
    let options = ConnectionOptions::builder()
        .base_ws_url("wss://console.example.com/ws")
        .project("proj-42")
        .token("secret")
        .endpoint(Endpoint::Preview)
        .build()
        .expect("valid options");

    assert_eq!(
        options.connection_url().expect("url"),
        "wss://console.example.com/ws/preview/proj-42/?Token=secret"
    );
}

#[test]
fn test_connection_url_trims_trailing_slash() {
    let options = ConnectionOptions::builder()
        .base_ws_url("ws://localhost:9000/")
        .project("p")
        .token("t")
        .endpoint(Endpoint::Monitoring)
        .build()
        .expect("valid options");

    assert_eq!(
        options.connection_url().expect("url"),
        "ws://localhost:9000/monitoring/p/?Token=t"
    );
}

#[test]
fn test_non_websocket_scheme_is_rejected() {
    let options = ConnectionOptions::builder()
        .base_ws_url("https://console.example.com")
        .project("p")
        .token("t")
        .endpoint(Endpoint::Preview)
        .build()
        .expect("builder accepts the url");

    assert!(options.connection_url().is_err());
}

#[test]
fn test_builder_requires_all_fields() {
    let result = ConnectionOptions::builder()
        .base_ws_url("ws://localhost")
        .project("p")
        .build();
    assert!(result.is_err(), "token and endpoint are required");
}

#[test]
fn test_ping_interval_defaults_to_thirty_seconds() {
    let options = ConnectionOptions::builder()
        .base_ws_url("ws://localhost")
        .project("p")
        .token("t")
        .endpoint(Endpoint::Preview)
        .build()
        .expect("valid options");

    assert_eq!(options.ping_interval, DEFAULT_PING_INTERVAL);
    assert_eq!(DEFAULT_PING_INTERVAL, Duration::from_secs(30));
}
