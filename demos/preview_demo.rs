//! Live preview demo
//!
//! Spins up a tiny in-process console server that pushes a scripted trace
//! stream, connects a `PreviewClient` to it, and prints the grouped
//! activity log the way the dashboard's preview pane would render it.
//!
//! Run with:
//! ```bash
//! cargo run --example preview_demo
//! ```

use std::time::Duration;

use futures::SinkExt;
use serde_json::json;
use tokio::net::TcpListener;
use tokio_tungstenite::tungstenite::Message;

use agent_preview::{AgentProfile, ConnectionOptions, Endpoint, PreviewClient, TeamRoster};

async fn start_scripted_server() -> std::net::SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind demo server");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        let Ok((stream, _)) = listener.accept().await else {
            return;
        };
        let mut ws = tokio_tungstenite::accept_async(stream)
            .await
            .expect("handshake");

        let script = [
            ("mgr-1", "Routing the request to the research agent"),
            ("agent-research", "Searching the knowledge base"),
            ("agent-research", "Summarizing three matching articles"),
            ("agent-writer", "Drafting the reply"),
            ("ghost-7", "Post-processing"),
        ];

        for (agent_id, summary) in script {
            let frame = json!({
                "type": "trace_update",
                "trace": {"summary": summary, "agentId": agent_id}
            });
            if ws.send(Message::Text(frame.to_string())).await.is_err() {
                return;
            }
            tokio::time::sleep(Duration::from_millis(150)).await;
        }
    });

    addr
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let addr = start_scripted_server().await;

    let options = ConnectionOptions::builder()
        .base_ws_url(format!("ws://{addr}"))
        .project("demo-project")
        .token("demo-token")
        .endpoint(Endpoint::Preview)
        .build()?;

    let roster = TeamRoster::new(
        AgentProfile::new("mgr-1", "Manager"),
        vec![
            AgentProfile::new("agent-research", "Research Agent"),
            AgentProfile::new("agent-writer", "Writer Agent"),
        ],
    );

    let mut client = PreviewClient::connect(options, roster).await?;
    println!("Preview session {} connected\n", client.session_id());

    // Let the scripted stream finish
    tokio::time::sleep(Duration::from_secs(1)).await;

    println!("Activity log:");
    for entry in client.processed_logs() {
        println!("  {} ({})", entry.agent_name, entry.agent_id);
        for step in &entry.steps {
            println!("    - {step}");
        }
    }

    if let Some(active) = client.active_agent() {
        println!("\nActive: {} -> {}", active.name, active.current_task);
    }

    client.close().await?;
    Ok(())
}
