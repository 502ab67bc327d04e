// Console preview tail
//
// Connects to a project's preview or monitoring endpoint and prints the
// live activity stream to stdout. Intended for debugging agent flows
// without opening the dashboard.

use std::time::Duration;

use agent_preview::{
    AgentProfile, ConnectionOptions, Endpoint, MonitoringClient, PreviewClient, PreviewError,
    Result, TeamRoster,
};

const TOKEN_ENV: &str = "AGENT_CONSOLE_TOKEN";

struct CliArgs {
    base_ws_url: String,
    project: String,
    endpoint: Endpoint,
    team_file: Option<String>,
}

fn usage() -> ! {
    eprintln!(
        "Usage: agent-preview <base_ws_url> <project> [--monitoring] [--team <roster.json>]\n\
         \n\
         The auth token is read from the {TOKEN_ENV} environment variable."
    );
    std::process::exit(2);
}

fn parse_args() -> CliArgs {
    let mut positional = Vec::new();
    let mut endpoint = Endpoint::Preview;
    let mut team_file = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--monitoring" => endpoint = Endpoint::Monitoring,
            "--team" => team_file = args.next(),
            "--help" | "-h" => usage(),
            _ => positional.push(arg),
        }
    }

    if positional.len() != 2 {
        usage();
    }

    let mut positional = positional.into_iter();
    CliArgs {
        base_ws_url: positional.next().unwrap_or_default(),
        project: positional.next().unwrap_or_default(),
        endpoint,
        team_file,
    }
}

fn load_roster(team_file: Option<&str>) -> Result<TeamRoster> {
    match team_file {
        Some(path) => {
            let contents = std::fs::read_to_string(path)?;
            Ok(serde_json::from_str(&contents)?)
        }
        // Without a team file every trace is attributed to the manager
        None => Ok(TeamRoster::new(
            AgentProfile::new("manager", "Manager"),
            Vec::new(),
        )),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = parse_args();
    let token = std::env::var(TOKEN_ENV)
        .map_err(|_| PreviewError::invalid_config(format!("{TOKEN_ENV} is not set")))?;

    let options = ConnectionOptions::builder()
        .base_ws_url(args.base_ws_url)
        .project(args.project.as_str())
        .token(token)
        .endpoint(args.endpoint)
        .build()?;

    match args.endpoint {
        Endpoint::Preview => tail_preview(options, load_roster(args.team_file.as_deref())?).await,
        Endpoint::Monitoring => tail_monitoring(options).await,
    }
}

async fn tail_preview(options: ConnectionOptions, roster: TeamRoster) -> Result<()> {
    let mut client = PreviewClient::connect(options, roster).await?;
    println!("Preview session {} connected", client.session_id());

    let mut printed = 0usize;
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            _ = tokio::time::sleep(Duration::from_secs(1)) => {}
        }

        let count = client.trace_count();
        if count == printed {
            continue;
        }
        printed = count;

        println!("---");
        for entry in client.processed_logs() {
            println!("{} ({})", entry.agent_name, entry.agent_id);
            for step in &entry.steps {
                println!("  - {step}");
            }
        }
        if let Some(active) = client.active_agent() {
            println!("active: {} -> {}", active.name, active.current_task);
        }
    }

    client.close().await
}

async fn tail_monitoring(options: ConnectionOptions) -> Result<()> {
    let mut client = MonitoringClient::connect(options).await?;
    println!("Monitoring session connected");

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            message = client.next_message() => {
                match message {
                    Some(payload) => println!("{payload}"),
                    None => break,
                }
            }
        }
    }

    client.close().await
}
