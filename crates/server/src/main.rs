use anyhow::{Context, Result};
use clap::Parser;
use rootdata_mcp::McpServer;
use rootdata_sdk::{Language, RootDataClient};
use std::path::PathBuf;
use std::sync::Arc;

mod api;
mod config;
mod port;

use config::{AppState, ServerConfig};

#[derive(Parser, Debug)]
#[command(name = "rootdata-mcp-server")]
#[command(about = "RootData API tool gateway for MCP clients", long_about = None)]
struct Args {
    /// RootData API key
    #[arg(long, env = "ROOTDATA_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Response language (en or cn)
    #[arg(long, env = "ROOTDATA_LANGUAGE", default_value = "en")]
    language: Language,

    /// Upstream API base URL
    #[arg(long, env = "ROOTDATA_BASE_URL")]
    base_url: Option<String>,

    /// Port to listen on; probed from the configured range when unset
    #[arg(short, long, env = "PORT")]
    port: Option<u16>,

    /// Host to bind to
    #[arg(long, env = "HOST")]
    host: Option<String>,

    /// Development reload mode
    #[arg(
        long,
        env = "RELOAD",
        action = clap::ArgAction::Set,
        num_args = 0..=1,
        default_value = "false",
        default_missing_value = "true",
        value_parser = parse_reload
    )]
    reload: bool,

    /// Path to configuration file
    #[arg(short, long, env = "ROOTDATA_CONFIG", default_value = "rootdata.toml")]
    config: PathBuf,
}

fn parse_reload(value: &str) -> Result<bool, String> {
    Ok(value.trim().eq_ignore_ascii_case("true"))
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rootdata=info,tower_http=debug".into()),
        )
        .with_target(false)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    // Variables already set in the environment win over `.env`
    match dotenvy::dotenv() {
        Ok(path) => tracing::info!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => return Err(e).context("Failed to load .env file"),
    }

    let args = Args::parse();

    tracing::info!("Starting RootData MCP server");

    // Load configuration
    let config = ServerConfig::load(&args.config)?;

    let mut builder = RootDataClient::builder()
        .api_key(args.api_key)
        .language(args.language)
        .timeout(config.upstream_timeout());
    if let Some(base_url) = args.base_url {
        builder = builder.base_url(base_url);
    }
    let client = builder.build().context("Failed to create RootData client")?;
    tracing::info!(
        base_url = %client.config().base_url,
        language = %client.config().language,
        "Upstream client configured"
    );

    let mcp = McpServer::with_client(Arc::new(client));
    tracing::info!("Registered {} tools", mcp.registry().len());

    let host = args.host.unwrap_or(config.server.host);
    let listener = port::bind_listener(
        &host,
        args.port,
        config.server.port_range_start,
        config.server.port_range_end,
    )
    .await?;

    if args.reload {
        tracing::info!("Reload mode enabled; restarts on change are left to an external watcher such as `cargo watch -x run`");
    }
    tracing::info!(
        "Starting server on port {} (reload mode: {})",
        listener.local_addr()?.port(),
        args.reload
    );

    api::serve(listener, AppState::new(mcp)).await?;

    Ok(())
}
