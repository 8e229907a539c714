use anyhow::{Context, Result};
use rootdata_mcp::McpServer;
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub upstream: UpstreamConfig,

    #[serde(default)]
    pub server: ListenConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UpstreamConfig {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ListenConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port_range_start")]
    pub port_range_start: u16,

    #[serde(default = "default_port_range_end")]
    pub port_range_end: u16,
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port_range_start() -> u16 {
    8000
}

fn default_port_range_end() -> u16 {
    9000
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for ListenConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port_range_start: default_port_range_start(),
            port_range_end: default_port_range_end(),
        }
    }
}

impl ServerConfig {
    pub fn load(config_path: &Path) -> Result<Self> {
        // Load config file if it exists, otherwise use defaults
        let config: Self = if config_path.exists() {
            let content = std::fs::read_to_string(config_path)
                .context("Failed to read configuration file")?;
            toml::from_str(&content).context("Failed to parse configuration file")?
        } else {
            tracing::info!("Configuration file not found, using defaults");
            Self::default()
        };

        if config.server.port_range_start >= config.server.port_range_end {
            anyhow::bail!(
                "Invalid port range {}-{}",
                config.server.port_range_start,
                config.server.port_range_end
            );
        }

        Ok(config)
    }

    /// Get the upstream request timeout
    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream.timeout_secs)
    }
}

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub mcp: Arc<McpServer>,
}

impl AppState {
    pub fn new(mcp: McpServer) -> Self {
        Self { mcp: Arc::new(mcp) }
    }
}
