//! Standalone MCP server binary for Shelton, the HR leave assistant.
//!
//! Spawned by an MCP client (Claude Desktop, an IDE agent, ...) and spoken
//! to over **stdio** (JSON-RPC 2.0, one message per line). Diagnostics go
//! to stderr.
//!
//! Environment variables:
//! - `SHELTON_CONFIG` -- path to a JSON config file (server identity, logging, roster)
//! - `RUST_LOG`       -- log filter, overrides the configured one

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use shelton_lib::config;
use shelton_lib::mcp::server::{run_server, McpServerState};
use shelton_lib::services::logger;

#[tokio::main]
async fn main() -> Result<()> {
    let (config, config_path) = config::load().context("Failed to load configuration")?;
    logger::init(&config.logging)?;
    match &config_path {
        Some(path) => info!(path = %path.display(), "Loaded config"),
        None => info!("No config file found, using defaults"),
    }

    let registry = config::build_registry(&config).context("Invalid employee roster")?;
    info!(employees = %registry.employee_names().join(", "), "Registry seeded");

    let state = McpServerState::new(config.server, Arc::new(registry));
    run_server(state).await.context("MCP server I/O error")?;
    Ok(())
}
