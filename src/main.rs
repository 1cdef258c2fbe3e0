//! OpenSky MCP Server Entry Point
//!
//! Initializes logging, loads configuration, and serves the flight-tracking
//! tools over STDIO.

use anyhow::Result;
use tracing::{Level, Subscriber, info};
use tracing_subscriber::{EnvFilter, fmt};

use opensky_mcp_server::core::config::LoggingConfig;
use opensky_mcp_server::core::{Config, McpServer, StdioTransport};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from environment
    let config = Config::from_env();

    // Initialize logging
    tracing::subscriber::set_global_default(build_subscriber(&config.logging))?;

    info!("Starting {} v{}", config.server.name, config.server.version);

    let server = McpServer::new(config)?;

    info!("Server initialized");

    StdioTransport::run(server).await?;

    info!("Server shutting down");

    Ok(())
}

/// Build the logging subscriber.
///
/// stdout carries the MCP protocol, so everything is written to stderr.
fn build_subscriber(logging: &LoggingConfig) -> Box<dyn Subscriber + Send + Sync> {
    let level = match logging.level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr);

    if logging.with_timestamps {
        Box::new(builder.finish())
    } else {
        Box::new(builder.without_time().finish())
    }
}
