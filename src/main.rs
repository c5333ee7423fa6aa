//! Documentation MCP Server Entry Point
//!
//! Initializes logging, loads configuration, registers the documentation
//! catalogue and starts the server with the configured transport.

use anyhow::{Context, Result};
use tracing::{Level, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use docs_mcp_server::core::{Config, McpServer, TransportService, config::LoggingConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from environment; warnings wait for the subscriber
    let (config, warnings) = Config::load_env();

    init_logging(&config.logging);

    for warning in &warnings {
        warn!("{}", warning);
    }

    info!("Starting {} v{}", config.server.name, config.server.version);

    if let Some(categories) = &config.resources.enabled_categories {
        info!("Documentation categories restricted to: {}", categories.join(", "));
    }

    // Registration happens here, before any transport accepts a request
    let server = McpServer::new(config.clone()).context("failed to build documentation catalogue")?;

    info!(
        "Server initialized with {} documents",
        server.resources().registry().len()
    );

    let transport = TransportService::new(config.transport);
    transport.run(server).await?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Logs always go to stderr: with the STDIO transport, stdout carries
/// protocol messages.
fn init_logging(logging: &LoggingConfig) {
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
        builder.init();
    } else {
        builder.without_time().init();
    }
}
