//! MCP Server Entry Point
//!
//! Initializes logging, loads configuration, and starts the server on the
//! transport selected by the environment. Exits non-zero when the transport
//! cannot be started.

use anyhow::Result;
use tracing::{Level, error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use lang_mcp_server::core::{Config, McpServer, TransportService};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from environment
    let config = Config::from_env();

    // Initialize logging
    init_logging(&config.logging.level);

    info!("Starting {} v{}", config.server.name, config.server.version);

    if config.database.has_credential() {
        info!("Database target: {}", config.database.target());
    } else {
        warn!(
            "DB_PASSWORD not set - add_coding_language and list_coding_languages \
             will report a configuration error"
        );
    }

    let outcome = run(config).await;
    if let Err(e) = &outcome {
        error!("Server error: {}", e);
    }
    info!("Server terminated");

    Ok(outcome?)
}

async fn run(config: Config) -> lang_mcp_server::Result<()> {
    config.validate()?;

    let transport = TransportService::new(config.transport.clone());
    let server = McpServer::new(config);
    info!("Server initialized");

    transport.run(server).await?;
    Ok(())
}

/// Initialize the logging subsystem.
///
/// Logs go to stderr; stdout belongs to the STDIO transport.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}
