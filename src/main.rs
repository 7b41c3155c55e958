//! reqlog demo server.
//!
//! Serves an echo endpoint and logs every request and response through the
//! leveled logger.
//!
//! ```text
//! request → x-request-id → RequestContext (logger, start, tag)
//!         → "<tag>: {headers, method, url}"   (info, lazy)
//!         → handler
//!         → "<tag>: <status> [+<ms>ms]"        (info, warn on 5xx)
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;

use reqlog::config::{load_config, validate_config, AppConfig, ConfigError};
use reqlog::http::HttpServer;
use reqlog::logging::MinimumLevel;
use reqlog::observability::{init_tracing, logging::DEFAULT_DIRECTIVES};

#[derive(Parser)]
#[command(name = "reqlog")]
#[command(about = "Echo server with leveled request logging", long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Minimum level: debug, log, info, warn, error, none, or a rank
    #[arg(short, long)]
    level: Option<String>,

    /// Bind address, overrides the configuration
    #[arg(short, long)]
    bind: Option<String>,

    /// Enable trace output
    #[arg(long)]
    trace: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing(DEFAULT_DIRECTIVES);

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };
    if let Some(level) = cli.level {
        config.logger.level = Some(match level.parse::<i64>() {
            Ok(rank) => MinimumLevel::Rank(rank),
            Err(_) => MinimumLevel::Name(level),
        });
    }
    if cli.trace {
        config.logger.trace = Some(true);
    }
    if let Some(bind) = cli.bind {
        config.server.bind_address = bind;
    }
    validate_config(&config).map_err(ConfigError::Validation)?;

    tracing::info!(
        bind_address = %config.server.bind_address,
        sink = ?config.logger.sink,
        "Configuration loaded"
    );

    let logger = Arc::new(config.logger.builder().build());

    let listener = TcpListener::bind(&config.server.bind_address).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        "Listening for connections"
    );

    let server = HttpServer::new(&config, logger);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
