use std::path::PathBuf;

use clap::Parser;

use minihttp::config::{loader::read_config, validate_config, ConfigError, ServerConfig};
use minihttp::lifecycle::{wait_for_shutdown_signal, Shutdown};
use minihttp::net::Listener;
use minihttp::observability::{logging, metrics};
use minihttp::HttpServer;

#[derive(Parser)]
#[command(name = "minihttp")]
#[command(about = "Minimal HTTP/1.1 echo and file server", long_about = None)]
struct Cli {
    /// Directory to serve files from
    #[arg(short, long)]
    directory: Option<PathBuf>,

    /// Optional TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Bind address, overriding the configuration
    #[arg(short, long)]
    bind: Option<String>,

    /// Log level, overriding the configuration
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    fn into_config(self) -> Result<ServerConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => read_config(path)?,
            None => ServerConfig::default(),
        };

        if let Some(directory) = self.directory {
            config.storage.directory = directory;
        }
        if let Some(bind) = self.bind {
            config.listener.bind_address = bind;
        }
        if let Some(level) = self.log_level {
            config.observability.log_level = level;
        }

        validate_config(&config).map_err(ConfigError::Validation)?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Cli::parse().into_config()?;

    logging::init_logging(&config.observability.log_level);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "minihttp starting");

    tracing::info!(
        bind_address = %config.listener.bind_address,
        directory = %config.storage.directory.display(),
        read_buffer_size = config.listener.read_buffer_size,
        max_connections = config.listener.max_connections,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        // validated as a socket address
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        }
    }

    let listener = Listener::bind(&config.listener).await?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        wait_for_shutdown_signal().await;
        shutdown.trigger();

        wait_for_shutdown_signal().await;
        tracing::warn!("Second shutdown signal, exiting without draining");
        std::process::exit(130);
    });

    HttpServer::new(config).run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
