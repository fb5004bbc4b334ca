//! TransportCo CLI Server
//!
//! Headless tracking and booking backend suitable for deployment as a
//! systemd service, Docker container, or standalone process.
//!
//! ```sh
//! # Run with default config (~/.config/transportco/config.toml)
//! transportco-service
//!
//! # Custom config path
//! transportco-service --config /etc/transportco/config.toml
//!
//! # Override the listen port
//! transportco-service --port 8080
//!
//! # Validate config without starting
//! transportco-service --check
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use transportco::config::AppConfig;
use transportco::infrastructure::redact_url;
use transportco::server::{init_tracing, ServerHandle, ServerOptions};

/// TransportCo: shipment tracking and booking backend.
#[derive(Parser, Debug)]
#[command(
    name = "transportco-service",
    version,
    about = "Shipment tracking and booking API for the TransportCo website",
    long_about = "TransportCo REST API server for shipment tracking lookups \
                  and transport booking requests.\n\n\
                  Default config: ~/.config/transportco/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "TRANSPORTCO_CONFIG")]
    config: Option<PathBuf>,

    /// Override the REST API listen port.
    #[arg(short, long)]
    port: Option<u16>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Validate the configuration file and exit without starting the server.
    #[arg(long)]
    check: bool,

    /// Skip database migrations on startup.
    #[arg(long)]
    no_migrate: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli.config.unwrap_or_else(transportco::default_config_path);

    let mut config = match AppConfig::load(&config_path) {
        Ok(mut cfg) => {
            if let Some(ref level) = cli.log_level {
                cfg.logging.level = level.clone();
            }
            // Init tracing first so subsequent logs are formatted properly
            init_tracing(&cfg);
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            // Fallback tracing init
            let level = cli.log_level.clone().unwrap_or_else(|| "info".into());
            tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::new(level))
                .init();
            error!("Failed to load config from {}: {}", config_path.display(), e);
            if cli.check {
                return Err(e.into());
            }
            error!("Using default configuration.");
            AppConfig::default()
        }
    };

    // ── Apply CLI overrides ────────────────────────────────────
    if let Some(port) = cli.port {
        info!("CLI override: port = {}", port);
        config.server.port = port;
    }
    if let Some(ref level) = cli.log_level {
        info!("CLI override: log_level = {}", level);
        config.logging.level = level.clone();
    }

    config.validate()?;

    // ── Config validation mode ─────────────────────────────────
    if cli.check {
        println!("✅ Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   API address : {}", config.listen_address());
        println!(
            "   Database    : {}",
            redact_url(&config.database.connection_url())
        );
        println!("   Log level   : {}", config.logging.level);
        println!("   Ref prefix  : {}", config.booking.reference_prefix);
        return Ok(());
    }

    // ── Start server ───────────────────────────────────────────
    let handle = ServerHandle::start(ServerOptions {
        config,
        auto_migrate: !cli.no_migrate,
    })
    .await?;

    // Install OS signal handlers (SIGTERM, SIGINT)
    handle.install_signal_handler();

    info!("🚀 Press Ctrl+C to shutdown gracefully.");

    // Wait for shutdown signal, then clean up
    handle.shutdown_signal().wait().await;
    handle.wait().await;

    Ok(())
}
