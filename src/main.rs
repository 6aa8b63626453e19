//! Locale gateway
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ net (listener / TLS)
//!                       │
//!                       ▼
//!                     http (trace, request id, timeout)
//!                       │
//!                       ▼
//!                     locale middleware ── static asset / locale prefix? ──▶ ServeDir(site root)
//!                       │
//!                       ▼ no prefix
//!                     negotiate Accept-Language against registry
//!                       │
//!     ◀──────────────  307 Location: /<locale>/<path>[?query]
//! ```

use std::path::PathBuf;

use clap::Parser;

use locale_gateway::config::{load_config, validate_config, ConfigError, GatewayConfig};
use locale_gateway::lifecycle::startup;
use locale_gateway::observability::logging::init_logging;

#[derive(Parser)]
#[command(name = "locale-gateway")]
#[command(about = "Locale-negotiating front end for a static multilingual site", long_about = None)]
struct Cli {
    /// Path to a TOML config file; built-in defaults are used when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override listener.bind_address
    #[arg(short, long)]
    bind: Option<String>,

    /// Override site.root
    #[arg(long)]
    site_root: Option<String>,

    /// Override observability.log_level
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    fn into_config(self) -> Result<GatewayConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => GatewayConfig::default(),
        };

        if let Some(bind) = self.bind {
            config.listener.bind_address = bind;
        }
        if let Some(root) = self.site_root {
            config.site.root = root;
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
    let cli = Cli::parse();
    let config_path = cli.config.clone();
    let config = cli.into_config()?;

    init_logging(&config.observability.log_level);

    tracing::info!("locale-gateway v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        config = ?config_path,
        bind_address = %config.listener.bind_address,
        tls = config.listener.tls.is_some(),
        locales = ?config.locales.supported,
        default_locale = %config.locales.default,
        "Configuration loaded"
    );

    startup::run(config).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
