//! Startup orchestration.
//!
//! # Responsibilities
//! - Start the metrics exporter when enabled
//! - Build the server (fails fast on an unusable locale registry)
//! - Bind the listener last, then serve until shutdown
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - A broken metrics endpoint is logged, not fatal

use thiserror::Error;

use crate::config::GatewayConfig;
use crate::http::{HttpServer, ServerError};
use crate::lifecycle::Shutdown;
use crate::net::{self, ListenerError};
use crate::observability::metrics;

/// Error aborting startup.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Server(#[from] ServerError),

    #[error(transparent)]
    Listener(#[from] ListenerError),
}

/// Start every subsystem in order and serve until a shutdown signal.
pub async fn run(config: GatewayConfig) -> Result<(), StartupError> {
    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => {
                if let Err(e) = metrics::init_metrics(addr) {
                    tracing::error!(error = %e, "Failed to start metrics exporter");
                }
            }
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let server = HttpServer::new(config.clone())?;

    let shutdown = Shutdown::new();
    shutdown.trigger_on_signal();

    match &config.listener.tls {
        Some(tls) => {
            let addr = net::bind_address(&config.listener)?;
            server.run_tls(addr, tls, shutdown.subscribe()).await?;
        }
        None => {
            let listener = net::bind(&config.listener).await?;
            server.run(listener, shutdown.subscribe()).await?;
        }
    }

    Ok(())
}
