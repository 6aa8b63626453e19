//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Build the locale registry and static asset matcher from config
//! - Create Axum Router serving the site directory
//! - Wire up middleware (tracing, request ID, timeout, locale routing)
//! - Serve plain HTTP or HTTPS with graceful shutdown

use axum::{middleware, Router};
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{services::ServeDir, timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::{GatewayConfig, TlsConfig};
use crate::http::middleware::locale_middleware;
use crate::http::request::{propagate_request_id_layer, set_request_id_layer};
use crate::locale::{LocaleRegistry, LocaleResolver, RegistryError};
use crate::net::tls::{load_tls_config, TlsError};
use crate::routing::StaticAssetMatcher;

/// How long in-flight TLS connections get to finish after shutdown.
const TLS_DRAIN_SECS: u64 = 10;

/// Errors raised while building or running the server.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid locale configuration: {0}")]
    Registry(#[from] RegistryError),

    #[error("TLS setup failed: {0}")]
    Tls(#[from] TlsError),

    #[error("server IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// HTTP server for the locale gateway.
pub struct HttpServer {
    router: Router,
    config: GatewayConfig,
    resolver: Arc<LocaleResolver>,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    ///
    /// Fails if the locale registry cannot be built; the gateway never runs
    /// without a default locale.
    pub fn new(config: GatewayConfig) -> Result<Self, ServerError> {
        let registry = LocaleRegistry::from_config(&config.locales)?;
        let static_assets = StaticAssetMatcher::from_config(&config.static_assets);
        let resolver = Arc::new(LocaleResolver::new(registry, static_assets));

        let router = Self::build_router(&config, resolver.clone());
        Ok(Self {
            router,
            config,
            resolver,
        })
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &GatewayConfig, resolver: Arc<LocaleResolver>) -> Router {
        let site = ServeDir::new(&config.site.root).append_index_html_on_directories(true);

        Router::new()
            .fallback_service(site)
            .layer(middleware::from_fn_with_state(resolver, locale_middleware))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(propagate_request_id_layer())
            .layer(set_request_id_layer())
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), ServerError> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            locales = ?self.locale_codes(),
            default_locale = %self.resolver.registry().default_locale(),
            site_root = %self.config.site.root,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Run the server over TLS on `addr`.
    pub async fn run_tls(
        self,
        addr: SocketAddr,
        tls: &TlsConfig,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), ServerError> {
        let rustls = load_tls_config(Path::new(&tls.cert_path), Path::new(&tls.key_path)).await?;

        let handle = axum_server::Handle::new();
        let drain = handle.clone();
        tokio::spawn(async move {
            let _ = shutdown.recv().await;
            tracing::info!("Shutdown signal received");
            drain.graceful_shutdown(Some(Duration::from_secs(TLS_DRAIN_SECS)));
        });

        tracing::info!(
            address = %addr,
            locales = ?self.locale_codes(),
            site_root = %self.config.site.root,
            "HTTPS server starting"
        );

        axum_server::bind_rustls(addr, rustls)
            .handle(handle)
            .serve(self.router.into_make_service())
            .await?;

        tracing::info!("HTTPS server stopped");
        Ok(())
    }

    /// The assembled router, for driving requests without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    fn locale_codes(&self) -> Vec<&str> {
        self.resolver
            .registry()
            .locales()
            .iter()
            .map(|l| l.code())
            .collect()
    }
}
