//! Shared utilities for integration testing.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::path::Path;

use locale_gateway::config::GatewayConfig;
use locale_gateway::http::HttpServer;
use locale_gateway::lifecycle::Shutdown;
use tempfile::TempDir;

/// Write a small two-locale site: `/<locale>/index.html`, `/<locale>/blog/index.html`,
/// plus a favicon and an image under `/images/`.
pub fn write_site() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();

    for locale in ["en", "es"] {
        write(root, &format!("{locale}/index.html"), &format!("home-{locale}"));
        write(root, &format!("{locale}/blog/index.html"), &format!("blog-{locale}"));
    }
    write(root, "favicon.ico", "icon");
    write(root, "images/grading", "grading-chart");

    dir
}

fn write(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, contents).unwrap();
}

/// Config for a gateway on an ephemeral local port serving `site`.
pub fn test_config(site: &Path) -> GatewayConfig {
    let mut config = GatewayConfig::default();
    config.listener.bind_address = "127.0.0.1:0".to_string();
    config.site.root = site.to_string_lossy().into_owned();
    config.observability.metrics_enabled = false;
    config
}

/// Start the gateway in the background. Trigger the returned handle to stop it.
pub async fn start_gateway(config: GatewayConfig) -> (SocketAddr, Shutdown) {
    let shutdown = Shutdown::new();
    let server = HttpServer::new(config).unwrap();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    (addr, shutdown)
}

/// Client that reports redirects instead of following them.
pub fn no_redirect_client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .no_proxy()
        .build()
        .unwrap()
}
