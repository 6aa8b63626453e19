//! Graceful shutdown of a running gateway.

use std::time::Duration;

use locale_gateway::http::HttpServer;
use locale_gateway::lifecycle::Shutdown;

mod common;

#[tokio::test]
async fn test_server_stops_on_trigger() {
    let site = common::write_site();
    let server = HttpServer::new(common::test_config(site.path())).unwrap();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();

    let shutdown = Shutdown::new();
    let handle = tokio::spawn(server.run(listener, shutdown.subscribe()));

    shutdown.trigger();

    let result = tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .expect("server did not stop")
        .unwrap();
    assert!(result.is_ok());
}
