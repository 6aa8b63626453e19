//! Metrics collection and exposition.
//!
//! # Metrics
//! - `gateway_locale_decisions_total` (counter): decisions by outcome, locale
//! - `gateway_resolve_duration_seconds` (histogram): time spent deciding
//!
//! # Design Decisions
//! - Recording is a no-op until an exporter is installed
//! - Locale label is bounded by the registry ("none" otherwise)

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus exporter with an HTTP scrape endpoint on `addr`.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Record one routing decision.
pub fn record_decision(outcome: &'static str, locale: &str, start: Instant) {
    ::metrics::counter!(
        "gateway_locale_decisions_total",
        "outcome" => outcome,
        "locale" => locale.to_string()
    )
    .increment(1);
    ::metrics::histogram!("gateway_resolve_duration_seconds", "outcome" => outcome)
        .record(start.elapsed().as_secs_f64());
}
