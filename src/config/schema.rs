//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the gateway.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the locale gateway.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GatewayConfig {
    /// Listener configuration (bind address, TLS).
    pub listener: ListenerConfig,

    /// Supported locales and the fallback locale.
    pub locales: LocalesConfig,

    /// Paths that bypass locale redirection.
    pub static_assets: StaticAssetsConfig,

    /// Content directory served behind the locale middleware.
    pub site: SiteConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,

    /// Optional TLS configuration.
    pub tls: Option<TlsConfig>,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            tls: None,
        }
    }
}

/// TLS configuration for the listener.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TlsConfig {
    /// Path to certificate file (PEM).
    pub cert_path: String,

    /// Path to private key file (PEM).
    pub key_path: String,
}

/// Locale configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LocalesConfig {
    /// Supported locale codes, in preference order (e.g., ["en", "es"]).
    pub supported: Vec<String>,

    /// Locale used when negotiation finds no match. Must be in `supported`.
    pub default: String,
}

impl Default for LocalesConfig {
    fn default() -> Self {
        Self {
            supported: vec!["en".to_string(), "es".to_string()],
            default: "en".to_string(),
        }
    }
}

/// Static asset bypass rules.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StaticAssetsConfig {
    /// File extensions (without the dot) served without redirection.
    pub extensions: Vec<String>,

    /// Path prefixes reserved for assets and internal routes.
    pub reserved_prefixes: Vec<String>,
}

impl Default for StaticAssetsConfig {
    fn default() -> Self {
        let extensions = [
            "ico", "png", "jpg", "jpeg", "gif", "svg", "webp", "webm", "mp4", "css", "js", "json",
            "txt", "woff", "woff2", "ttf", "eot",
        ];
        let prefixes = ["/_next/", "/api/", "/images/", "/icons/", "/assets/"];

        Self {
            extensions: extensions.iter().map(|e| e.to_string()).collect(),
            reserved_prefixes: prefixes.iter().map(|p| p.to_string()).collect(),
        }
    }
}

/// Site content configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Root directory; pages live under `<root>/<locale>/`.
    pub root: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            root: "site".to_string(),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: true,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
