//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the locale registry is usable (non-empty, default is supported)
//! - Validate value ranges (timeouts > 0, addresses parse)
//! - Check bypass rules are well-formed
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: GatewayConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;
use std::net::SocketAddr;

use thiserror::Error;
use unic_langid::LanguageIdentifier;

use crate::config::schema::GatewayConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("locales.supported must name at least one locale")]
    NoLocales,

    #[error("locale '{0}' is not a valid language tag")]
    InvalidLocale(String),

    #[error("locale '{0}' is listed more than once")]
    DuplicateLocale(String),

    #[error("default locale '{0}' is not in locales.supported")]
    DefaultNotSupported(String),

    #[error("static asset extension '{0}' must be non-empty and must not start with '.'")]
    InvalidExtension(String),

    #[error("reserved prefix '{0}' must start with '/'")]
    InvalidPrefix(String),

    #[error("invalid bind address '{0}'")]
    InvalidBindAddress(String),

    #[error("invalid metrics address '{0}'")]
    InvalidMetricsAddress(String),

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroTimeout,
}

/// Returns true if `code` can be used as a path segment and parses as a language tag.
pub fn is_valid_locale_code(code: &str) -> bool {
    !code.is_empty()
        && !code.contains('/')
        && !code.contains('?')
        && code.parse::<LanguageIdentifier>().is_ok()
}

/// Validate a parsed configuration, collecting every error found.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let locales = &config.locales;
    if locales.supported.is_empty() {
        errors.push(ValidationError::NoLocales);
    }

    let mut seen = HashSet::new();
    for code in &locales.supported {
        if !is_valid_locale_code(code) {
            errors.push(ValidationError::InvalidLocale(code.clone()));
        }
        if !seen.insert(code.to_ascii_lowercase()) {
            errors.push(ValidationError::DuplicateLocale(code.clone()));
        }
    }

    if !locales.supported.is_empty() && !locales.supported.contains(&locales.default) {
        errors.push(ValidationError::DefaultNotSupported(locales.default.clone()));
    }

    for ext in &config.static_assets.extensions {
        if ext.is_empty() || ext.starts_with('.') {
            errors.push(ValidationError::InvalidExtension(ext.clone()));
        }
    }

    for prefix in &config.static_assets.reserved_prefixes {
        if !prefix.starts_with('/') {
            errors.push(ValidationError::InvalidPrefix(prefix.clone()));
        }
    }

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
