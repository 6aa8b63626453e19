//! Locale resolution for inbound requests.
//!
//! # Responsibilities
//! - Let static assets and reserved routes through untouched
//! - Let paths that already carry a supported locale through untouched
//! - Otherwise negotiate a locale and build the redirect target
//!
//! # Design Decisions
//! - Pure: reads only its arguments and immutable startup state
//! - Total: every input yields a decision, nothing is an error
//! - Redirect targets always start with `/<locale>/`, so resolving them again
//!   passes through (no redirect loops)

use std::borrow::Cow;

use crate::locale::negotiate::negotiate_header;
use crate::locale::registry::LocaleRegistry;
use crate::locale::switcher::locale_of;
use crate::routing::{PathMatcher, StaticAssetMatcher};

/// Read-only view of the parts of a request that drive locale routing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IncomingRequest<'a> {
    /// URL path; empty is treated as `/`.
    pub path: &'a str,
    /// Query string without the leading `?`.
    pub query: Option<&'a str>,
    /// Raw `Accept-Language` header value.
    pub accept_language: Option<&'a str>,
}

impl<'a> IncomingRequest<'a> {
    pub fn new(path: &'a str) -> Self {
        Self {
            path,
            ..Self::default()
        }
    }

    /// Split a request target such as `/blog?ref=ad` into path and query.
    pub fn from_target(target: &'a str) -> Self {
        match target.split_once('?') {
            Some((path, query)) => Self {
                path,
                query: Some(query),
                accept_language: None,
            },
            None => Self::new(target),
        }
    }

    pub fn with_query(mut self, query: &'a str) -> Self {
        self.query = Some(query);
        self
    }

    pub fn with_accept_language(mut self, value: &'a str) -> Self {
        self.accept_language = Some(value);
        self
    }
}

/// Outcome of resolving one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutingDecision {
    /// Forward to content handling unchanged.
    PassThrough,
    /// Redirect to this locale-prefixed location.
    Redirect(String),
}

impl RoutingDecision {
    /// Redirect target, if any.
    pub fn location(&self) -> Option<&str> {
        match self {
            RoutingDecision::Redirect(location) => Some(location),
            RoutingDecision::PassThrough => None,
        }
    }
}

/// Decide how to route `request`.
pub fn resolve(
    request: &IncomingRequest<'_>,
    registry: &LocaleRegistry,
    static_assets: &dyn PathMatcher,
) -> RoutingDecision {
    let path: Cow<'_, str> = if request.path.starts_with('/') {
        Cow::Borrowed(request.path)
    } else {
        Cow::Owned(format!("/{}", request.path))
    };

    if static_assets.matches(&path) {
        return RoutingDecision::PassThrough;
    }

    if locale_of(&path, registry).is_some() {
        return RoutingDecision::PassThrough;
    }

    let locale = negotiate_header(request.accept_language, registry);

    let mut location = format!("/{}/{}", locale.code(), path.trim_start_matches('/'));
    if let Some(query) = request.query {
        location.push('?');
        location.push_str(query);
    }

    RoutingDecision::Redirect(location)
}

/// Startup-built resolver shared by all requests.
#[derive(Debug)]
pub struct LocaleResolver {
    registry: LocaleRegistry,
    static_assets: StaticAssetMatcher,
}

impl LocaleResolver {
    pub fn new(registry: LocaleRegistry, static_assets: StaticAssetMatcher) -> Self {
        Self {
            registry,
            static_assets,
        }
    }

    pub fn registry(&self) -> &LocaleRegistry {
        &self.registry
    }

    pub fn resolve(&self, request: &IncomingRequest<'_>) -> RoutingDecision {
        resolve(request, &self.registry, &self.static_assets)
    }
}
