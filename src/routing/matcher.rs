//! Static asset path matching.
//!
//! # Responsibilities
//! - Match file extensions on the last path segment
//! - Match reserved path prefixes (asset folders, API, framework internals)
//! - Combine conditions with OR semantics
//!
//! # Design Decisions
//! - Extension matching is ASCII case-insensitive
//! - Prefix matching is case-sensitive
//! - No regex to guarantee O(n) matching

use crate::config::StaticAssetsConfig;

/// Trait for matching request paths against conditions.
pub trait PathMatcher: Send + Sync + std::fmt::Debug {
    /// Returns true if the path matches this condition.
    fn matches(&self, path: &str) -> bool;
}

/// Matches paths whose last segment ends in one of a set of extensions.
#[derive(Debug, Clone)]
pub struct ExtensionMatcher {
    extensions: Vec<String>,
}

impl ExtensionMatcher {
    /// Create a new extension matcher. Extensions are given without the dot.
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            extensions: extensions
                .into_iter()
                .map(|e| e.into().to_ascii_lowercase())
                .collect(),
        }
    }
}

impl PathMatcher for ExtensionMatcher {
    fn matches(&self, path: &str) -> bool {
        let segment = path.rsplit('/').next().unwrap_or(path);
        match segment.rsplit_once('.') {
            Some((_, ext)) => self
                .extensions
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext)),
            None => false,
        }
    }
}

/// Matches the request path prefix.
#[derive(Debug, Clone)]
pub struct PathPrefixMatcher {
    prefix: String,
}

impl PathPrefixMatcher {
    /// Create a new path prefix matcher.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl PathMatcher for PathPrefixMatcher {
    fn matches(&self, path: &str) -> bool {
        path.starts_with(&self.prefix)
    }
}

/// Combines multiple matchers with OR semantics.
#[derive(Debug, Default)]
pub struct AnyMatcher {
    matchers: Vec<Box<dyn PathMatcher>>,
}

impl AnyMatcher {
    pub fn push(&mut self, matcher: impl PathMatcher + 'static) {
        self.matchers.push(Box::new(matcher));
    }
}

impl PathMatcher for AnyMatcher {
    fn matches(&self, path: &str) -> bool {
        self.matchers.iter().any(|m| m.matches(path))
    }
}

/// Predicate for requests that bypass locale redirection.
#[derive(Debug, Default)]
pub struct StaticAssetMatcher {
    inner: AnyMatcher,
}

impl StaticAssetMatcher {
    /// Build from the `[static_assets]` config section.
    pub fn from_config(config: &StaticAssetsConfig) -> Self {
        let mut inner = AnyMatcher::default();
        inner.push(ExtensionMatcher::new(config.extensions.iter().cloned()));
        for prefix in &config.reserved_prefixes {
            inner.push(PathPrefixMatcher::new(prefix.clone()));
        }
        Self { inner }
    }
}

impl PathMatcher for StaticAssetMatcher {
    fn matches(&self, path: &str) -> bool {
        self.inner.matches(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_matcher() {
        let matcher = ExtensionMatcher::new(["png", "woff2"]);

        assert!(matcher.matches("/logo.png"));
        assert!(matcher.matches("/fonts/inter.WOFF2"));
        assert!(matcher.matches("/en/hero.png"));
        assert!(!matcher.matches("/logo.png/about"));
        assert!(!matcher.matches("/blog"));
        assert!(!matcher.matches("/archive.tar"));
        assert!(!matcher.matches("/"));
    }

    #[test]
    fn test_path_matcher() {
        let matcher = PathPrefixMatcher::new("/api/");

        assert!(matcher.matches("/api/v1"));
        assert!(!matcher.matches("/images"));
        assert!(!matcher.matches("/API/v1"));
    }

    #[test]
    fn test_default_static_assets() {
        let matcher = StaticAssetMatcher::from_config(&StaticAssetsConfig::default());

        assert!(matcher.matches("/favicon.ico"));
        assert!(matcher.matches("/_next/static/chunks/main"));
        assert!(matcher.matches("/images/phones/front"));
        assert!(matcher.matches("/robots.txt"));
        assert!(!matcher.matches("/blog"));
        assert!(!matcher.matches("/"));
        assert!(!matcher.matches("/apiary"));
    }

    #[test]
    fn test_empty_matcher_matches_nothing() {
        let matcher = StaticAssetMatcher::default();
        assert!(!matcher.matches("/favicon.ico"));
    }
}
