//! Request classification subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request path
//!     → matcher.rs (static asset / reserved prefix predicate)
//!     → true:  bypass locale handling
//!     → false: hand to locale::resolver
//!
//! Matcher Compilation (at startup):
//!     StaticAssetsConfig
//!     → ExtensionMatcher + PathPrefixMatcher per reserved prefix
//!     → Freeze as immutable StaticAssetMatcher
//! ```
//!
//! # Design Decisions
//! - Matchers compiled at startup, immutable at runtime
//! - No regex in hot path (suffix/prefix matching only)
//! - Deterministic: same path always gets the same answer

pub mod matcher;

pub use matcher::{AnyMatcher, ExtensionMatcher, PathMatcher, PathPrefixMatcher, StaticAssetMatcher};
