//! Locale negotiation subsystem.
//!
//! # Data Flow
//! ```text
//! IncomingRequest (path, query, Accept-Language)
//!     → resolver.rs (static asset? locale prefix?)
//!     → negotiate.rs (parse header, match against registry)
//!     → registry.rs (supported locales + default)
//!     → Return: PassThrough or Redirect("/<locale>/<path>[?query]")
//! ```
//!
//! # Design Decisions
//! - Registry built once at startup, immutable at runtime
//! - Resolution is a pure function; the HTTP layer only wraps it
//! - Malformed preferences degrade to the default locale

pub mod negotiate;
pub mod registry;
pub mod resolver;
pub mod switcher;

pub use negotiate::{negotiate, negotiate_header, parse_accept_language, LanguagePreference, LanguageRange};
pub use registry::{Locale, LocaleRegistry, RegistryError};
pub use resolver::{resolve, IncomingRequest, LocaleResolver, RoutingDecision};
pub use switcher::{current_locale, locale_of, switch_locale};
