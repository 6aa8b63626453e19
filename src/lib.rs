//! Locale gateway library.
//!
//! Redirects requests for un-prefixed pages to `/<locale>/...`, picking the
//! locale from `Accept-Language`, and serves locale-scoped content and static
//! assets unchanged.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod locale;
pub mod net;
pub mod observability;
pub mod routing;

pub use config::GatewayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use locale::{resolve, IncomingRequest, LocaleRegistry, LocaleResolver, RoutingDecision};
