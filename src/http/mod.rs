//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP/TLS connection
//!     → server.rs (Axum setup, layers)
//!     → request.rs (assign/propagate request ID)
//!     → middleware.rs (locale decision)
//!         → redirect: response.rs (307 + Location + Vary)
//!         → pass through: ServeDir over the site root
//!     → Send to client
//! ```

pub mod middleware;
pub mod request;
pub mod response;
pub mod server;

pub use middleware::{locale_middleware, ActiveLocale};
pub use request::{UuidRequestId, X_REQUEST_ID};
pub use server::{HttpServer, ServerError};
