//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! ListenerConfig
//!     → listener.rs (parse address, bind TCP)
//!     → tls.rs (optional certificate loading)
//!     → Hand off to HTTP layer
//! ```

pub mod listener;
pub mod tls;

pub use listener::{bind, bind_address, ListenerError};
pub use tls::{load_tls_config, TlsError};
