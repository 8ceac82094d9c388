//! Observability for holonet
//!
//! Structured logging through `tracing`. HTTP request spans come from
//! `tower_http::trace::TraceLayer` in the server module.

mod logger;

pub use logger::{LogFormat, LoggingConfig};
