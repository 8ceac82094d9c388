//! holonet - REST registry of characters, planets, vehicles and user favorites
//!
//! Layers:
//! - [`schema`]: table/column descriptors
//! - [`store`]: relational persistence (SQLite or PostgreSQL)
//! - [`http_server`]: axum handlers over the store
//! - [`cli`]: the `holonet` binary's commands

pub mod cli;
pub mod config;
pub mod http_server;
pub mod observability;
pub mod schema;
pub mod store;
