//! CLI module for holonet
//!
//! Provides command-line interface for:
//! - serve: migrate and run the HTTP API
//! - migrate: apply pending migrations
//! - create-user / delete-user: manage the users favorites belong to

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{create_user, delete_user, migrate, run, run_command, serve};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::write_response;
