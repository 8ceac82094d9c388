//! CLI argument definitions using clap
//!
//! Commands:
//! - holonet serve [--port <port>]
//! - holonet migrate
//! - holonet create-user --email <email> --password <password> [--inactive]
//! - holonet delete-user --id <id>
//!
//! `serve` runs when no command is given.

use clap::{Parser, Subcommand};

/// holonet - REST registry of characters, planets and favorites
#[derive(Parser, Debug)]
#[command(name = "holonet")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Database connection string (overrides DATABASE_URL)
    #[arg(long, global = true)]
    pub database_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start the HTTP API
    Serve {
        /// Port to listen on (overrides PORT)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Apply pending database migrations and exit
    Migrate,

    /// Register a user
    CreateUser {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,

        /// Store the user with the active flag cleared
        #[arg(long)]
        inactive: bool,
    },

    /// Delete a user and all of its favorites
    DeleteUser {
        #[arg(long)]
        id: i64,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// The command to run; `serve` when none was given
    pub fn command_or_default(&self) -> Command {
        self.command
            .clone()
            .unwrap_or(Command::Serve { port: None })
    }
}
