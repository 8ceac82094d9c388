//! CLI command implementations
//!
//! Every command resolves configuration the same way: `.env`, then process
//! environment, then command-line flags.

use tokio::runtime::Runtime;
use tracing::info;

use crate::config::AppConfig;
use crate::http_server::HttpServer;
use crate::schema::REGISTRY_SCHEMA;
use crate::store::{resolve_database_url, NewUser, Store};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};
use super::io::write_response;

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse_args();
    let mut config = AppConfig::from_env()?;
    if let Some(url) = cli.database_url.as_deref() {
        config.database_url = resolve_database_url(Some(url));
    }
    config.logging.init();

    run_command(cli.command_or_default(), config)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command, config: AppConfig) -> CliResult<()> {
    let rt = runtime()?;
    match cmd {
        Command::Serve { port } => rt.block_on(serve(config, port)),
        Command::Migrate => rt.block_on(migrate(&config)),
        Command::CreateUser {
            email,
            password,
            inactive,
        } => rt.block_on(create_user(&config, email, password, !inactive)),
        Command::DeleteUser { id } => rt.block_on(delete_user(&config, id)),
    }
}

fn runtime() -> CliResult<Runtime> {
    Runtime::new()
        .map_err(|e| CliError::io_error(format!("Failed to create tokio runtime: {}", e)))
}

/// Open the store, migrate, and serve HTTP until interrupted
pub async fn serve(mut config: AppConfig, port: Option<u16>) -> CliResult<()> {
    if let Some(port) = port {
        config.server.port = port;
    }

    let store = Store::open(&config.database_url, REGISTRY_SCHEMA).await?;
    let server = HttpServer::new(config.server, store.clone());

    let result = server
        .start()
        .await
        .map_err(|e| CliError::io_error(format!("HTTP server failed: {}", e)));

    store.close().await;
    result
}

/// Apply pending migrations and exit
pub async fn migrate(config: &AppConfig) -> CliResult<()> {
    let store = Store::open(&config.database_url, REGISTRY_SCHEMA).await?;
    store.close().await;
    info!("database is up to date");
    Ok(())
}

/// Register a user and print its serialization
pub async fn create_user(
    config: &AppConfig,
    email: String,
    password: String,
    is_active: bool,
) -> CliResult<()> {
    let store = Store::open(&config.database_url, REGISTRY_SCHEMA).await?;
    let user = store
        .create_user(NewUser {
            email,
            password,
            is_active,
        })
        .await;
    store.close().await;

    write_response(&user?)
}

/// Delete a user; its favorites go with it
pub async fn delete_user(config: &AppConfig, id: i64) -> CliResult<()> {
    let store = Store::open(&config.database_url, REGISTRY_SCHEMA).await?;
    let deleted = store.delete_user(id).await;
    store.close().await;

    if !deleted? {
        return Err(CliError::not_found(format!("No user with id {}", id)));
    }
    write_response(&serde_json::json!({ "deleted": id }))
}
