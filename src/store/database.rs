//! # Store Handle
//!
//! Connection string resolution, pool construction, embedded migrations and
//! the schema check that runs after them.

use std::str::FromStr;

use sqlx::migrate::Migrator;
use sqlx::postgres::{PgPool, PgPoolOptions, PgRow};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::FromRow;
use tracing::{debug, info};

use crate::schema::Table;

use super::errors::{StoreError, StoreResult};

/// Used when `DATABASE_URL` is not set
pub const DEFAULT_DATABASE_URL: &str = "sqlite:///tmp/test.db?mode=rwc";

const MAX_CONNECTIONS: u32 = 5;

static SQLITE_MIGRATIONS: Migrator = sqlx::migrate!("./migrations/sqlite");
static POSTGRES_MIGRATIONS: Migrator = sqlx::migrate!("./migrations/postgres");

/// Run the same statement against whichever pool the store holds.
///
/// `$body` is expanded once per backend, so it type-checks against that
/// backend's database type.
macro_rules! on_pool {
    ($store:expr, $pool:ident => $body:expr) => {
        match $store.pool() {
            $crate::store::database::StorePool::Sqlite($pool) => $body,
            $crate::store::database::StorePool::Postgres($pool) => $body,
        }
    };
}

pub(crate) use on_pool;

/// A row type readable from both backends
pub(crate) trait Record:
    for<'r> FromRow<'r, SqliteRow> + for<'r> FromRow<'r, PgRow> + Send + Unpin
{
}

impl<T> Record for T where
    T: for<'r> FromRow<'r, SqliteRow> + for<'r> FromRow<'r, PgRow> + Send + Unpin
{
}

/// Resolve the connection string from an optional environment value.
///
/// A legacy `postgres://` scheme is rewritten to `postgresql://`. A missing
/// or blank value falls back to the local SQLite file.
pub fn resolve_database_url(raw: Option<&str>) -> String {
    match raw.map(str::trim).filter(|url| !url.is_empty()) {
        Some(url) => match url.strip_prefix("postgres://") {
            Some(rest) => format!("postgresql://{}", rest),
            None => url.to_string(),
        },
        None => DEFAULT_DATABASE_URL.to_string(),
    }
}

/// Relational engine behind the pool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Sqlite,
    Postgres,
}

impl Backend {
    /// Detect the backend from a resolved connection string
    pub fn from_url(url: &str) -> StoreResult<Self> {
        if url.starts_with("postgresql://") || url.starts_with("postgres://") {
            Ok(Backend::Postgres)
        } else if url.starts_with("sqlite:") {
            Ok(Backend::Sqlite)
        } else {
            Err(StoreError::UnsupportedUrl(url.to_string()))
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Backend::Sqlite => "sqlite",
            Backend::Postgres => "postgres",
        }
    }

    fn migrator(&self) -> &'static Migrator {
        match self {
            Backend::Sqlite => &SQLITE_MIGRATIONS,
            Backend::Postgres => &POSTGRES_MIGRATIONS,
        }
    }
}

/// Native pool for the detected backend
#[derive(Debug, Clone)]
pub(crate) enum StorePool {
    Sqlite(SqlitePool),
    Postgres(PgPool),
}

/// Handle to the relational store.
///
/// Cheap to clone; all clones share one connection pool.
#[derive(Debug, Clone)]
pub struct Store {
    pool: StorePool,
    schema: &'static [Table],
}

impl Store {
    /// Connect without touching the schema
    pub async fn connect(url: &str, schema: &'static [Table]) -> StoreResult<Self> {
        let pool = match Backend::from_url(url)? {
            Backend::Sqlite => {
                let options = SqliteConnectOptions::from_str(url)?
                    .create_if_missing(true)
                    .foreign_keys(true);
                let pool = SqlitePoolOptions::new()
                    .max_connections(MAX_CONNECTIONS)
                    .connect_with(options)
                    .await?;
                StorePool::Sqlite(pool)
            }
            Backend::Postgres => {
                let pool = PgPoolOptions::new()
                    .max_connections(MAX_CONNECTIONS)
                    .connect(url)
                    .await?;
                StorePool::Postgres(pool)
            }
        };

        let store = Self { pool, schema };
        info!(backend = store.backend().name(), "connected to database");
        Ok(store)
    }

    /// Connect, apply pending migrations and verify the schema
    pub async fn open(url: &str, schema: &'static [Table]) -> StoreResult<Self> {
        let store = Self::connect(url, schema).await?;
        store.migrate().await?;
        store.verify_schema().await?;
        Ok(store)
    }

    /// Apply pending migrations for this backend. Safe to run repeatedly.
    pub async fn migrate(&self) -> StoreResult<()> {
        let migrator = self.backend().migrator();
        on_pool!(self, pool => migrator.run(pool).await?);
        info!(
            backend = self.backend().name(),
            migrations = migrator.iter().count(),
            "migrations applied"
        );
        Ok(())
    }

    /// Check every described table and column against the live database
    pub async fn verify_schema(&self) -> StoreResult<()> {
        for table in self.schema {
            let sql = format!(
                "SELECT {} FROM {} WHERE 1 = 0",
                table.full_column_list(),
                table.quoted_name()
            );
            let checked = on_pool!(self, pool => sqlx::query(&sql).execute(pool).await.map(|_| ()));
            checked.map_err(|e| StoreError::SchemaMismatch {
                table: table.name.to_string(),
                reason: e.to_string(),
            })?;
            debug!(table = table.name, "table verified");
        }
        Ok(())
    }

    pub fn backend(&self) -> Backend {
        match self.pool {
            StorePool::Sqlite(_) => Backend::Sqlite,
            StorePool::Postgres(_) => Backend::Postgres,
        }
    }

    pub(crate) fn pool(&self) -> &StorePool {
        &self.pool
    }

    /// Close every pooled connection
    pub async fn close(&self) {
        on_pool!(self, pool => pool.close().await)
    }

    /// All rows of a table, ascending id
    pub(crate) async fn fetch_all<T: Record>(&self, table: &Table) -> StoreResult<Vec<T>> {
        let sql = format!(
            "SELECT {} FROM {} ORDER BY id ASC",
            table.select_list(),
            table.quoted_name()
        );
        let rows = on_pool!(self, pool => sqlx::query_as::<_, T>(&sql).fetch_all(pool).await?);
        Ok(rows)
    }

    /// One row by id
    pub(crate) async fn fetch_by_id<T: Record>(&self, table: &Table, id: i64) -> StoreResult<Option<T>> {
        let sql = format!(
            "SELECT {} FROM {} WHERE id = $1",
            table.select_list(),
            table.quoted_name()
        );
        let row = on_pool!(self, pool => {
            sqlx::query_as::<_, T>(&sql).bind(id).fetch_optional(pool).await?
        });
        Ok(row)
    }

    /// Delete one row by id; false when no such row existed
    pub(crate) async fn delete_by_id(&self, table: &Table, id: i64) -> StoreResult<bool> {
        let sql = format!("DELETE FROM {} WHERE id = $1", table.quoted_name());
        let affected = on_pool!(self, pool => {
            sqlx::query(&sql).bind(id).execute(pool).await?.rows_affected()
        });
        Ok(affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_url_uses_sqlite_fallback() {
        assert_eq!(resolve_database_url(None), DEFAULT_DATABASE_URL);
        assert_eq!(resolve_database_url(Some("   ")), DEFAULT_DATABASE_URL);
    }

    #[test]
    fn test_legacy_postgres_scheme_is_normalized() {
        assert_eq!(
            resolve_database_url(Some("postgres://u:p@db:5432/holonet")),
            "postgresql://u:p@db:5432/holonet"
        );
        assert_eq!(
            resolve_database_url(Some("postgresql://u:p@db/holonet")),
            "postgresql://u:p@db/holonet"
        );
    }

    #[test]
    fn test_backend_detection() {
        assert_eq!(Backend::from_url(DEFAULT_DATABASE_URL).unwrap(), Backend::Sqlite);
        assert_eq!(
            Backend::from_url("postgresql://localhost/holonet").unwrap(),
            Backend::Postgres
        );
        assert!(matches!(
            Backend::from_url("mysql://localhost/holonet"),
            Err(StoreError::UnsupportedUrl(_))
        ));
    }

    #[test]
    fn test_both_backends_ship_the_same_migration_versions() {
        let sqlite: Vec<i64> = SQLITE_MIGRATIONS.iter().map(|m| m.version).collect();
        let postgres: Vec<i64> = POSTGRES_MIGRATIONS.iter().map(|m| m.version).collect();
        assert_eq!(sqlite, postgres);
        assert!(!sqlite.is_empty());
    }
}
