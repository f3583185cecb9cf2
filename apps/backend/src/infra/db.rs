use std::time::Duration;

use migration::{migrate, MigrationCommand};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::config::db::{db_url, DbKind};
use crate::error::AppError;

/// Open a connection pool for `url`. Does NOT run migrations.
pub async fn connect_db(url: &str, kind: DbKind) -> Result<DatabaseConnection, AppError> {
    let mut opts = ConnectOptions::new(url.to_owned());
    opts.acquire_timeout(Duration::from_secs(5))
        .sqlx_logging(false);

    // Every pooled connection to `sqlite::memory:` is its own database.
    if kind == DbKind::SqliteMemory {
        opts.max_connections(1).min_connections(1);
    }

    let conn = Database::connect(opts).await?;
    Ok(conn)
}

/// Connect and bring the schema up to date.
pub async fn bootstrap_db(url: &str, kind: DbKind) -> Result<DatabaseConnection, AppError> {
    let conn = connect_db(url, kind).await?;

    migrate(&conn, MigrationCommand::Up).await?;
    info!(db_kind = ?kind, "Database ready");

    Ok(conn)
}

/// Connect using the environment-derived URL for `kind`.
pub async fn bootstrap_from_env(kind: DbKind) -> Result<DatabaseConnection, AppError> {
    let url = db_url(kind)?;
    bootstrap_db(&url, kind).await
}
