use std::env;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::AppError;

/// Characters left literal in URL userinfo; everything else is escaped.
const USERINFO: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Which store the application connects to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbKind {
    /// Postgres, located through `DATABASE_URL` or the `DB_*` variables
    Postgres,
    /// Private in-memory SQLite database (tests and local experiments)
    SqliteMemory,
}

pub const SQLITE_MEMORY_URL: &str = "sqlite::memory:";

/// Builds a database URL from process environment variables.
pub fn db_url(kind: DbKind) -> Result<String, AppError> {
    db_url_from(kind, |name| env::var(name).ok())
}

/// Builds a database URL from an arbitrary variable lookup.
///
/// `DATABASE_URL` wins when set; otherwise the URL is composed from
/// `DB_USER`, `DB_PASS`, `DB_HOST` (localhost), `DB_PORT` (5432) and
/// `DB_NAME` (nourish4all). User and password are percent-encoded.
pub fn db_url_from<F>(kind: DbKind, get: F) -> Result<String, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    match kind {
        DbKind::SqliteMemory => Ok(SQLITE_MEMORY_URL.to_string()),
        DbKind::Postgres => {
            if let Some(url) = get("DATABASE_URL").filter(|u| !u.trim().is_empty()) {
                return Ok(url);
            }

            let username = must_var(&get, "DB_USER")?;
            let password = must_var(&get, "DB_PASS")?;
            let username = utf8_percent_encode(&username, USERINFO);
            let password = utf8_percent_encode(&password, USERINFO);
            let host = get("DB_HOST").unwrap_or_else(|| "localhost".to_string());
            let port = get("DB_PORT").unwrap_or_else(|| "5432".to_string());
            let db_name = get("DB_NAME").unwrap_or_else(|| "nourish4all".to_string());

            Ok(format!(
                "postgresql://{username}:{password}@{host}:{port}/{db_name}"
            ))
        }
    }
}

/// Infer the store kind from a URL. Anything but in-memory SQLite is
/// treated as a pooled server database.
pub fn kind_for_url(url: &str) -> DbKind {
    if url.starts_with("sqlite::memory:") {
        DbKind::SqliteMemory
    } else {
        DbKind::Postgres
    }
}

fn must_var<F>(get: &F, name: &str) -> Result<String, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    get(name)
        .ok_or_else(|| AppError::config(format!("Required environment variable '{name}' is not set")))
}
