use std::env;

use crate::config::db::{db_url_from, kind_for_url, DbKind};
use crate::error::AppError;

/// Which authorization gate guards the owner-scoped routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateMode {
    /// Cookie token plus ownership check
    Token,
    /// Every request passes (development only)
    Open,
}

/// Process configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub db_kind: DbKind,
    pub access_token_secret: String,
    pub client_origins: Vec<String>,
    pub gate: GateMode,
    pub cookie_secure: bool,
}

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_CLIENT_ORIGIN: &str = "http://localhost:5173";

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_vars(|name| env::var(name).ok())
    }

    pub fn from_vars<F>(get: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = get("HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let port = match get("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| AppError::config(format!("PORT must be a valid port number, got '{raw}'")))?,
            None => DEFAULT_PORT,
        };

        let access_token_secret = get("ACCESS_TOKEN_SECRET")
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AppError::config("ACCESS_TOKEN_SECRET must be set"))?;

        let database_url = db_url_from(DbKind::Postgres, &get)?;
        let db_kind = kind_for_url(&database_url);

        let client_origins =
            parse_origins(&get("CLIENT_ORIGIN").unwrap_or_default());

        let gate = match get("AUTH_GATE").as_deref().map(str::trim) {
            None | Some("") | Some("token") => GateMode::Token,
            Some("open") => GateMode::Open,
            Some(other) => {
                return Err(AppError::config(format!(
                    "AUTH_GATE must be 'token' or 'open', got '{other}'"
                )))
            }
        };

        let cookie_secure = !matches!(
            get("COOKIE_SECURE").as_deref().map(str::trim),
            Some("false") | Some("0")
        );

        Ok(Self {
            host,
            port,
            database_url,
            db_kind,
            access_token_secret,
            client_origins,
            gate,
            cookie_secure,
        })
    }
}

/// Comma-separated origins; empty, `null` and non-http entries are dropped.
/// Falls back to the local dev client when nothing valid remains.
pub fn parse_origins(raw: &str) -> Vec<String> {
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty() && *s != "null")
        .filter(|s| s.starts_with("http://") || s.starts_with("https://"))
        .map(|s| s.trim_end_matches('/').to_string())
        .collect();

    if origins.is_empty() {
        vec![DEFAULT_CLIENT_ORIGIN.to_string()]
    } else {
        origins
    }
}
