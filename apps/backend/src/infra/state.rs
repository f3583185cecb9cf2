use std::sync::Arc;

use crate::auth::gate::AuthGate;
use crate::config::db::{DbKind, SQLITE_MEMORY_URL};
use crate::error::AppError;
use crate::infra::db::{bootstrap_db, bootstrap_from_env};
use crate::state::app_state::AppState;
use crate::state::security_config::SecurityConfig;

enum DbSource {
    Env(DbKind),
    Url(String, DbKind),
}

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    security_config: SecurityConfig,
    db_source: Option<DbSource>,
    gate: Option<Arc<dyn AuthGate>>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            security_config: SecurityConfig::default(),
            db_source: None,
            gate: None,
        }
    }

    /// Connect to the store described by the environment for `kind`.
    pub fn with_db(mut self, kind: DbKind) -> Self {
        self.db_source = Some(DbSource::Env(kind));
        self
    }

    pub fn with_db_url(mut self, url: impl Into<String>, kind: DbKind) -> Self {
        self.db_source = Some(DbSource::Url(url.into(), kind));
        self
    }

    pub fn with_security(mut self, security_config: SecurityConfig) -> Self {
        self.security_config = security_config;
        self
    }

    /// Replace the default token gate.
    pub fn with_gate(mut self, gate: Arc<dyn AuthGate>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        // single entrypoint: connect + migrate
        let conn = match self.db_source {
            Some(DbSource::Env(kind)) => bootstrap_from_env(kind).await?,
            Some(DbSource::Url(url, kind)) => bootstrap_db(&url, kind).await?,
            None => bootstrap_db(SQLITE_MEMORY_URL, DbKind::SqliteMemory).await?,
        };

        let state = AppState::new(conn, self.security_config);
        Ok(match self.gate {
            Some(gate) => state.with_gate(gate),
            None => state,
        })
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
