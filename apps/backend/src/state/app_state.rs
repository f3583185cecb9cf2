use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::security_config::SecurityConfig;
use crate::auth::gate::{AuthGate, TokenGate};

/// Application state containing shared resources
#[derive(Debug, Clone)]
pub struct AppState {
    /// Connection pool, opened once at startup
    pub db: DatabaseConnection,
    /// Session token settings
    pub security: SecurityConfig,
    /// Authorization gate in front of the owner-scoped routes
    pub gate: Arc<dyn AuthGate>,
}

impl AppState {
    /// Create an AppState guarded by the token gate
    pub fn new(db: DatabaseConnection, security: SecurityConfig) -> Self {
        let gate = Arc::new(TokenGate::new(security.clone()));
        Self { db, security, gate }
    }

    pub fn with_gate(mut self, gate: Arc<dyn AuthGate>) -> Self {
        self.gate = gate;
        self
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}
