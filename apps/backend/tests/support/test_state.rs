use std::sync::Arc;

use nourish_backend::config::db::{DbKind, SQLITE_MEMORY_URL};
use nourish_backend::infra::state::build_state;
use nourish_backend::state::app_state::AppState;
use nourish_backend::state::security_config::SecurityConfig;
use nourish_backend::OpenGate;

pub const TEST_SECRET: &[u8] = b"integration-test-secret";

/// Security settings the test state signs with.
pub fn test_security() -> SecurityConfig {
    SecurityConfig::new(TEST_SECRET)
}

/// Fresh migrated in-memory database behind the token gate.
pub async fn build_test_state() -> AppState {
    build_state()
        .with_db_url(SQLITE_MEMORY_URL, DbKind::SqliteMemory)
        .with_security(test_security())
        .build()
        .await
        .expect("build test state")
}

/// Fresh migrated in-memory database with the gate disabled.
pub async fn build_open_state() -> AppState {
    build_state()
        .with_db_url(SQLITE_MEMORY_URL, DbKind::SqliteMemory)
        .with_security(test_security())
        .with_gate(Arc::new(OpenGate))
        .build()
        .await
        .expect("build open test state")
}
