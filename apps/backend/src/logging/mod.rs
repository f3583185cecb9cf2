//! Logging helpers shared by handlers and the session gate.

pub mod pii;
pub mod security;
