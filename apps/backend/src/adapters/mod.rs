//! Adapters for external dependencies.

pub mod foods_sea;
