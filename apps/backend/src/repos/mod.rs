//! Repository layer: domain-facing data access, generic over `ConnectionTrait`.

pub mod foods;
