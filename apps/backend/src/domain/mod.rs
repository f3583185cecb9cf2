//! Domain layer: food record types and pure helpers (no DB, no HTTP).

pub mod expiry;
pub mod food;

#[cfg(test)]
mod tests_props_expiry;

pub use food::{
    DeleteAck, Donor, FoodPatch, FoodRecord, FoodRequestPatch, InsertAck, NewFood, UpdateAck,
};
