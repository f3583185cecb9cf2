pub mod food_id;
pub mod session;
pub mod validated_json;

pub use food_id::FoodId;
pub use session::Session;
pub use validated_json::ValidatedJson;
