pub mod foods;

pub use foods::Entity as Foods;
pub use foods::Model as Food;
