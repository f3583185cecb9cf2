//! DTOs for foods_sea adapter.

use serde_json::Value;

/// DTO for inserting a new food row.
#[derive(Debug, Clone)]
pub struct FoodCreate {
    pub id: String,
    pub food_name: Option<String>,
    pub food_image: Option<String>,
    pub food_quantity: Option<Value>,
    pub pickup_location: Option<String>,
    pub expired_date_time: Option<Value>,
    pub expires_at_ms: Option<i64>,
    pub additional_notes: Option<String>,
    pub donor: Value,
    pub donor_email: String,
    pub food_status: Option<String>,
    pub request_date: Option<Value>,
    pub benefactor_email: Option<String>,
    pub benefactor_name: Option<String>,
}

/// DTO for the donor-editable columns. `None` leaves a column untouched.
#[derive(Debug, Clone, Default)]
pub struct FoodDetailsUpdate {
    pub food_name: Option<Option<String>>,
    pub food_image: Option<Option<String>>,
    pub food_quantity: Option<Option<Value>>,
    pub pickup_location: Option<Option<String>>,
    pub expired_date_time: Option<Option<Value>>,
    /// Recomputed alongside `expired_date_time`
    pub expires_at_ms: Option<Option<i64>>,
    pub additional_notes: Option<Option<String>>,
}

/// Request-group columns, always written together. `None` stores NULL.
#[derive(Debug, Clone, Default)]
pub struct RequestGroup {
    pub food_status: Option<String>,
    pub request_date: Option<Value>,
    pub benefactor_email: Option<String>,
    pub benefactor_name: Option<String>,
}

/// DTO for `request_food`. `group: None` leaves all four group columns
/// untouched; `additional_notes: None` leaves the notes untouched.
#[derive(Debug, Clone, Default)]
pub struct FoodRequestUpdate {
    pub group: Option<RequestGroup>,
    pub additional_notes: Option<Option<String>>,
}
