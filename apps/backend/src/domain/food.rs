//! Food donation record and the request bodies that create and edit it.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A donated-food entry as clients see it.
///
/// Serialized camelCase with the identifier under `_id`; absent optional
/// fields are omitted rather than sent as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodRecord {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub food_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub food_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub food_quantity: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expired_date_time: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_notes: Option<String>,
    pub donor: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub food_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_date: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub benefactor_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub benefactor_name: Option<String>,
}

/// Record creator. Only `email` is interpreted; other keys are kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Donor {
    pub email: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Body of `POST /foods`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFood {
    #[serde(default)]
    pub food_name: Option<String>,
    #[serde(default)]
    pub food_image: Option<String>,
    #[serde(default)]
    pub food_quantity: Option<Value>,
    #[serde(default)]
    pub pickup_location: Option<String>,
    #[serde(default)]
    pub expired_date_time: Option<Value>,
    #[serde(default)]
    pub additional_notes: Option<String>,
    pub donor: Donor,
    #[serde(default)]
    pub food_status: Option<String>,
    #[serde(default)]
    pub request_date: Option<Value>,
    #[serde(default)]
    pub benefactor_email: Option<String>,
    #[serde(default)]
    pub benefactor_name: Option<String>,
}

/// Body of `PATCH /food/{id}`: the donor-editable fields.
///
/// Outer `None` leaves the column alone, `Some(None)` (JSON `null`)
/// clears it, `Some(Some(v))` replaces it. Unknown keys are ignored.
/// Absent keys are never written as `null`; only an explicit `null`
/// clears a field.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodPatch {
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub food_name: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub food_image: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub food_quantity: Option<Option<Value>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub pickup_location: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub expired_date_time: Option<Option<Value>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub additional_notes: Option<Option<String>>,
}

impl FoodPatch {
    pub fn is_empty(&self) -> bool {
        self.food_name.is_none()
            && self.food_image.is_none()
            && self.food_quantity.is_none()
            && self.pickup_location.is_none()
            && self.expired_date_time.is_none()
            && self.additional_notes.is_none()
    }
}

/// Body of `PATCH /request/{id}`: a benefactor claiming a record.
///
/// `foodStatus`, `requestDate`, `benefactorEmail` and `benefactorName`
/// form one group. When the body names any of them, all four are written
/// and the ones it leaves out become `null`. `additionalNotes` follows the
/// same absent/`null`/value rules as [`FoodPatch`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodRequestPatch {
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub food_status: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub additional_notes: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub request_date: Option<Option<Value>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub benefactor_email: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub benefactor_name: Option<Option<String>>,
}

impl FoodRequestPatch {
    pub fn is_empty(&self) -> bool {
        self.food_status.is_none()
            && self.additional_notes.is_none()
            && self.request_date.is_none()
            && self.benefactor_email.is_none()
            && self.benefactor_name.is_none()
    }

    /// True when the body names at least one request-group key.
    pub fn touches_group(&self) -> bool {
        self.food_status.is_some()
            || self.request_date.is_some()
            || self.benefactor_email.is_some()
            || self.benefactor_name.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertAck {
    pub acknowledged: bool,
    pub inserted_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAck {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

/// Acknowledgement for the two update operations. Upserts never happen,
/// so `upsertedCount` is always 0 and `upsertedId` always `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAck {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
    pub upserted_count: u64,
    pub upserted_id: Option<String>,
}

impl UpdateAck {
    pub fn new(matched: u64, modified: u64) -> Self {
        Self {
            acknowledged: true,
            matched_count: matched,
            modified_count: modified,
            upserted_count: 0,
            upserted_id: None,
        }
    }
}
