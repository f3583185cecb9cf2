//! Food repository functions for domain layer (generic over ConnectionTrait).

use std::sync::Mutex;

use once_cell::sync::Lazy;
use sea_orm::ConnectionTrait;
use ulid::Generator;

use crate::adapters::foods_sea::{
    self as foods_adapter, FoodCreate, FoodDetailsUpdate, FoodRequestUpdate, RequestGroup,
};
use crate::domain::expiry::sort_key;
use crate::domain::{
    DeleteAck, FoodPatch, FoodRecord, FoodRequestPatch, InsertAck, NewFood, UpdateAck,
};
use crate::entities::foods;
use crate::errors::domain::{DomainError, InfraErrorKind};

// Monotonic within a millisecond, so id order is insertion order.
static ID_GENERATOR: Lazy<Mutex<Generator>> = Lazy::new(|| Mutex::new(Generator::new()));

fn next_id() -> Result<String, DomainError> {
    let mut generator = ID_GENERATOR.lock().map_err(|_| {
        DomainError::infra(InfraErrorKind::Other("IdGenerator".into()), "Id generator poisoned")
    })?;
    generator.generate().map(|id| id.to_string()).map_err(|e| {
        DomainError::infra(
            InfraErrorKind::Other("IdGenerator".into()),
            format!("Failed to generate id: {e}"),
        )
    })
}

pub async fn list_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<FoodRecord>, DomainError> {
    let rows = foods_adapter::find_all(conn).await?;
    Ok(rows.into_iter().map(FoodRecord::from).collect())
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: &str,
) -> Result<Option<FoodRecord>, DomainError> {
    let row = foods_adapter::find_by_id(conn, id).await?;
    Ok(row.map(FoodRecord::from))
}

pub async fn list_by_expiry<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<FoodRecord>, DomainError> {
    let rows = foods_adapter::find_all_by_expiry(conn).await?;
    Ok(rows.into_iter().map(FoodRecord::from).collect())
}

pub async fn list_by_donor<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    email: &str,
) -> Result<Vec<FoodRecord>, DomainError> {
    let rows = foods_adapter::find_by_donor_email(conn, email).await?;
    Ok(rows.into_iter().map(FoodRecord::from).collect())
}

pub async fn list_by_benefactor<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    email: &str,
) -> Result<Vec<FoodRecord>, DomainError> {
    let rows = foods_adapter::find_by_benefactor_email(conn, email).await?;
    Ok(rows.into_iter().map(FoodRecord::from).collect())
}

/// Insert a new record under a freshly generated id.
pub async fn insert<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    food: NewFood,
) -> Result<InsertAck, DomainError> {
    let donor_email = food.donor.email.clone();
    let donor = serde_json::to_value(&food.donor).map_err(|e| {
        DomainError::infra(
            InfraErrorKind::Other("Serialize".into()),
            format!("Failed to encode donor: {e}"),
        )
    })?;

    let dto = FoodCreate {
        id: next_id()?,
        expires_at_ms: food.expired_date_time.as_ref().and_then(sort_key),
        food_name: food.food_name,
        food_image: food.food_image,
        food_quantity: food.food_quantity,
        pickup_location: food.pickup_location,
        expired_date_time: food.expired_date_time,
        additional_notes: food.additional_notes,
        donor,
        donor_email,
        food_status: food.food_status,
        request_date: food.request_date,
        benefactor_email: food.benefactor_email,
        benefactor_name: food.benefactor_name,
    };

    let inserted_id = foods_adapter::create_food(conn, dto).await?;
    Ok(InsertAck {
        acknowledged: true,
        inserted_id,
    })
}

pub async fn delete<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: &str,
) -> Result<DeleteAck, DomainError> {
    let deleted_count = foods_adapter::delete_by_id(conn, id).await?;
    Ok(DeleteAck {
        acknowledged: true,
        deleted_count,
    })
}

/// Apply the donor-editable fields of `patch`. Request fields are never
/// written here.
pub async fn update_details<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: &str,
    patch: FoodPatch,
) -> Result<UpdateAck, DomainError> {
    if patch.is_empty() {
        return ack_without_write(conn, id).await;
    }

    let dto = FoodDetailsUpdate {
        expires_at_ms: patch
            .expired_date_time
            .as_ref()
            .map(|raw| raw.as_ref().and_then(sort_key)),
        food_name: patch.food_name,
        food_image: patch.food_image,
        food_quantity: patch.food_quantity,
        pickup_location: patch.pickup_location,
        expired_date_time: patch.expired_date_time,
        additional_notes: patch.additional_notes,
    };

    let matched = foods_adapter::update_details(conn, id, dto).await?;
    Ok(UpdateAck::new(matched, matched))
}

/// Apply the request fields of `patch`. Donor-editable fields other than
/// `additionalNotes` are never written here. Naming any request-group key
/// rewrites the whole group; a body with no request key writes nothing.
pub async fn request_food<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: &str,
    patch: FoodRequestPatch,
) -> Result<UpdateAck, DomainError> {
    if patch.is_empty() {
        return ack_without_write(conn, id).await;
    }

    let group = patch.touches_group().then(|| RequestGroup {
        food_status: patch.food_status.flatten(),
        request_date: patch.request_date.flatten(),
        benefactor_email: patch.benefactor_email.flatten(),
        benefactor_name: patch.benefactor_name.flatten(),
    });
    let dto = FoodRequestUpdate {
        group,
        additional_notes: patch.additional_notes,
    };

    let matched = foods_adapter::update_request(conn, id, dto).await?;
    Ok(UpdateAck::new(matched, matched))
}

async fn ack_without_write<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: &str,
) -> Result<UpdateAck, DomainError> {
    let matched = u64::from(foods_adapter::exists(conn, id).await?);
    Ok(UpdateAck::new(matched, 0))
}

impl From<foods::Model> for FoodRecord {
    fn from(model: foods::Model) -> Self {
        Self {
            id: model.id,
            food_name: model.food_name,
            food_image: model.food_image,
            food_quantity: model.food_quantity,
            pickup_location: model.pickup_location,
            expired_date_time: model.expired_date_time,
            additional_notes: model.additional_notes,
            donor: model.donor,
            food_status: model.food_status,
            request_date: model.request_date,
            benefactor_email: model.benefactor_email,
            benefactor_name: model.benefactor_name,
        }
    }
}
