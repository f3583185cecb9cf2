//! SeaORM adapter for the foods repository.

use sea_orm::sea_query::NullOrdering;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, Order, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

use crate::entities::foods;

pub mod dto;

pub use dto::{FoodCreate, FoodDetailsUpdate, FoodRequestUpdate, RequestGroup};

// Adapter functions return DbErr; repos layer maps to DomainError via From<DbErr>.

/// All rows in insertion order (ULID ids sort by creation time).
pub async fn find_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<foods::Model>, sea_orm::DbErr> {
    foods::Entity::find()
        .order_by_asc(foods::Column::Id)
        .all(conn)
        .await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: &str,
) -> Result<Option<foods::Model>, sea_orm::DbErr> {
    foods::Entity::find_by_id(id.to_owned()).one(conn).await
}

pub async fn exists<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: &str,
) -> Result<bool, sea_orm::DbErr> {
    let count = foods::Entity::find()
        .filter(foods::Column::Id.eq(id))
        .count(conn)
        .await?;
    Ok(count > 0)
}

/// Soonest expiry first; rows without a sort key go last.
pub async fn find_all_by_expiry<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<foods::Model>, sea_orm::DbErr> {
    foods::Entity::find()
        .order_by_with_nulls(foods::Column::ExpiresAtMs, Order::Asc, NullOrdering::Last)
        .order_by_asc(foods::Column::Id)
        .all(conn)
        .await
}

pub async fn find_by_donor_email<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    email: &str,
) -> Result<Vec<foods::Model>, sea_orm::DbErr> {
    foods::Entity::find()
        .filter(foods::Column::DonorEmail.eq(email))
        .order_by_asc(foods::Column::Id)
        .all(conn)
        .await
}

pub async fn find_by_benefactor_email<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    email: &str,
) -> Result<Vec<foods::Model>, sea_orm::DbErr> {
    foods::Entity::find()
        .filter(foods::Column::BenefactorEmail.eq(email))
        .order_by_asc(foods::Column::Id)
        .all(conn)
        .await
}

pub async fn create_food<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: FoodCreate,
) -> Result<String, sea_orm::DbErr> {
    let id = dto.id.clone();
    let active = foods::ActiveModel {
        id: Set(dto.id),
        food_name: Set(dto.food_name),
        food_image: Set(dto.food_image),
        food_quantity: Set(dto.food_quantity),
        pickup_location: Set(dto.pickup_location),
        expired_date_time: Set(dto.expired_date_time),
        expires_at_ms: Set(dto.expires_at_ms),
        additional_notes: Set(dto.additional_notes),
        donor: Set(dto.donor),
        donor_email: Set(dto.donor_email),
        food_status: Set(dto.food_status),
        request_date: Set(dto.request_date),
        benefactor_email: Set(dto.benefactor_email),
        benefactor_name: Set(dto.benefactor_name),
    };

    foods::Entity::insert(active)
        .exec_without_returning(conn)
        .await?;
    Ok(id)
}

/// Returns the number of rows deleted (0 or 1).
pub async fn delete_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: &str,
) -> Result<u64, sea_orm::DbErr> {
    let result = foods::Entity::delete_by_id(id.to_owned()).exec(conn).await?;
    Ok(result.rows_affected)
}

/// Returns the number of rows matched (0 or 1). Caller guarantees at
/// least one column is set.
pub async fn update_details<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: &str,
    dto: FoodDetailsUpdate,
) -> Result<u64, sea_orm::DbErr> {
    let active = foods::ActiveModel {
        food_name: settable(dto.food_name),
        food_image: settable(dto.food_image),
        food_quantity: settable(dto.food_quantity),
        pickup_location: settable(dto.pickup_location),
        expired_date_time: settable(dto.expired_date_time),
        expires_at_ms: settable(dto.expires_at_ms),
        additional_notes: settable(dto.additional_notes),
        ..Default::default()
    };

    let result = foods::Entity::update_many()
        .set(active)
        .filter(foods::Column::Id.eq(id))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}

/// Returns the number of rows matched (0 or 1). Caller guarantees at
/// least one column is set.
pub async fn update_request<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: &str,
    dto: FoodRequestUpdate,
) -> Result<u64, sea_orm::DbErr> {
    let mut active = foods::ActiveModel {
        additional_notes: settable(dto.additional_notes),
        ..Default::default()
    };
    if let Some(group) = dto.group {
        active.food_status = Set(group.food_status);
        active.request_date = Set(group.request_date);
        active.benefactor_email = Set(group.benefactor_email);
        active.benefactor_name = Set(group.benefactor_name);
    }

    let result = foods::Entity::update_many()
        .set(active)
        .filter(foods::Column::Id.eq(id))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}

fn settable<T>(value: Option<T>) -> ActiveValue<T>
where
    T: Into<sea_orm::Value>,
{
    match value {
        Some(v) => Set(v),
        None => ActiveValue::NotSet,
    }
}
