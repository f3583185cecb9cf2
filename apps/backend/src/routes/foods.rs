//! Food record handlers. Each one is a single repository call.

use actix_web::{web, HttpResponse};
use tracing::{debug, info};

use crate::domain::{FoodPatch, NewFood};
use crate::error::AppError;
use crate::extractors::{FoodId, Session, ValidatedJson};
use crate::logging::pii::Redacted;
use crate::repos::foods;
use crate::state::app_state::AppState;

async fn list_foods(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let records = foods::list_all(app_state.db()).await?;
    Ok(HttpResponse::Ok().json(records))
}

/// A missing record is `null`, not 404.
async fn get_food(
    id: FoodId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let record = foods::find_by_id(app_state.db(), id.as_str()).await?;
    Ok(HttpResponse::Ok().json(record))
}

async fn list_foods_by_expiry(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let records = foods::list_by_expiry(app_state.db()).await?;
    Ok(HttpResponse::Ok().json(records))
}

async fn create_food(
    body: ValidatedJson<NewFood>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let food = body.into_inner();
    let donor = food.donor.email.clone();

    let ack = foods::insert(app_state.db(), food).await?;

    info!(event = "food.created", food_id = %ack.inserted_id, donor = %Redacted(&donor));
    Ok(HttpResponse::Ok().json(ack))
}

async fn my_foods(
    session: Session,
    email: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let email = email.into_inner();
    session.authorize_owner(&app_state, &email)?;

    let records = foods::list_by_donor(app_state.db(), &email).await?;
    debug!(count = records.len(), donor = %Redacted(&email), "Listed donor records");
    Ok(HttpResponse::Ok().json(records))
}

async fn delete_food(
    id: FoodId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let ack = foods::delete(app_state.db(), id.as_str()).await?;

    info!(event = "food.deleted", food_id = %id, deleted = ack.deleted_count);
    Ok(HttpResponse::Ok().json(ack))
}

async fn update_food(
    id: FoodId,
    body: ValidatedJson<FoodPatch>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let ack = foods::update_details(app_state.db(), id.as_str(), body.into_inner()).await?;

    info!(event = "food.updated", food_id = %id, matched = ack.matched_count);
    Ok(HttpResponse::Ok().json(ack))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/foods")
            .route(web::get().to(list_foods))
            .route(web::post().to(create_food)),
    );
    cfg.route("/foods-sortby", web::get().to(list_foods_by_expiry));
    cfg.route("/foods/{id}", web::delete().to(delete_food));
    cfg.service(
        web::resource("/food/{id}")
            .route(web::get().to(get_food))
            .route(web::patch().to(update_food)),
    );
    cfg.route("/my-foods/{email}", web::get().to(my_foods));
}
