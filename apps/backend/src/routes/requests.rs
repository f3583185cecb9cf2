//! Benefactor side: claiming a record and listing claimed records.

use actix_web::{web, HttpResponse};
use tracing::{debug, info};

use crate::domain::FoodRequestPatch;
use crate::error::AppError;
use crate::extractors::{FoodId, Session, ValidatedJson};
use crate::logging::pii::Redacted;
use crate::repos::foods;
use crate::state::app_state::AppState;

async fn request_food(
    id: FoodId,
    body: ValidatedJson<FoodRequestPatch>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let ack = foods::request_food(app_state.db(), id.as_str(), body.into_inner()).await?;

    info!(event = "food.requested", food_id = %id, matched = ack.matched_count);
    Ok(HttpResponse::Ok().json(ack))
}

async fn my_requests(
    session: Session,
    email: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let email = email.into_inner();
    session.authorize_owner(&app_state, &email)?;

    let records = foods::list_by_benefactor(app_state.db(), &email).await?;
    debug!(count = records.len(), benefactor = %Redacted(&email), "Listed requested records");
    Ok(HttpResponse::Ok().json(records))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/request/{id}", web::patch().to(request_food));
    cfg.route("/my-food-request/{email}", web::get().to(my_requests));
}
