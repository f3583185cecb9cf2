use std::time::SystemTime;

use actix_web::{web, HttpResponse, Result};
use serde::Serialize;
use tracing::info;

use crate::auth::claims::IdentityPayload;
use crate::auth::cookie::{removal_cookie, session_cookie};
use crate::auth::jwt::mint_session_token;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::ValidatedJson;
use crate::logging::pii::Redacted;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub success: bool,
}

/// Issue a session token for the posted identity and set it as the
/// `token` cookie.
async fn issue_token(
    body: ValidatedJson<IdentityPayload>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let identity = body.into_inner();

    if identity.email.trim().is_empty() {
        return Err(AppError::bad_request(
            ErrorCode::InvalidEmail,
            "Email cannot be empty",
        ));
    }

    let token = mint_session_token(
        &identity.email,
        identity.extra,
        SystemTime::now(),
        &app_state.security,
    )?;

    info!(event = "session.issued", email = %Redacted(&identity.email));

    Ok(HttpResponse::Ok()
        .cookie(session_cookie(token, &app_state.security))
        .json(SessionResponse { success: true }))
}

/// Clear the `token` cookie. Idempotent; the body is ignored.
async fn logout(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    info!(event = "session.cleared");

    Ok(HttpResponse::Ok()
        .cookie(removal_cookie(&app_state.security))
        .json(SessionResponse { success: true }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/jwt", web::post().to(issue_token));
    cfg.route("/logout", web::post().to(logout));
}
