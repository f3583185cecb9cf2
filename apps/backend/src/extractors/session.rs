use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};

use crate::auth::cookie::SESSION_COOKIE;
use crate::auth::gate::SessionIdentity;
use crate::error::AppError;
use crate::state::app_state::AppState;

/// Identity the configured gate bound to this request.
///
/// Extraction fails (401) when the gate rejects the `token` cookie, so a
/// handler taking `Session` never runs for an unauthenticated caller.
#[derive(Debug, Clone)]
pub struct Session(pub SessionIdentity);

impl Session {
    /// Apply the gate's ownership check for `requested_email`.
    pub fn authorize_owner(&self, state: &AppState, requested_email: &str) -> Result<(), AppError> {
        state.gate.authorize_owner(&self.0, requested_email)
    }
}

impl FromRequest for Session {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let Some(state) = req.app_data::<web::Data<AppState>>() else {
            return ready(Err(AppError::internal("AppState not available")));
        };

        let cookie = req.cookie(SESSION_COOKIE);
        let token = cookie.as_ref().map(|c| c.value());

        ready(state.gate.verify(token).map(Session))
    }
}
