use std::fmt::{Display, Formatter, Result as FmtResult};
use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use ulid::Ulid;

use crate::error::AppError;
use crate::errors::ErrorCode;

/// Record ID taken from the `{id}` path segment.
///
/// IDs are ULIDs; anything that does not parse is rejected with
/// `INVALID_FOOD_ID` before the store is touched. Existence is not
/// checked here: a well-formed but unknown ID is a normal "not found".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoodId(pub String);

impl FoodId {
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        Ulid::from_string(raw.trim())
            .map(|id| FoodId(id.to_string()))
            .map_err(|_| {
                AppError::bad_request(ErrorCode::InvalidFoodId, format!("Invalid food id: {raw}"))
            })
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for FoodId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

impl FromRequest for FoodId {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = match req.match_info().get("id") {
            Some(raw) => FoodId::parse(raw),
            None => Err(AppError::bad_request(
                ErrorCode::InvalidFoodId,
                "Missing id parameter",
            )),
        };
        ready(result)
    }
}
