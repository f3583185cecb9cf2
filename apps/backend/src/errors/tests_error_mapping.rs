// Unit tests for error mapping - pure domain logic without HTTP or database dependencies
use actix_web::ResponseError;

use crate::errors::domain::{DomainError, InfraErrorKind};
use crate::{AppError, ErrorCode};

#[test]
fn maps_infra() {
    let t = DomainError::infra(InfraErrorKind::Timeout, "timeout");
    let app: AppError = t.into();
    assert_eq!(app.code().as_str(), "DB_TIMEOUT");
    assert_eq!(app.status().as_u16(), 504);
    assert!(matches!(app, AppError::Timeout { .. }));

    let down = DomainError::infra(InfraErrorKind::DbUnavailable, "down");
    let app: AppError = down.into();
    assert_eq!(app.code().as_str(), "DB_UNAVAILABLE");
    assert_eq!(app.status().as_u16(), 503);

    let corr = DomainError::infra(InfraErrorKind::DataCorruption, "bad");
    let app: AppError = corr.into();
    assert_eq!(app.code().as_str(), "DATA_CORRUPTION");
    assert_eq!(app.status().as_u16(), 500);

    let other = DomainError::infra(InfraErrorKind::Other("DbErr".to_string()), "other");
    let app: AppError = other.into();
    assert_eq!(app.code(), ErrorCode::DbError);
    assert_eq!(app.status().as_u16(), 500);
}

#[test]
fn auth_errors_carry_client_messages() {
    for err in [
        AppError::unauthorized_missing_token(),
        AppError::unauthorized_invalid_token(),
        AppError::unauthorized_expired_token(),
    ] {
        assert_eq!(err.status().as_u16(), 401);
        assert_eq!(err.message(), "unauthorized access");
    }

    let forbidden = AppError::forbidden();
    assert_eq!(forbidden.status().as_u16(), 403);
    assert_eq!(forbidden.message(), "forbidden access");
}

#[test]
fn error_response_uses_problem_json() {
    let resp = AppError::forbidden().error_response();
    assert_eq!(resp.status().as_u16(), 403);

    let content_type = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(content_type.starts_with("application/problem+json"));
    assert!(resp.headers().get("x-trace-id").is_some());
}

#[test]
fn unavailable_sets_retry_after() {
    let resp = AppError::DbUnavailable {
        detail: "Database unavailable".to_string(),
    }
    .error_response();
    assert_eq!(resp.status().as_u16(), 503);
    assert!(resp.headers().get("retry-after").is_some());
}

#[test]
fn humanizes_codes() {
    assert_eq!(
        AppError::humanize_code("UNAUTHORIZED_MISSING_TOKEN"),
        "Unauthorized Missing Token"
    );
    assert_eq!(AppError::humanize_code("FORBIDDEN"), "Forbidden");
}
