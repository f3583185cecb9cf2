use actix_web::http::header::RETRY_AFTER;
use actix_web::{test, web, HttpResponse};
use nourish_backend::errors::domain::{DomainError, InfraErrorKind};
use nourish_backend::{AppError, ErrorCode};

use crate::common::assert_problem_details_structure;
use crate::support::create_test_app;
use crate::support::test_state::build_test_state;

async fn store_failure() -> Result<HttpResponse, AppError> {
    Err(DomainError::infra(InfraErrorKind::Other("DbErr".into()), "Database operation failed").into())
}

async fn store_unavailable() -> Result<HttpResponse, AppError> {
    Err(DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable").into())
}

async fn store_timeout() -> Result<HttpResponse, AppError> {
    Err(DomainError::infra(InfraErrorKind::Timeout, "Database timeout").into())
}

async fn bad_request() -> Result<HttpResponse, AppError> {
    Err(AppError::bad_request(ErrorCode::BadRequest, "Invalid request format"))
}

async fn internal() -> Result<HttpResponse, AppError> {
    Err(AppError::internal("boom"))
}

#[actix_web::test]
async fn test_all_error_responses_conform_to_problem_details() {
    let state = build_test_state().await;
    let app = create_test_app(state)
        .with_routes(|cfg| {
            cfg.route("/_test/db", web::get().to(store_failure))
                .route("/_test/db_unavailable", web::get().to(store_unavailable))
                .route("/_test/db_timeout", web::get().to(store_timeout))
                .route("/_test/bad_request", web::get().to(bad_request))
                .route("/_test/internal", web::get().to(internal));
        })
        .build()
        .await;

    let cases = [
        ("/_test/db", 500, "DB_ERROR"),
        ("/_test/db_unavailable", 503, "DB_UNAVAILABLE"),
        ("/_test/db_timeout", 504, "DB_TIMEOUT"),
        ("/_test/bad_request", 400, "BAD_REQUEST"),
        ("/_test/internal", 500, "INTERNAL"),
    ];

    for (uri, status, code) in cases {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;

        let retry_after = resp.headers().get(RETRY_AFTER).cloned();
        let request_id = resp
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        let problem = assert_problem_details_structure(resp, status, code).await;

        if status == 503 {
            assert_eq!(retry_after.unwrap(), "1");
        } else {
            assert!(retry_after.is_none(), "{uri} should not send Retry-After");
        }
        // Errors render inside the request's trace scope
        assert_eq!(Some(problem.trace_id), request_id);
    }
}
