#![allow(dead_code)]

// tests/common/mod.rs
use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::problem_details::{
    assert_problem_details_from_service_response, ProblemDetailsLike,
};
use serde_json::Value;

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// Validate the problem+json contract and return the body.
pub async fn assert_problem_details_structure(
    resp: ServiceResponse<BoxBody>,
    expected_status: u16,
    expected_code: &str,
) -> ProblemDetailsLike {
    let status = StatusCode::from_u16(expected_status).expect("valid status code");
    assert_problem_details_from_service_response(resp, expected_code, status).await
}

/// Assert a 200 and parse the JSON body.
pub async fn read_ok_json(resp: ServiceResponse<BoxBody>) -> Value {
    assert_eq!(resp.status(), StatusCode::OK, "expected 200 OK");
    test::read_body_json(resp).await
}

/// `_id` values of a JSON array of records, in order.
pub fn ids_of(records: &Value) -> Vec<String> {
    records
        .as_array()
        .expect("response should be a JSON array")
        .iter()
        .map(|r| r["_id"].as_str().expect("_id should be a string").to_string())
        .collect()
}
