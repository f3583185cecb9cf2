use actix_web::test;
use serde_json::Value;

use crate::support::create_test_app;
use crate::support::test_state::build_test_state;

#[actix_web::test]
async fn test_root_liveness_text() {
    let state = build_test_state().await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body = test::read_body(resp).await;
    assert_eq!(body, "Nourish4All is running");
}

#[actix_web::test]
async fn test_health_reports_db_and_migrations() {
    let state = build_test_state().await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["db"], "ok");
    assert!(body.get("db_error").is_none());
    assert_eq!(body["migrations"], "m20251019_000001_create_foods");
    assert!(body["app_version"].as_str().is_some());
    assert!(body["time"].as_str().is_some());
}
