//! Request trace ids on responses

use actix_web::{test, web, HttpResponse};
use nourish_backend::trace_ctx;

use crate::support::create_test_app;
use crate::support::test_state::build_test_state;

async fn echo_trace_id() -> HttpResponse {
    HttpResponse::Ok().body(trace_ctx::trace_id())
}

#[actix_web::test]
async fn test_handler_sees_request_id_from_header() {
    let state = build_test_state().await;
    let app = create_test_app(state)
        .with_routes(|cfg| {
            cfg.route("/_test/trace", web::get().to(echo_trace_id));
        })
        .build()
        .await;

    let req = test::TestRequest::get().uri("/_test/trace").to_request();
    let resp = test::call_service(&app, req).await;

    let header = resp
        .headers()
        .get("x-request-id")
        .expect("x-request-id header")
        .to_str()
        .unwrap()
        .to_string();
    let body = test::read_body(resp).await;

    assert_eq!(body, header.as_bytes());
    assert_ne!(header, "unknown");
}
