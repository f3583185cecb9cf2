//! POST /jwt and POST /logout

use actix_web::cookie::time::Duration as CookieDuration;
use actix_web::cookie::SameSite;
use actix_web::test;
use nourish_backend::auth::jwt::verify_session_token;
use serde_json::{json, Value};

use crate::common::assert_problem_details_structure;
use crate::support::create_test_app;
use crate::support::test_state::{build_test_state, test_security};

#[actix_web::test]
async fn test_issue_token_sets_session_cookie() {
    let state = build_test_state().await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/jwt")
        .set_json(json!({"email": "donor@example.test", "name": "Dee"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let cookie = resp
        .response()
        .cookies()
        .find(|c| c.name() == "token")
        .expect("token cookie should be set")
        .into_owned();

    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.secure(), Some(true));
    assert_eq!(cookie.same_site(), Some(SameSite::None));
    assert_eq!(cookie.path(), Some("/"));
    assert_eq!(cookie.max_age(), Some(CookieDuration::seconds(3600)));

    let claims = verify_session_token(cookie.value(), &test_security()).unwrap();
    assert_eq!(claims.email, "donor@example.test");
    assert_eq!(claims.exp - claims.iat, 3600);
    assert_eq!(claims.extra.get("name"), Some(&json!("Dee")));

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"success": true}));
}

#[actix_web::test]
async fn test_issue_token_rejects_blank_email() {
    let state = build_test_state().await;
    let app = create_test_app(state).with_prod_routes().build().await;

    for body in [json!({"email": "   "}), json!({"name": "no email"})] {
        let req = test::TestRequest::post()
            .uri("/jwt")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.response().cookies().next().is_none());
        assert_problem_details_structure(resp, 400, "INVALID_EMAIL").await;
    }
}

#[actix_web::test]
async fn test_issue_token_rejects_malformed_json() {
    let state = build_test_state().await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/jwt")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"email\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_structure(resp, 400, "BAD_REQUEST").await;
}

#[actix_web::test]
async fn test_logout_clears_cookie_and_is_idempotent() {
    let state = build_test_state().await;
    let app = create_test_app(state).with_prod_routes().build().await;

    for _ in 0..2 {
        let req = test::TestRequest::post().uri("/logout").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let cookie = resp
            .response()
            .cookies()
            .find(|c| c.name() == "token")
            .expect("removal cookie should be set")
            .into_owned();
        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.max_age(), Some(CookieDuration::ZERO));
        assert_eq!(cookie.same_site(), Some(SameSite::None));

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"success": true}));
    }
}
