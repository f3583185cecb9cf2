//! /request/{id} and the benefactor listing

use actix_web::test;
use serde_json::json;

use crate::common::{ids_of, read_ok_json};
use crate::support::auth::session_cookie_for;
use crate::support::create_test_app;
use crate::support::factory::{create_food, food_body, get_food};
use crate::support::test_state::{build_test_state, test_security};

#[actix_web::test]
async fn test_request_sets_request_fields_only() {
    let state = build_test_state().await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let id = create_food(&app, &food_body("Rice", "a@x.com", json!(1_700_000_000))).await;
    let before = get_food(&app, &id).await;

    let req = test::TestRequest::patch()
        .uri(&format!("/request/{id}"))
        .set_json(json!({
            "foodStatus": "requested",
            "requestDate": "2024-02-02T10:00",
            "benefactorEmail": "b@x.com",
            "benefactorName": "Bee",
            "additionalNotes": "Pick up after 5pm",
            "foodName": "Hijacked",
            "pickupLocation": "Elsewhere"
        }))
        .to_request();
    let ack = read_ok_json(test::call_service(&app, req).await).await;
    assert_eq!(ack["matchedCount"], json!(1));
    assert_eq!(ack["modifiedCount"], json!(1));
    assert_eq!(ack["upsertedId"], json!(null));

    let after = get_food(&app, &id).await;
    assert_eq!(after["foodStatus"], json!("requested"));
    assert_eq!(after["requestDate"], json!("2024-02-02T10:00"));
    assert_eq!(after["benefactorEmail"], json!("b@x.com"));
    assert_eq!(after["benefactorName"], json!("Bee"));
    assert_eq!(after["additionalNotes"], json!("Pick up after 5pm"));

    for field in [
        "foodName",
        "foodImage",
        "foodQuantity",
        "pickupLocation",
        "expiredDateTime",
        "donor",
    ] {
        assert_eq!(after[field], before[field], "{field} should be untouched");
    }
}

#[actix_web::test]
async fn test_benefactor_listing_shows_requested_records() {
    let state = build_test_state().await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let wanted = create_food(&app, &food_body("Rice", "a@x.com", json!(1))).await;
    create_food(&app, &food_body("Beans", "a@x.com", json!(2))).await;

    let req = test::TestRequest::patch()
        .uri(&format!("/request/{wanted}"))
        .set_json(json!({
            "foodStatus": "requested",
            "requestDate": "2024-02-02",
            "benefactorEmail": "b@x.com",
            "benefactorName": "Bee"
        }))
        .to_request();
    read_ok_json(test::call_service(&app, req).await).await;

    let req = test::TestRequest::get()
        .uri("/my-food-request/b@x.com")
        .cookie(session_cookie_for("b@x.com", &test_security()))
        .to_request();
    let body = read_ok_json(test::call_service(&app, req).await).await;
    assert_eq!(ids_of(&body), vec![wanted]);
}

#[actix_web::test]
async fn test_request_without_request_fields_writes_nothing() {
    let state = build_test_state().await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let id = create_food(&app, &food_body("Rice", "a@x.com", json!(1))).await;

    let req = test::TestRequest::patch()
        .uri(&format!("/request/{id}"))
        .set_json(json!({"foodName": "Hijacked"}))
        .to_request();
    let ack = read_ok_json(test::call_service(&app, req).await).await;
    assert_eq!(ack["matchedCount"], json!(1));
    assert_eq!(ack["modifiedCount"], json!(0));

    assert_eq!(get_food(&app, &id).await["foodName"], json!("Rice"));
}

#[actix_web::test]
async fn test_request_group_is_written_as_a_unit() {
    let state = build_test_state().await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let id = create_food(&app, &food_body("Rice", "a@x.com", json!(1))).await;

    let req = test::TestRequest::patch()
        .uri(&format!("/request/{id}"))
        .set_json(json!({
            "foodStatus": "requested",
            "requestDate": "2024-01-01",
            "benefactorEmail": "b@x.com",
            "benefactorName": "Bee"
        }))
        .to_request();
    read_ok_json(test::call_service(&app, req).await).await;

    let req = test::TestRequest::patch()
        .uri(&format!("/request/{id}"))
        .set_json(json!({"foodStatus": "available"}))
        .to_request();
    let ack = read_ok_json(test::call_service(&app, req).await).await;
    assert_eq!(ack["modifiedCount"], json!(1));

    let after = get_food(&app, &id).await;
    assert_eq!(after["foodStatus"], json!("available"));
    for field in ["requestDate", "benefactorEmail", "benefactorName"] {
        assert!(after.get(field).is_none(), "{field} should be cleared");
    }

    let req = test::TestRequest::get()
        .uri("/my-food-request/b@x.com")
        .cookie(session_cookie_for("b@x.com", &test_security()))
        .to_request();
    let body = read_ok_json(test::call_service(&app, req).await).await;
    assert!(ids_of(&body).is_empty());
}
