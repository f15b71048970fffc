//! HTTP-level integration tests for the entity resources.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::header::LOCATION;
use axum::http::StatusCode;
use common::{body_json, delete, get, patch_json, post_json, post_raw, put_json};
use serde_json::json;
use sqlx::PgPool;

fn house_body() -> serde_json::Value {
    json!({
        "houseNo": "12A",
        "streetName": "Maple",
        "isRented": false,
        "noOfApartment": 2,
        "houseType": "Detached",
        "rentPrice": 1200.0
    })
}

// ---------------------------------------------------------------------------
// House lifecycle
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_house_returns_201_with_location(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/houses", house_body()).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(response.headers().get(LOCATION).unwrap(), "/api/v1/houses/1");

    let json = body_json(response).await;
    assert_eq!(json["data"]["id"], 1);
    assert_eq!(json["data"]["houseNo"], "12A");
    assert_eq!(json["data"]["rentPrice"], 1200.0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn house_scenario(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(post_json(app, "/api/v1/houses", house_body()).await).await;
    assert_eq!(created["data"]["id"], 1);

    let mut replacement = created["data"].clone();
    replacement["rentPrice"] = json!(1500.00);
    let app = common::build_test_app(pool.clone());
    let response = put_json(app, "/api/v1/houses", replacement).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool.clone());
    let response = patch_json(
        app,
        "/api/v1/houses/1",
        json!([{ "op": "replace", "path": "/isRented", "value": true }]),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool.clone());
    let fetched = body_json(get(app, "/api/v1/houses/1").await).await;
    assert_eq!(fetched["data"]["rentPrice"], 1500.0);
    assert_eq!(fetched["data"]["isRented"], true);

    let app = common::build_test_app(pool.clone());
    let response = delete(app, "/api/v1/houses/1").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/houses/1").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_houses_wraps_in_data(pool: PgPool) {
    for _ in 0..2 {
        let app = common::build_test_app(pool.clone());
        post_json(app, "/api/v1/houses", house_body()).await;
    }

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/houses").await).await;
    let items = json["data"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["id"], 1);
    assert_eq!(items[1]["id"], 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn fee_amount_keeps_every_digit(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_raw(
        app,
        "/api/v1/fees",
        r#"{"feeName":"Service","feeAmount":1234567890123456.78}"#,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["data"]["feeAmount"].to_string(), "1234567890123456.78");

    let app = common::build_test_app(pool);
    let fetched = body_json(get(app, "/api/v1/fees/1").await).await;
    assert_eq!(fetched["data"]["feeAmount"].to_string(), "1234567890123456.78");
}

// ---------------------------------------------------------------------------
// Input errors
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn non_positive_id_is_bad_input(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/houses/0").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_INPUT");
    assert_eq!(json["error"], "Invalid ID");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn non_numeric_id_is_bad_input(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/streets/abc").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_INPUT");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn mutations_with_bad_keys_are_rejected(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = patch_json(
        app,
        "/api/v1/houses/99",
        json!([{ "op": "replace", "path": "/isRented", "value": true }]),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "House with id 99 not found");

    let app = common::build_test_app(pool.clone());
    let response = put_json(app, "/api/v1/streets", json!({ "streetName": "x" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_INPUT");

    let app = common::build_test_app(pool);
    let response = delete(app, "/api/v1/streets/-3").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_INPUT");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn malformed_body_is_bad_input(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_raw(app, "/api/v1/streets", "{not json").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_INPUT");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn rejected_patch_reports_every_failure(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_json(app, "/api/v1/houses", house_body()).await;

    let app = common::build_test_app(pool.clone());
    let response = patch_json(
        app,
        "/api/v1/houses/1",
        json!([
            { "op": "replace", "path": "/houseType", "value": "Bungalow" },
            { "op": "replace", "path": "/id", "value": 9 },
            { "op": "replace", "path": "/noOfApartment", "value": "many" }
        ]),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_FAILED");
    let details = json["details"].as_array().unwrap();
    assert_eq!(details.len(), 2);
    assert_eq!(details[0]["index"], 1);
    assert_eq!(details[0]["path"], "/id");
    assert_eq!(details[1]["index"], 2);

    let app = common::build_test_app(pool);
    let fetched = body_json(get(app, "/api/v1/houses/1").await).await;
    assert_eq!(fetched["data"]["houseType"], "Detached");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn empty_patch_document_is_bad_input(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_json(app, "/api/v1/houses", house_body()).await;

    let app = common::build_test_app(pool);
    let response = patch_json(app, "/api/v1/houses/1", json!([])).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_INPUT");
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_matches_stored_credentials(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/api/v1/users",
        json!({
            "roleName": "Landlord",
            "fName": "Ada",
            "lName": "Lovelace",
            "phoneNo": "0700123",
            "password": "pw"
        }),
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/users/login",
        json!({ "phoneNumber": "0700123", "password": "pw" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["responseCode"], 200);
    assert_eq!(json["data"], "Landlord");
    assert_eq!(json["message"], "Success");

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/users/login",
        json!({ "PhoneNumber": "0700123", "Password": "wrong" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["responseCode"], 404);
    assert!(json["data"].is_null());
    assert_eq!(json["message"], "Wrong User Name Or Password");
}

// ---------------------------------------------------------------------------
// Composite key and read-only view
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn user_property_uses_two_segment_key(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/user-properties",
        json!({ "userId": 3, "houseId": 7 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        response.headers().get(LOCATION).unwrap(),
        "/api/v1/user-properties/3/7"
    );

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/user-properties",
        json!({ "userId": 3, "houseId": 7 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/user-properties/3/7").await).await;
    assert_eq!(json["data"], json!({ "userId": 3, "houseId": 7 }));

    let app = common::build_test_app(pool.clone());
    let response = delete(app, "/api/v1/user-properties/3/7").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/user-properties/3/7").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn temp_view_is_read_only(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/v1/temp-view").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"], json!([]));

    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/v1/temp-view", json!({ "id": 1 })).await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body_json(response).await["code"], "READ_ONLY_RESOURCE");

    let app = common::build_test_app(pool);
    let response = delete(app, "/api/v1/temp-view/1").await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
