//! Tests for `AppError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no server or
//! database is involved.

use std::time::Duration;

use assert_matches::assert_matches;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use estate_api::error::AppError;
use estate_core::error::CoreError;
use estate_core::key::EntityKey;
use estate_core::patch::PatchOperationError;
use estate_db::error::StoreError;
use http_body_util::BodyExt;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn not_found_names_entity_and_key() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "House",
        key: EntityKey::Single(42),
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "House with id 42 not found");
}

#[tokio::test]
async fn composite_not_found_shows_both_parts() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "UserProperty",
        key: EntityKey::Composite(3, 7),
    });

    let (_, json) = error_to_response(err).await;
    assert_eq!(json["error"], "UserProperty with id 3/7 not found");
}

#[tokio::test]
async fn bad_input_returns_400() {
    let err = AppError::Core(CoreError::BadInput("Invalid ID".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_INPUT");
    assert_eq!(json["error"], "Invalid ID");
    assert!(json.get("details").is_none());
}

#[tokio::test]
async fn validation_failed_lists_details() {
    let err = AppError::Core(CoreError::ValidationFailed(vec![PatchOperationError {
        index: 0,
        op: "replace".into(),
        path: "/phoneNo".into(),
        message: "The target location specified by path segment 'phoneNo' was not found."
            .into(),
    }]));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_FAILED");
    assert_eq!(
        json["error"],
        "replace operation failed on path /phoneNo due to error: \
         The target location specified by path segment 'phoneNo' was not found."
    );
    assert_eq!(json["details"][0]["index"], 0);
    assert_eq!(json["details"][0]["op"], "replace");
    assert_eq!(json["details"][0]["path"], "/phoneNo");
}

#[tokio::test]
async fn conflict_returns_409() {
    let err = AppError::Core(CoreError::Conflict("duplicate key".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], "CONFLICT");
}

#[tokio::test]
async fn read_only_returns_405() {
    let err = AppError::Core(CoreError::ReadOnly("Temp_View"));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(json["code"], "READ_ONLY_RESOURCE");
    assert_eq!(json["error"], "Temp_View is a read-only view");
}

#[tokio::test]
async fn store_unavailable_hides_detail() {
    let err = AppError::Core(CoreError::StoreUnavailable(
        "connection refused at 10.0.0.5:5432".into(),
    ));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["code"], "STORE_UNAVAILABLE");
    assert!(!json["error"].as_str().unwrap().contains("10.0.0.5"));
}

#[tokio::test]
async fn pool_timeout_is_store_unavailable() {
    let err = AppError::from(StoreError::from(sqlx::Error::PoolTimedOut));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["code"], "STORE_UNAVAILABLE");
}

#[tokio::test]
async fn store_timeout_returns_503() {
    let err = AppError::from(StoreError::Timeout(Duration::from_secs(10)));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["code"], "STORE_TIMEOUT");
}

#[tokio::test]
async fn unclassified_store_failure_is_internal_error() {
    let err = AppError::from(StoreError::Database(sqlx::Error::ColumnNotFound(
        "fee_amount".into(),
    )));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
    assert!(json.get("details").is_none());
}

#[tokio::test]
async fn internal_error_returns_500_and_sanitizes_message() {
    let err = AppError::Core(CoreError::Internal(
        "secret database credentials leaked".into(),
    ));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}

#[test]
fn store_errors_map_onto_core_variants() {
    let err = AppError::from(StoreError::Core(CoreError::Conflict("dup".into())));
    assert_matches!(err, AppError::Core(CoreError::Conflict(msg)) if msg == "dup");

    let err = AppError::from(StoreError::from(sqlx::Error::PoolClosed));
    assert_matches!(err, AppError::Core(CoreError::StoreUnavailable(_)));

    let err = AppError::from(StoreError::Database(sqlx::Error::RowNotFound));
    assert_matches!(err, AppError::Core(CoreError::Internal(_)));
}
