//! Generic lifecycle handlers, instantiated once per resource type.
//!
//! Every handler is generic over the model type; the route tables in
//! [`crate::routes`] pick the concrete type. All store work goes through
//! [`EntityService`](estate_db::lifecycle::EntityService).

use axum::extract::rejection::JsonRejection;
use axum::extract::{OriginalUri, State};
use axum::http::header::LOCATION;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use estate_core::patch::PatchOperation;
use estate_db::entity::{Entity, Record};

use crate::error::AppResult;
use crate::extract::KeyParam;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Reads
// ---------------------------------------------------------------------------

/// GET /api/v1/{resource}
///
/// Every record of the resource, ordered by key.
pub async fn list<T: Record>(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let items = state.entities.list::<T>().await?;

    Ok(Json(DataResponse { data: items }))
}

/// GET /api/v1/{resource}/{key}
pub async fn get<T: Record>(
    State(state): State<AppState>,
    KeyParam(key): KeyParam,
) -> AppResult<impl IntoResponse> {
    let item = state.entities.get::<T>(key).await?;

    Ok(Json(DataResponse { data: item }))
}

// ---------------------------------------------------------------------------
// Writes
// ---------------------------------------------------------------------------

/// POST /api/v1/{resource}
///
/// Create a record. Allocated identifiers in the body are ignored; the
/// response carries the stored record and its `Location`.
pub async fn create<T: Entity>(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    payload: Result<Json<T>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(payload) = payload?;
    let stored = state.entities.create(payload).await?;

    let location = format!("{}/{}", uri.path().trim_end_matches('/'), stored.key());

    Ok((
        StatusCode::CREATED,
        [(LOCATION, location)],
        Json(DataResponse { data: stored }),
    ))
}

/// PUT /api/v1/{resource}
///
/// Overwrite every mutable field of the record named by the body's key.
pub async fn replace<T: Entity>(
    State(state): State<AppState>,
    payload: Result<Json<T>, JsonRejection>,
) -> AppResult<StatusCode> {
    let Json(payload) = payload?;
    state.entities.replace(payload).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /api/v1/{resource}/{key}
///
/// Apply a JSON Patch document. Either every operation applies or nothing
/// is written and each failure is reported.
pub async fn patch<T: Entity>(
    State(state): State<AppState>,
    KeyParam(key): KeyParam,
    operations: Result<Json<Vec<PatchOperation>>, JsonRejection>,
) -> AppResult<StatusCode> {
    let Json(operations) = operations?;
    state.entities.patch::<T>(key, &operations).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/{resource}/{key}
pub async fn delete<T: Entity>(
    State(state): State<AppState>,
    KeyParam(key): KeyParam,
) -> AppResult<StatusCode> {
    state.entities.delete::<T>(key).await?;

    Ok(StatusCode::NO_CONTENT)
}
