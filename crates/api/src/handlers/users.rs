//! User-only endpoints on top of the generic lifecycle.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use estate_core::credentials::{
    CredentialCheck, Credentials, CREDENTIAL_MATCH_MESSAGE, CREDENTIAL_MISMATCH_MESSAGE,
};

use crate::error::AppResult;
use crate::response::LoginResponse;
use crate::state::AppState;

/// POST /api/v1/users/login
///
/// Match a phone number and password against stored users. A match answers
/// 200 with the user's role name; a mismatch answers 404. The HTTP status
/// mirrors `responseCode` in the body.
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<Credentials>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(credentials) = payload?;

    let (status, body) = match state.entities.check_credentials(&credentials).await? {
        CredentialCheck::Matched { role_name } => {
            tracing::info!(role = %role_name, "Login succeeded");
            (
                StatusCode::OK,
                LoginResponse {
                    response_code: StatusCode::OK.as_u16(),
                    data: Some(role_name),
                    message: CREDENTIAL_MATCH_MESSAGE,
                },
            )
        }
        CredentialCheck::Mismatch => {
            tracing::info!("Login rejected");
            (
                StatusCode::NOT_FOUND,
                LoginResponse {
                    response_code: StatusCode::NOT_FOUND.as_u16(),
                    data: None,
                    message: CREDENTIAL_MISMATCH_MESSAGE,
                },
            )
        }
    };

    Ok((status, Json(body)))
}
