//! Shared response envelope types for API handlers.
//!
//! Successful responses with a body use a `{ "data": ... }` envelope.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// ```ignore
/// Ok(Json(DataResponse { data: houses }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Body of the login endpoint, which keeps its own `responseCode` envelope.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub response_code: u16,
    pub data: Option<String>,
    pub message: &'static str,
}
