//! Request extractors shared by the entity handlers.

use axum::extract::{FromRequestParts, RawPathParams};
use axum::http::request::Parts;
use estate_core::error::CoreError;
use estate_core::key::EntityKey;
use estate_core::types::DbId;

use crate::error::AppError;

/// The entity key carried in the request path.
///
/// One path parameter yields [`EntityKey::Single`], two yield
/// [`EntityKey::Composite`] in route order. A non-numeric segment is a
/// `BAD_INPUT` error rather than axum's plain-text rejection. Whether the
/// shape fits the addressed type is checked by the lifecycle service.
#[derive(Debug, Clone, Copy)]
pub struct KeyParam(pub EntityKey);

impl<S: Send + Sync> FromRequestParts<S> for KeyParam {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let params = RawPathParams::from_request_parts(parts, state)
            .await
            .map_err(|_| invalid_id())?;

        let ids = params
            .iter()
            .map(|(_, value)| value.parse::<DbId>().map_err(|_| invalid_id()))
            .collect::<Result<Vec<_>, _>>()?;

        match ids.as_slice() {
            [id] => Ok(KeyParam(EntityKey::Single(*id))),
            [first, second] => Ok(KeyParam(EntityKey::Composite(*first, *second))),
            _ => Err(invalid_id()),
        }
    }
}

fn invalid_id() -> AppError {
    AppError::Core(CoreError::BadInput("Invalid ID".into()))
}
