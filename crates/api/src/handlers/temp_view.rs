//! Mutation endpoints of the read-only `Temp_View` resource.
//!
//! The routes exist so callers get an explicit answer instead of a bare
//! 405 from the router; the body, if any, is never read.

use axum::http::StatusCode;
use estate_core::error::CoreError;
use estate_db::entity::Record;
use estate_db::models::TempView;

use crate::error::{AppError, AppResult};

/// POST, PUT, PATCH, DELETE on /api/v1/temp-view[/{id}]
pub async fn reject_mutation() -> AppResult<StatusCode> {
    tracing::debug!(resource = TempView::NAME, "Mutation on read-only view rejected");
    Err(AppError::Core(CoreError::ReadOnly(TempView::NAME)))
}
