use crate::key::EntityKey;
use crate::patch::PatchOperationError;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Bad input: {0}")]
    BadInput(String),

    #[error("Entity not found: {entity} with id {key}")]
    NotFound {
        entity: &'static str,
        key: EntityKey,
    },

    #[error("Patch rejected: {} operation(s) failed", .0.len())]
    ValidationFailed(Vec<PatchOperationError>),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("{0} is read-only")]
    ReadOnly(&'static str),

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Store call timed out")]
    Timeout,

    #[error("Internal error: {0}")]
    Internal(String),
}
