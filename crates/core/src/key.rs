//! Entity keys.
//!
//! Most entities are addressed by a single allocated integer. Link tables
//! (user properties) are addressed by a composite `(user_id, house_id)` pair
//! supplied by the caller. Both shapes flow through the same lifecycle
//! engine as an [`EntityKey`].

use std::fmt;

use serde::Serialize;

use crate::error::CoreError;
use crate::types::DbId;

/// How a record type is keyed in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyShape {
    /// One integer column, allocated on create as `max + 1`.
    Single { column: &'static str },
    /// Two integer columns supplied by the caller.
    Composite { columns: [&'static str; 2] },
}

impl KeyShape {
    /// Key column names in binding order.
    pub fn columns(&self) -> &[&'static str] {
        match self {
            Self::Single { column } => std::slice::from_ref(column),
            Self::Composite { columns } => columns,
        }
    }
}

/// A concrete key value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum EntityKey {
    Single(DbId),
    Composite(DbId, DbId),
}

impl EntityKey {
    /// Key parts in binding order.
    pub fn parts(&self) -> Vec<DbId> {
        match *self {
            Self::Single(id) => vec![id],
            Self::Composite(a, b) => vec![a, b],
        }
    }

    /// Check the key matches `shape` and every part is positive.
    pub fn validate(&self, shape: KeyShape) -> Result<(), CoreError> {
        let shape_matches = matches!(
            (self, shape),
            (Self::Single(_), KeyShape::Single { .. })
                | (Self::Composite(..), KeyShape::Composite { .. })
        );
        if !shape_matches {
            return Err(CoreError::BadInput(format!(
                "Key {self} does not address a record keyed by ({})",
                shape.columns().join(", ")
            )));
        }
        if self.parts().iter().any(|part| *part <= 0) {
            return Err(CoreError::BadInput("Invalid ID".into()));
        }
        Ok(())
    }
}

impl From<DbId> for EntityKey {
    fn from(id: DbId) -> Self {
        Self::Single(id)
    }
}

impl From<(DbId, DbId)> for EntityKey {
    fn from((a, b): (DbId, DbId)) -> Self {
        Self::Composite(a, b)
    }
}

impl fmt::Display for EntityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(id) => write!(f, "{id}"),
            Self::Composite(a, b) => write!(f, "{a}/{b}"),
        }
    }
}
