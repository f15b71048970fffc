//! User/house link model.

use estate_core::field::{FieldDef, FieldValue};
use estate_core::key::{EntityKey, KeyShape};
use estate_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::entity::{Entity, Record};

/// A row from the `user_properties_info` link table.
///
/// Keyed by `(user_id, house_id)`; the key is supplied by the caller and
/// there are no other columns.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProperty {
    pub user_id: DbId,
    pub house_id: DbId,
}

impl Record for UserProperty {
    const NAME: &'static str = "UserProperty";
    const SOURCE: &'static str = "user_properties_info";
    const KEY: KeyShape = KeyShape::Composite {
        columns: ["user_id", "house_id"],
    };
    const COLUMNS: &'static str = "user_id, house_id";
}

impl Entity for UserProperty {
    const FIELDS: &'static [FieldDef] = &[];

    fn key(&self) -> EntityKey {
        EntityKey::Composite(self.user_id, self.house_id)
    }

    fn values(&self) -> Vec<FieldValue> {
        Vec::new()
    }
}
