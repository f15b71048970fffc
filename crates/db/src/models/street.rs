//! Street entity model.

use estate_core::field::{FieldDef, FieldKind, FieldValue};
use estate_core::key::{EntityKey, KeyShape};
use estate_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::entity::{Entity, Record};

/// A row from the `street_info` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Street {
    #[serde(default)]
    pub id: DbId,
    pub street_name: String,
}

impl Record for Street {
    const NAME: &'static str = "Street";
    const SOURCE: &'static str = "street_info";
    const KEY: KeyShape = KeyShape::Single { column: "id" };
    const COLUMNS: &'static str = "id, street_name";
}

impl Entity for Street {
    const FIELDS: &'static [FieldDef] =
        &[FieldDef::new("streetName", "street_name", FieldKind::Text)];

    fn key(&self) -> EntityKey {
        EntityKey::Single(self.id)
    }

    fn values(&self) -> Vec<FieldValue> {
        vec![FieldValue::Text(self.street_name.clone())]
    }

    fn assign_id(&mut self, id: DbId) {
        self.id = id;
    }
}
