//! Role entity model.

use estate_core::field::{FieldDef, FieldKind, FieldValue};
use estate_core::key::{EntityKey, KeyShape};
use estate_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::entity::{Entity, Record};

/// A role row from the `roles_info` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Role {
    #[serde(default)]
    pub id: DbId,
    pub name: String,
}

impl Record for Role {
    const NAME: &'static str = "Role";
    const SOURCE: &'static str = "roles_info";
    const KEY: KeyShape = KeyShape::Single { column: "id" };
    const COLUMNS: &'static str = "id, name";
}

impl Entity for Role {
    const FIELDS: &'static [FieldDef] = &[FieldDef::new("name", "name", FieldKind::Text)];

    fn key(&self) -> EntityKey {
        EntityKey::Single(self.id)
    }

    fn values(&self) -> Vec<FieldValue> {
        vec![FieldValue::Text(self.name.clone())]
    }

    fn assign_id(&mut self, id: DbId) {
        self.id = id;
    }
}
