//! Apartment entity model.

use estate_core::field::{FieldDef, FieldKind, FieldValue};
use estate_core::key::{EntityKey, KeyShape};
use estate_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::entity::{Entity, Record};

/// A row from the `apartment_info` table.
///
/// `user_id` and `house_id` are plain references; no foreign key is
/// enforced.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Apartment {
    #[serde(default)]
    pub id: DbId,
    pub user_id: DbId,
    pub house_id: DbId,
    pub a_name: String,
}

impl Record for Apartment {
    const NAME: &'static str = "Apartment";
    const SOURCE: &'static str = "apartment_info";
    const KEY: KeyShape = KeyShape::Single { column: "id" };
    const COLUMNS: &'static str = "id, user_id, house_id, a_name";
}

impl Entity for Apartment {
    const FIELDS: &'static [FieldDef] = &[
        FieldDef::new("userId", "user_id", FieldKind::Integer),
        FieldDef::new("houseId", "house_id", FieldKind::Integer),
        FieldDef::new("aName", "a_name", FieldKind::Text),
    ];

    fn key(&self) -> EntityKey {
        EntityKey::Single(self.id)
    }

    fn values(&self) -> Vec<FieldValue> {
        vec![
            FieldValue::Integer(self.user_id),
            FieldValue::Integer(self.house_id),
            FieldValue::Text(self.a_name.clone()),
        ]
    }

    fn assign_id(&mut self, id: DbId) {
        self.id = id;
    }
}
