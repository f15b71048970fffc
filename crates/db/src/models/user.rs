//! User entity model.
//!
//! Passwords are stored and compared as plaintext, matching the existing
//! data set. Phone number and password are excluded from partial updates.

use estate_core::field::{FieldDef, FieldKind, FieldValue};
use estate_core::key::{EntityKey, KeyShape};
use estate_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::entity::{Entity, Record};

/// A row from the `user_info` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default)]
    pub id: DbId,
    pub role_name: String,
    pub f_name: String,
    pub l_name: String,
    pub phone_no: String,
    pub password: String,
}

impl Record for User {
    const NAME: &'static str = "User";
    const SOURCE: &'static str = "user_info";
    const KEY: KeyShape = KeyShape::Single { column: "id" };
    const COLUMNS: &'static str = "id, role_name, f_name, l_name, phone_no, password";
}

impl Entity for User {
    const FIELDS: &'static [FieldDef] = &[
        FieldDef::new("roleName", "role_name", FieldKind::Text),
        FieldDef::new("fName", "f_name", FieldKind::Text),
        FieldDef::new("lName", "l_name", FieldKind::Text),
        FieldDef::new("phoneNo", "phone_no", FieldKind::Text).fixed(),
        FieldDef::new("password", "password", FieldKind::Text).fixed(),
    ];

    fn key(&self) -> EntityKey {
        EntityKey::Single(self.id)
    }

    fn values(&self) -> Vec<FieldValue> {
        vec![
            FieldValue::Text(self.role_name.clone()),
            FieldValue::Text(self.f_name.clone()),
            FieldValue::Text(self.l_name.clone()),
            FieldValue::Text(self.phone_no.clone()),
            FieldValue::Text(self.password.clone()),
        ]
    }

    fn assign_id(&mut self, id: DbId) {
        self.id = id;
    }
}
