//! Fee entity model.

use estate_core::field::{FieldDef, FieldKind, FieldValue};
use estate_core::key::{EntityKey, KeyShape};
use estate_core::types::DbId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::entity::{Entity, Record};

/// A row from the `fee_info` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fee {
    #[serde(default)]
    pub id: DbId,
    pub fee_name: String,
    pub fee_amount: Decimal,
}

impl Record for Fee {
    const NAME: &'static str = "Fee";
    const SOURCE: &'static str = "fee_info";
    const KEY: KeyShape = KeyShape::Single { column: "id" };
    const COLUMNS: &'static str = "id, fee_name, fee_amount";
}

impl Entity for Fee {
    const FIELDS: &'static [FieldDef] = &[
        FieldDef::new("feeName", "fee_name", FieldKind::Text),
        FieldDef::new("feeAmount", "fee_amount", FieldKind::Decimal),
    ];

    fn key(&self) -> EntityKey {
        EntityKey::Single(self.id)
    }

    fn values(&self) -> Vec<FieldValue> {
        vec![
            FieldValue::Text(self.fee_name.clone()),
            FieldValue::Decimal(self.fee_amount),
        ]
    }

    fn assign_id(&mut self, id: DbId) {
        self.id = id;
    }
}
