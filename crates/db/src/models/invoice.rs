//! Invoice entity model.

use estate_core::field::{FieldDef, FieldKind, FieldValue};
use estate_core::key::{EntityKey, KeyShape};
use estate_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::entity::{Entity, Record};

/// A row from the `invoice_info` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    #[serde(default)]
    pub id: DbId,
    pub user_id: DbId,
    pub date_issue: Timestamp,
    pub due_date: Timestamp,
    pub amount: Decimal,
    pub ref_no: String,
    pub fee_type: String,
}

impl Record for Invoice {
    const NAME: &'static str = "Invoice";
    const SOURCE: &'static str = "invoice_info";
    const KEY: KeyShape = KeyShape::Single { column: "id" };
    const COLUMNS: &'static str = "id, user_id, date_issue, due_date, amount, ref_no, fee_type";
}

impl Entity for Invoice {
    const FIELDS: &'static [FieldDef] = &[
        FieldDef::new("userId", "user_id", FieldKind::Integer),
        FieldDef::new("dateIssue", "date_issue", FieldKind::Timestamp),
        FieldDef::new("dueDate", "due_date", FieldKind::Timestamp),
        FieldDef::new("amount", "amount", FieldKind::Decimal),
        FieldDef::new("refNo", "ref_no", FieldKind::Text),
        FieldDef::new("feeType", "fee_type", FieldKind::Text),
    ];

    fn key(&self) -> EntityKey {
        EntityKey::Single(self.id)
    }

    fn values(&self) -> Vec<FieldValue> {
        vec![
            FieldValue::Integer(self.user_id),
            FieldValue::Timestamp(self.date_issue),
            FieldValue::Timestamp(self.due_date),
            FieldValue::Decimal(self.amount),
            FieldValue::Text(self.ref_no.clone()),
            FieldValue::Text(self.fee_type.clone()),
        ]
    }

    fn assign_id(&mut self, id: DbId) {
        self.id = id;
    }
}
