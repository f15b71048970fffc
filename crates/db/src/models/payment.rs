//! Payment entity model.

use estate_core::field::{FieldDef, FieldKind, FieldValue};
use estate_core::key::{EntityKey, KeyShape};
use estate_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::entity::{Entity, Record};

/// A row from the `payment_info` table.
///
/// Payments point at invoices by reference number, not by id.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    #[serde(default)]
    pub id: DbId,
    pub invoice_ref_no: String,
    pub amount_paid: Decimal,
    pub payment_method: String,
    pub payment_status: String,
    pub payment_date: Timestamp,
}

impl Record for Payment {
    const NAME: &'static str = "Payment";
    const SOURCE: &'static str = "payment_info";
    const KEY: KeyShape = KeyShape::Single { column: "id" };
    const COLUMNS: &'static str =
        "id, invoice_ref_no, amount_paid, payment_method, payment_status, payment_date";
}

impl Entity for Payment {
    const FIELDS: &'static [FieldDef] = &[
        FieldDef::new("invoiceRefNo", "invoice_ref_no", FieldKind::Text),
        FieldDef::new("amountPaid", "amount_paid", FieldKind::Decimal),
        FieldDef::new("paymentMethod", "payment_method", FieldKind::Text),
        FieldDef::new("paymentStatus", "payment_status", FieldKind::Text),
        FieldDef::new("paymentDate", "payment_date", FieldKind::Timestamp),
    ];

    fn key(&self) -> EntityKey {
        EntityKey::Single(self.id)
    }

    fn values(&self) -> Vec<FieldValue> {
        vec![
            FieldValue::Text(self.invoice_ref_no.clone()),
            FieldValue::Decimal(self.amount_paid),
            FieldValue::Text(self.payment_method.clone()),
            FieldValue::Text(self.payment_status.clone()),
            FieldValue::Timestamp(self.payment_date),
        ]
    }

    fn assign_id(&mut self, id: DbId) {
        self.id = id;
    }
}
