//! House entity model.

use estate_core::field::{FieldDef, FieldKind, FieldValue};
use estate_core::key::{EntityKey, KeyShape};
use estate_core::types::DbId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::entity::{Entity, Record};

/// A row from the `house_info` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct House {
    #[serde(default)]
    pub id: DbId,
    pub house_no: String,
    pub street_name: String,
    pub is_rented: bool,
    pub no_of_apartment: i64,
    pub house_type: String,
    pub rent_price: Decimal,
}

impl Record for House {
    const NAME: &'static str = "House";
    const SOURCE: &'static str = "house_info";
    const KEY: KeyShape = KeyShape::Single { column: "id" };
    const COLUMNS: &'static str =
        "id, house_no, street_name, is_rented, no_of_apartment, house_type, rent_price";
}

impl Entity for House {
    const FIELDS: &'static [FieldDef] = &[
        FieldDef::new("houseNo", "house_no", FieldKind::Text),
        FieldDef::new("streetName", "street_name", FieldKind::Text),
        FieldDef::new("isRented", "is_rented", FieldKind::Boolean),
        FieldDef::new("noOfApartment", "no_of_apartment", FieldKind::Integer),
        FieldDef::new("houseType", "house_type", FieldKind::Text),
        FieldDef::new("rentPrice", "rent_price", FieldKind::Decimal),
    ];

    fn key(&self) -> EntityKey {
        EntityKey::Single(self.id)
    }

    fn values(&self) -> Vec<FieldValue> {
        vec![
            FieldValue::Text(self.house_no.clone()),
            FieldValue::Text(self.street_name.clone()),
            FieldValue::Boolean(self.is_rented),
            FieldValue::Integer(self.no_of_apartment),
            FieldValue::Text(self.house_type.clone()),
            FieldValue::Decimal(self.rent_price),
        ]
    }

    fn assign_id(&mut self, id: DbId) {
        self.id = id;
    }
}
