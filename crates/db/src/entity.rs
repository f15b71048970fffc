//! Capability traits shared by every model.
//!
//! [`Record`] is what the store needs to read rows of a type (tables and
//! views alike). [`Entity`] adds what the lifecycle engine needs to write
//! them: a mutable field table, typed values in table order, and access to
//! the key. Read-only projections such as the composite view implement
//! only [`Record`], so the type system keeps them out of every write path.

use estate_core::field::{FieldDef, FieldValue};
use estate_core::key::{EntityKey, KeyShape};
use estate_core::types::DbId;
use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, Postgres, QueryBuilder};

/// A readable row type.
pub trait Record: for<'r> FromRow<'r, PgRow> + Serialize + Send + Sync + Unpin + 'static {
    /// Human-readable entity name used in messages and logs.
    const NAME: &'static str;
    /// Table or view the rows come from.
    const SOURCE: &'static str;
    const KEY: KeyShape;
    /// Select list, key columns first.
    const COLUMNS: &'static str;
}

/// A writable row type.
pub trait Entity: Record + DeserializeOwned + Clone {
    /// Mutable (non-key) fields in column order.
    const FIELDS: &'static [FieldDef];

    fn key(&self) -> EntityKey;

    /// Current values of [`Self::FIELDS`], in the same order.
    fn values(&self) -> Vec<FieldValue>;

    /// Store an allocated identifier. Only called for
    /// [`KeyShape::Single`] types.
    fn assign_id(&mut self, _id: DbId) {}
}

/// Bind one typed value onto a query under construction.
pub(crate) fn push_value(builder: &mut QueryBuilder<'static, Postgres>, value: FieldValue) {
    match value {
        FieldValue::Text(v) => builder.push_bind(v),
        FieldValue::Integer(v) => builder.push_bind(v),
        FieldValue::Decimal(v) => builder.push_bind(v),
        FieldValue::Boolean(v) => builder.push_bind(v),
        FieldValue::Timestamp(v) => builder.push_bind(v),
    };
}

/// Append ` WHERE k1 = $n AND k2 = $m` for `key`.
pub(crate) fn push_key_filter(builder: &mut QueryBuilder<'static, Postgres>, shape: KeyShape, key: EntityKey) {
    builder.push(" WHERE ");
    for (i, (column, part)) in shape.columns().iter().zip(key.parts()).enumerate() {
        if i > 0 {
            builder.push(" AND ");
        }
        builder.push(*column).push(" = ").push_bind(part);
    }
}
