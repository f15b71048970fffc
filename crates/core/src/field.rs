//! Field schema and typed field values.
//!
//! Every entity describes its mutable columns as a static table of
//! [`FieldDef`]s. The lifecycle engine uses the table to build SQL, the
//! patch engine uses it to type-check incoming JSON, and [`FieldValue`] is
//! the typed value carried between the two.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde_json::Value;

use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Schema
// ---------------------------------------------------------------------------

/// Storage type of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Integer,
    Decimal,
    Boolean,
    Timestamp,
}

/// Definition of a single mutable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    /// JSON name on the wire (also the patch path segment).
    pub name: &'static str,
    /// Column name in the store.
    pub column: &'static str,
    pub kind: FieldKind,
    /// Whether partial updates may address this field.
    pub patchable: bool,
}

impl FieldDef {
    pub const fn new(name: &'static str, column: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            column,
            kind,
            patchable: true,
        }
    }

    /// Exclude this field from partial updates.
    pub const fn fixed(self) -> Self {
        Self {
            patchable: false,
            ..self
        }
    }
}

/// Comma-separated column list for `fields`, in order.
pub fn column_list(fields: &[FieldDef]) -> String {
    fields
        .iter()
        .map(|f| f.column)
        .collect::<Vec<_>>()
        .join(", ")
}

// ---------------------------------------------------------------------------
// Values
// ---------------------------------------------------------------------------

/// A typed field value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Decimal(Decimal),
    Boolean(bool),
    Timestamp(Timestamp),
}

impl FieldValue {
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Text(_) => FieldKind::Text,
            Self::Integer(_) => FieldKind::Integer,
            Self::Decimal(_) => FieldKind::Decimal,
            Self::Boolean(_) => FieldKind::Boolean,
            Self::Timestamp(_) => FieldKind::Timestamp,
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            Self::Text(s) => Value::String(s.clone()),
            Self::Integer(n) => Value::from(*n),
            Self::Decimal(d) => serde_json::to_value(d).unwrap_or(Value::Null),
            Self::Boolean(b) => Value::Bool(*b),
            Self::Timestamp(t) => Value::String(t.to_rfc3339()),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Decimal(d) => write!(f, "{d}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Timestamp(t) => f.write_str(&t.to_rfc3339()),
        }
    }
}

impl FieldKind {
    /// The value a `remove` leaves behind.
    pub fn zero(self) -> FieldValue {
        match self {
            Self::Text => FieldValue::Text(String::new()),
            Self::Integer => FieldValue::Integer(0),
            Self::Decimal => FieldValue::Decimal(Decimal::ZERO),
            Self::Boolean => FieldValue::Boolean(false),
            Self::Timestamp => FieldValue::Timestamp(DateTime::UNIX_EPOCH),
        }
    }

    /// Convert a JSON value into a value of this kind.
    ///
    /// Conversion is lenient in the same places a JSON model binder is:
    /// numbers and booleans may arrive as strings, and scalars become text.
    /// `null` is never accepted because every column is NOT NULL.
    pub fn parse(self, value: &Value) -> Result<FieldValue, String> {
        let parsed = match (self, value) {
            (Self::Text, Value::String(s)) => Some(FieldValue::Text(s.clone())),
            (Self::Text, Value::Number(n)) => Some(FieldValue::Text(n.to_string())),
            (Self::Text, Value::Bool(b)) => Some(FieldValue::Text(b.to_string())),

            (Self::Integer, Value::Number(n)) => n.as_i64().map(FieldValue::Integer),
            (Self::Integer, Value::String(s)) => s.trim().parse().ok().map(FieldValue::Integer),

            (Self::Decimal, Value::Number(n)) => {
                let text = n.to_string();
                Decimal::from_str(&text)
                    .or_else(|_| Decimal::from_scientific(&text))
                    .ok()
                    .map(FieldValue::Decimal)
            }
            (Self::Decimal, Value::String(s)) => {
                Decimal::from_str(s.trim()).ok().map(FieldValue::Decimal)
            }

            (Self::Boolean, Value::Bool(b)) => Some(FieldValue::Boolean(*b)),
            (Self::Boolean, Value::String(s)) => match s.trim().to_ascii_lowercase().as_str() {
                "true" => Some(FieldValue::Boolean(true)),
                "false" => Some(FieldValue::Boolean(false)),
                _ => None,
            },

            (Self::Timestamp, Value::String(s)) => parse_timestamp(s).map(FieldValue::Timestamp),

            _ => None,
        };

        parsed.ok_or_else(|| format!("The value '{value}' is invalid for target location."))
    }
}

/// RFC 3339, or a bare ISO-8601 date-time interpreted as UTC.
fn parse_timestamp(raw: &str) -> Option<Timestamp> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}
