//! Partial-update engine.
//!
//! Applies a JSON Patch style document (RFC 6902 operation vocabulary) to a
//! [`Projection`]: an in-memory copy of the patchable fields of one record.
//!
//! Every operation is evaluated on its own. A failing operation is recorded
//! with its index and path and leaves the projection untouched; processing
//! continues with the next operation. The caller writes the projection back
//! to the store only when the outcome is [`PatchOutcome::Applied`].

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::field::{FieldDef, FieldValue};

// ---------------------------------------------------------------------------
// Operations
// ---------------------------------------------------------------------------

/// One entry of a patch document, as received on the wire.
///
/// `op` stays a string so that an unknown operation fails that entry alone
/// instead of the whole document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatchOperation {
    pub op: String,
    #[serde(default)]
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

impl PatchOperation {
    /// Build a `replace` operation for `field`.
    pub fn replace(field: &str, value: Value) -> Self {
        Self {
            op: "replace".into(),
            path: format!("/{field}"),
            from: None,
            value: Some(value),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PatchOp {
    Add,
    Remove,
    Replace,
    Move,
    Copy,
    Test,
}

impl PatchOp {
    fn parse(raw: &str) -> Option<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "add" => Some(Self::Add),
            "remove" => Some(Self::Remove),
            "replace" => Some(Self::Replace),
            "move" => Some(Self::Move),
            "copy" => Some(Self::Copy),
            "test" => Some(Self::Test),
            _ => None,
        }
    }
}

/// A rejected operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatchOperationError {
    /// Position of the operation in the document.
    pub index: usize,
    pub op: String,
    pub path: String,
    pub message: String,
}

impl fmt::Display for PatchOperationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} operation failed on path {} due to error: {}",
            self.op, self.path, self.message
        )
    }
}

/// Result of applying a whole document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchOutcome {
    Applied,
    Rejected(Vec<PatchOperationError>),
}

// ---------------------------------------------------------------------------
// Projection
// ---------------------------------------------------------------------------

/// A field of a projection together with its current value.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedField {
    pub def: &'static FieldDef,
    pub value: FieldValue,
}

/// Scratch copy of the patchable fields of a record.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Projection {
    fields: Vec<ProjectedField>,
}

impl Projection {
    /// Build a projection from `(definition, value)` pairs, keeping only the
    /// patchable definitions.
    pub fn new(pairs: impl IntoIterator<Item = (&'static FieldDef, FieldValue)>) -> Self {
        let fields = pairs
            .into_iter()
            .filter(|(def, _)| def.patchable)
            .map(|(def, value)| ProjectedField { def, value })
            .collect();
        Self { fields }
    }

    pub fn fields(&self) -> &[ProjectedField] {
        &self.fields
    }

    pub fn into_fields(self) -> Vec<ProjectedField> {
        self.fields
    }

    /// Current value of the field named `name` (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.position(name).map(|i| &self.fields[i].value)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.fields
            .iter()
            .position(|f| f.def.name.eq_ignore_ascii_case(name))
    }

    /// Resolve a JSON pointer to a field index. Records are flat, so only
    /// single-segment pointers resolve.
    fn resolve(&self, path: &str) -> Result<usize, String> {
        let trimmed = path.strip_prefix('/').unwrap_or(path);
        let mut segments = trimmed.split('/').map(decode_segment);

        let head = segments.next().unwrap_or_default();
        let index = self.position(&head).ok_or_else(|| not_found(&head))?;

        match segments.next() {
            Some(rest) => Err(not_found(&rest)),
            None => Ok(index),
        }
    }
}

fn decode_segment(raw: &str) -> String {
    raw.replace("~1", "/").replace("~0", "~")
}

fn not_found(segment: &str) -> String {
    format!("The target location specified by path segment '{segment}' was not found.")
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// Apply `operations` to `projection` in order, collecting every failure.
pub fn apply_patch(projection: &mut Projection, operations: &[PatchOperation]) -> PatchOutcome {
    let mut errors = Vec::new();

    for (index, operation) in operations.iter().enumerate() {
        if let Err(message) = apply_operation(projection, operation) {
            errors.push(PatchOperationError {
                index,
                op: operation.op.clone(),
                path: operation.path.clone(),
                message,
            });
        }
    }

    if errors.is_empty() {
        PatchOutcome::Applied
    } else {
        PatchOutcome::Rejected(errors)
    }
}

fn apply_operation(projection: &mut Projection, operation: &PatchOperation) -> Result<(), String> {
    let op = PatchOp::parse(&operation.op)
        .ok_or_else(|| format!("Invalid JsonPatch operation '{}'.", operation.op))?;
    let target = projection.resolve(&operation.path)?;
    let kind = projection.fields[target].def.kind;

    match op {
        // Every field already exists on a flat record, so `add` replaces.
        PatchOp::Add | PatchOp::Replace => {
            let value = kind.parse(required_value(operation)?)?;
            projection.fields[target].value = value;
        }
        PatchOp::Remove => {
            projection.fields[target].value = kind.zero();
        }
        PatchOp::Test => {
            let expected = kind.parse(required_value(operation)?)?;
            let current = &projection.fields[target].value;
            if *current != expected {
                return Err(format!(
                    "The current value '{current}' at path '{}' is not equal to the test value '{expected}'.",
                    projection.fields[target].def.name
                ));
            }
        }
        PatchOp::Move | PatchOp::Copy => {
            let from = operation
                .from
                .as_deref()
                .ok_or_else(|| format!("The '{}' operation requires a 'from' location.", operation.op))?;
            let source = projection.resolve(from)?;
            let value = kind.parse(&projection.fields[source].value.to_json())?;
            if op == PatchOp::Move && source != target {
                let source_kind = projection.fields[source].def.kind;
                projection.fields[source].value = source_kind.zero();
            }
            projection.fields[target].value = value;
        }
    }

    Ok(())
}

fn required_value(operation: &PatchOperation) -> Result<&Value, String> {
    operation
        .value
        .as_ref()
        .ok_or_else(|| "The value 'null' is invalid for target location.".to_string())
}
