//! Object schema validation.
//!
//! This module provides [`ObjectSchema`] for validating keyed shapes with an
//! ordered field map and a configurable unknown-key policy.

use std::sync::Arc;

use indexmap::IndexMap;
use stillwater::Validation;

use crate::error::{Issue, IssueCode, ValidationError};
use crate::path::ValuePath;
use crate::value::Value;
use crate::ParseOutcome;

use super::traits::{SchemaLike, ValueParser};

/// How keys not declared in the schema are handled.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum UnknownKeys {
    /// Unknown keys are silently dropped from the result (default).
    #[default]
    Strip,
    /// Any unknown key raises an issue at that key's path.
    Strict,
    /// Unknown keys are copied into the result unchanged.
    Passthrough,
}

/// A schema for validating keyed shapes.
///
/// Fields are declared in order and every declared field is visited even
/// after an earlier field fails, so one parse reports every violation.
/// Absent keys are presented to the field schema as [`Value::Undefined`],
/// which puts `optional()` / `default_value()` wrappers — not the object —
/// in charge of the missing-key decision.
///
/// # Example
///
/// ```rust
/// use contour::{Schema, SchemaLike, Value};
///
/// let schema = Schema::object()
///     .field("name", Schema::string().min_len(1))
///     .field("age", Schema::number().int())
///     .strict();
///
/// let input = Value::from(serde_json::json!({"name": "Ada", "age": 36}));
/// assert!(schema.safe_parse(&input).is_success());
/// ```
#[derive(Clone, Default)]
pub struct ObjectSchema {
    fields: IndexMap<String, Arc<dyn ValueParser>>,
    unknown_keys: UnknownKeys,
}

impl ObjectSchema {
    /// Creates a new object schema with no fields and the strip policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a field validated by `schema`.
    ///
    /// Declaration order is preserved and determines issue order.
    pub fn field<S>(mut self, name: impl Into<String>, schema: S) -> Self
    where
        S: SchemaLike + 'static,
    {
        self.fields.insert(name.into(), Arc::new(schema));
        self
    }

    /// Rejects unknown keys: each one raises an `unrecognized_key` issue.
    pub fn strict(mut self) -> Self {
        self.unknown_keys = UnknownKeys::Strict;
        self
    }

    /// Copies unknown keys into the result unchanged.
    pub fn passthrough(mut self) -> Self {
        self.unknown_keys = UnknownKeys::Passthrough;
        self
    }

    /// Silently drops unknown keys from the result (the default).
    pub fn strip(mut self) -> Self {
        self.unknown_keys = UnknownKeys::Strip;
        self
    }
}

impl SchemaLike for ObjectSchema {
    type Output = IndexMap<String, Value>;

    fn parse_value(&self, value: &Value, path: &ValuePath) -> ParseOutcome<Self::Output> {
        let entries = match value.as_object() {
            Some(entries) => entries,
            None => {
                return Validation::Failure(ValidationError::single(
                    Issue::new(
                        IssueCode::InvalidType,
                        path.clone(),
                        format!("Expected object, received {}", value.type_name()),
                    )
                    .with_expected("object")
                    .with_received(value.type_name()),
                ));
            }
        };

        let mut issues = Vec::new();
        let mut output = IndexMap::new();

        for (name, field_schema) in &self.fields {
            let field_path = path.push_field(name.as_str());
            // An absent key is presented to the field schema as undefined.
            let outcome = match entries.get(name) {
                Some(present) => field_schema.parse_dyn(present, &field_path),
                None => field_schema.parse_dyn(&Value::Undefined, &field_path),
            };

            match outcome {
                // Only an optional field with an absent key yields Undefined;
                // it stays absent in the output.
                Validation::Success(Value::Undefined) => {}
                Validation::Success(v) => {
                    output.insert(name.clone(), v);
                }
                Validation::Failure(error) => {
                    issues.extend(error.into_issues());
                }
            }
        }

        for (key, unknown) in entries {
            if self.fields.contains_key(key) {
                continue;
            }
            match self.unknown_keys {
                UnknownKeys::Strip => {}
                UnknownKeys::Passthrough => {
                    output.insert(key.clone(), unknown.clone());
                }
                UnknownKeys::Strict => {
                    issues.push(
                        Issue::new(
                            IssueCode::UnrecognizedKey,
                            path.push_field(key.as_str()),
                            format!("Unrecognized key: '{}'", key),
                        )
                        .with_received(format!("'{}'", key)),
                    );
                }
            }
        }

        if issues.is_empty() {
            Validation::Success(output)
        } else {
            Validation::Failure(ValidationError::from_issues(issues))
        }
    }

    fn parse_to_value(&self, value: &Value, path: &ValuePath) -> ParseOutcome<Value> {
        self.parse_value(value, path).map(Value::Object)
    }
}
