//! Boolean and null schema validation.
//!
//! [`BooleanSchema`] and [`NoneSchema`] are pure type guards; neither
//! carries constraints.

use stillwater::Validation;

use crate::error::{Issue, IssueCode, ValidationError};
use crate::path::ValuePath;
use crate::value::Value;
use crate::ParseOutcome;

use super::traits::SchemaLike;

/// A schema accepting exactly `true` or `false`.
#[derive(Clone, Copy, Default)]
pub struct BooleanSchema;

impl BooleanSchema {
    /// Creates a new boolean schema.
    pub fn new() -> Self {
        Self
    }
}

impl SchemaLike for BooleanSchema {
    type Output = bool;

    fn parse_value(&self, value: &Value, path: &ValuePath) -> ParseOutcome<bool> {
        match value {
            Value::Bool(b) => Validation::Success(*b),
            other => Validation::Failure(ValidationError::single(
                Issue::new(
                    IssueCode::InvalidType,
                    path.clone(),
                    format!("Expected bool, received {}", other.type_name()),
                )
                .with_expected("bool")
                .with_received(other.type_name()),
            )),
        }
    }

    fn parse_to_value(&self, value: &Value, path: &ValuePath) -> ParseOutcome<Value> {
        self.parse_value(value, path).map(Value::Bool)
    }
}

/// A schema accepting exactly `Null`.
#[derive(Clone, Copy, Default)]
pub struct NoneSchema;

impl NoneSchema {
    /// Creates a new null schema.
    pub fn new() -> Self {
        Self
    }
}

impl SchemaLike for NoneSchema {
    type Output = Value;

    fn parse_value(&self, value: &Value, path: &ValuePath) -> ParseOutcome<Value> {
        match value {
            Value::Null => Validation::Success(Value::Null),
            other => Validation::Failure(ValidationError::single(
                Issue::new(
                    IssueCode::InvalidType,
                    path.clone(),
                    format!("Expected null, received {}", other.type_name()),
                )
                .with_expected("null")
                .with_received(other.type_name()),
            )),
        }
    }

    fn parse_to_value(&self, value: &Value, path: &ValuePath) -> ParseOutcome<Value> {
        self.parse_value(value, path)
    }
}
