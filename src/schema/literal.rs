//! Literal and enum schema validation.
//!
//! [`LiteralSchema`] accepts exactly one fixed value; [`EnumSchema`] accepts
//! membership in a fixed ordered set. Both compare by value equality (ints
//! and floats compare numerically) and return the input unchanged.

use stillwater::Validation;

use crate::error::{Issue, IssueCode, SchemaBuildError, ValidationError};
use crate::path::ValuePath;
use crate::value::Value;
use crate::ParseOutcome;

use super::traits::SchemaLike;

/// A schema accepting exactly one fixed value.
///
/// # Example
///
/// ```rust
/// use contour::{Schema, SchemaLike, Value};
///
/// let schema = Schema::literal("admin");
/// assert!(schema.safe_parse(&Value::from("admin")).is_success());
/// assert!(schema.safe_parse(&Value::from("user")).is_failure());
/// ```
#[derive(Clone)]
pub struct LiteralSchema {
    expected: Value,
}

impl LiteralSchema {
    /// Creates a schema accepting exactly `expected`.
    pub fn new(expected: impl Into<Value>) -> Self {
        Self {
            expected: expected.into(),
        }
    }
}

impl SchemaLike for LiteralSchema {
    type Output = Value;

    fn parse_value(&self, value: &Value, path: &ValuePath) -> ParseOutcome<Value> {
        if *value == self.expected {
            Validation::Success(value.clone())
        } else {
            Validation::Failure(ValidationError::single(
                Issue::new(
                    IssueCode::InvalidLiteral,
                    path.clone(),
                    format!(
                        "Expected literal value {}, received {}",
                        self.expected.preview(),
                        value.preview()
                    ),
                )
                .with_expected(self.expected.preview())
                .with_received(value.preview()),
            ))
        }
    }

    fn parse_to_value(&self, value: &Value, path: &ValuePath) -> ParseOutcome<Value> {
        self.parse_value(value, path)
    }
}

/// A schema accepting membership in a fixed ordered set of values.
///
/// The failure issue lists every allowed value in declaration order. The
/// returned value is the input unchanged, so its original type is preserved.
#[derive(Clone)]
pub struct EnumSchema {
    values: Vec<Value>,
}

impl EnumSchema {
    /// Creates a schema accepting any of `values`.
    ///
    /// An empty set is a construction-time error.
    pub fn new<I>(values: I) -> Result<Self, SchemaBuildError>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        if values.is_empty() {
            return Err(SchemaBuildError::EmptyEnum);
        }
        Ok(Self { values })
    }

    fn allowed_list(&self) -> String {
        let rendered: Vec<String> = self.values.iter().map(Value::preview).collect();
        format!("[{}]", rendered.join(", "))
    }
}

impl SchemaLike for EnumSchema {
    type Output = Value;

    fn parse_value(&self, value: &Value, path: &ValuePath) -> ParseOutcome<Value> {
        if self.values.contains(value) {
            Validation::Success(value.clone())
        } else {
            Validation::Failure(ValidationError::single(
                Issue::new(
                    IssueCode::InvalidEnumValue,
                    path.clone(),
                    format!(
                        "Expected one of {}, received {}",
                        self.allowed_list(),
                        value.preview()
                    ),
                )
                .with_expected(format!("one of {}", self.allowed_list()))
                .with_received(value.preview()),
            ))
        }
    }

    fn parse_to_value(&self, value: &Value, path: &ValuePath) -> ParseOutcome<Value> {
        self.parse_value(value, path)
    }
}
