//! Union schema validation.
//!
//! This module provides [`UnionSchema`], an ordered list of candidate
//! schemas tried first-to-last, and the `|` operator that builds unions
//! from any two schemas.

use std::ops::BitOr;
use std::sync::Arc;

use stillwater::Validation;

use crate::error::{Issue, IssueCode, SchemaBuildError, ValidationError};
use crate::path::ValuePath;
use crate::value::Value;
use crate::ParseOutcome;

use super::array::ArraySchema;
use super::boolean::{BooleanSchema, NoneSchema};
use super::literal::{EnumSchema, LiteralSchema};
use super::modifiers::{
    DefaultSchema, NullableSchema, OptionalSchema, RefineSchema, TransformSchema,
};
use super::numeric::NumberSchema;
use super::object::ObjectSchema;
use super::string::StringSchema;
use super::temporal::{DateSchema, DateTimeSchema};
use super::traits::{SchemaLike, ValueParser};

/// A schema accepting the first matching candidate of an ordered list.
///
/// Candidates are tried strictly in order and the first success wins,
/// including any transform the candidate applies. A candidate failing for
/// any reason — type mismatch, constraint, refinement — simply advances to
/// the next candidate. If every candidate rejects the input, the union
/// raises a single `invalid_union` issue at its own path whose message
/// carries each candidate's first diagnostic.
///
/// `a | b | c` flattens left-to-right into one union of three candidates,
/// preserving priority.
///
/// # Example
///
/// ```rust
/// use contour::{Schema, SchemaLike, Value};
///
/// let schema = Schema::string() | Schema::number();
///
/// assert!(schema.safe_parse(&Value::from("a")).is_success());
/// assert!(schema.safe_parse(&Value::Int(1)).is_success());
/// assert!(schema.safe_parse(&Value::Bool(true)).is_failure());
/// ```
#[derive(Clone)]
pub struct UnionSchema {
    candidates: Vec<Arc<dyn ValueParser>>,
}

impl UnionSchema {
    /// Creates a union from an ordered list of candidates.
    ///
    /// An empty list is a construction-time error.
    pub fn new(candidates: Vec<Box<dyn ValueParser>>) -> Result<Self, SchemaBuildError> {
        if candidates.is_empty() {
            return Err(SchemaBuildError::EmptyUnion);
        }
        Ok(Self {
            candidates: candidates.into_iter().map(Arc::from).collect(),
        })
    }

    /// Appends `candidate` at the lowest priority.
    pub fn or<S>(mut self, candidate: S) -> Self
    where
        S: SchemaLike + 'static,
    {
        self.candidates.push(Arc::new(candidate));
        self
    }

    /// Returns the number of candidates.
    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    pub(crate) fn pair<A, B>(a: A, b: B) -> Self
    where
        A: SchemaLike + 'static,
        B: SchemaLike + 'static,
    {
        Self {
            candidates: vec![Arc::new(a), Arc::new(b)],
        }
    }
}

impl SchemaLike for UnionSchema {
    type Output = Value;

    fn parse_value(&self, value: &Value, path: &ValuePath) -> ParseOutcome<Value> {
        let mut rejections: Vec<ValidationError> = Vec::with_capacity(self.candidates.len());

        for candidate in &self.candidates {
            match candidate.parse_dyn(value, path) {
                Validation::Success(v) => return Validation::Success(v),
                Validation::Failure(error) => rejections.push(error),
            }
        }

        // One issue at the union's own path; candidate detail rides along in
        // the message instead of surfacing as separate top-level issues.
        let detail: Vec<String> = rejections
            .iter()
            .enumerate()
            .map(|(i, error)| format!("option {}: {}", i + 1, error.first().message))
            .collect();

        Validation::Failure(ValidationError::single(
            Issue::new(
                IssueCode::InvalidUnion,
                path.clone(),
                format!("Value did not match any union option ({})", detail.join("; ")),
            )
            .with_received(value.type_name()),
        ))
    }

    fn parse_to_value(&self, value: &Value, path: &ValuePath) -> ParseOutcome<Value> {
        self.parse_value(value, path)
    }
}

macro_rules! impl_union_bitor {
    ($($schema:ty),+ $(,)?) => {$(
        impl<R: SchemaLike + 'static> BitOr<R> for $schema {
            type Output = UnionSchema;

            fn bitor(self, rhs: R) -> UnionSchema {
                UnionSchema::pair(self, rhs)
            }
        }
    )+};
}

impl_union_bitor!(
    StringSchema,
    NumberSchema,
    BooleanSchema,
    NoneSchema,
    LiteralSchema,
    EnumSchema,
    DateSchema,
    DateTimeSchema,
    ObjectSchema,
    ArraySchema,
    OptionalSchema,
    NullableSchema,
    DefaultSchema,
    TransformSchema,
    RefineSchema,
);

/// `union | schema` appends rather than nesting, so `a | b | c` stays flat.
impl<R: SchemaLike + 'static> BitOr<R> for UnionSchema {
    type Output = UnionSchema;

    fn bitor(self, rhs: R) -> UnionSchema {
        self.or(rhs)
    }
}
