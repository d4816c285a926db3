//! Modifier wrappers.
//!
//! Each wrapper holds exactly one inner schema (type-erased) and alters its
//! contract at the boundary: [`OptionalSchema`] and [`NullableSchema`] pass
//! sentinels through, [`DefaultSchema`] substitutes missing input,
//! [`TransformSchema`] maps validated output, and [`RefineSchema`] applies a
//! user predicate after validation.

use std::sync::Arc;

use stillwater::Validation;

use crate::error::{Issue, IssueCode, ValidationError};
use crate::path::ValuePath;
use crate::value::Value;
use crate::ParseOutcome;

use super::traits::{SchemaLike, ValueParser};

/// Passes the missing-value sentinel through without invoking the inner
/// schema; anything else is delegated.
#[derive(Clone)]
pub struct OptionalSchema {
    inner: Arc<dyn ValueParser>,
}

impl OptionalSchema {
    /// Wraps `inner`.
    pub fn new<S>(inner: S) -> Self
    where
        S: SchemaLike + 'static,
    {
        Self {
            inner: Arc::new(inner),
        }
    }
}

impl SchemaLike for OptionalSchema {
    type Output = Value;

    fn parse_value(&self, value: &Value, path: &ValuePath) -> ParseOutcome<Value> {
        if value.is_undefined() {
            Validation::Success(Value::Undefined)
        } else {
            self.inner.parse_dyn(value, path)
        }
    }

    fn parse_to_value(&self, value: &Value, path: &ValuePath) -> ParseOutcome<Value> {
        self.parse_value(value, path)
    }
}

/// Passes `Null` through without invoking the inner schema; anything else is
/// delegated.
#[derive(Clone)]
pub struct NullableSchema {
    inner: Arc<dyn ValueParser>,
}

impl NullableSchema {
    /// Wraps `inner`.
    pub fn new<S>(inner: S) -> Self
    where
        S: SchemaLike + 'static,
    {
        Self {
            inner: Arc::new(inner),
        }
    }
}

impl SchemaLike for NullableSchema {
    type Output = Value;

    fn parse_value(&self, value: &Value, path: &ValuePath) -> ParseOutcome<Value> {
        if value.is_null() {
            Validation::Success(Value::Null)
        } else {
            self.inner.parse_dyn(value, path)
        }
    }

    fn parse_to_value(&self, value: &Value, path: &ValuePath) -> ParseOutcome<Value> {
        self.parse_value(value, path)
    }
}

/// Where the default for missing input comes from.
#[derive(Clone)]
enum DefaultSource {
    Literal(Value),
    Factory(Arc<dyn Fn() -> Value + Send + Sync>),
}

/// Substitutes a default when the input is missing, then delegates the
/// substituted value to the inner schema — defaults are type-checked like
/// any other input.
///
/// A factory default is invoked exactly once per parse call, lazily, at the
/// moment the missing value is encountered; never at construction time and
/// never when the value is present.
#[derive(Clone)]
pub struct DefaultSchema {
    inner: Arc<dyn ValueParser>,
    source: DefaultSource,
}

impl DefaultSchema {
    /// Wraps `inner` with a literal default value.
    pub fn literal<S>(inner: S, value: Value) -> Self
    where
        S: SchemaLike + 'static,
    {
        Self {
            inner: Arc::new(inner),
            source: DefaultSource::Literal(value),
        }
    }

    /// Wraps `inner` with a default value factory.
    pub fn factory<S, F>(inner: S, factory: F) -> Self
    where
        S: SchemaLike + 'static,
        F: Fn() -> Value + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(inner),
            source: DefaultSource::Factory(Arc::new(factory)),
        }
    }
}

impl SchemaLike for DefaultSchema {
    type Output = Value;

    fn parse_value(&self, value: &Value, path: &ValuePath) -> ParseOutcome<Value> {
        if value.is_undefined() {
            let substituted = match &self.source {
                DefaultSource::Literal(v) => v.clone(),
                DefaultSource::Factory(factory) => factory(),
            };
            self.inner.parse_dyn(&substituted, path)
        } else {
            self.inner.parse_dyn(value, path)
        }
    }

    fn parse_to_value(&self, value: &Value, path: &ValuePath) -> ParseOutcome<Value> {
        self.parse_value(value, path)
    }
}

/// Maps the inner schema's validated output through a user function.
///
/// The mapped result is returned as-is; it is not re-validated against any
/// schema.
#[derive(Clone)]
pub struct TransformSchema {
    inner: Arc<dyn ValueParser>,
    mapper: Arc<dyn Fn(Value) -> Value + Send + Sync>,
}

impl TransformSchema {
    /// Wraps `inner` with the mapping `f`.
    pub fn new<S, F>(inner: S, f: F) -> Self
    where
        S: SchemaLike + 'static,
        F: Fn(Value) -> Value + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(inner),
            mapper: Arc::new(f),
        }
    }
}

impl SchemaLike for TransformSchema {
    type Output = Value;

    fn parse_value(&self, value: &Value, path: &ValuePath) -> ParseOutcome<Value> {
        match self.inner.parse_dyn(value, path) {
            Validation::Success(v) => Validation::Success((self.mapper)(v)),
            Validation::Failure(error) => Validation::Failure(error),
        }
    }

    fn parse_to_value(&self, value: &Value, path: &ValuePath) -> ParseOutcome<Value> {
        self.parse_value(value, path)
    }
}

/// Applies a user predicate after the inner schema succeeds.
///
/// A `false` verdict raises one `custom` issue at the current path with the
/// configured message; `true` passes the value through unmodified.
#[derive(Clone)]
pub struct RefineSchema {
    inner: Arc<dyn ValueParser>,
    predicate: Arc<dyn Fn(&Value) -> bool + Send + Sync>,
    message: String,
}

impl RefineSchema {
    /// Wraps `inner` with `predicate` and its failure message.
    pub fn new<S, F>(inner: S, predicate: F, message: impl Into<String>) -> Self
    where
        S: SchemaLike + 'static,
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(inner),
            predicate: Arc::new(predicate),
            message: message.into(),
        }
    }
}

impl SchemaLike for RefineSchema {
    type Output = Value;

    fn parse_value(&self, value: &Value, path: &ValuePath) -> ParseOutcome<Value> {
        match self.inner.parse_dyn(value, path) {
            Validation::Success(v) => {
                if (self.predicate)(&v) {
                    Validation::Success(v)
                } else {
                    Validation::Failure(ValidationError::single(Issue::new(
                        IssueCode::Custom,
                        path.clone(),
                        self.message.clone(),
                    )))
                }
            }
            Validation::Failure(error) => Validation::Failure(error),
        }
    }

    fn parse_to_value(&self, value: &Value, path: &ValuePath) -> ParseOutcome<Value> {
        self.parse_value(value, path)
    }
}
