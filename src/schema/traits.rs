//! The schema contract and parse entrypoints.
//!
//! [`SchemaLike`] is the trait every schema implements: a non-throwing typed
//! core (`parse_value`), a type-erased form for composition
//! (`parse_to_value`), and the two public entrypoints `parse` / `safe_parse`
//! layered on top. [`ValueParser`] is the object-safe erased counterpart
//! that composites use to hold children of differing concrete types.

use crate::error::ValidationError;
use crate::path::ValuePath;
use crate::schema::modifiers::{
    DefaultSchema, NullableSchema, OptionalSchema, RefineSchema, TransformSchema,
};
use crate::value::Value;
use crate::ParseOutcome;

/// The result of a non-propagating parse.
///
/// `safe_parse` never fails outward; it returns this discriminated result
/// instead.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseResult<T> {
    /// The input satisfied the schema; `data` is the validated (possibly
    /// coerced or transformed) output.
    Success {
        /// The validated output value.
        data: T,
    },
    /// The input violated the schema; `error` aggregates every issue.
    Failure {
        /// The aggregated validation issues.
        error: ValidationError,
    },
}

impl<T> ParseResult<T> {
    /// Returns true if parsing succeeded.
    pub fn is_success(&self) -> bool {
        matches!(self, ParseResult::Success { .. })
    }

    /// Returns true if parsing failed.
    pub fn is_failure(&self) -> bool {
        matches!(self, ParseResult::Failure { .. })
    }

    /// Returns the validated data, if parsing succeeded.
    pub fn data(&self) -> Option<&T> {
        match self {
            ParseResult::Success { data } => Some(data),
            ParseResult::Failure { .. } => None,
        }
    }

    /// Returns the validation error, if parsing failed.
    pub fn error(&self) -> Option<&ValidationError> {
        match self {
            ParseResult::Success { .. } => None,
            ParseResult::Failure { error } => Some(error),
        }
    }

    /// Converts into a standard `Result`.
    pub fn into_result(self) -> Result<T, ValidationError> {
        match self {
            ParseResult::Success { data } => Ok(data),
            ParseResult::Failure { error } => Err(error),
        }
    }
}

/// A schema that can validate and parse dynamic values.
///
/// Implementations provide the internal non-throwing core; the public
/// `parse` / `safe_parse` entrypoints and the modifier constructors are
/// provided methods. Schemas are immutable once built: every chain method
/// consumes its receiver and returns a new value, and all shared innards sit
/// behind `Arc`, so a schema tree can be shared across threads and parsed
/// concurrently without locking.
///
/// # Example
///
/// ```rust
/// use contour::{Schema, SchemaLike, Value};
///
/// let schema = Schema::object()
///     .field("name", Schema::string().min_len(1))
///     .field("age", Schema::number().int().positive());
///
/// let input = Value::from(serde_json::json!({"name": "Ada", "age": 36}));
/// assert!(schema.safe_parse(&input).is_success());
/// ```
pub trait SchemaLike: Send + Sync {
    /// The output type produced by successful validation.
    type Output;

    /// Validates a value at the given path.
    ///
    /// This is the internal non-throwing core: failures are returned as
    /// data, never raised, which is what lets composite schemas keep
    /// validating siblings after a child fails.
    fn parse_value(&self, value: &Value, path: &ValuePath) -> ParseOutcome<Self::Output>;

    /// Validates a value and returns the result as a [`Value`].
    ///
    /// Lets schemas with different output types be composed uniformly
    /// inside objects, arrays, unions, and modifiers.
    fn parse_to_value(&self, value: &Value, path: &ValuePath) -> ParseOutcome<Value>;

    /// Parses the input, propagating a [`ValidationError`] on failure.
    fn parse(&self, input: &Value) -> Result<Self::Output, ValidationError>
    where
        Self::Output: Sized,
    {
        self.parse_value(input, &ValuePath::root()).into_result()
    }

    /// Parses the input without propagating failure.
    fn safe_parse(&self, input: &Value) -> ParseResult<Self::Output>
    where
        Self::Output: Sized,
    {
        match self.parse_value(input, &ValuePath::root()) {
            stillwater::Validation::Success(data) => ParseResult::Success { data },
            stillwater::Validation::Failure(error) => ParseResult::Failure { error },
        }
    }

    /// Wraps this schema so the missing-value sentinel passes through
    /// without invoking it.
    fn optional(self) -> OptionalSchema
    where
        Self: Sized + 'static,
    {
        OptionalSchema::new(self)
    }

    /// Wraps this schema so `Null` passes through without invoking it.
    fn nullable(self) -> NullableSchema
    where
        Self: Sized + 'static,
    {
        NullableSchema::new(self)
    }

    /// Wraps this schema so a missing value is replaced by `value` and then
    /// validated by this schema.
    fn default_value(self, value: impl Into<Value>) -> DefaultSchema
    where
        Self: Sized + 'static,
    {
        DefaultSchema::literal(self, value.into())
    }

    /// Wraps this schema so a missing value is replaced by calling
    /// `factory` — exactly once, lazily, per parse call — and then
    /// validated by this schema.
    fn default_with<F>(self, factory: F) -> DefaultSchema
    where
        F: Fn() -> Value + Send + Sync + 'static,
        Self: Sized + 'static,
    {
        DefaultSchema::factory(self, factory)
    }

    /// Maps the validated output through `f`. The mapped result is not
    /// re-validated.
    fn transform<F>(self, f: F) -> TransformSchema
    where
        F: Fn(Value) -> Value + Send + Sync + 'static,
        Self: Sized + 'static,
    {
        TransformSchema::new(self, f)
    }

    /// Applies a user predicate after this schema succeeds. A `false`
    /// verdict raises one `custom` issue with the given message.
    fn refine<F>(self, predicate: F, message: impl Into<String>) -> RefineSchema
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
        Self: Sized + 'static,
    {
        RefineSchema::new(self, predicate, message)
    }
}

/// A type-erased schema that parses to a [`Value`].
///
/// Composite schemas hold their children as `Arc<dyn ValueParser>` so
/// heterogeneous schema types can sit side by side. Every [`SchemaLike`]
/// implements this automatically.
pub trait ValueParser: Send + Sync {
    /// Validates a value and returns the result as a [`Value`].
    fn parse_dyn(&self, value: &Value, path: &ValuePath) -> ParseOutcome<Value>;
}

impl<S: SchemaLike> ValueParser for S {
    fn parse_dyn(&self, value: &Value, path: &ValuePath) -> ParseOutcome<Value> {
        self.parse_to_value(value, path)
    }
}
