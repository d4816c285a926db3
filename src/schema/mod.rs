//! Schema definitions for validation and parsing.
//!
//! Each schema type validates one kind of value and accumulates every
//! violation rather than short-circuiting on the first failure. Schemas are
//! composed by value: chain methods consume the receiver and return a new
//! schema, so a built tree is immutable and freely shareable.

mod array;
mod boolean;
mod literal;
mod modifiers;
mod numeric;
mod object;
mod string;
mod temporal;
mod traits;
mod union;

pub use array::ArraySchema;
pub use boolean::{BooleanSchema, NoneSchema};
pub use literal::{EnumSchema, LiteralSchema};
pub use modifiers::{
    DefaultSchema, NullableSchema, OptionalSchema, RefineSchema, TransformSchema,
};
pub use numeric::NumberSchema;
pub use object::{ObjectSchema, UnknownKeys};
pub use string::StringSchema;
pub use temporal::{DateSchema, DateTimeSchema};
pub use traits::{ParseResult, SchemaLike, ValueParser};
pub use union::UnionSchema;

use crate::error::SchemaBuildError;
use crate::value::Value;

/// Entry point for creating validation schemas.
///
/// `Schema` provides one factory per schema kind; constraints are added
/// through each schema's builder methods.
///
/// # Example
///
/// ```rust
/// use contour::{Schema, SchemaLike, Value};
///
/// let user = Schema::object()
///     .field("name", Schema::string().min_len(1))
///     .field("age", Schema::number().int().positive())
///     .field("theme", Schema::enumeration(["light", "dark"]).unwrap());
///
/// let input = Value::from(serde_json::json!({
///     "name": "Ada",
///     "age": 36,
///     "theme": "dark"
/// }));
/// assert!(user.safe_parse(&input).is_success());
/// ```
pub struct Schema;

impl Schema {
    /// Creates a new string schema.
    pub fn string() -> StringSchema {
        StringSchema::new()
    }

    /// Creates a new number schema.
    ///
    /// Accepts integers and floats; booleans are rejected.
    pub fn number() -> NumberSchema {
        NumberSchema::new()
    }

    /// Creates a new boolean schema.
    pub fn boolean() -> BooleanSchema {
        BooleanSchema::new()
    }

    /// Creates a schema accepting exactly `Null`.
    pub fn none() -> NoneSchema {
        NoneSchema::new()
    }

    /// Creates a schema accepting exactly one fixed value.
    pub fn literal(value: impl Into<Value>) -> LiteralSchema {
        LiteralSchema::new(value)
    }

    /// Creates a schema accepting membership in a fixed ordered set.
    ///
    /// An empty set is a construction-time error.
    pub fn enumeration<I>(values: I) -> Result<EnumSchema, SchemaBuildError>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        EnumSchema::new(values)
    }

    /// Creates a new calendar-date schema.
    pub fn date() -> DateSchema {
        DateSchema::new()
    }

    /// Creates a new datetime schema normalizing to UTC.
    pub fn datetime() -> DateTimeSchema {
        DateTimeSchema::new()
    }

    /// Creates a new object schema with no fields.
    pub fn object() -> ObjectSchema {
        ObjectSchema::new()
    }

    /// Creates a new array schema with the given element schema.
    pub fn array<S>(element: S) -> ArraySchema
    where
        S: SchemaLike + 'static,
    {
        ArraySchema::new(element)
    }

    /// Creates a union from an ordered list of candidates.
    ///
    /// Prefer the `|` operator for inline composition; this constructor is
    /// for candidate lists built at runtime. An empty list is a
    /// construction-time error.
    pub fn union(candidates: Vec<Box<dyn ValueParser>>) -> Result<UnionSchema, SchemaBuildError> {
        UnionSchema::new(candidates)
    }
}
