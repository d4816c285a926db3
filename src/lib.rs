//! # Contour
//!
//! A composable schema-validation and parsing engine. A schema tree
//! describes the shape of dynamic data; parsing walks that tree against an
//! input [`Value`] and either returns the validated (possibly coerced)
//! output or a [`ValidationError`] reporting every violation with its exact
//! location inside nested structures.
//!
//! ## Overview
//!
//! Composite schemas keep validating siblings after a child fails, so one
//! parse call reports everything that is wrong. Internally failures are
//! data, not exceptions: the engine is built on stillwater's `Validation`
//! type for applicative error accumulation, and only the outermost
//! [`SchemaLike::parse`] converts the accumulated issues into an `Err`.
//! [`SchemaLike::safe_parse`] never fails outward at all.
//!
//! ## Core Types
//!
//! - [`Schema`]: factory for every schema kind
//! - [`Value`]: the dynamic value model (with an `Undefined` sentinel)
//! - [`ValuePath`]: a location in nested data (e.g., `users[0].email`)
//! - [`Issue`] / [`ValidationError`]: one failure, and the ordered aggregate
//! - [`ParseResult`]: the discriminated result returned by `safe_parse`
//!
//! ## Example
//!
//! ```rust
//! use contour::{Schema, SchemaLike, Value};
//!
//! let schema = Schema::object()
//!     .field("name", Schema::string().min_len(1))
//!     .field("age", Schema::number().int().positive());
//!
//! let input = Value::from(serde_json::json!({"name": "", "age": -3}));
//! let error = schema.parse(&input).unwrap_err();
//!
//! // Both violations reported in one call, each with its path.
//! assert_eq!(error.len(), 2);
//! assert_eq!(error.first().path.to_string(), "name");
//! ```

pub mod error;
pub mod path;
pub mod schema;
pub mod value;

pub use error::{Issue, IssueCode, SchemaBuildError, ValidationError};
pub use path::{PathSegment, ValuePath};
pub use schema::{
    ArraySchema, BooleanSchema, DateSchema, DateTimeSchema, DefaultSchema, EnumSchema,
    LiteralSchema, NoneSchema, NullableSchema, NumberSchema, ObjectSchema, OptionalSchema,
    ParseResult, RefineSchema, Schema, SchemaLike, StringSchema, TransformSchema, UnionSchema,
    UnknownKeys, ValueParser,
};
pub use value::Value;

/// Type alias for the internal non-throwing parse outcome.
pub type ParseOutcome<T> = stillwater::Validation<T, ValidationError>;
