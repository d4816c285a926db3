//! Error types for validation failures and schema misconfiguration.
//!
//! Parse-time failures are data ([`Issue`], [`ValidationError`]) and flow
//! through the non-throwing core. Misconfigured schemas are a different
//! animal: [`SchemaBuildError`] is returned at construction time and never
//! deferred to parsing.

mod issue;

pub use issue::{Issue, IssueCode, ValidationError};

/// Errors raised while constructing a schema.
#[derive(Debug, thiserror::Error)]
pub enum SchemaBuildError {
    /// The regex source passed to `pattern()` did not compile.
    #[error("invalid regex pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// An enum schema was given no allowed values.
    #[error("enum schema requires at least one allowed value")]
    EmptyEnum,

    /// A union schema was given no candidates.
    #[error("union schema requires at least one candidate")]
    EmptyUnion,
}
