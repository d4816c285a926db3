//! Issue and error-aggregate types.
//!
//! This module provides [`Issue`] for single validation failures and
//! [`ValidationError`] for the ordered, non-empty aggregate a failed parse
//! produces.

use std::fmt::{self, Display};

use indexmap::IndexMap;
use stillwater::prelude::*;

use crate::path::ValuePath;

/// Machine-readable kind of a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IssueCode {
    /// The input's dynamic type did not match the schema.
    InvalidType,
    /// A value or length fell below an inclusive lower bound.
    TooSmall,
    /// A value or length exceeded an inclusive upper bound.
    TooBig,
    /// The input did not equal a literal schema's fixed value.
    InvalidLiteral,
    /// The input was not a member of an enum schema's allowed set.
    InvalidEnumValue,
    /// A string failed a pattern-style predicate (regex, email, url).
    InvalidString,
    /// A text value could not be parsed as a date or datetime.
    InvalidDate,
    /// No union candidate accepted the input.
    InvalidUnion,
    /// A strict object received a key its shape does not declare.
    UnrecognizedKey,
    /// A user refinement predicate rejected the value.
    Custom,
}

impl IssueCode {
    /// Returns the snake_case wire name of this code.
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueCode::InvalidType => "invalid_type",
            IssueCode::TooSmall => "too_small",
            IssueCode::TooBig => "too_big",
            IssueCode::InvalidLiteral => "invalid_literal",
            IssueCode::InvalidEnumValue => "invalid_enum_value",
            IssueCode::InvalidString => "invalid_string",
            IssueCode::InvalidDate => "invalid_date",
            IssueCode::InvalidUnion => "invalid_union",
            IssueCode::UnrecognizedKey => "unrecognized_key",
            IssueCode::Custom => "custom",
        }
    }
}

impl Display for IssueCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single validation failure with full context.
///
/// `Issue` captures everything relevant about one violation:
/// - **code**: machine-readable [`IssueCode`]
/// - **path**: where in the input the failure occurred, captured by value at
///   the moment the issue is raised
/// - **message**: human-readable description
/// - **expected** / **received**: optional detail for programmatic handling
///
/// # Example
///
/// ```rust
/// use contour::{Issue, IssueCode, ValuePath};
///
/// let issue = Issue::new(
///     IssueCode::InvalidType,
///     ValuePath::root().push_field("email"),
///     "Expected string, received int",
/// )
/// .with_expected("string")
/// .with_received("int");
///
/// assert_eq!(issue.code, IssueCode::InvalidType);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Issue {
    /// Machine-readable failure kind.
    pub code: IssueCode,
    /// The path to the value that failed validation.
    pub path: ValuePath,
    /// Human-readable message.
    pub message: String,
    /// Description of what was expected.
    pub expected: Option<String>,
    /// Description of what was received.
    pub received: Option<String>,
}

impl Issue {
    /// Creates a new issue with the given code, path, and message.
    pub fn new(code: IssueCode, path: ValuePath, message: impl Into<String>) -> Self {
        Self {
            code,
            path,
            message: message.into(),
            expected: None,
            received: None,
        }
    }

    /// Sets the "expected" field and returns self for chaining.
    pub fn with_expected(mut self, expected: impl Into<String>) -> Self {
        self.expected = Some(expected.into());
        self
    }

    /// Sets the "received" field and returns self for chaining.
    pub fn with_received(mut self, received: impl Into<String>) -> Self {
        self.received = Some(received.into());
        self
    }
}

impl Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.render(), self.message)
    }
}

impl std::error::Error for Issue {}

/// The ordered, non-empty aggregate of issues from a failed parse.
///
/// Issue order is first-encountered: depth-first, left-to-right over the
/// schema tree. Wrapping a `NonEmptyVec` guarantees a failure always carries
/// at least one issue, which is what lets `Validation<T, ValidationError>`
/// model failure soundly.
///
/// # Combining Errors
///
/// `ValidationError` implements `Semigroup`, so sibling failures merge while
/// validation continues:
///
/// ```rust
/// use contour::{Issue, IssueCode, ValidationError, ValuePath};
/// use stillwater::prelude::*;
///
/// let a = ValidationError::single(Issue::new(
///     IssueCode::InvalidType,
///     ValuePath::root().push_field("name"),
///     "Expected string, received int",
/// ));
/// let b = ValidationError::single(Issue::new(
///     IssueCode::TooSmall,
///     ValuePath::root().push_field("age"),
///     "Number must be positive",
/// ));
///
/// let merged = a.combine(b);
/// assert_eq!(merged.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError(NonEmptyVec<Issue>);

impl ValidationError {
    /// Creates a `ValidationError` containing a single issue.
    pub fn single(issue: Issue) -> Self {
        Self(NonEmptyVec::singleton(issue))
    }

    /// Creates a `ValidationError` from a `Vec<Issue>`.
    ///
    /// # Panics
    ///
    /// Panics if the provided vec is empty.
    pub fn from_issues(issues: Vec<Issue>) -> Self {
        Self(NonEmptyVec::from_vec(issues).expect("ValidationError requires at least one issue"))
    }

    /// Returns the number of issues.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns false; the collection is guaranteed non-empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns an iterator over the issues in report order.
    pub fn iter(&self) -> impl Iterator<Item = &Issue> {
        self.0.iter()
    }

    /// Returns the first issue.
    pub fn first(&self) -> &Issue {
        self.0.head()
    }

    /// Returns all issues raised at the given path.
    pub fn at_path(&self, path: &ValuePath) -> Vec<&Issue> {
        self.0.iter().filter(|i| &i.path == path).collect()
    }

    /// Returns all issues with the given code.
    pub fn with_code(&self, code: IssueCode) -> Vec<&Issue> {
        self.0.iter().filter(|i| i.code == code).collect()
    }

    /// Returns the structured issue sequence, in report order.
    pub fn format(&self) -> Vec<Issue> {
        self.0.iter().cloned().collect()
    }

    /// Groups issue messages by rendered path.
    ///
    /// Issues at the root group under the key `"root"`. Grouping preserves
    /// first-encountered order for both paths and messages.
    pub fn flatten(&self) -> IndexMap<String, Vec<String>> {
        let mut grouped: IndexMap<String, Vec<String>> = IndexMap::new();
        for issue in self.0.iter() {
            grouped
                .entry(issue.path.render())
                .or_default()
                .push(issue.message.clone());
        }
        grouped
    }

    /// Converts the aggregate into a `Vec<Issue>`.
    pub fn into_issues(self) -> Vec<Issue> {
        self.0.into_vec()
    }
}

impl Semigroup for ValidationError {
    fn combine(self, other: Self) -> Self {
        ValidationError(self.0.combine(other.0))
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, issue) in self.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", issue)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

impl IntoIterator for ValidationError {
    type Item = Issue;
    type IntoIter = std::vec::IntoIter<Issue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_vec().into_iter()
    }
}

// All fields are owned, so both types are Send + Sync; assert it stays true.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Issue>();
    assert_sync::<Issue>();
    assert_send::<ValidationError>();
    assert_sync::<ValidationError>();
};
