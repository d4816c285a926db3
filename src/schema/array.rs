//! Array schema validation.
//!
//! This module provides [`ArraySchema`] for validating homogeneous sequences
//! with length constraints.

use std::sync::Arc;

use stillwater::Validation;

use crate::error::{Issue, IssueCode, ValidationError};
use crate::path::ValuePath;
use crate::value::Value;
use crate::ParseOutcome;

use super::traits::{SchemaLike, ValueParser};

/// A schema for validating homogeneous sequences.
///
/// Every element is validated against the element schema — all of them, even
/// after an earlier element fails — and element issues carry the index in
/// their path. Length constraints are raised at the array's own path.
/// Non-sequence input produces a single `invalid_type` issue and no
/// per-element issues.
///
/// # Example
///
/// ```rust
/// use contour::{Schema, SchemaLike, Value};
///
/// let schema = Schema::array(Schema::string()).min_len(1);
///
/// let input = Value::from(serde_json::json!(["a", "b"]));
/// assert!(schema.safe_parse(&input).is_success());
/// ```
#[derive(Clone)]
pub struct ArraySchema {
    element: Arc<dyn ValueParser>,
    exact_len: Option<usize>,
    min_len: Option<usize>,
    max_len: Option<usize>,
}

impl ArraySchema {
    /// Creates a new array schema with the given element schema.
    pub fn new<S>(element: S) -> Self
    where
        S: SchemaLike + 'static,
    {
        Self {
            element: Arc::new(element),
            exact_len: None,
            min_len: None,
            max_len: None,
        }
    }

    /// Requires exactly `len` elements.
    pub fn length(mut self, len: usize) -> Self {
        self.exact_len = Some(len);
        self
    }

    /// Requires at least `min` elements.
    pub fn min_len(mut self, min: usize) -> Self {
        self.min_len = Some(min);
        self
    }

    /// Requires at most `max` elements.
    pub fn max_len(mut self, max: usize) -> Self {
        self.max_len = Some(max);
        self
    }

    /// Requires at least one element. Equivalent to `.min_len(1)`.
    pub fn non_empty(self) -> Self {
        self.min_len(1)
    }

    fn check_lengths(&self, len: usize, path: &ValuePath, issues: &mut Vec<Issue>) {
        if let Some(exact) = self.exact_len {
            if len != exact {
                let code = if len < exact {
                    IssueCode::TooSmall
                } else {
                    IssueCode::TooBig
                };
                issues.push(
                    Issue::new(
                        code,
                        path.clone(),
                        format!("Array must contain exactly {} elements, got {}", exact, len),
                    )
                    .with_expected(format!("exactly {} elements", exact))
                    .with_received(format!("{} elements", len)),
                );
            }
        }
        if let Some(min) = self.min_len {
            if len < min {
                issues.push(
                    Issue::new(
                        IssueCode::TooSmall,
                        path.clone(),
                        format!("Array must contain at least {} elements, got {}", min, len),
                    )
                    .with_expected(format!("at least {} elements", min))
                    .with_received(format!("{} elements", len)),
                );
            }
        }
        if let Some(max) = self.max_len {
            if len > max {
                issues.push(
                    Issue::new(
                        IssueCode::TooBig,
                        path.clone(),
                        format!("Array must contain at most {} elements, got {}", max, len),
                    )
                    .with_expected(format!("at most {} elements", max))
                    .with_received(format!("{} elements", len)),
                );
            }
        }
    }
}

impl SchemaLike for ArraySchema {
    type Output = Vec<Value>;

    fn parse_value(&self, value: &Value, path: &ValuePath) -> ParseOutcome<Vec<Value>> {
        let items = match value.as_array() {
            Some(items) => items,
            None => {
                return Validation::Failure(ValidationError::single(
                    Issue::new(
                        IssueCode::InvalidType,
                        path.clone(),
                        format!("Expected array, received {}", value.type_name()),
                    )
                    .with_expected("array")
                    .with_received(value.type_name()),
                ));
            }
        };

        let mut issues = Vec::new();
        self.check_lengths(items.len(), path, &mut issues);

        let mut output = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            let item_path = path.push_index(index);
            match self.element.parse_dyn(item, &item_path) {
                Validation::Success(v) => output.push(v),
                Validation::Failure(error) => issues.extend(error.into_issues()),
            }
        }

        if issues.is_empty() {
            Validation::Success(output)
        } else {
            Validation::Failure(ValidationError::from_issues(issues))
        }
    }

    fn parse_to_value(&self, value: &Value, path: &ValuePath) -> ParseOutcome<Value> {
        self.parse_value(value, path).map(Value::Array)
    }
}
