//! Numeric schema validation.
//!
//! This module provides [`NumberSchema`] for validating numeric values with
//! integrality, sign, and range constraints.

use stillwater::Validation;

use crate::error::{Issue, IssueCode, ValidationError};
use crate::path::ValuePath;
use crate::value::Value;
use crate::ParseOutcome;

use super::traits::SchemaLike;

/// A constraint applied to numeric values.
#[derive(Clone)]
enum NumberConstraint {
    Int,
    Positive,
    Negative,
    NonNegative,
    Min(f64),
    Max(f64),
}

/// A schema for validating numeric values.
///
/// Accepts integers and floats; booleans are explicitly rejected even
/// though some host representations treat them as numeric. All constraint
/// violations are accumulated rather than short-circuiting on the first
/// failure, and the output preserves the input's int/float identity.
///
/// # Example
///
/// ```rust
/// use contour::{Schema, SchemaLike, Value};
///
/// let schema = Schema::number().int().positive().max(100.0);
///
/// assert!(schema.safe_parse(&Value::Int(50)).is_success());
/// assert!(schema.safe_parse(&Value::Int(0)).is_failure());
/// assert!(schema.safe_parse(&Value::Float(1.5)).is_failure());
/// ```
#[derive(Clone, Default)]
pub struct NumberSchema {
    constraints: Vec<NumberConstraint>,
}

impl NumberSchema {
    /// Creates a new number schema with no constraints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires the value to have zero fractional part.
    pub fn int(mut self) -> Self {
        self.constraints.push(NumberConstraint::Int);
        self
    }

    /// Requires the value to be strictly greater than zero.
    pub fn positive(mut self) -> Self {
        self.constraints.push(NumberConstraint::Positive);
        self
    }

    /// Requires the value to be strictly less than zero.
    pub fn negative(mut self) -> Self {
        self.constraints.push(NumberConstraint::Negative);
        self
    }

    /// Requires the value to be greater than or equal to zero.
    pub fn non_negative(mut self) -> Self {
        self.constraints.push(NumberConstraint::NonNegative);
        self
    }

    /// Requires the value to be at least `min` (inclusive).
    pub fn min(mut self, min: f64) -> Self {
        self.constraints.push(NumberConstraint::Min(min));
        self
    }

    /// Requires the value to be at most `max` (inclusive).
    pub fn max(mut self, max: f64) -> Self {
        self.constraints.push(NumberConstraint::Max(max));
        self
    }
}

/// Checks a single constraint and returns an issue if it fails.
fn check_constraint(constraint: &NumberConstraint, n: f64, path: &ValuePath) -> Option<Issue> {
    match constraint {
        NumberConstraint::Int => {
            if n.fract() != 0.0 {
                Some(
                    Issue::new(
                        IssueCode::InvalidType,
                        path.clone(),
                        format!("Expected integer, received float {}", n),
                    )
                    .with_expected("integer")
                    .with_received("float"),
                )
            } else {
                None
            }
        }
        NumberConstraint::Positive => {
            if n <= 0.0 {
                Some(
                    Issue::new(
                        IssueCode::TooSmall,
                        path.clone(),
                        format!("Number must be positive, got {}", n),
                    )
                    .with_expected("value > 0")
                    .with_received(n.to_string()),
                )
            } else {
                None
            }
        }
        NumberConstraint::Negative => {
            if n >= 0.0 {
                Some(
                    Issue::new(
                        IssueCode::TooBig,
                        path.clone(),
                        format!("Number must be negative, got {}", n),
                    )
                    .with_expected("value < 0")
                    .with_received(n.to_string()),
                )
            } else {
                None
            }
        }
        NumberConstraint::NonNegative => {
            if n < 0.0 {
                Some(
                    Issue::new(
                        IssueCode::TooSmall,
                        path.clone(),
                        format!("Number must be non-negative, got {}", n),
                    )
                    .with_expected("value >= 0")
                    .with_received(n.to_string()),
                )
            } else {
                None
            }
        }
        NumberConstraint::Min(min) => {
            if n < *min {
                Some(
                    Issue::new(
                        IssueCode::TooSmall,
                        path.clone(),
                        format!("Number must be at least {}, got {}", min, n),
                    )
                    .with_expected(format!("at least {}", min))
                    .with_received(n.to_string()),
                )
            } else {
                None
            }
        }
        NumberConstraint::Max(max) => {
            if n > *max {
                Some(
                    Issue::new(
                        IssueCode::TooBig,
                        path.clone(),
                        format!("Number must be at most {}, got {}", max, n),
                    )
                    .with_expected(format!("at most {}", max))
                    .with_received(n.to_string()),
                )
            } else {
                None
            }
        }
    }
}

impl SchemaLike for NumberSchema {
    type Output = Value;

    fn parse_value(&self, value: &Value, path: &ValuePath) -> ParseOutcome<Value> {
        // Booleans are not numbers here, whatever the host thinks.
        let n = match value {
            Value::Int(i) => *i as f64,
            Value::Float(f) => *f,
            _ => {
                return Validation::Failure(ValidationError::single(
                    Issue::new(
                        IssueCode::InvalidType,
                        path.clone(),
                        format!("Expected number, received {}", value.type_name()),
                    )
                    .with_expected("number")
                    .with_received(value.type_name()),
                ));
            }
        };

        let issues: Vec<Issue> = self
            .constraints
            .iter()
            .filter_map(|c| check_constraint(c, n, path))
            .collect();

        if issues.is_empty() {
            Validation::Success(value.clone())
        } else {
            Validation::Failure(ValidationError::from_issues(issues))
        }
    }

    fn parse_to_value(&self, value: &Value, path: &ValuePath) -> ParseOutcome<Value> {
        self.parse_value(value, path)
    }
}
