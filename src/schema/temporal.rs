//! Date and datetime schema validation.
//!
//! [`DateSchema`] accepts native date values or text in a fixed, documented
//! precedence of formats; [`DateTimeSchema`] accepts native instants or
//! ISO 8601 text and normalizes everything to UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use stillwater::Validation;

use crate::error::{Issue, IssueCode, ValidationError};
use crate::path::ValuePath;
use crate::value::Value;
use crate::ParseOutcome;

use super::traits::SchemaLike;

/// Text formats tried in order; the first that parses wins. ISO calendar
/// dates take precedence, then month/day/year, then day/month/year — so an
/// ambiguous `01/02/2023` resolves to January 2.
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%m/%d/%Y", "%d/%m/%Y"];

/// A schema for calendar dates.
///
/// Accepts a native date directly, the calendar date of a native datetime,
/// or a text value parsed via the fixed format precedence above. Range
/// bounds are inclusive and both evaluated.
///
/// # Example
///
/// ```rust
/// use contour::{Schema, SchemaLike, Value};
///
/// let schema = Schema::date();
/// assert!(schema.safe_parse(&Value::from("2024-12-19")).is_success());
/// assert!(schema.safe_parse(&Value::from("not-a-date")).is_failure());
/// ```
#[derive(Clone, Default)]
pub struct DateSchema {
    min: Option<NaiveDate>,
    max: Option<NaiveDate>,
}

impl DateSchema {
    /// Creates a new date schema with no range bounds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires the date to be on or after `min`.
    pub fn min(mut self, min: NaiveDate) -> Self {
        self.min = Some(min);
        self
    }

    /// Requires the date to be on or before `max`.
    pub fn max(mut self, max: NaiveDate) -> Self {
        self.max = Some(max);
        self
    }

    fn coerce(&self, value: &Value, path: &ValuePath) -> Result<NaiveDate, ValidationError> {
        match value {
            Value::Date(d) => Ok(*d),
            Value::DateTime(dt) => Ok(dt.date_naive()),
            Value::String(s) => DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
                .ok_or_else(|| {
                    ValidationError::single(
                        Issue::new(
                            IssueCode::InvalidDate,
                            path.clone(),
                            format!("Invalid date format: '{}'", s),
                        )
                        .with_expected("date text (YYYY-MM-DD, MM/DD/YYYY, or DD/MM/YYYY)")
                        .with_received(format!("'{}'", s)),
                    )
                }),
            other => Err(ValidationError::single(
                Issue::new(
                    IssueCode::InvalidType,
                    path.clone(),
                    format!("Expected date, received {}", other.type_name()),
                )
                .with_expected("date")
                .with_received(other.type_name()),
            )),
        }
    }
}

impl SchemaLike for DateSchema {
    type Output = NaiveDate;

    fn parse_value(&self, value: &Value, path: &ValuePath) -> ParseOutcome<NaiveDate> {
        let date = match self.coerce(value, path) {
            Ok(d) => d,
            Err(error) => return Validation::Failure(error),
        };

        let mut issues = Vec::new();
        if let Some(min) = self.min {
            if date < min {
                issues.push(
                    Issue::new(
                        IssueCode::TooSmall,
                        path.clone(),
                        format!("Date must be on or after {}, got {}", min, date),
                    )
                    .with_expected(format!("on or after {}", min))
                    .with_received(date.to_string()),
                );
            }
        }
        if let Some(max) = self.max {
            if date > max {
                issues.push(
                    Issue::new(
                        IssueCode::TooBig,
                        path.clone(),
                        format!("Date must be on or before {}, got {}", max, date),
                    )
                    .with_expected(format!("on or before {}", max))
                    .with_received(date.to_string()),
                );
            }
        }

        if issues.is_empty() {
            Validation::Success(date)
        } else {
            Validation::Failure(ValidationError::from_issues(issues))
        }
    }

    fn parse_to_value(&self, value: &Value, path: &ValuePath) -> ParseOutcome<Value> {
        self.parse_value(value, path).map(Value::Date)
    }
}

/// A schema for instants in time.
///
/// Accepts a native datetime directly, or ISO 8601 text: RFC 3339 with a
/// zone offset or `Z` suffix, or a naive `YYYY-MM-DDTHH:MM:SS[.fff]`
/// treated as UTC. Successful parses always yield a UTC instant.
#[derive(Clone, Default)]
pub struct DateTimeSchema {
    min: Option<DateTime<Utc>>,
    max: Option<DateTime<Utc>>,
}

impl DateTimeSchema {
    /// Creates a new datetime schema with no range bounds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires the instant to be at or after `min`.
    pub fn min(mut self, min: DateTime<Utc>) -> Self {
        self.min = Some(min);
        self
    }

    /// Requires the instant to be at or before `max`.
    pub fn max(mut self, max: DateTime<Utc>) -> Self {
        self.max = Some(max);
        self
    }

    fn coerce(&self, value: &Value, path: &ValuePath) -> Result<DateTime<Utc>, ValidationError> {
        match value {
            Value::DateTime(dt) => Ok(*dt),
            Value::String(s) => DateTime::parse_from_rfc3339(s)
                .map(|dt| dt.with_timezone(&Utc))
                .or_else(|_| {
                    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
                        .map(|naive| naive.and_utc())
                })
                .map_err(|_| {
                    ValidationError::single(
                        Issue::new(
                            IssueCode::InvalidDate,
                            path.clone(),
                            format!("Invalid datetime format: '{}'", s),
                        )
                        .with_expected("ISO 8601 datetime text")
                        .with_received(format!("'{}'", s)),
                    )
                }),
            other => Err(ValidationError::single(
                Issue::new(
                    IssueCode::InvalidType,
                    path.clone(),
                    format!("Expected datetime, received {}", other.type_name()),
                )
                .with_expected("datetime")
                .with_received(other.type_name()),
            )),
        }
    }
}

impl SchemaLike for DateTimeSchema {
    type Output = DateTime<Utc>;

    fn parse_value(&self, value: &Value, path: &ValuePath) -> ParseOutcome<DateTime<Utc>> {
        let instant = match self.coerce(value, path) {
            Ok(dt) => dt,
            Err(error) => return Validation::Failure(error),
        };

        let mut issues = Vec::new();
        if let Some(min) = self.min {
            if instant < min {
                issues.push(
                    Issue::new(
                        IssueCode::TooSmall,
                        path.clone(),
                        format!(
                            "Datetime must be at or after {}, got {}",
                            min.to_rfc3339_opts(SecondsFormat::Secs, true),
                            instant.to_rfc3339_opts(SecondsFormat::Secs, true)
                        ),
                    )
                    .with_expected(format!(
                        "at or after {}",
                        min.to_rfc3339_opts(SecondsFormat::Secs, true)
                    ))
                    .with_received(instant.to_rfc3339_opts(SecondsFormat::Secs, true)),
                );
            }
        }
        if let Some(max) = self.max {
            if instant > max {
                issues.push(
                    Issue::new(
                        IssueCode::TooBig,
                        path.clone(),
                        format!(
                            "Datetime must be at or before {}, got {}",
                            max.to_rfc3339_opts(SecondsFormat::Secs, true),
                            instant.to_rfc3339_opts(SecondsFormat::Secs, true)
                        ),
                    )
                    .with_expected(format!(
                        "at or before {}",
                        max.to_rfc3339_opts(SecondsFormat::Secs, true)
                    ))
                    .with_received(instant.to_rfc3339_opts(SecondsFormat::Secs, true)),
                );
            }
        }

        if issues.is_empty() {
            Validation::Success(instant)
        } else {
            Validation::Failure(ValidationError::from_issues(issues))
        }
    }

    fn parse_to_value(&self, value: &Value, path: &ValuePath) -> ParseOutcome<Value> {
        self.parse_value(value, path).map(Value::DateTime)
    }
}
