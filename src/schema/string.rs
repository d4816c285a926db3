//! String schema validation.
//!
//! This module provides [`StringSchema`] for validating text values with
//! length constraints and pattern-style predicates (regex, email, URL).

use std::sync::LazyLock;

use regex::Regex;
use stillwater::Validation;

use crate::error::{Issue, IssueCode, SchemaBuildError, ValidationError};
use crate::path::ValuePath;
use crate::value::Value;
use crate::ParseOutcome;

use super::traits::SchemaLike;

// RFC-lite: local part, '@', domain with at least one dot and a 2+ letter TLD.
const EMAIL_PATTERN: &str = r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$";
// http/https only, non-empty host.
const URL_PATTERN: &str = r"^https?://[^\s/$.?#][^\s]*$";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"));
static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(URL_PATTERN).expect("url pattern compiles"));

/// A pattern-style predicate applied to string values.
#[derive(Clone)]
enum PatternCheck {
    Regex { regex: Regex, source: String },
    Email,
    Url,
}

/// A schema for validating string values.
///
/// Length constraints are each independently settable and all evaluated in
/// one pass over a single length computation, so a string can report both a
/// length violation and a pattern violation from the same call. Pattern
/// predicates (`pattern`, `email`, `url`) form an ordered list; only the
/// first failing predicate raises an issue.
///
/// # Example
///
/// ```rust
/// use contour::{Schema, SchemaLike, Value};
///
/// let schema = Schema::string().min_len(3).max_len(20);
///
/// assert!(schema.safe_parse(&Value::from("hello")).is_success());
/// assert!(schema.safe_parse(&Value::from("hi")).is_failure());
/// ```
#[derive(Clone, Default)]
pub struct StringSchema {
    exact_len: Option<usize>,
    min_len: Option<usize>,
    max_len: Option<usize>,
    patterns: Vec<PatternCheck>,
}

impl StringSchema {
    /// Creates a new string schema with no constraints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires exactly `len` characters (Unicode scalar values).
    pub fn length(mut self, len: usize) -> Self {
        self.exact_len = Some(len);
        self
    }

    /// Requires at least `min` characters (Unicode scalar values).
    pub fn min_len(mut self, min: usize) -> Self {
        self.min_len = Some(min);
        self
    }

    /// Requires at most `max` characters (Unicode scalar values).
    pub fn max_len(mut self, max: usize) -> Self {
        self.max_len = Some(max);
        self
    }

    /// Requires the string to match `source`.
    ///
    /// An invalid regex source is a construction-time error, never a parse
    /// failure.
    pub fn pattern(mut self, source: &str) -> Result<Self, SchemaBuildError> {
        let regex = Regex::new(source)?;
        self.patterns.push(PatternCheck::Regex {
            regex,
            source: source.to_string(),
        });
        Ok(self)
    }

    /// Requires the string to be an email address (fixed RFC-lite pattern).
    pub fn email(mut self) -> Self {
        self.patterns.push(PatternCheck::Email);
        self
    }

    /// Requires the string to be an http or https URL.
    pub fn url(mut self) -> Self {
        self.patterns.push(PatternCheck::Url);
        self
    }

    fn check_lengths(&self, s: &str, path: &ValuePath, issues: &mut Vec<Issue>) {
        let len = s.chars().count();

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
                        format!("String must be exactly {} characters, got {}", exact, len),
                    )
                    .with_expected(format!("exactly {} characters", exact))
                    .with_received(format!("{} characters", len)),
                );
            }
        }
        if let Some(min) = self.min_len {
            if len < min {
                issues.push(
                    Issue::new(
                        IssueCode::TooSmall,
                        path.clone(),
                        format!("String must be at least {} characters, got {}", min, len),
                    )
                    .with_expected(format!("at least {} characters", min))
                    .with_received(format!("{} characters", len)),
                );
            }
        }
        if let Some(max) = self.max_len {
            if len > max {
                issues.push(
                    Issue::new(
                        IssueCode::TooBig,
                        path.clone(),
                        format!("String must be at most {} characters, got {}", max, len),
                    )
                    .with_expected(format!("at most {} characters", max))
                    .with_received(format!("{} characters", len)),
                );
            }
        }
    }

    /// Returns the issue for the first failing pattern predicate, if any.
    fn check_patterns(&self, s: &str, path: &ValuePath) -> Option<Issue> {
        for check in &self.patterns {
            match check {
                PatternCheck::Regex { regex, source } => {
                    if !regex.is_match(s) {
                        return Some(
                            Issue::new(
                                IssueCode::InvalidString,
                                path.clone(),
                                format!("String does not match pattern '{}'", source),
                            )
                            .with_expected(format!("string matching '{}'", source))
                            .with_received(format!("'{}'", s)),
                        );
                    }
                }
                PatternCheck::Email => {
                    if !EMAIL_RE.is_match(s) {
                        return Some(
                            Issue::new(IssueCode::InvalidString, path.clone(), "Invalid email format")
                                .with_expected("email address")
                                .with_received(format!("'{}'", s)),
                        );
                    }
                }
                PatternCheck::Url => {
                    if !URL_RE.is_match(s) {
                        return Some(
                            Issue::new(IssueCode::InvalidString, path.clone(), "Invalid URL format")
                                .with_expected("http or https URL")
                                .with_received(format!("'{}'", s)),
                        );
                    }
                }
            }
        }
        None
    }
}

impl SchemaLike for StringSchema {
    type Output = String;

    fn parse_value(&self, value: &Value, path: &ValuePath) -> ParseOutcome<String> {
        let s = match value.as_str() {
            Some(s) => s,
            None => {
                return Validation::Failure(ValidationError::single(
                    Issue::new(
                        IssueCode::InvalidType,
                        path.clone(),
                        format!("Expected string, received {}", value.type_name()),
                    )
                    .with_expected("string")
                    .with_received(value.type_name()),
                ));
            }
        };

        let mut issues = Vec::new();
        self.check_lengths(s, path, &mut issues);
        if let Some(issue) = self.check_patterns(s, path) {
            issues.push(issue);
        }

        if issues.is_empty() {
            Validation::Success(s.to_string())
        } else {
            Validation::Failure(ValidationError::from_issues(issues))
        }
    }

    fn parse_to_value(&self, value: &Value, path: &ValuePath) -> ParseOutcome<Value> {
        self.parse_value(value, path).map(Value::String)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fail(schema: &StringSchema, value: Value) -> ValidationError {
        schema.parse(&value).unwrap_err()
    }

    #[test]
    fn test_accepts_string() {
        let schema = StringSchema::new();
        assert_eq!(schema.parse(&Value::from("hello")).unwrap(), "hello");
        assert_eq!(schema.parse(&Value::from("")).unwrap(), "");
    }

    #[test]
    fn test_rejects_non_string() {
        let schema = StringSchema::new();

        let error = fail(&schema, Value::Int(42));
        assert_eq!(error.first().code, IssueCode::InvalidType);
        assert_eq!(error.first().message, "Expected string, received int");
        assert_eq!(error.first().received, Some("int".to_string()));

        assert!(schema.parse(&Value::Null).is_err());
        assert!(schema.parse(&Value::Bool(true)).is_err());
        assert!(schema.parse(&Value::Array(vec![])).is_err());
    }

    #[test]
    fn test_min_len() {
        let schema = StringSchema::new().min_len(5);

        assert!(schema.parse(&Value::from("hello")).is_ok());
        let error = fail(&schema, Value::from("hi"));
        assert_eq!(error.first().code, IssueCode::TooSmall);
        assert!(error.first().message.contains("at least 5 characters"));
    }

    #[test]
    fn test_max_len() {
        let schema = StringSchema::new().max_len(3);

        assert!(schema.parse(&Value::from("abc")).is_ok());
        let error = fail(&schema, Value::from("abcd"));
        assert_eq!(error.first().code, IssueCode::TooBig);
    }

    #[test]
    fn test_exact_length() {
        let schema = StringSchema::new().length(3);

        assert!(schema.parse(&Value::from("abc")).is_ok());
        assert_eq!(fail(&schema, Value::from("ab")).first().code, IssueCode::TooSmall);
        assert_eq!(fail(&schema, Value::from("abcd")).first().code, IssueCode::TooBig);
    }

    #[test]
    fn test_unicode_length_counts_chars() {
        let schema = StringSchema::new().min_len(3).max_len(5);

        assert!(schema.parse(&Value::from("日本語")).is_ok());
        assert!(schema.parse(&Value::from("🎉🎊")).is_err());
    }

    #[test]
    fn test_length_and_pattern_both_reported() {
        let schema = StringSchema::new().min_len(10).pattern(r"^\d+$").unwrap();

        let error = fail(&schema, Value::from("abc"));
        assert_eq!(error.len(), 2);
        assert_eq!(error.with_code(IssueCode::TooSmall).len(), 1);
        assert_eq!(error.with_code(IssueCode::InvalidString).len(), 1);
    }

    #[test]
    fn test_only_first_failing_pattern_reported() {
        // Both predicates reject the input; only the first raises.
        let schema = StringSchema::new().email().pattern(r"^\d+$").unwrap();

        let error = fail(&schema, Value::from("nope"));
        assert_eq!(error.len(), 1);
        assert_eq!(error.first().message, "Invalid email format");
    }

    #[test]
    fn test_pattern() {
        let schema = StringSchema::new().pattern(r"^[A-Z]{2,3}$").unwrap();

        assert!(schema.parse(&Value::from("AB")).is_ok());
        assert!(schema.parse(&Value::from("XYZ")).is_ok());

        let error = fail(&schema, Value::from("abc"));
        assert_eq!(error.first().code, IssueCode::InvalidString);
        assert!(error.first().message.contains("^[A-Z]{2,3}$"));
    }

    #[test]
    fn test_invalid_pattern_is_construction_error() {
        assert!(matches!(
            StringSchema::new().pattern(r"[invalid"),
            Err(SchemaBuildError::InvalidPattern(_))
        ));
    }

    #[test]
    fn test_email() {
        let schema = StringSchema::new().email();

        assert!(schema.parse(&Value::from("test@example.com")).is_ok());
        assert!(schema.parse(&Value::from("user.name+tag@domain.co.uk")).is_ok());
        assert!(schema.parse(&Value::from("a@b.co")).is_ok());

        for bad in ["invalid-email", "@example.com", "test@", "user@domain"] {
            let error = fail(&schema, Value::from(bad));
            assert_eq!(error.first().code, IssueCode::InvalidString);
            assert_eq!(error.first().message, "Invalid email format");
        }
    }

    #[test]
    fn test_url() {
        let schema = StringSchema::new().url();

        assert!(schema.parse(&Value::from("https://example.com")).is_ok());
        assert!(schema.parse(&Value::from("http://localhost:8000")).is_ok());
        assert!(schema.parse(&Value::from("https://127.0.0.1:8080")).is_ok());
        assert!(schema
            .parse(&Value::from("https://sub.domain.com/path?query=1"))
            .is_ok());

        for bad in ["not-a-url", "ftp://example.com", "http://"] {
            let error = fail(&schema, Value::from(bad));
            assert_eq!(error.first().message, "Invalid URL format");
        }
    }

    #[test]
    fn test_chained_length_and_email() {
        let schema = StringSchema::new().min_len(5).max_len(50).email();

        assert!(schema.parse(&Value::from("test@example.com")).is_ok());
        assert!(schema.parse(&Value::from("this-is-not-an-email")).is_err());
    }

    #[test]
    fn test_path_tracking() {
        let schema = StringSchema::new().min_len(5);
        let path = ValuePath::root().push_field("user").push_field("name");

        match schema.parse_value(&Value::from("ab"), &path) {
            Validation::Failure(error) => {
                assert_eq!(error.first().path.to_string(), "user.name")
            }
            Validation::Success(_) => panic!("expected failure"),
        }
    }

    #[test]
    fn test_branched_chains_are_independent() {
        let base = StringSchema::new().min_len(2);
        let strict = base.clone().max_len(4);

        assert!(base.parse(&Value::from("abcdef")).is_ok());
        assert!(strict.parse(&Value::from("abcdef")).is_err());
    }
}
