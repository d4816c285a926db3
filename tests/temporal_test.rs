use chrono::{NaiveDate, TimeZone, Utc};
use contour::{IssueCode, Schema, SchemaLike, Value};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_iso_date_text() {
    let parsed = Schema::date().parse(&Value::from("2024-12-19")).unwrap();
    assert_eq!(parsed, ymd(2024, 12, 19));
}

#[test]
fn test_format_precedence_is_iso_then_mdy_then_dmy() {
    let schema = Schema::date();

    // Unambiguous month/day and day/month inputs.
    assert_eq!(schema.parse(&Value::from("12/25/2023")).unwrap(), ymd(2023, 12, 25));
    assert_eq!(schema.parse(&Value::from("25/12/2023")).unwrap(), ymd(2023, 12, 25));

    // Ambiguous input: month/day/year outranks day/month/year, so this is
    // January 2, not February 1.
    assert_eq!(schema.parse(&Value::from("01/02/2023")).unwrap(), ymd(2023, 1, 2));
}

#[test]
fn test_native_date_value_is_not_reparsed() {
    let d = ymd(2023, 6, 15);
    assert_eq!(Schema::date().parse(&Value::Date(d)).unwrap(), d);
}

#[test]
fn test_datetime_value_truncates_to_date() {
    let dt = Utc.with_ymd_and_hms(2023, 12, 25, 10, 30, 0).unwrap();
    assert_eq!(
        Schema::date().parse(&Value::DateTime(dt)).unwrap(),
        ymd(2023, 12, 25)
    );
}

#[test]
fn test_unparsable_date_text_is_invalid_date() {
    let error = Schema::date().parse(&Value::from("not-a-date")).unwrap_err();
    assert_eq!(error.first().code, IssueCode::InvalidDate);
}

#[test]
fn test_date_range_boundaries_inclusive() {
    let schema = Schema::date().min(ymd(2023, 1, 1)).max(ymd(2023, 12, 31));

    assert!(schema.parse(&Value::from("2023-01-01")).is_ok());
    assert!(schema.parse(&Value::from("2023-12-31")).is_ok());

    let error = schema.parse(&Value::from("2022-12-31")).unwrap_err();
    assert_eq!(error.first().code, IssueCode::TooSmall);

    let error = schema.parse(&Value::from("2024-01-01")).unwrap_err();
    assert_eq!(error.first().code, IssueCode::TooBig);
}

#[test]
fn test_leap_day_handling() {
    let schema = Schema::date();

    assert!(schema.parse(&Value::from("2024-02-29")).is_ok());
    assert_eq!(
        schema.parse(&Value::from("2023-02-29")).unwrap_err().first().code,
        IssueCode::InvalidDate
    );
}

#[test]
fn test_datetime_offset_and_zulu_normalize_to_same_instant() {
    let schema = Schema::datetime();
    let expected = Utc.with_ymd_and_hms(2024, 12, 19, 10, 30, 0).unwrap();

    assert_eq!(
        schema.parse(&Value::from("2024-12-19T10:30:00Z")).unwrap(),
        expected
    );
    assert_eq!(
        schema.parse(&Value::from("2024-12-19T10:30:00+00:00")).unwrap(),
        expected
    );
    assert_eq!(
        schema.parse(&Value::from("2024-12-19T12:30:00+02:00")).unwrap(),
        expected
    );
    // Naive text is treated as UTC.
    assert_eq!(
        schema.parse(&Value::from("2024-12-19T10:30:00")).unwrap(),
        expected
    );
}

#[test]
fn test_unparsable_datetime_text_is_invalid_date() {
    let error = Schema::datetime()
        .parse(&Value::from("not-a-datetime"))
        .unwrap_err();
    assert_eq!(error.first().code, IssueCode::InvalidDate);
}

#[test]
fn test_datetime_range() {
    let schema = Schema::datetime()
        .min(Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap())
        .max(Utc.with_ymd_and_hms(2023, 12, 31, 23, 59, 59).unwrap());

    assert!(schema.parse(&Value::from("2023-06-15T12:00:00")).is_ok());
    assert!(schema.parse(&Value::from("2022-12-31T23:59:59")).is_err());
    assert!(schema.parse(&Value::from("2024-01-01T00:00:00")).is_err());
}

#[test]
fn test_temporal_fields_in_objects() {
    let schema = Schema::object()
        .field("born", Schema::date())
        .field("last_seen", Schema::datetime());

    let input = Value::from(serde_json::json!({
        "born": "1990-03-14",
        "last_seen": "2024-12-19T10:30:00Z"
    }));
    let output = schema.parse(&input).unwrap();

    assert_eq!(output["born"], Value::Date(ymd(1990, 3, 14)));
    assert_eq!(
        output["last_seen"],
        Value::DateTime(Utc.with_ymd_and_hms(2024, 12, 19, 10, 30, 0).unwrap())
    );

    let error = schema
        .parse(&Value::from(serde_json::json!({
            "born": "bogus",
            "last_seen": "also bogus"
        })))
        .unwrap_err();
    assert_eq!(error.len(), 2);
    assert_eq!(error.with_code(IssueCode::InvalidDate).len(), 2);
}
