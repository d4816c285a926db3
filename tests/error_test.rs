use contour::{IssueCode, ParseResult, Schema, SchemaLike, Value};
use serde_json::json;

#[test]
fn test_safe_parse_success() {
    let schema = Schema::string();

    match schema.safe_parse(&Value::from("hello")) {
        ParseResult::Success { data } => assert_eq!(data, "hello"),
        ParseResult::Failure { .. } => panic!("expected success"),
    }
}

#[test]
fn test_safe_parse_failure_carries_error() {
    let schema = Schema::string();

    let result = schema.safe_parse(&Value::Int(123));
    assert!(result.is_failure());
    assert!(!result.is_success());
    assert!(result.data().is_none());

    let error = result.error().unwrap();
    assert_eq!(error.first().code, IssueCode::InvalidType);
}

#[test]
fn test_parse_and_safe_parse_agree() {
    let schema = Schema::number().positive();

    assert_eq!(schema.parse(&Value::Int(5)).unwrap(), Value::Int(5));
    assert!(schema.safe_parse(&Value::Int(5)).is_success());

    assert!(schema.parse(&Value::Int(0)).is_err());
    assert!(schema.safe_parse(&Value::Int(0)).is_failure());

    let from_parse = schema.parse(&Value::Int(-1)).unwrap_err();
    let from_safe = schema.safe_parse(&Value::Int(-1)).into_result().unwrap_err();
    assert_eq!(from_parse, from_safe);
}

#[test]
fn test_format_yields_structured_issue_sequence() {
    let schema = Schema::object()
        .field("email", Schema::string().email())
        .field("age", Schema::number().positive());

    let error = schema
        .parse(&Value::from(json!({"email": "nope", "age": -5})))
        .unwrap_err();

    let issues = error.format();
    assert_eq!(issues.len(), 2);

    assert_eq!(issues[0].code, IssueCode::InvalidString);
    assert_eq!(issues[0].path.to_string(), "email");
    assert_eq!(issues[0].received, Some("'nope'".to_string()));

    assert_eq!(issues[1].code, IssueCode::TooSmall);
    assert_eq!(issues[1].path.to_string(), "age");
}

#[test]
fn test_display_joins_path_and_message_per_issue() {
    let schema = Schema::object()
        .field("name", Schema::string())
        .field("age", Schema::number());

    let error = schema
        .parse(&Value::from(json!({"name": 1, "age": "x"})))
        .unwrap_err();

    assert_eq!(
        error.to_string(),
        "name: Expected string, received int; age: Expected number, received string"
    );
}

#[test]
fn test_root_failure_renders_root() {
    let error = Schema::string().parse(&Value::Int(123)).unwrap_err();
    assert_eq!(error.to_string(), "root: Expected string, received int");
}

#[test]
fn test_flatten_groups_messages_by_path() {
    let schema = Schema::object().field(
        "user",
        Schema::object()
            .field("email", Schema::string().email())
            .field("age", Schema::number().positive()),
    );

    let error = schema
        .parse(&Value::from(json!({"user": {"email": "invalid-email", "age": -5}})))
        .unwrap_err();

    let flat = error.flatten();
    assert!(flat.contains_key("user.email"));
    assert!(flat.contains_key("user.age"));
}

#[test]
fn test_flatten_uses_root_key_for_top_level() {
    let error = Schema::string().parse(&Value::Int(1)).unwrap_err();
    let flat = error.flatten();
    assert_eq!(flat["root"], vec!["Expected string, received int"]);
}

#[test]
fn test_issue_order_is_depth_first_left_to_right() {
    let schema = Schema::object()
        .field("a", Schema::object().field("x", Schema::number()))
        .field("b", Schema::number())
        .field("c", Schema::array(Schema::number()));

    let error = schema
        .parse(&Value::from(json!({
            "a": {"x": "bad"},
            "b": "bad",
            "c": [1, "bad"]
        })))
        .unwrap_err();

    let paths: Vec<_> = error.iter().map(|i| i.path.to_string()).collect();
    assert_eq!(paths, vec!["a.x", "b", "c[1]"]);
}

#[test]
fn test_paths_captured_when_raised_stay_fixed() {
    let schema = Schema::object().field("items", Schema::array(Schema::string()));

    let error = schema
        .parse(&Value::from(json!({"items": [1]})))
        .unwrap_err();

    // The issue's path was captured at raise time inside the array walk and
    // was not rewritten while bubbling up through the object.
    assert_eq!(error.first().path.to_string(), "items[0]");
}

#[test]
fn test_codes_render_snake_case() {
    let error = Schema::string().parse(&Value::Int(1)).unwrap_err();
    assert_eq!(error.first().code.as_str(), "invalid_type");
    assert_eq!(error.first().code.to_string(), "invalid_type");
}

#[test]
fn test_valid_input_parses_to_itself() {
    let schema = Schema::object()
        .field("name", Schema::string())
        .field("scores", Schema::array(Schema::number()));

    let data = json!({"name": "Ada", "scores": [1, 2, 3]});
    let output = schema.parse(&Value::from(data.clone())).unwrap();
    assert_eq!(serde_json::Value::from(Value::Object(output)), data);
}
