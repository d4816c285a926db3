use contour::{Schema, SchemaLike, Value};
use serde_json::json;
use std::sync::Arc;
use std::thread;

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_schema_types_are_send_sync() {
    assert_send_sync::<contour::StringSchema>();
    assert_send_sync::<contour::NumberSchema>();
    assert_send_sync::<contour::BooleanSchema>();
    assert_send_sync::<contour::NoneSchema>();
    assert_send_sync::<contour::LiteralSchema>();
    assert_send_sync::<contour::EnumSchema>();
    assert_send_sync::<contour::DateSchema>();
    assert_send_sync::<contour::DateTimeSchema>();
    assert_send_sync::<contour::ObjectSchema>();
    assert_send_sync::<contour::ArraySchema>();
    assert_send_sync::<contour::UnionSchema>();
    assert_send_sync::<contour::OptionalSchema>();
    assert_send_sync::<contour::NullableSchema>();
    assert_send_sync::<contour::DefaultSchema>();
    assert_send_sync::<contour::TransformSchema>();
    assert_send_sync::<contour::RefineSchema>();
}

#[test]
fn test_shared_schema_parses_concurrently() {
    let schema = Arc::new(
        Schema::object()
            .field("name", Schema::string().min_len(1))
            .field("age", Schema::number().int().positive())
            .field("tags", Schema::array(Schema::string()).max_len(4)),
    );

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let schema = Arc::clone(&schema);
            thread::spawn(move || {
                let valid = Value::from(json!({
                    "name": format!("user-{}", i),
                    "age": i + 1,
                    "tags": ["a", "b"]
                }));
                let invalid = Value::from(json!({
                    "name": "",
                    "age": -1,
                    "tags": ["a", "b", "c", "d", "e"]
                }));

                for _ in 0..100 {
                    assert!(schema.safe_parse(&valid).is_success());
                    let error = schema.parse(&invalid).unwrap_err();
                    assert_eq!(error.len(), 3);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_concurrent_parses_see_identical_results() {
    let schema = Arc::new(Schema::string().email() | Schema::number().positive());
    let input = Value::from(json!("not-an-email"));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let schema = Arc::clone(&schema);
            let input = input.clone();
            thread::spawn(move || schema.parse(&input).unwrap_err().to_string())
        })
        .collect();

    let messages: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(messages.windows(2).all(|w| w[0] == w[1]));
}
