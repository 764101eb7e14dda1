//! Integration tests for the report surface: record shape, serialization,
//! display, and determinism.

use serde_json::json;
use verdict::{validate, Schema};

#[test]
fn test_failed_record_carries_full_context() {
    let schema = Schema::object()
        .field("age", Schema::number().integer().min(18.0))
        .build();
    let report = validate(&json!({"age": 15}), &schema);

    let failure = &report.failed()[0];
    assert_eq!(failure.method, "min");
    assert_eq!(failure.name, "age");
    assert_eq!(failure.expect, "value greater than or equal to the reference");
    assert_eq!(failure.received, json!(15));
    assert_eq!(failure.message, "age must be greater than or equal to 18!");
    assert_eq!(failure.index, None);
}

#[test]
fn test_passed_record_carries_received_value() {
    let schema = Schema::string().min_word(2).build();
    let report = validate(&json!("Ada Lovelace"), &schema);

    let record = report
        .passed()
        .iter()
        .find(|p| p.method == "minWord")
        .unwrap();
    assert_eq!(record.expect, "must have a minimum of words");
    assert_eq!(record.received, json!("Ada Lovelace"));
}

#[test]
fn test_failure_kind_serializes_as_type_tag() {
    let schema = Schema::object().field("id", Schema::number()).build();
    let report = validate(&json!({}), &schema);

    let serialized = serde_json::to_value(report.failed()).unwrap();
    assert_eq!(serialized[0]["type"], json!("missing value"));
    assert_eq!(serialized[0]["method"], json!("required"));
    // No "kind" key leaks into the wire shape
    assert!(serialized[0].get("kind").is_none());
}

#[test]
fn test_invalid_value_type_tag() {
    let schema = Schema::string().build();
    let report = validate(&json!(1), &schema);

    let serialized = serde_json::to_value(report.failed()).unwrap();
    assert_eq!(serialized[0]["type"], json!("invalid value"));
}

#[test]
fn test_index_is_omitted_when_absent() {
    let schema = Schema::string().build();
    let report = validate(&json!("ok"), &schema);

    let serialized = serde_json::to_value(report.passed()).unwrap();
    assert!(serialized[0].get("index").is_none());
}

#[test]
fn test_index_is_serialized_inside_arrays() {
    let schema = Schema::array(Schema::number()).build();
    let report = validate(&json!([1]), &schema);

    let serialized = serde_json::to_value(report.passed()).unwrap();
    let element_record = serialized
        .as_array()
        .unwrap()
        .iter()
        .find(|r| r["method"] == json!("number"))
        .unwrap();
    assert_eq!(element_record["index"], json!(0));
}

#[test]
fn test_whole_report_serialization() {
    let schema = Schema::object()
        .field("name", Schema::string())
        .build();
    let report = validate(&json!({"name": 1}), &schema);

    let serialized = serde_json::to_value(&report).unwrap();
    assert!(serialized["passed"].is_array());
    assert!(serialized["failed"].is_array());
    assert_eq!(serialized["failed"][0]["name"], json!("name"));
}

#[test]
fn test_report_display_for_failures() {
    let schema = Schema::object()
        .field("email", Schema::string().email())
        .field("age", Schema::number())
        .build();
    let report = validate(&json!({"email": "bad@mail", "age": "x"}), &schema);

    let rendered = report.to_string();
    assert!(rendered.starts_with("Validation failed with 2 error(s):"));
    assert!(rendered.contains("email bad@mail is invalid!"));
    assert!(rendered.contains("age must be a number type!"));
}

#[test]
fn test_report_display_for_success() {
    let schema = Schema::boolean().build();
    let report = validate(&json!(true), &schema);

    assert_eq!(report.to_string(), "Validation passed with 2 test(s)");
}

#[test]
fn test_total_tests_counts_both_sides() {
    let schema = Schema::string().min_length(10).build();
    let report = validate(&json!("short"), &schema);

    // required + string pass, minLength fails
    assert_eq!(report.passed().len(), 2);
    assert_eq!(report.failed().len(), 1);
    assert_eq!(report.total_tests(), 3);
}

#[test]
fn test_failed_for_and_passed_for_filter_by_method() {
    let schema = Schema::array(Schema::number().integer()).build();
    let report = validate(&json!([1, 1.5, 2]), &schema);

    assert_eq!(report.failed_for("integer").len(), 1);
    assert_eq!(report.passed_for("integer").len(), 2);
    assert!(report.failed_for("number").is_empty());
}

#[test]
fn test_validation_is_idempotent() {
    let schema = Schema::object()
        .field("id", Schema::string().uuid(None))
        .field("scores", Schema::array(Schema::number()).min_length(1))
        .build();
    let value = json!({
        "id": "550e8400-e29b-41d4-a716-446655440000",
        "scores": [9.5, 7.0]
    });

    let first = validate(&value, &schema);
    let second = validate(&value, &schema);

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_schema_node_validate_convenience() {
    let schema = Schema::string().min_word(2).build();

    // SchemaNode::validate and the free function agree
    let via_method = schema.validate(&json!("one two"));
    let via_function = validate(&json!("one two"), &schema);
    assert_eq!(via_method, via_function);
}
