// src/tests/transform_tests.rs
use crate::errors::ServerError;
use crate::transform::{transform, TransformOptions};
use serde_json::{json, Value};

fn default_opts() -> TransformOptions {
    TransformOptions::default()
}

fn skip_opts() -> TransformOptions {
    TransformOptions {
        skip_malformed_records: true,
    }
}

#[test]
fn output_length_matches_input_length() {
    let body = json!([
        {"property_id": "P1"},
        {"property_id": "P2"},
        {"property_id": "P3"}
    ])
    .to_string();

    let records = transform(&body, &default_opts()).unwrap();
    assert_eq!(records.len(), 3);
}

#[test]
fn empty_body_is_empty_input() {
    assert_eq!(
        transform("", &default_opts()).unwrap_err(),
        ServerError::EmptyInput
    );
    assert_eq!(
        transform("   \n", &default_opts()).unwrap_err(),
        ServerError::EmptyInput
    );
    assert_eq!(
        transform("{}", &default_opts()).unwrap_err(),
        ServerError::EmptyInput
    );
}

#[test]
fn non_json_body_is_malformed_json() {
    let err = transform("definitely not json", &default_opts()).unwrap_err();
    assert!(matches!(err, ServerError::MalformedJson(_)), "{err:?}");
}

#[test]
fn json_string_body_is_unwrapped() {
    // The outer body is a JSON string whose content is the record list
    let inner = json!([{"property_id": "P1"}]).to_string();
    let body = Value::String(inner).to_string();

    let records = transform(&body, &default_opts()).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].property_id, Some(json!("P1")));
}

#[test]
fn malformed_record_aborts_by_default() {
    let body = json!([{"property_id": "P1"}, 42]).to_string();

    let err = transform(&body, &default_opts()).unwrap_err();
    assert!(matches!(err, ServerError::UnexpectedShape(_)), "{err:?}");
}

#[test]
fn malformed_record_is_skipped_when_enabled() {
    let body = json!([{"property_id": "P1"}, 42, {"property_id": "P2"}]).to_string();

    let records = transform(&body, &skip_opts()).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].property_id, Some(json!("P1")));
    assert_eq!(records[1].property_id, Some(json!("P2")));
}

#[test]
fn envelope_scenario_end_to_end() {
    let body = json!([
        {"results": {"properties": [{"property_id": "P1", "phone_numbers": []}]}}
    ])
    .to_string();

    let records = transform(&body, &default_opts()).unwrap();
    assert_eq!(records.len(), 1);

    let out = serde_json::to_value(&records[0]).unwrap();
    assert_eq!(out["property_id"], "P1");
    assert_eq!(out["first_contact_name"], Value::Null);
    assert_eq!(out["flags"], json!([]));
    assert!(out.get("phone_0").is_none());
}

#[test]
fn empty_properties_list_transforms_to_empty_output() {
    let body = json!({"results": {"properties": []}}).to_string();
    let records = transform(&body, &default_opts()).unwrap();
    assert!(records.is_empty());
}
