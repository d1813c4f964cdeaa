//! Tests for the update record and usage types.

use dripfeed::{ResponseUsage, TextStreamUpdate};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn delta_carries_value_and_usage() {
    let update = TextStreamUpdate::delta("Hello", Some(ResponseUsage::new(3, 2)));

    assert!(!update.done);
    assert_eq!(update.value, "Hello");
    assert_eq!(update.citations, None);
    assert_eq!(update.error, None);
    assert_eq!(update.usage, Some(ResponseUsage::new(3, 2)));
}

#[test]
fn finished_is_terminal_and_empty() {
    let update = TextStreamUpdate::finished();

    assert!(update.done);
    assert_eq!(update.value, "");
    assert_eq!(update.error, None);
}

#[test]
fn failed_is_terminal_and_carries_the_payload() {
    let update = TextStreamUpdate::failed(json!({"message": "overloaded"}));

    assert!(update.done);
    assert_eq!(update.value, "");
    assert_eq!(update.error, Some(json!({"message": "overloaded"})));
}

#[test]
fn citations_record_is_non_terminal_with_empty_value() {
    let update = TextStreamUpdate::citations(json!(["doc-1", "doc-2"]));

    assert!(!update.done);
    assert_eq!(update.value, "");
    assert_eq!(update.citations, Some(json!(["doc-1", "doc-2"])));
}

#[test]
fn serialized_update_omits_absent_fields() {
    let update = TextStreamUpdate::delta("hi", None);

    assert_eq!(
        serde_json::to_value(&update).unwrap(),
        json!({"done": false, "value": "hi"})
    );
}

#[test]
fn serialized_error_update_keeps_the_payload() {
    let update = TextStreamUpdate::failed(json!("boom"));

    assert_eq!(
        serde_json::to_value(&update).unwrap(),
        json!({"done": true, "value": "", "error": "boom"})
    );
}

#[test]
fn update_deserializes_with_nested_usage() {
    let update: TextStreamUpdate = serde_json::from_value(json!({
        "done": false,
        "value": "token",
        "usage": {"prompt_tokens": 7, "completion_tokens": 5, "total_tokens": 12}
    }))
    .unwrap();

    assert_eq!(update.value, "token");
    assert_eq!(
        update.usage,
        Some(ResponseUsage {
            prompt_tokens: 7,
            completion_tokens: 5,
            total_tokens: 12,
        })
    );
}

#[test]
fn default_update_is_a_bare_non_terminal_record() {
    let update = TextStreamUpdate::default();

    assert!(!update.done);
    assert_eq!(update.value, "");
    assert_eq!(update.citations, None);
    assert_eq!(update.error, None);
    assert_eq!(update.usage, None);
}
