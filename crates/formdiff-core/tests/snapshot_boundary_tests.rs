//! Raw snapshot decoding, digests and the logged `diff_snapshots` boundary.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::snapshot_bytes;
use formdiff_core::diff::{diff_snapshots, DiffOptions};
use formdiff_core::errors::ExErrorKind;
use formdiff_core::logging_facility::test_capture::init_test_capture;
use formdiff_core::schema::{EVENT_END, EVENT_END_ERROR, EVENT_START};
use formdiff_core::snapshot::{compute_snapshot_digest, parse_snapshot_bytes};
use serde_json::json;

#[test]
fn test_parse_keeps_unknown_top_level_keys() {
    let bytes = snapshot_bytes(json!({
        "formId": "frm_1",
        "fields": [{"id": "f1", "type": "TEXT", "label": "Name", "placeholder": "Jane"}],
        "settings": {"isQuiz": true}
    }));
    let snap = parse_snapshot_bytes(&bytes).unwrap();
    assert_eq!(snap.fields[0].properties.get("placeholder"), Some(&json!("Jane")));
    assert_eq!(snap.settings.get("isQuiz"), Some(&json!(true)));
    assert_eq!(snap.extra.get("formId"), Some(&json!("frm_1")));
}

#[test]
fn test_top_level_setting_edits_are_reported() {
    let before = br#"{"fields":[],"isQuiz":false,"title":"A"}"#;
    let after = br#"{"fields":[],"isQuiz":true,"title":"B"}"#;

    let report = diff_snapshots(before, after, &DiffOptions::default()).unwrap();
    let props: Vec<&str> = report
        .change_set
        .settings_changes
        .iter()
        .map(|c| c.property.as_str())
        .collect();
    assert_eq!(props, vec!["isQuiz", "title"]);
    assert!(!report.is_identical());
}

#[test]
fn test_parse_failures_are_invalid_snapshot() {
    let inputs: [&[u8]; 4] = [b"\xff", b"", b"42", br#"{"logic": "nope"}"#];
    for bytes in inputs {
        let err = parse_snapshot_bytes(bytes).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidSnapshot);
        assert_eq!(err.op(), Some("parse_snapshot_bytes"));
    }
}

#[test]
fn test_digest_ignores_key_order_but_not_list_order() {
    let a = parse_snapshot_bytes(br#"{"settings":{"b":1,"a":2},"fields":[]}"#).unwrap();
    let b = parse_snapshot_bytes(br#"{"fields":[],"settings":{"a":2,"b":1}}"#).unwrap();
    assert_eq!(
        compute_snapshot_digest(&a).unwrap(),
        compute_snapshot_digest(&b).unwrap()
    );

    let one = parse_snapshot_bytes(
        br#"{"fields":[{"id":"x","type":"TEXT","label":"X"},{"id":"y","type":"TEXT","label":"Y"}]}"#,
    )
    .unwrap();
    let two = parse_snapshot_bytes(
        br#"{"fields":[{"id":"y","type":"TEXT","label":"Y"},{"id":"x","type":"TEXT","label":"X"}]}"#,
    )
    .unwrap();
    assert_ne!(
        compute_snapshot_digest(&one).unwrap(),
        compute_snapshot_digest(&two).unwrap()
    );
}

#[test]
fn test_diff_snapshots_reports_digests_and_changes() {
    let before = snapshot_bytes(json!({"fields": [{"id": "f1", "type": "TEXT", "label": "Name"}]}));
    let after = snapshot_bytes(json!({"fields": [
        {"id": "f1", "type": "TEXT", "label": "Name"},
        {"id": "f2", "type": "EMAIL", "label": "Email"}
    ]}));

    let report = diff_snapshots(&before, &after, &DiffOptions::default()).unwrap();
    assert_eq!(report.before_digest.len(), 64);
    assert_ne!(report.before_digest, report.after_digest);
    assert_eq!(report.change_set.added_fields.len(), 1);

    let value = serde_json::to_value(&report).unwrap();
    assert!(value.get("beforeDigest").is_some());
    assert!(value["changeSet"]["addedFields"].is_array());
}

#[test]
fn test_diff_snapshots_logs_start_and_end() {
    let capture = init_test_capture();
    let before = snapshot_bytes(json!({"settings": {"marker": "boundary-log-unique-1"}}));
    let after = snapshot_bytes(json!({"settings": {"marker": "boundary-log-unique-1!"}}));

    diff_snapshots(&before, &after, &DiffOptions::default()).unwrap();

    let size = before.len().to_string();
    let events = capture.events_for_op("diff_snapshots");
    let start = events
        .iter()
        .find(|e| e.event.as_deref() == Some(EVENT_START) && e.field("before_bytes") == Some(size.as_str()))
        .expect("start event");
    assert_eq!(start.field("after_bytes"), Some(after.len().to_string().as_str()));

    let end = events
        .iter()
        .find(|e| e.event.as_deref() == Some(EVENT_END) && e.field("settings_changes") == Some("1"))
        .expect("end event");
    assert!(end.field("duration_ms").is_some());
}

#[test]
fn test_diff_snapshots_logs_error_code() {
    let capture = init_test_capture();
    let err = diff_snapshots(b"{}", b"[\"boundary-error-unique-2\"]", &DiffOptions::default())
        .unwrap_err();
    assert_eq!(err.code(), "ERR_INVALID_SNAPSHOT");

    let errors = capture.count_events(|e| {
        e.op.as_deref() == Some("diff_snapshots")
            && e.event.as_deref() == Some(EVENT_END_ERROR)
            && e.field("err.code") == Some("ERR_INVALID_SNAPSHOT")
    });
    assert!(errors >= 1);
}
