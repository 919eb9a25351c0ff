use formdiff_core::model::{Action, Condition, FieldSnapshot, FieldType, FormSnapshot, LogicRuleSnapshot};
use serde_json::{json, Value};

/// A single-line text field
#[allow(dead_code)]
pub fn text_field(id: &str, label: &str) -> FieldSnapshot {
    FieldSnapshot::new(id, FieldType::Text, label)
}

/// A radio field whose options carry one item per `(id, label)` pair
#[allow(dead_code)]
pub fn radio_field(id: &str, items: &[(&str, &str)]) -> FieldSnapshot {
    let items: Vec<Value> = items
        .iter()
        .map(|(item_id, label)| json!({"id": item_id, "label": label}))
        .collect();
    FieldSnapshot::new(id, FieldType::Radio, "Pick one").with_property("options", json!({ "items": items }))
}

/// The "Show on Yes" rule used across scenarios
#[allow(dead_code)]
pub fn show_on_yes_rule() -> LogicRuleSnapshot {
    LogicRuleSnapshot::new("r1", "Show on Yes")
        .with_condition(Condition::new("f1", "EQUALS", json!("Yes")))
        .with_action(Action::new("SHOW", "f2"))
}

/// Snapshot holding only the given fields
#[allow(dead_code)]
pub fn form_with(fields: Vec<FieldSnapshot>) -> FormSnapshot {
    fields
        .into_iter()
        .fold(FormSnapshot::new(), |form, field| form.with_field(field))
}

/// Parse a snapshot literal, panicking on bad fixtures
#[allow(dead_code)]
pub fn snapshot(value: Value) -> FormSnapshot {
    serde_json::from_value(value).expect("fixture snapshot must deserialize")
}

/// Serialize a snapshot literal to raw bytes
#[allow(dead_code)]
pub fn snapshot_bytes(value: Value) -> Vec<u8> {
    serde_json::to_vec(&value).expect("fixture snapshot must serialize")
}
