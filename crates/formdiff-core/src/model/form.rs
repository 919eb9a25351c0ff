use crate::model::field::FieldSnapshot;
use crate::model::logic::LogicRuleSnapshot;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A form's editable state at one instant
///
/// Supplied by the caller; the diff engine only reads it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSnapshot {
    /// Fields in canvas order
    #[serde(default)]
    pub fields: Vec<FieldSnapshot>,

    /// Logic rules in editor order
    #[serde(default)]
    pub logic: Vec<LogicRuleSnapshot>,

    /// Top-level settings keyed by setting name
    #[serde(default)]
    pub settings: Map<String, Value>,

    /// Form-level keys stored next to `fields` rather than under `settings`
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FormSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, field: FieldSnapshot) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_rule(mut self, rule: LogicRuleSnapshot) -> Self {
        self.logic.push(rule);
        self
    }

    pub fn with_setting(mut self, name: impl Into<String>, value: Value) -> Self {
        self.settings.insert(name.into(), value);
        self
    }

    /// Every form-level setting, top-level keys included.
    ///
    /// A name present both at the top level and under `settings` takes the
    /// `settings` value.
    pub fn effective_settings(&self) -> Map<String, Value> {
        let mut merged = self.extra.clone();
        merged.extend(self.settings.clone());
        merged
    }
}
