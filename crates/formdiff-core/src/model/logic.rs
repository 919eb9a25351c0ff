use formdiff_core_types::{FieldId, RuleId};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// How a rule combines its conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogicType {
    MatchAll,
    MatchAny,
}

impl LogicType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogicType::MatchAll => "MATCH_ALL",
            LogicType::MatchAny => "MATCH_ANY",
        }
    }
}

/// One predicate over another field's answer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    pub field_id: FieldId,
    pub operator: String,
    #[serde(default)]
    pub value: Value,
}

impl Condition {
    pub fn new(field_id: impl Into<FieldId>, operator: impl Into<String>, value: Value) -> Self {
        Self {
            field_id: field_id.into(),
            operator: operator.into(),
            value,
        }
    }

    fn to_value(&self) -> Value {
        json!({
            "fieldId": self.field_id.as_str(),
            "operator": self.operator,
            "value": self.value,
        })
    }
}

/// Effect applied to a field when the rule fires
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    #[serde(rename = "type")]
    pub action_type: String,
    pub field_id: FieldId,
}

impl Action {
    pub fn new(action_type: impl Into<String>, field_id: impl Into<FieldId>) -> Self {
        Self {
            action_type: action_type.into(),
            field_id: field_id.into(),
        }
    }

    fn to_value(&self) -> Value {
        json!({
            "type": self.action_type,
            "fieldId": self.field_id.as_str(),
        })
    }
}

/// A conditional-logic rule as it existed at one instant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogicRuleSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RuleId>,

    #[serde(default)]
    pub name: String,

    /// Absent on rules saved before the combinator was selectable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logic_type: Option<LogicType>,

    #[serde(default)]
    pub conditions: Vec<Condition>,

    #[serde(default)]
    pub actions: Vec<Action>,
}

impl LogicRuleSnapshot {
    pub fn new(id: impl Into<RuleId>, name: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            name: name.into(),
            logic_type: None,
            conditions: Vec::new(),
            actions: Vec::new(),
        }
    }

    pub fn with_logic_type(mut self, logic_type: LogicType) -> Self {
        self.logic_type = Some(logic_type);
        self
    }

    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    pub fn with_action(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }

    /// Flatten the rule into the property map the differ walks.
    ///
    /// `conditions` and `actions` become plain JSON arrays so they are
    /// compared as whole lists.
    pub fn to_property_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("name".to_string(), Value::String(self.name.clone()));
        map.insert(
            "logicType".to_string(),
            self.logic_type
                .map(|t| Value::String(t.as_str().to_string()))
                .unwrap_or(Value::Null),
        );
        map.insert(
            "conditions".to_string(),
            Value::Array(self.conditions.iter().map(Condition::to_value).collect()),
        );
        map.insert(
            "actions".to_string(),
            Value::Array(self.actions.iter().map(Action::to_value).collect()),
        );
        map
    }
}

/// Lightweight reference to a rule, carried by update entries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleRef {
    pub id: RuleId,
    pub name: String,
}

impl RuleRef {
    pub fn new(id: RuleId, rule: &LogicRuleSnapshot) -> Self {
        Self {
            id,
            name: rule.name.clone(),
        }
    }
}
