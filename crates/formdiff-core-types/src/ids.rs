//! Stable identity types for form entities
//!
//! Ids are assigned by the form builder when an entity is created and are
//! preserved across edits and reorders. They are never generated here.

use serde::{Deserialize, Serialize};

/// Stable identifier of a form field
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldId(String);

impl FieldId {
    /// Create from an existing string
    pub fn from_string(s: String) -> Self {
        Self(s)
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FieldId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl std::fmt::Display for FieldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stable identifier of a conditional-logic rule
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleId(String);

impl RuleId {
    /// Create from an existing string
    pub fn from_string(s: String) -> Self {
        Self(s)
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RuleId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_id_display() {
        let id = FieldId::from("f1");
        assert_eq!(format!("{}", id), "f1");
        assert_eq!(id.as_str(), "f1");
    }

    #[test]
    fn test_rule_id_ordering() {
        let a = RuleId::from("r1");
        let b = RuleId::from("r2");
        assert!(a < b);
    }

    #[test]
    fn test_serialization_is_transparent() {
        let id = FieldId::from_string("f-42".to_string());
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"f-42\"");
        let deserialized: FieldId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
