//! Change-set output types.
//!
//! All types implement `Debug, Clone, Serialize, Deserialize, PartialEq` and
//! serialize with camelCase keys, which is the shape the audit writer stores
//! and the timeline renderer reads back.

use crate::diff::normalize::values_equal;
use crate::model::{FieldRef, FieldSnapshot, LogicRuleSnapshot, RuleRef};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Dotted property path naming one leaf of a snapshot object.
///
/// Object nesting uses `.` (`validation.dateFormat`); a child of a keyed
/// collection is addressed by its id in brackets
/// (`options.columns[c2].label`). A `\`, `.`, `[` or `]` inside a key or id
/// is escaped with a backslash, so `{"a.b": 1}` yields `a\.b` and never
/// collides with `{"a": {"b": 1}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DottedPath(String);

impl DottedPath {
    /// The empty path (object root)
    pub fn root() -> Self {
        Self(String::new())
    }

    /// Path of a named child property
    pub fn child(&self, key: &str) -> Self {
        let key = escape_segment(key);
        if self.0.is_empty() {
            Self(key)
        } else {
            Self(format!("{}.{}", self.0, key))
        }
    }

    /// Path of an element of a keyed collection
    pub fn keyed(&self, id: &str) -> Self {
        Self(format!("{}[{}]", self.0, escape_segment(id)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

fn escape_segment(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    for c in segment.chars() {
        if matches!(c, '\\' | '.' | '[' | ']') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

impl From<&str> for DottedPath {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl std::fmt::Display for DottedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One differing leaf property.
///
/// `before` and `after` are normalized values and never equal; absent
/// values are `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeRecord {
    pub property: DottedPath,
    pub before: Value,
    pub after: Value,
}

impl ChangeRecord {
    /// Build a record, or `None` when the two values are equal.
    ///
    /// Numbers are equal when their values are, whatever their JSON spelling.
    pub fn new(property: DottedPath, before: Value, after: Value) -> Option<Self> {
        if values_equal(&before, &after) {
            None
        } else {
            Some(Self {
                property,
                before,
                after,
            })
        }
    }
}

/// A field present on both sides whose content changed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldUpdate {
    pub field: FieldRef,
    pub changes: Vec<ChangeRecord>,
}

impl FieldUpdate {
    /// The group move carried by this update, as `(from, to)`
    pub fn moved(&self) -> Option<(&Value, &Value)> {
        self.changes
            .iter()
            .find(|c| c.property.as_str() == "groupId")
            .map(|c| (&c.before, &c.after))
    }

    /// Look up the record for one property path
    pub fn change_for(&self, property: &str) -> Option<&ChangeRecord> {
        self.changes.iter().find(|c| c.property.as_str() == property)
    }
}

/// A rule present on both sides whose content changed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleUpdate {
    pub rule: RuleRef,
    pub changes: Vec<ChangeRecord>,
}

/// Logic-rule buckets of a change-set
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogicChanges {
    pub added: Vec<LogicRuleSnapshot>,
    pub deleted: Vec<LogicRuleSnapshot>,
    pub updated: Vec<RuleUpdate>,
}

impl LogicChanges {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.deleted.is_empty() && self.updated.is_empty()
    }

    /// Number of rules touched in any way
    pub fn len(&self) -> usize {
        self.added.len() + self.deleted.len() + self.updated.len()
    }
}

/// Everything that differs between two form snapshots.
///
/// Built once per save and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeSet {
    /// Fields present after but not before, in "after" order
    pub added_fields: Vec<FieldSnapshot>,
    /// Fields present before but not after, in "before" order
    pub deleted_fields: Vec<FieldSnapshot>,
    /// Fields present on both sides with content changes, in "after" order
    pub updated_fields: Vec<FieldUpdate>,
    /// Changes to top-level form settings
    pub settings_changes: Vec<ChangeRecord>,
    pub logic_changes: LogicChanges,
}

impl ChangeSet {
    /// True when the two snapshots are equivalent
    pub fn is_empty(&self) -> bool {
        self.added_fields.is_empty()
            && self.deleted_fields.is_empty()
            && self.updated_fields.is_empty()
            && self.settings_changes.is_empty()
            && self.logic_changes.is_empty()
    }

    /// Look up the update entry for one field id
    pub fn updated_field(&self, id: &str) -> Option<&FieldUpdate> {
        self.updated_fields
            .iter()
            .find(|u| u.field.id.as_str() == id)
    }
}
