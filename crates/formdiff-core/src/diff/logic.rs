//! Conditional-logic rule diffing.
//!
//! Rules are reconciled by id like fields. For a matched pair, `name` and
//! `logicType` are compared as properties while `conditions` and `actions`
//! are compared as whole lists: a condition has no identity of its own, so
//! any edit reports the full before/after list.

use crate::diff::defaults::{DefaultScope, DefaultsTable};
use crate::diff::model::{DottedPath, LogicChanges, RuleUpdate};
use crate::diff::properties::{diff_properties, DiffContext};
use crate::diff::reconcile::reconcile;
use crate::model::{LogicRuleSnapshot, RuleRef};
use formdiff_core_types::schema::FIELD_RULE_ID;

/// Logic changes plus the number of rules skipped for lacking an id
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogicDiff {
    pub changes: LogicChanges,
    pub skipped: usize,
}

/// Diff two rule lists.
pub fn diff_logic(
    before: &[LogicRuleSnapshot],
    after: &[LogicRuleSnapshot],
    table: &DefaultsTable,
) -> LogicDiff {
    let r = reconcile(before, after, |rule| rule.id.as_ref());
    let ctx = DiffContext::new(table, Some(DefaultScope::LogicRule));

    let updated = r
        .common
        .iter()
        .filter_map(|(b, a)| {
            let id = a.id.clone()?;
            let changes = diff_properties(
                &b.to_property_map(),
                &a.to_property_map(),
                &DottedPath::root(),
                &ctx,
            );
            if changes.is_empty() {
                return None;
            }
            tracing::trace!({ FIELD_RULE_ID } = %id, changes = changes.len(), "logic rule changed");
            Some(RuleUpdate {
                rule: RuleRef::new(id, a),
                changes,
            })
        })
        .collect();

    LogicDiff {
        changes: LogicChanges {
            added: r.added.into_iter().cloned().collect(),
            deleted: r.removed.into_iter().cloned().collect(),
            updated,
        },
        skipped: r.skipped,
    }
}
