//! Change-set assembly.
//!
//! The core entry point is [`compute_change_set`], which accepts two typed
//! snapshots and produces a [`ChangeSet`]. It never fails, never mutates its
//! inputs and reads nothing outside them, so it is safe to re-run for
//! backfills.

use crate::diff::defaults::{DefaultScope, DefaultsTable};
use crate::diff::logic::diff_logic;
use crate::diff::model::{ChangeSet, DottedPath, FieldUpdate};
use crate::diff::properties::{diff_properties, DiffContext};
use crate::diff::reconcile::reconcile;
use crate::model::{FieldRef, FieldSnapshot, FormSnapshot};
use formdiff_core_types::schema::{
    FIELD_ADDED_FIELDS, FIELD_DELETED_FIELDS, FIELD_FIELD_ID, FIELD_LOGIC_CHANGES,
    FIELD_SETTINGS_CHANGES, FIELD_SKIPPED_ITEMS, FIELD_UPDATED_FIELDS,
};

/// Settings keys that are diffed elsewhere
const SETTINGS_EXCLUDED: [&str; 2] = ["fields", "logic"];

/// Knobs for one diff run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiffOptions {
    /// Documented defaults and keyed collections
    pub table: DefaultsTable,
    /// Extra property keys skipped at every depth
    pub ignored_keys: Vec<String>,
}

impl DiffOptions {
    pub fn with_table(table: DefaultsTable) -> Self {
        Self {
            table,
            ignored_keys: Vec::new(),
        }
    }

    pub fn ignore_key(mut self, key: impl Into<String>) -> Self {
        self.ignored_keys.push(key.into());
        self
    }
}

/// Compute the change-set between two snapshots using the built-in table.
pub fn compute_change_set(before: &FormSnapshot, after: &FormSnapshot) -> ChangeSet {
    compute_change_set_with(before, after, &DiffOptions::default())
}

/// Compute the change-set between two snapshots.
///
/// Fields and rules are matched by id; their order never matters. A field
/// whose `type` changed, or whose `type` is not recognized, is diffed
/// literally, without type-specific defaults or keyed collections.
pub fn compute_change_set_with(
    before: &FormSnapshot,
    after: &FormSnapshot,
    options: &DiffOptions,
) -> ChangeSet {
    let fields = reconcile(&before.fields, &after.fields, |f| f.id.as_ref());

    let updated_fields: Vec<FieldUpdate> = fields
        .common
        .iter()
        .filter_map(|(b, a)| diff_field(b, a, options))
        .collect();

    let logic = diff_logic(&before.logic, &after.logic, &options.table);

    let mut settings_ignored = options.ignored_keys.clone();
    settings_ignored.extend(SETTINGS_EXCLUDED.iter().map(|k| k.to_string()));
    let settings_ctx = DiffContext::new(&options.table, Some(DefaultScope::Settings))
        .with_ignored(&settings_ignored);
    let settings_changes = diff_properties(
        &before.effective_settings(),
        &after.effective_settings(),
        &DottedPath::root(),
        &settings_ctx,
    );

    let skipped = fields.skipped + logic.skipped;
    if skipped > 0 {
        tracing::warn!(
            { FIELD_SKIPPED_ITEMS } = skipped,
            "items without an id were left out of the change-set"
        );
    }

    let change_set = ChangeSet {
        added_fields: fields.added.into_iter().cloned().collect(),
        deleted_fields: fields.removed.into_iter().cloned().collect(),
        updated_fields,
        settings_changes,
        logic_changes: logic.changes,
    };

    tracing::debug!(
        { FIELD_ADDED_FIELDS } = change_set.added_fields.len(),
        { FIELD_DELETED_FIELDS } = change_set.deleted_fields.len(),
        { FIELD_UPDATED_FIELDS } = change_set.updated_fields.len(),
        { FIELD_SETTINGS_CHANGES } = change_set.settings_changes.len(),
        { FIELD_LOGIC_CHANGES } = change_set.logic_changes.len(),
        "change-set computed"
    );

    change_set
}

fn diff_field(
    before: &FieldSnapshot,
    after: &FieldSnapshot,
    options: &DiffOptions,
) -> Option<FieldUpdate> {
    let id = after.id.clone()?;
    let scope = (before.field_type == after.field_type)
        .then(|| after.field_type.known())
        .flatten()
        .map(DefaultScope::Field);
    let ctx = DiffContext::new(&options.table, scope).with_ignored(&options.ignored_keys);

    let changes = diff_properties(
        &before.to_property_map(),
        &after.to_property_map(),
        &DottedPath::root(),
        &ctx,
    );
    if changes.is_empty() {
        return None;
    }

    tracing::trace!({ FIELD_FIELD_ID } = %id, changes = changes.len(), "field changed");
    Some(FieldUpdate {
        field: FieldRef::new(id, after),
        changes,
    })
}
