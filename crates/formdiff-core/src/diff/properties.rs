//! Recursive property comparison of one matched pair.
//!
//! Walks the union of keys in sorted order. Nested objects recurse with a
//! dotted path, arrays are compared wholesale unless the defaults table
//! registers them as keyed child collections, and leaves are normalized on
//! both sides before comparison.

use crate::diff::defaults::{DefaultScope, DefaultsTable};
use crate::diff::model::{ChangeRecord, DottedPath};
use crate::diff::normalize::normalize;
use crate::diff::reconcile::reconcile;
use serde_json::{Map, Value};
use std::collections::BTreeSet;

/// Keys never diffed at any depth
pub const ALWAYS_IGNORED: [&str; 2] = ["id", "order"];

/// What the differ needs to know about the pair being compared
#[derive(Debug, Clone, Copy)]
pub struct DiffContext<'a> {
    pub table: &'a DefaultsTable,
    /// `None` disables defaults and keyed collections (literal diff)
    pub scope: Option<DefaultScope>,
    /// Extra keys to skip, on top of [`ALWAYS_IGNORED`]
    pub ignored: &'a [String],
}

impl<'a> DiffContext<'a> {
    pub fn new(table: &'a DefaultsTable, scope: Option<DefaultScope>) -> Self {
        Self {
            table,
            scope,
            ignored: &[],
        }
    }

    pub fn with_ignored(mut self, ignored: &'a [String]) -> Self {
        self.ignored = ignored;
        self
    }

    fn is_ignored(&self, key: &str) -> bool {
        ALWAYS_IGNORED.contains(&key) || self.ignored.iter().any(|k| k == key)
    }

    fn is_keyed_collection(&self, path: &DottedPath) -> bool {
        match self.scope {
            Some(DefaultScope::Field(ty)) => self.table.is_keyed_collection(ty, path.as_str()),
            _ => false,
        }
    }
}

/// Compare two property maps and return one record per differing leaf.
///
/// The result is deterministic for a given pair of inputs.
pub fn diff_properties(
    before: &Map<String, Value>,
    after: &Map<String, Value>,
    base: &DottedPath,
    ctx: &DiffContext<'_>,
) -> Vec<ChangeRecord> {
    let mut out = Vec::new();
    diff_maps(Some(before), Some(after), base, ctx, &mut out);
    out
}

fn diff_maps(
    before: Option<&Map<String, Value>>,
    after: Option<&Map<String, Value>>,
    base: &DottedPath,
    ctx: &DiffContext<'_>,
    out: &mut Vec<ChangeRecord>,
) {
    let keys: BTreeSet<&String> = before
        .into_iter()
        .flat_map(|m| m.keys())
        .chain(after.into_iter().flat_map(|m| m.keys()))
        .filter(|k| !ctx.is_ignored(k))
        .collect();

    for key in keys {
        let path = base.child(key);
        diff_value(
            before.and_then(|m| m.get(key)),
            after.and_then(|m| m.get(key)),
            &path,
            ctx,
            out,
        );
    }
}

fn diff_value(
    before: Option<&Value>,
    after: Option<&Value>,
    path: &DottedPath,
    ctx: &DiffContext<'_>,
    out: &mut Vec<ChangeRecord>,
) {
    let missing = |v: Option<&Value>| v.map_or(true, Value::is_null);

    match (before, after) {
        (Some(Value::Object(b)), Some(Value::Object(a))) => {
            diff_maps(Some(b), Some(a), path, ctx, out);
            return;
        }
        // An object appearing under an absent parent still goes leaf by
        // leaf so nested defaults apply.
        (Some(Value::Object(b)), a) if missing(a) => {
            diff_maps(Some(b), None, path, ctx, out);
            return;
        }
        (b, Some(Value::Object(a))) if missing(b) => {
            diff_maps(None, Some(a), path, ctx, out);
            return;
        }
        (Some(Value::Array(b)), Some(Value::Array(a))) if ctx.is_keyed_collection(path) => {
            if diff_keyed_collection(b, a, path, ctx, out) {
                return;
            }
        }
        _ => {}
    }

    let path_str = path.as_str();
    let before = normalize(ctx.table, ctx.scope, path_str, before);
    let after = normalize(ctx.table, ctx.scope, path_str, after);
    out.extend(ChangeRecord::new(path.clone(), before, after));
}

fn child_id(value: &Value) -> Option<&str> {
    value.as_object()?.get("id")?.as_str()
}

/// Reconcile a keyed child collection by element id.
///
/// Returns `false`, emitting nothing, when some element has no string id;
/// the caller then compares the arrays wholesale.
fn diff_keyed_collection(
    before: &[Value],
    after: &[Value],
    path: &DottedPath,
    ctx: &DiffContext<'_>,
    out: &mut Vec<ChangeRecord>,
) -> bool {
    if before.iter().chain(after).any(|v| child_id(v).is_none()) {
        return false;
    }

    let r = reconcile(before, after, child_id);
    let mut per_child: Vec<(&str, Vec<ChangeRecord>)> = Vec::new();

    for removed in r.removed {
        let id = child_id(removed).unwrap_or_default();
        per_child.extend(
            ChangeRecord::new(path.keyed(id), removed.clone(), Value::Null)
                .map(|rec| (id, vec![rec])),
        );
    }
    for added in r.added {
        let id = child_id(added).unwrap_or_default();
        per_child.extend(
            ChangeRecord::new(path.keyed(id), Value::Null, added.clone()).map(|rec| (id, vec![rec])),
        );
    }
    for (b, a) in r.common {
        let id = child_id(a).unwrap_or_default();
        let mut records = Vec::new();
        diff_maps(b.as_object(), a.as_object(), &path.keyed(id), ctx, &mut records);
        if !records.is_empty() {
            per_child.push((id, records));
        }
    }

    per_child.sort_by(|x, y| x.0.cmp(y.0));
    out.extend(per_child.into_iter().flat_map(|(_, records)| records));
    true
}
