//! Id-keyed reconciliation of two ordered collections.
//!
//! Position is never consulted: moving an item inside a list is not an
//! event. Only a change of membership, or of a matched pair's content
//! (decided by the caller), is reportable.

use std::collections::BTreeMap;

/// Outcome of reconciling `before` against `after`
#[derive(Debug)]
pub struct Reconciliation<'a, T> {
    /// Items whose id only appears after, in "after" order
    pub added: Vec<&'a T>,
    /// Items whose id only appears before, in "before" order
    pub removed: Vec<&'a T>,
    /// `(before, after)` pairs sharing an id, in "after" order
    pub common: Vec<(&'a T, &'a T)>,
    /// Items without an id on either side; excluded from every bucket
    pub skipped: usize,
}

/// Match two collections by stable id.
///
/// Duplicate ids within one side keep the last occurrence. Items for which
/// `id_of` returns `None` are counted in `skipped` and otherwise ignored.
pub fn reconcile<'a, T, K, F>(before: &'a [T], after: &'a [T], id_of: F) -> Reconciliation<'a, T>
where
    K: Ord,
    F: Fn(&'a T) -> Option<K>,
{
    let mut skipped = 0;
    let before_index = index_by_id(before, &id_of, &mut skipped);
    let after_index = index_by_id(after, &id_of, &mut skipped);

    let mut added = Vec::new();
    let mut common = Vec::new();
    for (id, item) in winners(after, &id_of, &after_index) {
        match before_index.get(&id) {
            Some(prior) => common.push((*prior, item)),
            None => added.push(item),
        }
    }

    let removed = winners(before, &id_of, &before_index)
        .into_iter()
        .filter(|(id, _)| !after_index.contains_key(id))
        .map(|(_, item)| item)
        .collect();

    Reconciliation {
        added,
        removed,
        common,
        skipped,
    }
}

fn index_by_id<'a, T, K, F>(items: &'a [T], id_of: &F, skipped: &mut usize) -> BTreeMap<K, &'a T>
where
    K: Ord,
    F: Fn(&'a T) -> Option<K>,
{
    let mut index = BTreeMap::new();
    for item in items {
        match id_of(item) {
            Some(id) => {
                index.insert(id, item);
            }
            None => *skipped += 1,
        }
    }
    index
}

/// Items in list order, keeping only the occurrence the index retained
fn winners<'a, T, K, F>(items: &'a [T], id_of: &F, index: &BTreeMap<K, &'a T>) -> Vec<(K, &'a T)>
where
    K: Ord,
    F: Fn(&'a T) -> Option<K>,
{
    items
        .iter()
        .filter_map(|item| {
            let id = id_of(item)?;
            let kept = index.get(&id)?;
            std::ptr::eq(*kept, item).then_some((id, item))
        })
        .collect()
}
