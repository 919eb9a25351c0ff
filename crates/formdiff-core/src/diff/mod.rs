//! Form revision diff engine.
//!
//! Compares two snapshots of a form and produces a structured,
//! deterministic [`ChangeSet`] for the activity log.
//!
//! ## Entry points
//!
//! ```ignore
//! use formdiff_core::diff::{compute_change_set, diff_snapshots, DiffOptions};
//!
//! let change_set = compute_change_set(&before, &after);
//! let report = diff_snapshots(before_bytes, after_bytes, &DiffOptions::default())?;
//! ```
//!
//! ## Guarantees
//!
//! - **Determinism**: identical inputs produce byte-identical serialized output.
//! - **Order blindness**: fields, rules and keyed children are matched by id;
//!   moving them is never a change.
//! - **Default equivalence**: an absent property and its documented default
//!   compare equal.
//! - **Symmetry of detection**: swapping the inputs swaps added/deleted and
//!   before/after but never changes which items are reported.

pub mod defaults;
pub mod engine;
pub mod logic;
pub mod model;
pub mod normalize;
pub mod properties;
pub mod reconcile;
pub mod report;

pub use defaults::{DefaultScope, DefaultsTable, DEFAULTS_TABLE_VERSION};
pub use engine::{compute_change_set, compute_change_set_with, DiffOptions};
pub use model::{ChangeRecord, ChangeSet, DottedPath, FieldUpdate, LogicChanges, RuleUpdate};
pub use report::{diff_snapshots, DiffReport};
