//! FormDiff Core - structural diff engine for form revisions
//!
//! This crate computes the change-set between two snapshots of a form:
//! - Typed snapshot models for fields, logic rules and settings
//! - Id-keyed reconciliation that ignores reordering
//! - Default-aware property comparison with dotted paths
//! - Keyed child collections (choice items, matrix rows and columns)
//! - Snapshot decoding and content digests
//! - Structured logging and a stable error taxonomy

pub mod diff;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod snapshot;

pub use formdiff_core_types::schema;

// Re-export commonly used types
pub use diff::{
    compute_change_set, compute_change_set_with, diff_snapshots, ChangeSet, DefaultsTable,
    DiffOptions, DiffReport,
};
pub use errors::{ExError, ExErrorKind, FormDiffError, Result};
pub use model::{FieldKind, FieldSnapshot, FieldType, FormSnapshot, LogicRuleSnapshot};
pub use snapshot::{compute_snapshot_digest, parse_snapshot_bytes};
