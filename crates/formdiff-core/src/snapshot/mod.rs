//! Snapshot byte boundary.
//!
//! Snapshots arrive as raw JSON from storage. This module turns them into
//! typed [`FormSnapshot`](crate::model::FormSnapshot) values and computes
//! content digests used to label and short-circuit diffs.
//!
//! ## Non-Responsibilities
//!
//! - Loading snapshots from storage (handled by the caller)
//! - Persisting change-sets

pub mod digest;
pub mod parse;

pub use digest::compute_snapshot_digest;
pub use parse::parse_snapshot_bytes;
