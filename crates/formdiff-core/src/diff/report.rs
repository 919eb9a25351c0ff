//! Byte-level diff entry point with operation logging.

use crate::diff::engine::{compute_change_set_with, DiffOptions};
use crate::diff::model::ChangeSet;
use crate::errors::{ExError, FormDiffError};
use crate::model::FormSnapshot;
use crate::snapshot::{compute_snapshot_digest, parse_snapshot_bytes};
use crate::{log_op_end, log_op_error, log_op_start};
use serde::{Deserialize, Serialize};
use std::time::Instant;

const OP: &str = "diff_snapshots";

/// A change-set labelled with the digests of the snapshots it compares
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffReport {
    pub before_digest: String,
    pub after_digest: String,
    pub change_set: ChangeSet,
}

impl DiffReport {
    /// Whether the two snapshots hashed identically
    pub fn is_identical(&self) -> bool {
        self.before_digest == self.after_digest
    }
}

/// Parse, digest and diff two raw snapshots.
///
/// When both digests match, the structural diff is skipped and the report
/// carries an empty change-set.
///
/// # Errors
///
/// - `InvalidSnapshot` if either side fails to decode
/// - `Serialization` if a digest cannot be computed
pub fn diff_snapshots(
    before_bytes: &[u8],
    after_bytes: &[u8],
    options: &DiffOptions,
) -> Result<DiffReport, ExError> {
    log_op_start!(
        OP,
        before_bytes = before_bytes.len(),
        after_bytes = after_bytes.len()
    );
    let start = Instant::now();

    let result: Result<DiffReport, ExError> = (|| {
        let before = parse_snapshot_bytes(before_bytes)?;
        let after = parse_snapshot_bytes(after_bytes)?;
        let before_digest = digest(&before)?;
        let after_digest = digest(&after)?;

        let change_set = if before_digest == after_digest {
            tracing::debug!(digest = %before_digest, "identical snapshots, skipping diff");
            ChangeSet::default()
        } else {
            compute_change_set_with(&before, &after, options)
        };

        Ok(DiffReport {
            before_digest,
            after_digest,
            change_set,
        })
    })();

    let duration_ms = start.elapsed().as_millis() as u64;
    match &result {
        Ok(report) => {
            let cs = &report.change_set;
            log_op_end!(
                OP,
                duration_ms = duration_ms,
                added_fields = cs.added_fields.len(),
                deleted_fields = cs.deleted_fields.len(),
                updated_fields = cs.updated_fields.len(),
                settings_changes = cs.settings_changes.len(),
                logic_changes = cs.logic_changes.len()
            );
        }
        Err(e) => log_op_error!(OP, e.clone(), duration_ms = duration_ms),
    }
    result
}

fn digest(snapshot: &FormSnapshot) -> Result<String, ExError> {
    compute_snapshot_digest(snapshot)
        .map_err(|e: FormDiffError| ExError::from(e).with_op(OP))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_bytes_short_circuit() {
        let bytes = br#"{"fields":[{"id":"f1","type":"TEXT","label":"Name"}]}"#;
        let report = diff_snapshots(bytes, bytes, &DiffOptions::default()).unwrap();
        assert!(report.is_identical());
        assert!(report.change_set.is_empty());
    }

    #[test]
    fn test_reordered_fields_differ_in_digest_only() {
        let before = br#"{"fields":[
            {"id":"a","type":"TEXT","label":"A"},
            {"id":"b","type":"TEXT","label":"B"}]}"#;
        let after = br#"{"fields":[
            {"id":"b","type":"TEXT","label":"B"},
            {"id":"a","type":"TEXT","label":"A"}]}"#;
        let report = diff_snapshots(before, after, &DiffOptions::default()).unwrap();
        assert!(!report.is_identical());
        assert!(report.change_set.is_empty());
    }

    #[test]
    fn test_bad_after_snapshot_fails() {
        let err = diff_snapshots(b"{}", b"nope", &DiffOptions::default()).unwrap_err();
        assert_eq!(err.code(), "ERR_INVALID_SNAPSHOT");
    }
}
