//! Digest computation for form snapshots.
//!
//! ## Determinism Guarantees
//!
//! - Same snapshot → same digest (object keys serialize in sorted order)
//! - Different field order → different digest (list order is content)

use crate::errors::Result;
use crate::model::FormSnapshot;
use sha2::{Digest, Sha256};

/// Compute the content digest of a snapshot.
///
/// Hex-encoded SHA256 over the canonical JSON form of the snapshot. Two
/// snapshots that differ only in field order hash differently even though
/// they produce an empty change-set.
///
/// # Errors
///
/// Returns `FormDiffError::Serialization` if JSON serialization fails.
pub fn compute_snapshot_digest(snapshot: &FormSnapshot) -> Result<String> {
    let canonical = serde_json::to_string(&serde_json::to_value(snapshot)?)?;
    Ok(hash_string(&canonical))
}

fn hash_string(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FieldSnapshot, FieldType};

    #[test]
    fn test_hash_string_deterministic() {
        let hash1 = hash_string("form");
        assert_eq!(hash1, hash_string("form"));
        assert_eq!(hash1.len(), 64);
    }

    #[test]
    fn test_field_order_changes_digest() {
        let a = FieldSnapshot::new("a", FieldType::Text, "A");
        let b = FieldSnapshot::new("b", FieldType::Text, "B");
        let ab = FormSnapshot::new().with_field(a.clone()).with_field(b.clone());
        let ba = FormSnapshot::new().with_field(b).with_field(a);
        assert_ne!(
            compute_snapshot_digest(&ab).unwrap(),
            compute_snapshot_digest(&ba).unwrap()
        );
    }

    #[test]
    fn test_empty_snapshot_digest_is_stable() {
        let d1 = compute_snapshot_digest(&FormSnapshot::new()).unwrap();
        let d2 = compute_snapshot_digest(&FormSnapshot::default()).unwrap();
        assert_eq!(d1, d2);
    }
}
