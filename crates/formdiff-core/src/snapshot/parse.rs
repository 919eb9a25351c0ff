//! Raw snapshot decoding.

use crate::errors::{ExError, FormDiffError};
use crate::model::FormSnapshot;
use serde_json::Value;

const OP: &str = "parse_snapshot_bytes";

/// Decode raw snapshot bytes into a typed [`FormSnapshot`].
///
/// Decoding happens in stages so each failure names what went wrong:
/// UTF-8, then JSON, then an object root, then the typed shape. Top-level
/// keys other than `fields`, `logic` and `settings` land in
/// [`FormSnapshot::extra`] and are diffed as settings.
///
/// # Errors
///
/// Every failure is `InvalidSnapshot` with `op` set to
/// `parse_snapshot_bytes`.
pub fn parse_snapshot_bytes(bytes: &[u8]) -> Result<FormSnapshot, ExError> {
    decode(bytes).map_err(|e| ExError::from(e).with_op(OP))
}

fn decode(bytes: &[u8]) -> Result<FormSnapshot, FormDiffError> {
    let text = std::str::from_utf8(bytes).map_err(|e| FormDiffError::SnapshotNotUtf8 {
        message: e.to_string(),
    })?;

    let raw: Value = serde_json::from_str(text).map_err(|e| FormDiffError::SnapshotNotJson {
        message: e.to_string(),
    })?;

    if !raw.is_object() {
        return Err(FormDiffError::SnapshotNotObject);
    }

    serde_json::from_value(raw).map_err(|e| FormDiffError::SnapshotShape {
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ExErrorKind;
    use crate::model::FieldType;

    #[test]
    fn test_parses_minimal_snapshot() {
        let snap = parse_snapshot_bytes(br#"{"fields":[{"id":"f1","type":"TEXT","label":"Name"}]}"#)
            .unwrap();
        assert_eq!(snap.fields.len(), 1);
        assert_eq!(snap.fields[0].field_type, FieldType::Text);
        assert!(snap.logic.is_empty());
        assert!(snap.settings.is_empty());
    }

    #[test]
    fn test_each_stage_reports_invalid_snapshot() {
        let inputs: [&[u8]; 4] = [
            &[0xff, 0xfe],
            b"{not json",
            b"[1, 2]",
            br#"{"fields": {"id": "f1"}}"#,
        ];
        for input in inputs {
            let err = parse_snapshot_bytes(input).unwrap_err();
            assert_eq!(err.kind(), ExErrorKind::InvalidSnapshot);
            assert_eq!(err.op(), Some(OP));
        }
    }

    #[test]
    fn test_unknown_field_type_is_kept() {
        let snap = parse_snapshot_bytes(br#"{"fields":[{"id":"f1","type":"HOLOGRAM","label":"x"}]}"#)
            .unwrap();
        assert_eq!(snap.fields[0].field_type.as_str(), "HOLOGRAM");
    }

    #[test]
    fn test_non_string_field_type_is_rejected() {
        let err = parse_snapshot_bytes(br#"{"fields":[{"id":"f1","type":7,"label":"x"}]}"#)
            .unwrap_err();
        assert_eq!(err.code(), "ERR_INVALID_SNAPSHOT");
    }
}
