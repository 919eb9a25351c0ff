//! Value normalization before comparison.

use crate::diff::defaults::{DefaultScope, DefaultsTable};
use serde_json::Value;

/// Canonicalize one property value.
///
/// An absent or `null` value resolves to the default registered for
/// `(scope, path)`; everything else passes through unchanged. Strings are
/// never trimmed or case-folded and no cross-type coercion happens, so a
/// label edit that only touches whitespace is still a change.
///
/// `scope` is `None` when no defaults should apply (e.g. the field's type
/// changed between snapshots). Unknown paths pass through.
pub fn normalize(
    table: &DefaultsTable,
    scope: Option<DefaultScope>,
    path: &str,
    raw: Option<&Value>,
) -> Value {
    match raw {
        Some(value) if !value.is_null() => value.clone(),
        _ => scope
            .and_then(|s| table.default_for(s, path))
            .cloned()
            .unwrap_or(Value::Null),
    }
}

/// Compare two normalized values.
///
/// Numbers compare by value, so `4` and `4.0` are equal. Arrays and objects
/// compare element by element; everything else is plain JSON equality.
pub fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => match (x.as_i64(), y.as_i64()) {
            (Some(x), Some(y)) => x == y,
            _ => match (x.as_u64(), y.as_u64()) {
                (Some(x), Some(y)) => x == y,
                _ => match (x.as_f64(), y.as_f64()) {
                    (Some(x), Some(y)) => x == y,
                    _ => false,
                },
            },
        },
        (Value::Array(x), Value::Array(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(x, y)| values_equal(x, y))
        }
        (Value::Object(x), Value::Object(y)) => {
            x.len() == y.len()
                && x
                    .iter()
                    .all(|(k, v)| y.get(k).is_some_and(|w| values_equal(v, w)))
        }
        _ => a == b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FieldType;
    use serde_json::json;

    fn date() -> Option<DefaultScope> {
        Some(DefaultScope::Field(FieldType::Date))
    }

    #[test]
    fn test_absent_resolves_to_default() {
        let table = DefaultsTable::builtin();
        assert_eq!(
            normalize(&table, date(), "validation.dateFormat", None),
            json!("MM-DD-YYYY")
        );
        assert_eq!(
            normalize(&table, date(), "validation.dateFormat", Some(&Value::Null)),
            json!("MM-DD-YYYY")
        );
    }

    #[test]
    fn test_explicit_value_wins_over_default() {
        let table = DefaultsTable::builtin();
        let raw = json!("YYYY-MM-DD");
        assert_eq!(
            normalize(&table, date(), "validation.dateFormat", Some(&raw)),
            raw
        );
    }

    #[test]
    fn test_unknown_path_passes_through() {
        let table = DefaultsTable::builtin();
        assert_eq!(normalize(&table, date(), "validation.nope", None), Value::Null);
        let raw = json!(17);
        assert_eq!(normalize(&table, date(), "validation.nope", Some(&raw)), raw);
    }

    #[test]
    fn test_no_scope_means_no_defaults() {
        let table = DefaultsTable::builtin();
        assert_eq!(
            normalize(&table, None, "validation.dateFormat", None),
            Value::Null
        );
    }

    #[test]
    fn test_numbers_compare_by_value() {
        assert!(values_equal(&json!(4), &json!(4.0)));
        assert!(values_equal(&json!(-3), &json!(-3.0)));
        assert!(values_equal(&json!(u64::MAX), &json!(u64::MAX)));
        assert!(!values_equal(&json!(4), &json!(4.5)));
        assert!(!values_equal(&json!(4), &json!("4")));
        assert!(values_equal(
            &json!({"a": [1, {"b": 2.0}]}),
            &json!({"a": [1.0, {"b": 2}]})
        ));
        assert!(!values_equal(&json!({"a": 1}), &json!({"a": 1, "b": 1})));
        assert!(!values_equal(&json!([1]), &json!([1, 1])));
    }

    #[test]
    fn test_no_string_or_type_coercion() {
        let table = DefaultsTable::builtin();
        let padded = json!(" Name ");
        assert_eq!(normalize(&table, None, "label", Some(&padded)), padded);
        let textarea = Some(DefaultScope::Field(FieldType::Textarea));
        let as_string = json!("4");
        assert_ne!(
            normalize(&table, textarea, "options.rows", Some(&as_string)),
            normalize(&table, textarea, "options.rows", None)
        );
    }
}
