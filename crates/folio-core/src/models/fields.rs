//! Shared field-extraction helpers for the entity mappers.
//!
//! Backend records are permissively typed: expected fields may be
//! missing and extra fields are dropped. These helpers keep the
//! per-entity mappers free of null handling.

use serde_json::Value;

use crate::ident::allocate_id;

/// Entity id: primary backend key `_id`, else `id`, else a locally
/// allocated one. Never empty.
pub fn record_id(record: &Value) -> String {
    for key in ["_id", "id"] {
        if let Some(id) = record.get(key).and_then(Value::as_str) {
            if !id.is_empty() {
                return id.to_string();
            }
        }
    }
    allocate_id()
}

/// String field, defaulting to `""` when missing or not a string.
pub fn str_field(record: &Value, key: &str) -> String {
    record
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Optional string field: `None` when missing, empty, or not a string.
pub fn opt_str_field(record: &Value, key: &str) -> Option<String> {
    record
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// String-list field, defaulting to an empty list; non-string elements
/// are dropped.
pub fn str_list(record: &Value, key: &str) -> Vec<String> {
    record
        .get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn record_id_prefers_primary_key() {
        let record = json!({ "_id": "abc", "id": "def" });
        assert_eq!(record_id(&record), "abc");
    }

    #[test]
    fn record_id_falls_back_to_secondary_key() {
        let record = json!({ "id": "def" });
        assert_eq!(record_id(&record), "def");
    }

    #[test]
    fn record_id_allocates_when_both_keys_absent() {
        let record = json!({ "name": "untagged" });
        let id = record_id(&record);
        assert!(!id.is_empty());
        assert_ne!(id, record_id(&record));
    }

    #[test]
    fn missing_fields_default_rather_than_absent() {
        let record = json!({});
        assert_eq!(str_field(&record, "name"), "");
        assert_eq!(opt_str_field(&record, "link"), None);
        assert!(str_list(&record, "tags").is_empty());
    }
}
