use serde_json::Value;

use super::fields::{record_id, str_field};

/// One inbound visitor message. Append-only from the client side;
/// newest first in the displayed list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryEntry {
    pub id: String,
    pub name: String,
    pub email: String,
    pub message: String,
}

impl QueryEntry {
    pub fn from_value(record: &Value) -> Self {
        Self {
            id: record_id(record),
            name: str_field(record, "name"),
            email: str_field(record, "email"),
            message: str_field(record, "query"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn maps_the_wire_field_name_for_the_message() {
        let entry = QueryEntry::from_value(&json!({
            "_id": "q1", "name": "A", "email": "a@x.com", "query": "hi"
        }));
        assert_eq!(entry.id, "q1");
        assert_eq!(entry.message, "hi");
    }

    #[test]
    fn created_record_without_id_gets_one() {
        let entry = QueryEntry::from_value(&json!({ "name": "A", "email": "a@x.com", "query": "hi" }));
        assert!(!entry.id.is_empty());
    }
}
