use serde_json::Value;

use super::fields::{record_id, str_field};

/// One skill row, kept in backend arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillEntry {
    pub id: String,
    pub name: String,
    /// Free-text proficiency label ("Advanced", "Expert", ...).
    pub level: String,
    /// Short text or emoji shown next to the name.
    pub icon: String,
}

impl SkillEntry {
    pub fn from_value(record: &Value) -> Self {
        Self {
            id: record_id(record),
            name: str_field(record, "name"),
            level: str_field(record, "level"),
            icon: str_field(record, "icon"),
        }
    }
}
