use serde_json::Value;

use super::fields::{opt_str_field, record_id, str_field, str_list};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectEntry {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Ordered tag labels; empty when the backend sends none.
    pub tags: Vec<String>,
    pub github_link: Option<String>,
    pub demo_link: Option<String>,
}

impl ProjectEntry {
    pub fn from_value(record: &Value) -> Self {
        Self {
            id: record_id(record),
            title: str_field(record, "title"),
            description: str_field(record, "description"),
            tags: str_list(record, "tags"),
            github_link: opt_str_field(record, "githubLink"),
            demo_link: opt_str_field(record, "vercelLink"),
        }
    }
}
