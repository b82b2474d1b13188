use serde_json::Value;

use super::fields::{record_id, str_field};

/// One experience row. Stored in arrival order; the recency-sorted view
/// lives on the store, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperienceEntry {
    pub id: String,
    /// Sortable lexicographically ("2021-2023").
    pub year_range: String,
    pub title: String,
    pub institution: String,
    pub location: String,
    pub description: String,
}

impl ExperienceEntry {
    pub fn from_value(record: &Value) -> Self {
        Self {
            id: record_id(record),
            year_range: str_field(record, "yearRange"),
            title: str_field(record, "title"),
            institution: str_field(record, "institution"),
            location: str_field(record, "location"),
            description: str_field(record, "description"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn maps_record() {
        let exp = ExperienceEntry::from_value(&json!({
            "_id": "e1",
            "yearRange": "2024-2025",
            "title": "FREELANCING",
            "institution": "Self",
            "location": "Remote",
            "description": "Freelance web development."
        }));
        assert_eq!(exp.id, "e1");
        assert_eq!(exp.year_range, "2024-2025");
    }
}
