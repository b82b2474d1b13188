use serde_json::Value;

use super::fields::{record_id, str_field};
use crate::images::{resolve_image, ImageKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtEntry {
    pub id: String,
    pub title: String,
    /// Medium label ("Graphite", "Graphite/color", ...).
    pub medium: String,
    /// Resolved URL or `""`, never a bare filename.
    pub image: String,
}

impl ArtEntry {
    pub fn from_value(record: &Value, api_url: &str) -> Self {
        Self {
            id: record_id(record),
            title: str_field(record, "title"),
            medium: str_field(record, "type"),
            image: resolve_image(
                record.get("image").and_then(Value::as_str),
                ImageKind::Art,
                api_url,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bare_filename_lands_in_the_art_upload_path() {
        let art = ArtEntry::from_value(
            &json!({ "_id": "a1", "title": "KAALI", "type": "Graphite", "image": "kaali.png" }),
            "http://localhost:8000",
        );
        assert_eq!(art.image, "http://localhost:8000/uploads/art/kaali.png");
        assert_eq!(art.medium, "Graphite");
    }

    #[test]
    fn absolute_image_urls_are_kept() {
        let art = ArtEntry::from_value(
            &json!({ "id": "a2", "image": "https://cdn.example.com/a.png" }),
            "http://localhost:8000",
        );
        assert_eq!(art.image, "https://cdn.example.com/a.png");
    }
}
