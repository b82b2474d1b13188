use serde_json::Value;

use super::fields::str_field;
use crate::images::{resolve_image, ImageKind};

/// Profile singleton: replaced wholesale on each sync, never merged
/// field by field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub location: String,
    /// Multi-line text.
    pub bio: String,
    pub email: String,
    pub github: String,
    pub linkedin: String,
    /// Resolved URL or `""`, never a bare filename.
    pub profile_image: String,
    pub resume_url: String,
}

impl Profile {
    /// Map a backend profile record into the local shape.
    pub fn from_value(record: &Value, api_url: &str) -> Self {
        Self {
            name: str_field(record, "name"),
            title: str_field(record, "title"),
            location: str_field(record, "location"),
            bio: str_field(record, "bio"),
            email: str_field(record, "email"),
            github: str_field(record, "github"),
            linkedin: str_field(record, "linkedin"),
            profile_image: resolve_image(
                record.get("profileImage").and_then(Value::as_str),
                ImageKind::Profile,
                api_url,
            ),
            resume_url: str_field(record, "resumeUrl"),
        }
    }
}
