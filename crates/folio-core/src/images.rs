//! Image reference resolution.
//!
//! The backend stores image fields in whatever form they were entered:
//! absolute URLs, rooted paths, partial upload paths, or bare filenames.
//! Everything downstream of the mappers only ever sees a fetchable URL
//! (or the empty string), so the resolution rules live here and nowhere
//! else.

use crate::constants::{ART_UPLOAD_PREFIX, PROFILE_UPLOAD_PREFIX};

/// Which upload directory a bare filename belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Profile,
    Art,
}

impl ImageKind {
    fn upload_prefix(self) -> &'static str {
        match self {
            ImageKind::Profile => PROFILE_UPLOAD_PREFIX,
            ImageKind::Art => ART_UPLOAD_PREFIX,
        }
    }
}

/// Resolve a raw image value to a fetchable URL.
///
/// Rule order matters: already-absolute URLs must pass through untouched
/// before any origin prefixing, and the `/uploads/` check must run before
/// the bare-filename fallback because a stored value may already be a
/// path fragment.
pub fn resolve_image(raw: Option<&str>, kind: ImageKind, api_url: &str) -> String {
    let Some(raw) = raw else {
        return String::new();
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    if trimmed.starts_with("http") || trimmed.starts_with("//") {
        return trimmed.to_string();
    }
    if trimmed.starts_with('/') {
        return format!("{api_url}{trimmed}");
    }
    if trimmed.contains("/uploads/") {
        return format!("{api_url}/{}", trimmed.trim_start_matches('/'));
    }
    format!("{api_url}/{}/{trimmed}", kind.upload_prefix())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: &str = "http://localhost:8000";

    #[test]
    fn absolute_urls_pass_through_unchanged() {
        for input in [
            "http://example.com/a.png",
            "https://example.com/a.png",
            "//cdn.example.com/a.png",
        ] {
            assert_eq!(resolve_image(Some(input), ImageKind::Art, ORIGIN), input);
        }
    }

    #[test]
    fn missing_or_blank_input_resolves_to_empty() {
        assert_eq!(resolve_image(None, ImageKind::Profile, ORIGIN), "");
        assert_eq!(resolve_image(Some(""), ImageKind::Profile, ORIGIN), "");
        assert_eq!(resolve_image(Some("   "), ImageKind::Art, ORIGIN), "");
    }

    #[test]
    fn rooted_paths_get_the_origin() {
        assert_eq!(
            resolve_image(Some("/static/me.png"), ImageKind::Profile, ORIGIN),
            "http://localhost:8000/static/me.png"
        );
    }

    #[test]
    fn upload_fragments_get_exactly_one_origin_and_no_doubled_slash() {
        assert_eq!(
            resolve_image(Some("/uploads/art/foo.png"), ImageKind::Art, ORIGIN),
            "http://localhost:8000/uploads/art/foo.png"
        );
        assert_eq!(
            resolve_image(Some("media/uploads/foo.png"), ImageKind::Art, ORIGIN),
            "http://localhost:8000/media/uploads/foo.png"
        );
    }

    #[test]
    fn bare_filenames_route_by_kind() {
        assert_eq!(
            resolve_image(Some("x.png"), ImageKind::Art, ORIGIN),
            "http://localhost:8000/uploads/art/x.png"
        );
        assert_eq!(
            resolve_image(Some("x.png"), ImageKind::Profile, ORIGIN),
            "http://localhost:8000/uploads/profile/x.png"
        );
    }
}
