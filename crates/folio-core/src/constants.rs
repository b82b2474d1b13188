//! Application-wide constants
//!
//! Centralized location for magic strings and configuration values
//! that are used across multiple modules.

use std::time::Duration;

/// Default backend origin when `FOLIO_API_URL` is unset.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Timeout for a single backend request.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Wrapper key some backend responses carry the real payload under.
pub const ENVELOPE_KEY: &str = "d";

/// Upload path prefixes the backend serves images from.
pub const PROFILE_UPLOAD_PREFIX: &str = "uploads/profile";
pub const ART_UPLOAD_PREFIX: &str = "uploads/art";

/// How long the initial skeleton is shown before content renders.
/// Purely cosmetic; data correctness never depends on it.
pub const SKELETON_DELAY: Duration = Duration::from_millis(800);

/// How long a failed submission status stays visible before reverting.
pub const SUBMIT_ERROR_DISPLAY: Duration = Duration::from_secs(3);

/// How long a successful submission status stays visible before reverting.
pub const SUBMIT_SUCCESS_DISPLAY: Duration = Duration::from_secs(4);

/// Lifetime of a locally minted session token when the backend
/// does not issue an expiry of its own.
pub const SESSION_DEFAULT_TTL: Duration = Duration::from_secs(12 * 60 * 60);

/// File name of the persisted session record inside the data dir.
pub const SESSION_FILE: &str = "session.json";

// Backend endpoints
pub mod endpoints {
    /// Profile singleton
    pub const INTRO: &str = "/intro";
    /// Skill list
    pub const SKILL: &str = "/skill";
    /// Project list
    pub const PROJECT: &str = "/project";
    /// Experience list
    pub const EXPERIENCE: &str = "/experience";
    /// Art list
    pub const ART: &str = "/art";
    /// Inbound query list (GET) and submission target (POST)
    pub const QUERY: &str = "/query";
    /// Admin password check
    pub const AUTH: &str = "/auth";
}
