use std::time::Duration;

/// Environment variable consulted for the backend origin.
pub const API_URL_ENV: &str = "FOLIO_API_URL";

#[derive(Debug, Clone)]
pub struct CoreConfig {
    /// Backend origin, no trailing slash (e.g. `http://localhost:8000`).
    pub api_url: String,
    /// Per-request timeout applied to every backend call.
    pub request_timeout: Duration,
}

impl CoreConfig {
    pub fn new(api_url: impl Into<String>) -> Self {
        let mut api_url = api_url.into();
        while api_url.ends_with('/') {
            api_url.pop();
        }
        Self {
            api_url,
            request_timeout: crate::constants::DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Read the origin from `FOLIO_API_URL`, falling back to localhost.
    pub fn from_env() -> Self {
        match std::env::var(API_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::default(),
        }
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self::new(crate::constants::DEFAULT_API_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_stripped() {
        let config = CoreConfig::new("http://localhost:8000//");
        assert_eq!(config.api_url, "http://localhost:8000");
    }

    #[test]
    fn default_points_at_localhost() {
        assert_eq!(CoreConfig::default().api_url, "http://localhost:8000");
    }
}
