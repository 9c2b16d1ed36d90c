//! # API endpoint configuration
//!
//! The backend base URL is the only configuration surface of this application.
//! It is supplied at build time through the `PARTNERS_API_BASE` environment
//! variable and falls back to the local development server, so a plain
//! `dx serve` works against a backend started on its default port.

/// Backend used when `PARTNERS_API_BASE` is not set at build time.
const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// The configured API base URL, without a trailing slash guarantee.
pub fn api_base() -> &'static str {
    option_env!("PARTNERS_API_BASE").unwrap_or(DEFAULT_API_BASE)
}

/// Join a base URL and a path, tolerating slashes on either side.
pub fn join(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_handles_slashes_on_either_side() {
        assert_eq!(join("http://x", "partner"), "http://x/partner");
        assert_eq!(join("http://x/", "partner"), "http://x/partner");
        assert_eq!(join("http://x", "/partner"), "http://x/partner");
        assert_eq!(join("http://x/", "/partner"), "http://x/partner");
    }

    #[test]
    fn join_keeps_nested_paths_intact() {
        assert_eq!(
            join("http://x/api/v1", "partner/42"),
            "http://x/api/v1/partner/42"
        );
    }

    #[test]
    fn api_base_has_a_development_default() {
        assert!(!api_base().is_empty());
    }
}
