//! Registry URL resolution.
//!
//! The mapping layer never builds absolute URLs from scratch; it asks a
//! [`UrlProvider`] for the externally reachable base URL of a repository and
//! appends display paths to it. The provider seam keeps deployment-specific
//! routing (ingress hosts, path rewrites) out of the mapping code.

use crate::config::Config;

/// Supplies externally reachable registry URLs.
pub trait UrlProvider: Send + Sync {
    /// Base URL for a repository under the given root, e.g.
    /// `registry_url("acme", &["libs-release"])`.
    ///
    /// Callers insert extra path segments before the repository name where a
    /// package ecosystem is routed under its own prefix, e.g.
    /// `registry_url("acme", &["generic", "raw-files"])`.
    fn registry_url(&self, root_identifier: &str, segments: &[&str]) -> String;
}

/// [`UrlProvider`] backed by a single configured base URL.
pub struct BaseUrlProvider {
    base: String,
}

impl BaseUrlProvider {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.base_url.clone())
    }
}

impl UrlProvider for BaseUrlProvider {
    fn registry_url(&self, root_identifier: &str, segments: &[&str]) -> String {
        let mut url = format!("{}/{}", self.base, root_identifier);
        for segment in segments {
            url.push('/');
            url.push_str(segment);
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_url_plain() {
        let provider = BaseUrlProvider::new("https://pkg.example.com");
        assert_eq!(
            provider.registry_url("acme", &["libs-release"]),
            "https://pkg.example.com/acme/libs-release"
        );
    }

    #[test]
    fn test_registry_url_extra_segment() {
        let provider = BaseUrlProvider::new("https://pkg.example.com");
        assert_eq!(
            provider.registry_url("acme", &["generic", "raw-files"]),
            "https://pkg.example.com/acme/generic/raw-files"
        );
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let provider = BaseUrlProvider::new("https://pkg.example.com/");
        assert_eq!(
            provider.registry_url("acme", &["repo"]),
            "https://pkg.example.com/acme/repo"
        );
    }
}
