//! Client Configuration
//!
//! Location of the remote customer store and the URLs derived from it.

use reqwest::Url;

use crate::domain::CustomerId;

/// Base URL used when nothing else is configured.
///
/// Must stay a valid http(s) URL: `ClientConfig::default` relies on it.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

const COLLECTION: &str = "customers";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid base url `{input}`: {reason}")]
    InvalidUrl { input: String, reason: String },
    #[error("unsupported scheme `{0}`, expected http or https")]
    UnsupportedScheme(String),
}

/// Where the customer API is served from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: Url,
}

impl ClientConfig {
    /// Parse and normalise a base URL.
    ///
    /// Query and fragment are dropped and the path always ends in `/`, so
    /// `http://host/api` and `http://host/api/` are the same base.
    pub fn parse(input: &str) -> Result<Self, ConfigError> {
        let trimmed = input.trim();
        let mut url = Url::parse(trimmed).map_err(|e| ConfigError::InvalidUrl {
            input: trimmed.to_string(),
            reason: e.to_string(),
        })?;

        match url.scheme() {
            "http" | "https" => {}
            other => return Err(ConfigError::UnsupportedScheme(other.to_string())),
        }

        url.set_query(None);
        url.set_fragment(None);
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }

        Ok(Self { base_url: url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `{base}/customers`
    pub fn customers_url(&self) -> Url {
        self.url_with(&[COLLECTION])
    }

    /// `{base}/customers/{id}`
    pub fn customer_url(&self, id: CustomerId) -> Url {
        let id = id.to_string();
        self.url_with(&[COLLECTION, id.as_str()])
    }

    fn url_with(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // http(s) URLs always have a hierarchical path
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        // DEFAULT_BASE_URL is a constant covered by `test_default_base_url_parses`
        Self::parse(DEFAULT_BASE_URL).expect("DEFAULT_BASE_URL is a valid http url")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url_parses() {
        let parsed = ClientConfig::parse(DEFAULT_BASE_URL).expect("constant must parse");
        assert_eq!(parsed, ClientConfig::default());
    }

    #[test]
    fn test_default_points_at_localhost() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url().as_str(), "http://localhost:8080/");
        assert_eq!(config.customers_url().as_str(), "http://localhost:8080/customers");
    }

    #[test]
    fn test_customer_url() {
        let config = ClientConfig::default();
        assert_eq!(config.customer_url(5).as_str(), "http://localhost:8080/customers/5");
    }

    #[test]
    fn test_path_prefix_is_kept() {
        let with_slash = ClientConfig::parse("https://api.example.com/v1/").unwrap();
        let without_slash = ClientConfig::parse("https://api.example.com/v1").unwrap();
        assert_eq!(with_slash, without_slash);
        assert_eq!(
            with_slash.customers_url().as_str(),
            "https://api.example.com/v1/customers"
        );
        assert_eq!(
            with_slash.customer_url(42).as_str(),
            "https://api.example.com/v1/customers/42"
        );
    }

    #[test]
    fn test_query_and_fragment_are_dropped() {
        let config = ClientConfig::parse("  http://host:9000/base?x=1#frag ").unwrap();
        assert_eq!(config.base_url().as_str(), "http://host:9000/base/");
    }

    #[test]
    fn test_rejects_garbage() {
        let err = ClientConfig::parse("not a url").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl { .. }));
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let err = ClientConfig::parse("ftp://files.example.com").unwrap_err();
        assert_eq!(err, ConfigError::UnsupportedScheme("ftp".to_string()));
    }
}
