//! Form provider client configuration.
//!
//! The provider base URL has no default: every deployment points at its own
//! form server. Override via environment variables or explicit construction
//! for tests.

use url::Url;

/// Configuration for connecting to the form provider.
///
/// Custom `Debug` implementation redacts the `access_token` field
/// to prevent credential leakage in log output.
#[derive(Clone)]
pub struct FormProviderConfig {
    /// Base URL under which forms are addressed as `{base_url}/{formId}`.
    pub base_url: Url,
    /// Bearer token for the provider, if it requires one.
    pub access_token: Option<String>,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl std::fmt::Debug for FormProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormProviderConfig")
            .field("base_url", &self.base_url)
            .field(
                "access_token",
                &self.access_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Default request timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

impl FormProviderConfig {
    /// Build a configuration for `base_url` with no token and the default
    /// timeout.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: parse_base_url("base_url", base_url)?,
            access_token: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        })
    }

    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `FORM_PROVIDER_URL` (required)
    /// - `FORM_PROVIDER_TOKEN` (optional)
    /// - `FORM_PROVIDER_TIMEOUT_SECS` (default: 30)
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw = std::env::var("FORM_PROVIDER_URL").map_err(|_| ConfigError::MissingUrl)?;

        Ok(Self {
            base_url: parse_base_url("FORM_PROVIDER_URL", &raw)?,
            access_token: std::env::var("FORM_PROVIDER_TOKEN")
                .ok()
                .filter(|t| !t.trim().is_empty()),
            timeout_secs: std::env::var("FORM_PROVIDER_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        })
    }
}

fn parse_base_url(name: &str, raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim())
        .map_err(|e| ConfigError::InvalidUrl(name.to_string(), e.to_string()))?;
    if url.cannot_be_a_base() {
        return Err(ConfigError::InvalidUrl(
            name.to_string(),
            "URL cannot be used as a base".to_string(),
        ));
    }
    Ok(url)
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("FORM_PROVIDER_URL environment variable is required")]
    MissingUrl,
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
    #[error("access token contains characters not allowed in an HTTP header")]
    InvalidToken,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_builds_config_with_defaults() {
        let cfg = FormProviderConfig::new("http://127.0.0.1:9000/forms").unwrap();
        assert_eq!(cfg.base_url.as_str(), "http://127.0.0.1:9000/forms");
        assert_eq!(cfg.access_token, None);
        assert_eq!(cfg.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn builder_sets_token_and_timeout() {
        let cfg = FormProviderConfig::new("https://forms.example.com")
            .unwrap()
            .with_access_token("secret")
            .with_timeout_secs(5);
        assert_eq!(cfg.access_token.as_deref(), Some("secret"));
        assert_eq!(cfg.timeout_secs, 5);
    }

    #[test]
    fn debug_redacts_token() {
        let cfg = FormProviderConfig::new("https://forms.example.com")
            .unwrap()
            .with_access_token("super-secret-token");
        let rendered = format!("{cfg:?}");
        assert!(rendered.contains("[REDACTED]"));
        assert!(!rendered.contains("super-secret-token"));
    }

    #[test]
    fn rejects_invalid_and_non_base_urls() {
        assert!(matches!(
            FormProviderConfig::new("not a url"),
            Err(ConfigError::InvalidUrl(..))
        ));
        assert!(matches!(
            FormProviderConfig::new("mailto:forms@example.com"),
            Err(ConfigError::InvalidUrl(..))
        ));
    }
}
