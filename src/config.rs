//! API configuration shared by every adapter.
//!
//! Built once at startup and handed to the registry behind an `Arc`. Nothing
//! mutates it afterwards.

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

pub const BASE_URL_ENV: &str = "API_BASE_URL";
pub const BASIC_AUTH_ENV: &str = "BASIC_AUTH";
pub const API_KEY_ENV: &str = "API_KEY";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing base URL: set {BASE_URL_ENV}")]
    MissingBaseUrl,
}

/// Base URL and optional basic-auth credential for outbound calls.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
    basic_auth: Option<String>,
}

impl ApiConfig {
    /// `basic_auth` is the already base64-encoded `user:pass` token. An empty
    /// string is treated as no credential.
    pub fn new(base_url: impl Into<String>, basic_auth: Option<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            basic_auth: basic_auth.filter(|token| !token.trim().is_empty()),
        }
    }

    /// Builds the basic credential from a raw `keyName:secret` API key.
    pub fn with_api_key(base_url: impl Into<String>, api_key: &str) -> Self {
        Self::new(base_url, Some(encode_api_key(api_key)))
    }

    /// Reads configuration from the process environment, loading a `.env`
    /// file first when one exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(BASE_URL_ENV)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .ok_or(ConfigError::MissingBaseUrl)?;

        let basic_auth = lookup(BASIC_AUTH_ENV)
            .filter(|value| !value.trim().is_empty())
            .or_else(|| {
                lookup(API_KEY_ENV)
                    .filter(|value| !value.trim().is_empty())
                    .map(|key| encode_api_key(key.trim()))
            });

        Ok(Self::new(base_url, basic_auth))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn basic_auth(&self) -> Option<&str> {
        self.basic_auth.as_deref()
    }
}

impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("basic_auth", &self.basic_auth.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

fn encode_api_key(api_key: &str) -> String {
    STANDARD.encode(api_key.as_bytes())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn trims_trailing_slash_from_base_url() {
        let config = ApiConfig::new("https://api.example.com/", None);
        assert_eq!(config.base_url(), "https://api.example.com");
    }

    #[test]
    fn empty_credential_means_none() {
        let config = ApiConfig::new("https://api.example.com", Some("  ".to_string()));
        assert_eq!(config.basic_auth(), None);
    }

    #[test]
    fn api_key_is_base64_encoded() {
        let config = ApiConfig::with_api_key("https://api.example.com", "user:pass");
        assert_eq!(config.basic_auth(), Some("dXNlcjpwYXNz"));
    }

    #[test]
    fn lookup_requires_base_url() {
        let result = ApiConfig::from_lookup(lookup_from(&[(BASIC_AUTH_ENV, "abc")]));
        assert!(matches!(result, Err(ConfigError::MissingBaseUrl)));
    }

    #[test]
    fn lookup_prefers_basic_auth_over_api_key() {
        let config = ApiConfig::from_lookup(lookup_from(&[
            (BASE_URL_ENV, "https://api.example.com"),
            (BASIC_AUTH_ENV, "dG9rZW4="),
            (API_KEY_ENV, "user:pass"),
        ]))
        .unwrap();
        assert_eq!(config.basic_auth(), Some("dG9rZW4="));
    }

    #[test]
    fn lookup_falls_back_to_api_key() {
        let config = ApiConfig::from_lookup(lookup_from(&[
            (BASE_URL_ENV, "https://api.example.com"),
            (API_KEY_ENV, "user:pass"),
        ]))
        .unwrap();
        assert_eq!(config.basic_auth(), Some("dXNlcjpwYXNz"));
    }

    #[test]
    fn lookup_without_credential_is_unauthenticated() {
        let config =
            ApiConfig::from_lookup(lookup_from(&[(BASE_URL_ENV, "https://api.example.com")]))
                .unwrap();
        assert_eq!(config.basic_auth(), None);
    }

    #[test]
    fn debug_redacts_credential() {
        let config = ApiConfig::new("https://api.example.com", Some("secret".to_string()));
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
