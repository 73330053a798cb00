//! Client configuration.
//!
//! The credential and endpoint settings are carried by an explicit
//! [`ClientConfig`] value supplied by the caller; there is no process-global
//! client state. [`ClientConfig::from_env`] is the conventional way to pick
//! up the API key at startup.

use crate::{Error, ErrorContext, Result};
use std::env;
use std::time::Duration;

/// Environment variable holding the API credential.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Env override for the HTTP timeout, in whole seconds.
pub const TIMEOUT_ENV: &str = "STRUCTURED_QUERY_TIMEOUT_SECS";

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
const DEFAULT_MAX_TOKENS: u32 = 200;
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for a [`StructuredQueryClient`](crate::StructuredQueryClient).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Bearer credential for the completion endpoint.
    pub api_key: String,
    /// Endpoint base URL, without a trailing slash.
    pub base_url: String,
    /// Model identifier sent with every request.
    pub model: String,
    /// Cap on generated tokens per completion.
    pub max_tokens: u32,
    /// Whole-request timeout for the single round trip.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Build a config with default endpoint settings and the given key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            timeout: Duration::from_secs(default_timeout_secs()),
        }
    }

    /// Read the API key from the process environment.
    ///
    /// A missing or empty `OPENAI_API_KEY` fails here, at construction time,
    /// rather than surfacing later as a rejected request.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var(API_KEY_ENV).ok().filter(|k| !k.trim().is_empty());
        match api_key {
            Some(key) => Ok(Self::new(key)),
            None => Err(Error::configuration_with_context(
                "API key not set",
                ErrorContext::new()
                    .with_field_path("config.api_key")
                    .with_details(format!("set the {} environment variable", API_KEY_ENV)),
            )),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        // Trailing slash would double up when paths are appended.
        while self.base_url.ends_with('/') {
            self.base_url.pop();
        }
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

fn default_timeout_secs() -> u64 {
    env::var(TIMEOUT_ENV)
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_TIMEOUT_SECS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = ClientConfig::new("sk-test");
        assert_eq!(cfg.base_url, "https://api.openai.com/v1");
        assert_eq!(cfg.model, "gpt-3.5-turbo");
        assert_eq!(cfg.max_tokens, 200);
    }

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let cfg = ClientConfig::new("sk-test").with_base_url("http://localhost:4010/");
        assert_eq!(cfg.base_url, "http://localhost:4010");
    }

    #[test]
    fn test_builder_style_overrides() {
        let cfg = ClientConfig::new("sk-test")
            .with_model("gpt-4o-mini")
            .with_max_tokens(64)
            .with_timeout(Duration::from_secs(5));
        assert_eq!(cfg.model, "gpt-4o-mini");
        assert_eq!(cfg.max_tokens, 64);
        assert_eq!(cfg.timeout, Duration::from_secs(5));
    }
}
