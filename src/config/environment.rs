// ABOUTME: Environment configuration for the hosted backend connection
// ABOUTME: Parses base URL, API key, timeout and deployment environment from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

//! Environment-based configuration
//!
//! Configuration is read once and passed explicitly into the backend clients;
//! nothing here is stored in process-global state.

use std::env;
use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use url::Url;

use crate::constants::{backend, env_config};
use crate::errors::{AppError, AppResult};

/// Environment type for deployment-specific behavior
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Connection settings for the hosted backend
#[derive(Clone, PartialEq, Eq)]
pub struct BackendConfig {
    /// Project base URL, always ending in `/`
    pub base_url: Url,
    /// Project API key sent as `apikey` on every request
    ///
    /// Role lookups also present this key as the bearer credential, so under
    /// row-level security it must be a key allowed to read `profiles.role`
    /// (the service-role key). With the public key every lookup returns no
    /// rows and every caller gets `profile not found`.
    pub api_key: String,
    /// Per-request timeout enforced by the HTTP client
    pub request_timeout: Duration,
    /// Deployment environment
    pub environment: Environment,
}

impl fmt::Debug for BackendConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackendConfig")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"<redacted>")
            .field("request_timeout", &self.request_timeout)
            .field("environment", &self.environment)
            .finish()
    }
}

impl BackendConfig {
    /// Build and validate a configuration from explicit values
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if the URL does not parse, is not http(s),
    /// or the key is empty
    pub fn new(base_url: &str, api_key: impl Into<String>) -> AppResult<Self> {
        let config = Self {
            base_url: parse_base_url(base_url)?,
            api_key: api_key.into(),
            request_timeout: Duration::from_secs(backend::DEFAULT_TIMEOUT_SECS),
            environment: Environment::default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Override the request timeout
    #[must_use]
    pub const fn with_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }

    /// Load configuration from environment variables
    ///
    /// Reads `FITTRACK_BACKEND_URL`, `FITTRACK_BACKEND_KEY`,
    /// `FITTRACK_BACKEND_TIMEOUT_SECS` (default 10) and `ENVIRONMENT`.
    /// `FITTRACK_BACKEND_KEY` must be able to read `profiles.role`; see
    /// [`BackendConfig::api_key`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigMissing` when a required variable is unset and
    /// `ConfigInvalid` when a value cannot be used
    pub fn from_env() -> AppResult<Self> {
        let base_url = required_var(env_config::BACKEND_URL)?;
        let api_key = required_var(env_config::BACKEND_KEY)?;

        let request_timeout = match env::var(env_config::BACKEND_TIMEOUT_SECS) {
            Ok(raw) => {
                let secs = raw.trim().parse::<u64>().map_err(|e| {
                    AppError::config_invalid(format!(
                        "{} must be a whole number of seconds: {e}",
                        env_config::BACKEND_TIMEOUT_SECS
                    ))
                })?;
                Duration::from_secs(secs)
            }
            Err(_) => Duration::from_secs(backend::DEFAULT_TIMEOUT_SECS),
        };

        let environment = env::var(env_config::ENVIRONMENT)
            .map(|value| Environment::from_str_or_default(&value))
            .unwrap_or_default();

        let config = Self {
            base_url: parse_base_url(&base_url)?,
            api_key,
            request_timeout,
            environment,
        };
        config.validate()?;

        info!(
            backend.url = %config.base_url,
            backend.timeout_secs = config.request_timeout.as_secs(),
            environment = %config.environment,
            "Backend configuration loaded"
        );
        Ok(config)
    }

    /// Check the configuration for values that cannot work
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` describing the first unusable value
    pub fn validate(&self) -> AppResult<()> {
        if !matches!(self.base_url.scheme(), "http" | "https") {
            return Err(AppError::config_invalid(format!(
                "Backend URL must use http or https, got '{}'",
                self.base_url.scheme()
            )));
        }
        if self.api_key.trim().is_empty() {
            return Err(AppError::config_invalid("Backend API key must not be empty"));
        }
        if self.request_timeout.is_zero() {
            return Err(AppError::config_invalid(
                "Backend request timeout must be greater than zero",
            ));
        }
        if self.environment.is_production() && self.base_url.scheme() == "http" {
            warn!("Backend URL uses plain http in production");
        }
        Ok(())
    }
}

fn required_var(key: &str) -> AppResult<String> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(AppError::config_missing(key)),
    }
}

/// Parse a base URL, forcing a trailing slash so relative joins keep the full path
fn parse_base_url(raw: &str) -> AppResult<Url> {
    let mut url = Url::parse(raw.trim())
        .map_err(|e| AppError::config_invalid(format!("Invalid backend URL '{raw}': {e}")))?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let config = BackendConfig::new("https://project.example.co/base", "key").unwrap_or_else(
            |e| unreachable!("valid config rejected: {e}"),
        );
        assert_eq!(config.base_url.as_str(), "https://project.example.co/base/");
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let error = BackendConfig::new("ftp://project.example.co", "key").err();
        assert_eq!(error.map(|e| e.code), Some(ErrorCode::ConfigInvalid));
    }

    #[test]
    fn test_rejects_empty_key() {
        let error = BackendConfig::new("https://project.example.co", "  ").err();
        assert_eq!(error.map(|e| e.code), Some(ErrorCode::ConfigInvalid));
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = BackendConfig::new("https://project.example.co", "secret-key")
            .unwrap_or_else(|e| unreachable!("valid config rejected: {e}"));
        assert!(!format!("{config:?}").contains("secret-key"));
    }

    #[test]
    fn test_environment_parsing() {
        assert_eq!(Environment::from_str_or_default("PROD"), Environment::Production);
        assert_eq!(Environment::from_str_or_default("test"), Environment::Testing);
        assert_eq!(Environment::from_str_or_default("staging"), Environment::Development);
    }
}
