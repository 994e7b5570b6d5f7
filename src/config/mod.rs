#[cfg(feature = "cli")]
pub mod cli;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_credential, validate_timeout, validate_url, Validate};
use std::env;
use std::fmt;
use std::time::Duration;

pub const API_KEY_ENV: &str = "OPENROUTER_API_KEY";
pub const DEFAULT_ENDPOINT: &str = "https://openrouter.ai/api/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "nvidia/nemotron-3-nano-30b-a3b:free";
pub const DEFAULT_REFERER: &str = "http://localhost";
pub const DEFAULT_TITLE: &str = "Agricultural Disease Advisory AI";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Process-wide settings for the completions endpoint.
///
/// Only the API key comes from the environment. Model, headers and the
/// timeout are fixed; the endpoint and timeout builders exist so tests can
/// point the client at a local server.
#[derive(Clone)]
pub struct AdvisorySettings {
    api_key: String,
    endpoint: String,
    model: String,
    referer: String,
    title: String,
    timeout: Duration,
}

impl AdvisorySettings {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            referer: DEFAULT_REFERER.to_string(),
            title: DEFAULT_TITLE.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Reads settings through `lookup` instead of the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_ENV).unwrap_or_default();
        validate_credential(API_KEY_ENV, &api_key)?;
        Ok(Self::new(api_key.trim()))
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl fmt::Debug for AdvisorySettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdvisorySettings")
            .field("api_key", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("referer", &self.referer)
            .field("title", &self.title)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Validate for AdvisorySettings {
    fn validate(&self) -> Result<()> {
        validate_credential(API_KEY_ENV, &self.api_key)?;
        validate_url("endpoint", &self.endpoint)?;
        validate_timeout("timeout", self.timeout)?;
        Ok(())
    }
}

impl ConfigProvider for AdvisorySettings {
    fn api_key(&self) -> &str {
        &self.api_key
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn referer(&self) -> &str {
        &self.referer
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::{AdvisoryError, ErrorCategory};

    #[test]
    fn test_from_lookup_reads_api_key() {
        let settings = AdvisorySettings::from_lookup(|name| {
            (name == API_KEY_ENV).then(|| "sk-or-v1-test".to_string())
        })
        .unwrap();

        assert_eq!(settings.api_key(), "sk-or-v1-test");
        assert_eq!(settings.endpoint(), DEFAULT_ENDPOINT);
        assert_eq!(settings.model(), DEFAULT_MODEL);
        assert_eq!(settings.timeout(), Duration::from_secs(60));
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_missing_api_key_is_configuration_error() {
        let err = AdvisorySettings::from_lookup(|_| None).unwrap_err();

        assert!(matches!(err, AdvisoryError::MissingConfigError { ref field } if field == API_KEY_ENV));
        assert_eq!(err.category(), ErrorCategory::Configuration);
    }

    #[test]
    fn test_blank_api_key_is_treated_as_missing() {
        let result = AdvisorySettings::from_lookup(|_| Some("   ".to_string()));
        assert!(matches!(result, Err(AdvisoryError::MissingConfigError { .. })));
    }

    #[test]
    fn test_invalid_endpoint_fails_validation() {
        let settings = AdvisorySettings::new("key").with_endpoint("not a url");
        assert!(matches!(
            settings.validate(),
            Err(AdvisoryError::InvalidConfigValueError { .. })
        ));
    }

    #[test]
    fn test_debug_output_redacts_api_key() {
        let settings = AdvisorySettings::new("sk-or-v1-secret");
        let debug = format!("{:?}", settings);
        assert!(!debug.contains("sk-or-v1-secret"));
        assert!(debug.contains("<redacted>"));
    }
}
