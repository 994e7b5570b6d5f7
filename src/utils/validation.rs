use crate::utils::error::{AdvisoryError, Result};
use std::time::Duration;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(AdvisoryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(AdvisoryError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(AdvisoryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

/// Secrets are never echoed back into error values.
pub fn validate_credential(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AdvisoryError::MissingConfigError {
            field: field_name.to_string(),
        });
    }
    Ok(())
}

pub fn validate_timeout(field_name: &str, timeout: Duration) -> Result<()> {
    if timeout.is_zero() {
        return Err(AdvisoryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: format!("{:?}", timeout),
            reason: "Timeout must be greater than zero".to_string(),
        });
    }
    Ok(())
}

/// Only a truly empty value is rejected; whitespace is passed on as typed.
pub fn validate_non_empty_input(field_name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(AdvisoryError::ValidationError {
            field: field_name.to_string(),
            message: "Value cannot be empty".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("endpoint", "https://openrouter.ai/api/v1/chat/completions").is_ok());
        assert!(validate_url("endpoint", "http://127.0.0.1:8080/").is_ok());
        assert!(validate_url("endpoint", "").is_err());
        assert!(validate_url("endpoint", "invalid-url").is_err());
        assert!(validate_url("endpoint", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_credential() {
        assert!(validate_credential("OPENROUTER_API_KEY", "sk-or-v1-abc").is_ok());
        assert!(matches!(
            validate_credential("OPENROUTER_API_KEY", "   "),
            Err(AdvisoryError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_validate_timeout() {
        assert!(validate_timeout("timeout", Duration::from_secs(60)).is_ok());
        assert!(validate_timeout("timeout", Duration::ZERO).is_err());
    }

    #[test]
    fn test_validate_non_empty_input() {
        assert!(validate_non_empty_input("plant", "Potato").is_ok());
        assert!(matches!(
            validate_non_empty_input("plant", ""),
            Err(AdvisoryError::ValidationError { .. })
        ));
        assert!(validate_non_empty_input("issue", " \t").is_ok());
    }
}
