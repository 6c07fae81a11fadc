use std::env;
use tracing::{info, warn};

use crate::config::ConfigError;

/// Preference-cookie configuration
///
/// Path is fixed to `/` and all preference cookies are `HttpOnly` with
/// `SameSite=Strict`; only lifetime and the `Secure` flag vary by deployment.
#[derive(Debug, Clone)]
pub struct CookieConfig {
    /// Cookie lifetime in days
    pub max_age_days: i64,
    /// Whether to set the Secure attribute
    pub secure: bool,
}

impl CookieConfig {
    /// Load cookie configuration from environment variables
    ///
    /// Expected environment variables:
    /// - COOKIE_MAX_AGE_DAYS: lifetime in days (defaults to 7)
    /// - COOKIE_SECURE: set the Secure attribute (defaults to false)
    pub fn from_env() -> Result<Self, ConfigError> {
        info!("Loading cookie configuration from environment variables");

        let max_age_days = env::var("COOKIE_MAX_AGE_DAYS")
            .unwrap_or_else(|_| {
                warn!("COOKIE_MAX_AGE_DAYS not set, using default: 7");
                "7".to_string()
            })
            .parse::<i64>()
            .map_err(|_| {
                ConfigError::InvalidValue("Invalid COOKIE_MAX_AGE_DAYS value".to_string())
            })?;

        let secure = env::var("COOKIE_SECURE")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);

        let config = CookieConfig {
            max_age_days,
            secure,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_age_days <= 0 {
            return Err(ConfigError::ValidationError(
                "Cookie max age must be greater than 0 days".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for CookieConfig {
    fn default() -> Self {
        CookieConfig {
            max_age_days: 7,
            secure: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_seven_days() {
        let config = CookieConfig::default();
        assert_eq!(config.max_age_days, 7);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_non_positive_age() {
        let config = CookieConfig {
            max_age_days: 0,
            secure: false,
        };
        assert!(config.validate().is_err());
    }
}
