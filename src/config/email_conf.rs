use std::env;
use tracing::{error, info, warn};

use crate::config::ConfigError;

/// SMTP email configuration structure
#[derive(Debug, Clone)]
pub struct EmailConfig {
    /// SMTP server hostname
    pub smtp_host: String,
    /// SMTP server port
    pub smtp_port: u16,
    /// SMTP username
    pub smtp_username: String,
    /// SMTP password
    pub smtp_password: String,
    /// Whether to use TLS
    pub use_tls: bool,
    /// Whether to use STARTTLS instead of implicit TLS
    pub use_starttls: bool,
    /// Sender address
    pub from_email: String,
    /// Sender display name
    pub from_name: String,
    /// Connection timeout in seconds
    pub connection_timeout_secs: u64,
}

impl EmailConfig {
    /// Load email configuration from environment variables
    ///
    /// Expected environment variables:
    /// - SMTP_HOST (required), SMTP_PORT (defaults to 587)
    /// - SMTP_USERNAME / SMTP_PASSWORD (optional, empty disables auth)
    /// - SMTP_USE_TLS (defaults to true), SMTP_USE_STARTTLS (defaults to true)
    /// - SMTP_FROM_EMAIL (required), SMTP_FROM_NAME (defaults to "Goza Madrid")
    /// - SMTP_CONNECTION_TIMEOUT (defaults to 10 seconds)
    pub fn from_env() -> Result<Self, ConfigError> {
        info!("Loading email configuration from environment variables");

        let smtp_host = env::var("SMTP_HOST").map_err(|_| {
            error!("SMTP_HOST environment variable not found");
            ConfigError::EnvVarNotFound("SMTP_HOST".to_string())
        })?;

        let smtp_port = env::var("SMTP_PORT")
            .unwrap_or_else(|_| {
                warn!("SMTP_PORT not set, using default: 587");
                "587".to_string()
            })
            .parse::<u16>()
            .map_err(|_| {
                error!("Invalid SMTP_PORT value");
                ConfigError::InvalidValue("Invalid SMTP_PORT value".to_string())
            })?;

        let smtp_username = env::var("SMTP_USERNAME").unwrap_or_default();
        let smtp_password = env::var("SMTP_PASSWORD").unwrap_or_default();

        let use_tls = env::var("SMTP_USE_TLS")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(true);
        let use_starttls = env::var("SMTP_USE_STARTTLS")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(true);

        let from_email = env::var("SMTP_FROM_EMAIL").map_err(|_| {
            error!("SMTP_FROM_EMAIL environment variable not found");
            ConfigError::EnvVarNotFound("SMTP_FROM_EMAIL".to_string())
        })?;
        let from_name =
            env::var("SMTP_FROM_NAME").unwrap_or_else(|_| "Goza Madrid".to_string());

        let connection_timeout_secs = env::var("SMTP_CONNECTION_TIMEOUT")
            .unwrap_or_else(|_| "10".to_string())
            .parse::<u64>()
            .map_err(|_| {
                error!("Invalid SMTP_CONNECTION_TIMEOUT value");
                ConfigError::InvalidValue("Invalid SMTP_CONNECTION_TIMEOUT value".to_string())
            })?;

        let config = EmailConfig {
            smtp_host,
            smtp_port,
            smtp_username,
            smtp_password,
            use_tls,
            use_starttls,
            from_email,
            from_name,
            connection_timeout_secs,
        };

        config.validate()?;
        info!("Email configuration loaded successfully");
        Ok(config)
    }

    /// Create EmailConfig for testing
    pub fn from_test_env() -> Self {
        EmailConfig {
            smtp_host: "localhost".to_string(),
            smtp_port: 2525,
            smtp_username: String::new(),
            smtp_password: String::new(),
            use_tls: false,
            use_starttls: false,
            from_email: "noreply@realestategozamadrid.com".to_string(),
            from_name: "Goza Madrid".to_string(),
            connection_timeout_secs: 2,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.smtp_host.is_empty() {
            return Err(ConfigError::ValidationError(
                "SMTP host cannot be empty".to_string(),
            ));
        }
        if self.smtp_port == 0 {
            return Err(ConfigError::ValidationError(
                "SMTP port must be greater than 0".to_string(),
            ));
        }
        if self.from_email.is_empty() || !self.from_email.contains('@') {
            return Err(ConfigError::ValidationError(
                "SMTP from address must be a valid email".to_string(),
            ));
        }
        if self.connection_timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "SMTP connection timeout must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_test_config_is_valid() {
        assert!(EmailConfig::from_test_env().validate().is_ok());
    }

    #[test]
    fn test_validate_bad_from_address() {
        let mut config = EmailConfig::from_test_env();
        config.from_email = "not-an-email".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_port() {
        let mut config = EmailConfig::from_test_env();
        config.smtp_port = 0;
        assert!(config.validate().is_err());
    }
}
