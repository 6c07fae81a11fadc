use std::env;
use tracing::{error, info, warn};

use crate::config::ConfigError;

/// Upstream origins consumed by the proxy layer
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    /// Real-estate REST backend base URL
    pub backend_base_url: String,
    /// WordPress REST base URL
    pub wordpress_base_url: String,
    /// WooCommerce REST base URL
    pub woocommerce_base_url: String,
    /// WooCommerce consumer key, appended to product requests
    pub wc_consumer_key: String,
    /// WooCommerce consumer secret, appended to product requests
    pub wc_consumer_secret: String,
    /// Outbound request timeout in seconds
    pub timeout_secs: u64,
}

impl UpstreamConfig {
    /// Load upstream configuration from environment variables
    ///
    /// Expected environment variables:
    /// - BACKEND_BASE_URL: real-estate backend origin (required)
    /// - WORDPRESS_BASE_URL: WordPress REST origin (required)
    /// - WOOCOMMERCE_BASE_URL: WooCommerce REST origin (required)
    /// - WC_CONSUMER_KEY / WC_CONSUMER_SECRET: WooCommerce credentials (required)
    /// - PROXY_TIMEOUT_SECS: outbound timeout (defaults to 30)
    pub fn from_env() -> Result<Self, ConfigError> {
        info!("Loading upstream configuration from environment variables");

        let backend_base_url = Self::required_url("BACKEND_BASE_URL")?;
        let wordpress_base_url = Self::required_url("WORDPRESS_BASE_URL")?;
        let woocommerce_base_url = Self::required_url("WOOCOMMERCE_BASE_URL")?;

        let wc_consumer_key = env::var("WC_CONSUMER_KEY").map_err(|_| {
            error!("WC_CONSUMER_KEY environment variable not found");
            ConfigError::EnvVarNotFound("WC_CONSUMER_KEY".to_string())
        })?;
        let wc_consumer_secret = env::var("WC_CONSUMER_SECRET").map_err(|_| {
            error!("WC_CONSUMER_SECRET environment variable not found");
            ConfigError::EnvVarNotFound("WC_CONSUMER_SECRET".to_string())
        })?;

        let timeout_secs = env::var("PROXY_TIMEOUT_SECS")
            .unwrap_or_else(|_| {
                warn!("PROXY_TIMEOUT_SECS not set, using default: 30 seconds");
                "30".to_string()
            })
            .parse::<u64>()
            .map_err(|_| {
                error!("Invalid PROXY_TIMEOUT_SECS value");
                ConfigError::InvalidValue("Invalid PROXY_TIMEOUT_SECS value".to_string())
            })?;

        let config = UpstreamConfig {
            backend_base_url,
            wordpress_base_url,
            woocommerce_base_url,
            wc_consumer_key,
            wc_consumer_secret,
            timeout_secs,
        };

        config.validate()?;
        info!("Upstream configuration loaded successfully");
        Ok(config)
    }

    fn required_url(var: &str) -> Result<String, ConfigError> {
        let raw = env::var(var).map_err(|_| {
            error!("{} environment variable not found", var);
            ConfigError::EnvVarNotFound(var.to_string())
        })?;
        // Trailing slashes would double up when joined with route templates
        Ok(raw.trim_end_matches('/').to_string())
    }

    /// Create UpstreamConfig for testing
    pub fn from_test_env() -> Self {
        UpstreamConfig {
            backend_base_url: "http://localhost:9090".to_string(),
            wordpress_base_url: "http://localhost:9091".to_string(),
            woocommerce_base_url: "http://localhost:9092".to_string(),
            wc_consumer_key: "ck_test".to_string(),
            wc_consumer_secret: "cs_test".to_string(),
            timeout_secs: 2,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, url) in [
            ("backend", &self.backend_base_url),
            ("wordpress", &self.wordpress_base_url),
            ("woocommerce", &self.woocommerce_base_url),
        ] {
            if url.is_empty() {
                return Err(ConfigError::ValidationError(format!(
                    "{} base URL cannot be empty",
                    name
                )));
            }
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::ValidationError(format!(
                    "{} base URL must start with http:// or https://",
                    name
                )));
            }
        }

        if self.timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "Proxy timeout must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        UpstreamConfig {
            backend_base_url: "https://api.realestategozamadrid.com".to_string(),
            wordpress_base_url: "https://wordpress.realestategozamadrid.com".to_string(),
            woocommerce_base_url: "https://wordpress.realestategozamadrid.com".to_string(),
            wc_consumer_key: String::new(),
            wc_consumer_secret: String::new(),
            timeout_secs: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_valid_config() {
        let config = UpstreamConfig::from_test_env();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_scheme() {
        let mut config = UpstreamConfig::from_test_env();
        config.backend_base_url = "ftp://example.com".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_url() {
        let mut config = UpstreamConfig::from_test_env();
        config.wordpress_base_url = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = UpstreamConfig::from_test_env();
        config.timeout_secs = 0;
        assert!(config.validate().is_err());
    }
}
