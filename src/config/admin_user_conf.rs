use std::env;
use tracing::error;

use crate::config::ConfigError;

/// First-admin bootstrap configuration
///
/// When present, the application creates this admin account at startup if no
/// user with the given email exists yet.
#[derive(Debug, Clone)]
pub struct AdminUserConfig {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl AdminUserConfig {
    /// Load admin bootstrap configuration from environment variables
    ///
    /// Expected environment variables:
    /// - ADMIN_USERNAME, ADMIN_EMAIL, ADMIN_PASSWORD (all required)
    pub fn from_env() -> Result<Self, ConfigError> {
        let username = env::var("ADMIN_USERNAME")
            .map_err(|_| ConfigError::EnvVarNotFound("ADMIN_USERNAME".to_string()))?;
        let email = env::var("ADMIN_EMAIL")
            .map_err(|_| ConfigError::EnvVarNotFound("ADMIN_EMAIL".to_string()))?;
        let password = env::var("ADMIN_PASSWORD")
            .map_err(|_| ConfigError::EnvVarNotFound("ADMIN_PASSWORD".to_string()))?;

        if !email.contains('@') {
            error!("ADMIN_EMAIL is not a valid email address");
            return Err(ConfigError::ValidationError(
                "ADMIN_EMAIL must be a valid email address".to_string(),
            ));
        }
        if password.len() < 8 {
            error!("ADMIN_PASSWORD is too short (minimum 8 characters)");
            return Err(ConfigError::ValidationError(
                "ADMIN_PASSWORD must be at least 8 characters long".to_string(),
            ));
        }

        Ok(AdminUserConfig {
            username,
            email,
            password,
        })
    }
}
