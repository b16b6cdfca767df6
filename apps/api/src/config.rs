//! API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use serde::{Deserialize, Serialize};
use std::env;

/// Default listening port (matches the service's published default).
pub const DEFAULT_PORT: u16 = 5000;

/// API server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// HTTP server port
    pub http_port: u16,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// The only knob is `PORT`; everything else about the service is fixed.
    pub fn load() -> Result<Self, ConfigError> {
        let config = ApiConfig {
            http_port: match env::var("PORT") {
                Ok(raw) => raw
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue("PORT".to_string()))?,
                Err(_) => DEFAULT_PORT,
            },
        };

        Ok(config)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
