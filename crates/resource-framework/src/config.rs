//! Repository configuration.

use serde::{Deserialize, Serialize};

/// Errors raised when a configuration is rejected.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("buffer_size must be greater than zero")]
    ZeroBufferSize,
    #[error("Invalid configuration: {0}")]
    Parse(String),
}

/// Configuration for a single `ResourceRepository`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepositoryConfig {
    /// Capacity of the request channel. Clients wait when it is full.
    pub buffer_size: usize,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self { buffer_size: 32 }
    }
}

impl RepositoryConfig {
    pub fn with_buffer_size(buffer_size: usize) -> Self {
        Self { buffer_size }
    }

    /// Parse a configuration from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.buffer_size == 0 {
            return Err(ConfigError::ZeroBufferSize);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config = RepositoryConfig::from_json("{}").unwrap();
        assert_eq!(config, RepositoryConfig::default());
        assert_eq!(config.buffer_size, 32);
    }

    #[test]
    fn test_zero_buffer_rejected() {
        let err = RepositoryConfig::from_json(r#"{ "buffer_size": 0 }"#).unwrap_err();
        assert_eq!(err, ConfigError::ZeroBufferSize);
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = RepositoryConfig::from_json("buffer_size = 4").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
