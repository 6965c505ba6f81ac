use resource_framework::{ConfigError, RepositoryConfig};
use serde::{Deserialize, Serialize};
use std::env::{self, VarError};

/// Configuration of the whole sample system.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    pub projects: RepositoryConfig,
    pub tasks: RepositoryConfig,
}

impl SystemConfig {
    /// Parse a configuration from JSON; missing sections take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads JSON from the environment variable `name`. An unset variable yields the
    /// defaults; a value that is not valid UTF-8 is rejected.
    pub fn from_env_var(name: &str) -> Result<Self, ConfigError> {
        Self::from_lookup(name, env::var(name))
    }

    fn from_lookup(name: &str, lookup: Result<String, VarError>) -> Result<Self, ConfigError> {
        match lookup {
            Ok(json) => Self::from_json(&json),
            Err(VarError::NotPresent) => Ok(Self::default()),
            Err(VarError::NotUnicode(_)) => {
                Err(ConfigError::Parse(format!("{name} is not valid UTF-8")))
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.projects.validate()?;
        self.tasks.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config() {
        let config = SystemConfig::from_json(r#"{ "tasks": { "buffer_size": 4 } }"#).unwrap();
        assert_eq!(config.projects, RepositoryConfig::default());
        assert_eq!(config.tasks.buffer_size, 4);
    }

    #[test]
    fn test_invalid_section_rejected() {
        let err = SystemConfig::from_json(r#"{ "projects": { "buffer_size": 0 } }"#).unwrap_err();
        assert_eq!(err, ConfigError::ZeroBufferSize);
    }

    #[test]
    fn test_unset_variable_uses_defaults() {
        let config = SystemConfig::from_lookup("UNSET", Err(VarError::NotPresent)).unwrap();
        assert_eq!(config, SystemConfig::default());
    }

    #[test]
    fn test_non_unicode_variable_is_rejected() {
        let lookup = Err(VarError::NotUnicode(std::ffi::OsString::from("ignored")));
        let err = SystemConfig::from_lookup("RESOURCE_SAMPLE_CONFIG", lookup).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Parse("RESOURCE_SAMPLE_CONFIG is not valid UTF-8".to_string())
        );
    }

    #[test]
    fn test_set_variable_is_parsed() {
        let lookup = Ok(r#"{ "projects": { "buffer_size": 2 } }"#.to_string());
        let config = SystemConfig::from_lookup("RESOURCE_SAMPLE_CONFIG", lookup).unwrap();
        assert_eq!(config.projects.buffer_size, 2);
    }
}
