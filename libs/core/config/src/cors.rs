use crate::{ConfigError, FromEnv};
use std::env;

/// Which origins may call the API from a browser.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CorsConfig {
    /// Any origin (used when `CORS_ALLOWED_ORIGIN` is unset)
    #[default]
    Permissive,
    /// Explicit list of origins
    AllowList(Vec<String>),
}

impl FromEnv for CorsConfig {
    /// Reads `CORS_ALLOWED_ORIGIN` as a comma-separated list of origins.
    fn from_env() -> Result<Self, ConfigError> {
        let Ok(raw) = env::var("CORS_ALLOWED_ORIGIN") else {
            return Ok(CorsConfig::Permissive);
        };

        let origins: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        if origins.is_empty() {
            return Err(ConfigError::ParseError {
                key: "CORS_ALLOWED_ORIGIN".to_string(),
                details: "at least one origin is required when the variable is set".to_string(),
            });
        }

        Ok(CorsConfig::AllowList(origins))
    }
}
