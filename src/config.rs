//! Runtime configuration.
//!
//! The console needs a single setting, the backend base URL (`API_URL`). Native builds read it
//! from the process environment after loading `.env`; browser builds have no environment at
//! runtime, so the value is captured when the crate is compiled.

use url::Url;

use crate::error::ConfigError;

pub const API_URL_VAR: &str = "API_URL";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Backend base URL without a trailing slash
    pub api_url: String,
}

impl Config {
    /// Builds the configuration from a raw `API_URL` value.
    ///
    /// # Arguments
    /// - `raw` - The value of `API_URL`, if it was set
    ///
    /// # Returns
    /// - `Ok(Config)` - The URL is an absolute `http`/`https` URL
    /// - `Err(ConfigError::MissingEnvVar)` - The value is missing or blank
    /// - `Err(ConfigError::InvalidEnvValue)` - The value is not a usable URL
    pub fn from_value(raw: Option<&str>) -> Result<Self, ConfigError> {
        let raw = raw
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(API_URL_VAR.to_string()))?;

        let parsed = Url::parse(raw).map_err(|e| ConfigError::InvalidEnvValue {
            var: API_URL_VAR.to_string(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidEnvValue {
                var: API_URL_VAR.to_string(),
                reason: format!("unsupported scheme `{}`", parsed.scheme()),
            });
        }

        Ok(Self {
            api_url: raw.trim_end_matches('/').to_string(),
        })
    }

    /// Reads `API_URL` from the process environment, loading `.env` first.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        let raw = std::env::var(API_URL_VAR).ok();
        Self::from_value(raw.as_deref())
    }

    /// Uses the `API_URL` captured when the crate was compiled.
    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_value(option_env!("API_URL"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_trailing_slash() {
        let config = Config::from_value(Some("https://api.urban.pk/")).unwrap();
        assert_eq!(config.api_url, "https://api.urban.pk");
    }

    #[test]
    fn missing_or_blank_is_missing() {
        assert_eq!(
            Config::from_value(None),
            Err(ConfigError::MissingEnvVar("API_URL".to_string()))
        );
        assert_eq!(
            Config::from_value(Some("   ")),
            Err(ConfigError::MissingEnvVar("API_URL".to_string()))
        );
    }

    #[test]
    fn rejects_relative_and_non_http() {
        assert!(matches!(
            Config::from_value(Some("/api")),
            Err(ConfigError::InvalidEnvValue { .. })
        ));
        assert!(matches!(
            Config::from_value(Some("ftp://files.urban.pk")),
            Err(ConfigError::InvalidEnvValue { .. })
        ));
    }
}
