use std::env;

use secrecy::SecretString;

use crate::errors::{AppError, AppResult};

pub const DEFAULT_MODEL: &str = "gpt-4o";

#[derive(Clone, Debug)]
pub struct Config {
    pub openai_api_key: SecretString,
    pub openai_api_base: Option<String>,
    pub openai_model: String,
    pub completion_timeout_secs: Option<u64>,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub cors_allowed_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup.
    /// Fails when the API key is missing or blank.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("OPENAI_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                AppError::ConfigError(
                    "OPENAI_API_KEY is not set. Export it or add it to .env".to_string(),
                )
            })?;

        Ok(Self {
            openai_api_key: SecretString::from(api_key),
            openai_api_base: lookup("OPENAI_API_BASE").filter(|b| !b.trim().is_empty()),
            openai_model: lookup("OPENAI_MODEL")
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            completion_timeout_secs: lookup("OPENAI_TIMEOUT_SECS")
                .and_then(|t| t.parse().ok())
                .filter(|t| *t > 0),
            web_server_host: lookup("WEB_SERVER_HOST")
                .unwrap_or_else(|| "127.0.0.1".to_string()),
            web_server_port: lookup("WEB_SERVER_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            cors_allowed_origin: lookup("CORS_ALLOWED_ORIGIN").filter(|o| !o.trim().is_empty()),
        })
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            openai_api_key: SecretString::from("sk-test".to_string()),
            openai_api_base: Some("http://127.0.0.1:9/v1".to_string()),
            openai_model: DEFAULT_MODEL.to_string(),
            completion_timeout_secs: Some(5),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            cors_allowed_origin: None,
        }
    }
}
