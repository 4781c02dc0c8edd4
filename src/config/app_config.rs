use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;
use thiserror::Error;

use super::defaults::{
    default_json_format, default_log_level, default_poll_interval_seconds,
    default_timeout_seconds,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("API configuration is invalid: {0}")]
    Api(String),

    #[error("Auth configuration is invalid: {0}")]
    Auth(String),

    #[error("Polling configuration is invalid: {0}")]
    Polling(String),
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub auth: AuthConfig,
    #[serde(default)]
    pub polling: PollingConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    pub token: String,
    pub viewer_id: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PollingConfig {
    #[serde(default = "default_poll_interval_seconds")]
    pub interval_seconds: u64,
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            interval_seconds: default_poll_interval_seconds(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_json_format")]
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json_format: default_json_format(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, Box<figment::Error>> {
        Figment::new()
            .merge(Toml::file("config/default.toml"))
            .merge(Env::prefixed("LMS_").split("__"))
            .merge(
                Env::raw()
                    .only(&["LMS_API_BASE_URL", "LMS_API_TOKEN", "LMS_VIEWER_ID"])
                    .map(|key| match key.as_str() {
                        "LMS_API_BASE_URL" => "api.base_url".into(),
                        "LMS_API_TOKEN" => "auth.token".into(),
                        "LMS_VIEWER_ID" => "auth.viewer_id".into(),
                        _ => key.into(),
                    }),
            )
            .extract()
            .map_err(Box::new)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api.base_url.trim().is_empty() {
            return Err(ConfigError::Api("base_url must not be empty".to_string()));
        }

        if self.auth.token.trim().is_empty() {
            return Err(ConfigError::Auth(
                "LMS_API_TOKEN is required to call the backend".to_string(),
            ));
        }

        if self.auth.viewer_id.trim().is_empty() {
            return Err(ConfigError::Auth(
                "LMS_VIEWER_ID is required to aggregate the inbox".to_string(),
            ));
        }

        if self.polling.interval_seconds == 0 {
            return Err(ConfigError::Polling(
                "interval_seconds must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}
