mod app_config;
mod defaults;

pub use app_config::{
    ApiConfig, AppConfig, AuthConfig, ConfigError, LoggingConfig, PollingConfig,
};
