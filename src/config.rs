// src/config.rs
use std::env;
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    log_filter: String,
    notifications_enabled: bool,
    service_log_enabled: bool,
    demo_author: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_log_filter() -> String {
    "info".into()
}

fn default_demo_author() -> String {
    "author-123".into()
}

fn parse_flag(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::Invalid(format!(
            "{key} must be a boolean, got '{other}'"
        ))),
    }
}

fn flag_from_env(key: &str, default: bool) -> Result<bool, ConfigError> {
    match env::var(key) {
        Ok(value) => parse_flag(key, &value),
        Err(_) => Ok(default),
    }
}

impl AppConfig {
    /// Build configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();

        let log_filter = env::var("RUST_LOG").unwrap_or_else(|_| default_log_filter());
        let notifications_enabled = flag_from_env("NEWSROOM_NOTIFICATIONS", true)?;
        let service_log_enabled = flag_from_env("NEWSROOM_SERVICE_LOG", true)?;
        let demo_author =
            env::var("NEWSROOM_DEMO_AUTHOR").unwrap_or_else(|_| default_demo_author());

        if demo_author.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "NEWSROOM_DEMO_AUTHOR cannot be empty".into(),
            ));
        }

        Ok(Self {
            log_filter,
            notifications_enabled,
            service_log_enabled,
            demo_author,
        })
    }

    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }

    pub fn notifications_enabled(&self) -> bool {
        self.notifications_enabled
    }

    pub fn service_log_enabled(&self) -> bool {
        self.service_log_enabled
    }

    pub fn demo_author(&self) -> &str {
        &self.demo_author
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            notifications_enabled: true,
            service_log_enabled: true,
            demo_author: default_demo_author(),
        }
    }
}
