//! Configuration module for the todo summary backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Default base URL of the OpenAI-compatible completion API.
pub const DEFAULT_OPENAI_API_BASE: &str = "https://api.openai.com/v1";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to SQLite database file
    pub db_path: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    pub log_format: LogFormat,
    /// OpenAI API key, required by the summarize endpoint
    pub openai_api_key: Option<String>,
    /// Base URL for the completion API (no trailing slash)
    pub openai_api_base: String,
    /// Slack incoming webhook URL, required by the summarize endpoint
    pub slack_webhook_url: Option<String>,
    /// Timeout applied to every outbound HTTP request
    pub http_timeout: Duration,
}

/// Invalid configuration value.
#[derive(Debug)]
pub enum ConfigError {
    Invalid { var: &'static str, message: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Invalid { var, message } => write!(f, "Invalid {}: {}", var, message),
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let db_path = env::var("TODO_DB_PATH")
            .unwrap_or_else(|_| "./data/todos.sqlite".to_string())
            .into();

        let bind_addr = env::var("TODO_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::Invalid {
                var: "TODO_BIND_ADDR",
                message: e.to_string(),
            })?;

        let log_level = env::var("TODO_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let log_format = match env::var("TODO_LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };

        let openai_api_base = non_empty_var("OPENAI_API_BASE")
            .map(|base| base.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_OPENAI_API_BASE.to_string());

        let http_timeout = match env::var("HTTP_TIMEOUT_SECS") {
            Ok(raw) => {
                let secs = raw.parse::<u64>().map_err(|e| ConfigError::Invalid {
                    var: "HTTP_TIMEOUT_SECS",
                    message: e.to_string(),
                })?;
                Duration::from_secs(secs)
            }
            Err(_) => Duration::from_secs(60),
        };

        Ok(Self {
            db_path,
            bind_addr,
            log_level,
            log_format,
            openai_api_key: non_empty_var("OPENAI_API_KEY"),
            openai_api_base,
            slack_webhook_url: non_empty_var("SLACK_WEBHOOK_URL"),
            http_timeout,
        })
    }
}

/// Read an environment variable, treating an empty value as unset.
fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        // Clear any existing env vars
        for var in [
            "TODO_DB_PATH",
            "TODO_BIND_ADDR",
            "TODO_LOG_LEVEL",
            "TODO_LOG_FORMAT",
            "OPENAI_API_KEY",
            "OPENAI_API_BASE",
            "SLACK_WEBHOOK_URL",
            "HTTP_TIMEOUT_SECS",
        ] {
            env::remove_var(var);
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.db_path, PathBuf::from("./data/todos.sqlite"));
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, LogFormat::Text);
        assert!(config.openai_api_key.is_none());
        assert_eq!(config.openai_api_base, DEFAULT_OPENAI_API_BASE);
        assert!(config.slack_webhook_url.is_none());
        assert_eq!(config.http_timeout, Duration::from_secs(60));
    }
}
