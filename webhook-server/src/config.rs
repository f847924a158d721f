//! Configuration module for environment variable parsing.
//!
//! Reads all configuration from environment variables. The channel secret and
//! access token are required; everything else has a sensible default.

use std::env;

use anyhow::{Context, Result};
use url::Url;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Channel secret used to verify webhook signatures
    pub channel_secret: String,

    /// Channel access token for the Reply API
    pub channel_access_token: String,

    /// Port for the web server to listen on
    pub port: u16,

    /// Base URL of the Messaging API
    pub api_base: Url,

    /// HTTP request timeout in milliseconds for reply calls
    pub request_timeout_ms: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Fails if a required variable is missing or the API base URL does not
    /// parse, so misconfiguration surfaces at startup rather than on the
    /// first webhook.
    pub fn from_env() -> Result<Self> {
        let channel_secret =
            env::var("LINE_CHANNEL_SECRET").context("LINE_CHANNEL_SECRET is not set")?;

        let channel_access_token = env::var("LINE_CHANNEL_ACCESS_TOKEN")
            .context("LINE_CHANNEL_ACCESS_TOKEN is not set")?;

        let api_base =
            env::var("LINE_API_BASE").unwrap_or_else(|_| "https://api.line.me".to_string());
        let api_base = Url::parse(&api_base)
            .with_context(|| format!("Invalid LINE_API_BASE: {}", api_base))?;

        Ok(Config {
            channel_secret,
            channel_access_token,

            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),

            api_base,

            request_timeout_ms: env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8000),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_env_defaults() {
        env::set_var("LINE_CHANNEL_SECRET", "secret");
        env::set_var("LINE_CHANNEL_ACCESS_TOKEN", "token");
        env::remove_var("LINE_API_BASE");
        env::remove_var("PORT");
        env::remove_var("REQUEST_TIMEOUT_MS");

        let config = Config::from_env().unwrap();

        assert_eq!(config.channel_secret, "secret");
        assert_eq!(config.channel_access_token, "token");
        assert_eq!(config.port, 8080);
        assert_eq!(config.api_base.as_str(), "https://api.line.me/");
        assert_eq!(config.request_timeout_ms, 8000);

        env::remove_var("LINE_CHANNEL_SECRET");
        env::remove_var("LINE_CHANNEL_ACCESS_TOKEN");
    }
}
