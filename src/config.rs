use std::time::Duration;

use crate::error::ConfigError;

pub const DEFAULT_FEED_URL: &str = "https://www.ecb.europa.eu/stats/eurofxref/eurofxref-daily.xml";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

/// Process settings, read once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// SHA-256 hex digest of the accepted bearer token.
    pub api_token_hash: Option<String>,
    pub bind_addr: String,
    pub port: u16,
    pub feed_url: String,
    /// Unset means the outbound fetch may wait indefinitely.
    pub feed_timeout: Option<Duration>,
}

impl Settings {
    /// Loads `.env` if present, then reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                log::warn!("Can't load .env file: {}", e);
            }
        }

        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_vars<F>(get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_token_hash = get("API_TOKEN")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        let port = match get("PORT") {
            Some(v) => v.trim().parse().map_err(|_| ConfigError::Invalid {
                key: "PORT",
                value: v.clone(),
            })?,
            None => DEFAULT_PORT,
        };

        let feed_timeout = match get("FEED_TIMEOUT_SECS") {
            Some(v) => {
                let secs: u64 = v.trim().parse().map_err(|_| ConfigError::Invalid {
                    key: "FEED_TIMEOUT_SECS",
                    value: v.clone(),
                })?;
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        Ok(Self {
            api_token_hash,
            bind_addr: get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            port,
            feed_url: get("FEED_URL").unwrap_or_else(|| DEFAULT_FEED_URL.to_string()),
            feed_timeout,
        })
    }
}
