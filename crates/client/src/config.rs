use eyre::{eyre, Result};
use std::{env, time::Duration};

/// Default address of a locally running API.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Configuration for the slot client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the absence API, without a trailing `/slot`
    pub base_url: String,
    /// Per-request timeout; requests wait indefinitely when unset
    pub request_timeout: Option<Duration>,
}

impl ClientConfig {
    /// Load configuration from environment variables
    ///
    /// * `SLOT_API_BASE_URL` (default: `http://localhost:3000`)
    /// * `SLOT_API_TIMEOUT_SECONDS` (optional)
    pub fn from_env() -> Result<Self> {
        let base_url =
            env::var("SLOT_API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let request_timeout = match env::var("SLOT_API_TIMEOUT_SECONDS") {
            Ok(value) => Some(Duration::from_secs(value.parse::<u64>().map_err(|_| {
                eyre!("SLOT_API_TIMEOUT_SECONDS must be a whole number of seconds")
            })?)),
            Err(_) => None,
        };

        Ok(Self {
            base_url,
            request_timeout,
        })
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            request_timeout: None,
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }
}
