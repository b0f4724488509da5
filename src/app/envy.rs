use std::time::Duration;

use serde::Deserialize;

use crate::media::apis::stability::config::{API_URL, DEFAULT_TIMEOUT_SECS};

/// Process-wide configuration, read once from the environment at startup.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Envy {
    pub app_env: Option<String>,
    pub port: Option<u16>,

    pub stability_api_key: Option<String>,
    pub stability_api_url: Option<String>,
    pub stability_timeout_secs: Option<u64>,
}

impl Envy {
    /// An empty key is the same as no key.
    pub fn stability_api_key(&self) -> Option<&str> {
        self.stability_api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    pub fn stability_api_url(&self) -> &str {
        self.stability_api_url.as_deref().unwrap_or(API_URL)
    }

    pub fn stability_timeout(&self) -> Duration {
        Duration::from_secs(self.stability_timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }
}
