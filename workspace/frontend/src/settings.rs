use std::time::Duration;

/// Backend the dashboard talks to when nothing is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

/// Environment variable holding the backend base URL.
pub const API_URL_VAR: &str = "BILLBOARD_API_URL";

/// Environment variable holding the optional request timeout.
pub const API_TIMEOUT_VAR: &str = "BILLBOARD_API_TIMEOUT_MS";

/// Client settings
#[derive(Debug, Clone, PartialEq)]
pub struct ClientSettings {
    /// Backend base URL without trailing slash (e.g., "http://localhost:5000")
    api_base_url: String,

    /// Request timeout in milliseconds; `None` leaves it to the transport
    pub request_timeout_ms: Option<u64>,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

impl ClientSettings {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        let api_base_url = api_base_url.into().trim().trim_end_matches('/').to_string();
        Self {
            api_base_url,
            request_timeout_ms: None,
        }
    }

    /// Create settings from `.env` and the process environment
    pub fn from_environment() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create settings from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = match lookup(API_URL_VAR) {
            Some(url) if !url.trim().is_empty() => Self::new(url),
            _ => Self::default(),
        };

        if let Some(timeout) = lookup(API_TIMEOUT_VAR) {
            match timeout.trim().parse::<u64>() {
                Ok(value) if value > 0 => settings.request_timeout_ms = Some(value),
                _ => log::warn!("Ignoring invalid {}: {:?}", API_TIMEOUT_VAR, timeout),
            }
        }

        settings
    }

    /// Get the base API URL (protocol + host + port)
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Get the full API URL for an endpoint
    pub fn api_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.api_base_url, endpoint)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_ms.map(Duration::from_millis)
    }
}
