use std::env::vars;
use std::time::Duration;

use log::info;
use serde::Deserialize;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
/// How long an error or success message stays visible.
pub const DEFAULT_NOTICE_TTL: Duration = Duration::from_millis(3_000);

/// Environment variables read by [`BusinessConfig::init`]. All optional.
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    api_base_url: Option<String>,
    request_timeout_secs: Option<u64>,
    notice_ttl_ms: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessConfig {
    /// Backend origin, without trailing slash (e.g. `http://localhost:5000`).
    pub api_base_url: String,
    pub request_timeout: Duration,
    pub notice_ttl: Duration,
}

impl BusinessConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: normalize_base_url(base_url.into()),
            ..Self::default()
        }
    }

    /// Reads `API_BASE_URL`, `REQUEST_TIMEOUT_SECS` and `NOTICE_TTL_MS` from the
    /// process environment, falling back to the defaults.
    pub fn init() -> anyhow::Result<Self> {
        info!("Loading configuration from environment variables");
        let raw: RawConfig = serde_env::from_iter(vars())?;
        Ok(Self::from_raw(raw))
    }

    fn from_raw(raw: RawConfig) -> Self {
        let RawConfig {
            api_base_url,
            request_timeout_secs,
            notice_ttl_ms,
        } = raw;

        let api_base_url = match api_base_url {
            Some(url) if !url.trim().is_empty() => {
                info!("Using provided API_BASE_URL: {url}");
                normalize_base_url(url)
            }
            _ => {
                info!("API_BASE_URL not set, defaulting to {DEFAULT_API_BASE_URL}");
                DEFAULT_API_BASE_URL.to_owned()
            }
        };

        Self {
            api_base_url,
            request_timeout: request_timeout_secs
                .map(Duration::from_secs)
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT),
            notice_ttl: notice_ttl_ms
                .map(Duration::from_millis)
                .unwrap_or(DEFAULT_NOTICE_TTL),
        }
    }

    /// Absolute URL for a backend path such as `/users`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.api_base_url)
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            notice_ttl: DEFAULT_NOTICE_TTL,
        }
    }
}

fn normalize_base_url(url: String) -> String {
    url.trim().trim_end_matches('/').to_owned()
}
