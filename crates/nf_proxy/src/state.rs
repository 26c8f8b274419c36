use nf_core::{Error, Result, DEFAULT_CATEGORY};
use url::Url;

pub const UPSTREAM_BASE: &str = "https://newsapi.org/v2/top-headlines";
pub const COUNTRY: &str = "us";
pub const PAGE_SIZE: u32 = 20;

/// Environment variable holding the provider credential. Never logged,
/// never echoed back to the caller.
pub const API_KEY_VAR: &str = "NEWS_API_KEY";

/// Optional override for the upstream base URL.
pub const UPSTREAM_VAR: &str = "NEWSFUSE_UPSTREAM";

#[derive(Debug, Clone)]
pub struct ProxyConfig {
    pub api_key: String,
    pub upstream: Url,
    pub country: String,
    pub page_size: u32,
    pub default_category: String,
}

impl ProxyConfig {
    pub fn new(api_key: String, upstream: &str) -> Result<Self> {
        let upstream = Url::parse(upstream)
            .map_err(|e| Error::Config(format!("invalid upstream URL: {}", e)))?;
        Ok(Self {
            api_key,
            upstream,
            country: COUNTRY.to_string(),
            page_size: PAGE_SIZE,
            default_category: DEFAULT_CATEGORY.to_string(),
        })
    }

    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_VAR)
            .map_err(|_| Error::Config(format!("{} is not set", API_KEY_VAR)))?;
        let upstream =
            std::env::var(UPSTREAM_VAR).unwrap_or_else(|_| UPSTREAM_BASE.to_string());
        Self::new(api_key, &upstream)
    }
}

pub struct AppState {
    pub http: reqwest::Client,
    pub config: ProxyConfig,
}

impl AppState {
    pub fn new(config: ProxyConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }
}
