//! Upstream provider configuration.
//!
//! Resolved once per process and handed to the client explicitly, so nothing
//! below the CLI layer reads the environment.

use crate::error::DistributionError;

pub const ENV_BASE_URL: &str = "POLYGON_API_BASE_URL";
pub const ENV_API_KEY: &str = "POLYGON_API_KEY";

/// Base URL and credential for the aggregates endpoint.
///
/// The base URL already identifies the instrument and multiplier, e.g.
/// `https://api.polygon.io/v2/aggs/ticker/AAPL/range/1`.
#[derive(Clone, PartialEq, Eq)]
pub struct UpstreamConfig {
    pub base_url: String,
    pub api_key: String,
}

impl UpstreamConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    /// Load from the process environment (after reading `.env`, if present).
    pub fn from_env() -> Result<Self, DistributionError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Blank values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DistributionError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or_else(|| DistributionError::Configuration(format!("missing {key} in environment (.env)")))
        };

        let base_url = read(ENV_BASE_URL)?;
        let api_key = read(ENV_API_KEY)?;
        Ok(Self::new(base_url, api_key))
    }
}

impl std::fmt::Debug for UpstreamConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpstreamConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}
