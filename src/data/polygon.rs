//! Polygon-style aggregates API integration.
//!
//! Request shape: `GET {base_url}/{granularity}/{from}/{to}?apiKey={key}`.
//! Only `status`, `error` and each bar's close (`c`) are decoded.

use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use serde::Deserialize;

use crate::config::UpstreamConfig;
use crate::data::BarSource;
use crate::domain::BarQuery;
use crate::error::DistributionError;

const STATUS_ERROR: &str = "ERROR";

pub struct PolygonClient {
    client: Client,
    config: UpstreamConfig,
}

impl PolygonClient {
    pub fn new(config: UpstreamConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: UpstreamConfig) -> Self {
        Self { client, config }
    }

    fn url(&self, query: &BarQuery) -> String {
        format!(
            "{}/{}/{}/{}",
            self.config.base_url, query.granularity, query.from, query.to
        )
    }
}

impl BarSource for PolygonClient {
    fn fetch_closes(&self, query: &BarQuery) -> Result<Vec<f64>, DistributionError> {
        let url = self.url(query);
        tracing::info!(url = %url, "Requesting aggregates.");

        let resp = self
            .client
            .get(&url)
            .query(&[("apiKey", self.config.api_key.as_str())])
            .header(ACCEPT, "application/json")
            .send()
            .map_err(|e| DistributionError::Upstream(format!("request failed: {}", e.without_url())))?;

        let status = resp.status();
        let body = resp
            .text()
            .map_err(|e| DistributionError::Upstream(format!("failed to read response: {}", e.without_url())))?;

        match parse_aggregates(&body) {
            Ok(closes) => {
                tracing::debug!(bars = closes.len(), "Decoded aggregates.");
                Ok(closes)
            }
            // A provider error body is more useful than the bare HTTP status.
            Err(err) if !status.is_success() && !is_provider_error(&body) => {
                tracing::warn!(%status, error = %err, "Upstream returned a non-success status.");
                Err(DistributionError::Upstream(format!("request failed with status {status}")))
            }
            Err(err) => {
                tracing::warn!(%status, error = %err, "Upstream request failed.");
                Err(err)
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct AggregatesResponse {
    status: String,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    results: Option<Vec<AggregateBar>>,
}

#[derive(Debug, Deserialize)]
struct AggregateBar {
    #[serde(rename = "c")]
    close: f64,
}

/// Decode an aggregates body into closing prices, in the order received.
///
/// `status == "ERROR"` becomes an upstream error carrying the provider text; any
/// other status requires a `results` array.
pub fn parse_aggregates(body: &str) -> Result<Vec<f64>, DistributionError> {
    let resp: AggregatesResponse = serde_json::from_str(body)
        .map_err(|e| DistributionError::Upstream(format!("failed to parse response: {e}")))?;

    if resp.status == STATUS_ERROR {
        let message = resp.error.unwrap_or_else(|| "unknown error".to_string());
        return Err(DistributionError::Upstream(format!("Polygon API error: {message}")));
    }

    let results = resp.results.ok_or_else(|| {
        DistributionError::Upstream(format!("response with status '{}' has no results", resp.status))
    })?;

    Ok(results.into_iter().map(|bar| bar.close).collect())
}

fn is_provider_error(body: &str) -> bool {
    serde_json::from_str::<AggregatesResponse>(body)
        .map(|r| r.status == STATUS_ERROR)
        .unwrap_or(false)
}
