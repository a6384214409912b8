// File: crates/overlay-data/src/http.rs
// Summary: reqwest-backed HistoryProvider against the chart history endpoint.

use async_trait::async_trait;
use log::debug;
use reqwest::Client;

use overlay_core::Bar;

use crate::error::FetchError;
use crate::provider::{bars_from_rows, HistoryProvider, HistoryResponse};

/// Daily-history client for `GET {base}/api/v1/chart/{SYMBOL}?interval=1day&limit={N}`.
pub struct HttpHistoryProvider {
    client: Client,
    base_url: String,
}

impl HttpHistoryProvider {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl HistoryProvider for HttpHistoryProvider {
    async fn fetch_history(&self, symbol: &str, limit: u32) -> Result<Vec<Bar>, FetchError> {
        let url = format!(
            "{}/api/v1/chart/{}?interval=1day&limit={}",
            self.base_url, symbol, limit
        );
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { code: status.as_u16() });
        }

        // Decode from the body text so a malformed payload surfaces as a
        // Decode error rather than a generic transport error.
        let body = response.text().await?;
        let payload: HistoryResponse = serde_json::from_str(&body)?;
        let bars = bars_from_rows(payload.data)?;
        debug!("{}: {} bars", symbol, bars.len());
        Ok(bars)
    }
}
