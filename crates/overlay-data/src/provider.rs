// File: crates/overlay-data/src/provider.rs
// Summary: HistoryProvider trait and wire-payload decoding into Bars.

use async_trait::async_trait;
use chrono::DateTime;
use serde::Deserialize;

use overlay_core::Bar;

use crate::error::FetchError;

/// Source of daily OHLC history for one symbol. Implemented by the HTTP
/// client and by offline/file providers; object-safe for runtime selection.
#[async_trait]
pub trait HistoryProvider: Send + Sync {
    /// Fetch up to `limit` daily bars for `symbol`, oldest first.
    async fn fetch_history(&self, symbol: &str, limit: u32) -> Result<Vec<Bar>, FetchError>;
}

#[async_trait]
impl<P: HistoryProvider + ?Sized> HistoryProvider for Box<P> {
    async fn fetch_history(&self, symbol: &str, limit: u32) -> Result<Vec<Bar>, FetchError> {
        (**self).fetch_history(symbol, limit).await
    }
}

/// Wire shape of the history endpoint:
/// `{ "data": [ { "time": <unix seconds>, "open", "high", "low", "close" }, ... ] }`.
/// Missing fields fail decoding; they never reach geometry math.
#[derive(Debug, Deserialize)]
pub(crate) struct HistoryResponse {
    pub data: Vec<HistoryRow>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct HistoryRow {
    pub time: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

/// Convert decoded rows into validated bars: unix seconds to calendar day,
/// sorted ascending, duplicate dates collapsed to the first row, OHLC
/// invariant enforced per bar.
pub(crate) fn bars_from_rows(rows: Vec<HistoryRow>) -> Result<Vec<Bar>, FetchError> {
    if rows.is_empty() {
        return Err(FetchError::EmptyHistory);
    }
    let mut bars = rows
        .into_iter()
        .map(|row| {
            let date = DateTime::from_timestamp(row.time, 0)
                .ok_or_else(|| FetchError::Other(format!("timestamp {} out of range", row.time)))?
                .date_naive();
            Bar::try_new(date, row.open, row.high, row.low, row.close).map_err(FetchError::from)
        })
        .collect::<Result<Vec<_>, _>>()?;
    bars.sort_by_key(|b| b.date);
    bars.dedup_by_key(|b| b.date);
    Ok(bars)
}
