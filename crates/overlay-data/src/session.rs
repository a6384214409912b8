// File: crates/overlay-data/src/session.rs
// Summary: Comparison session sequencing fetches against the core state.

use log::{debug, warn};

use overlay_core::{chart, Bar, ChartType, CompareState, Period, RenderOptions, ScaleType, StateError, MAX_SERIES};

use crate::error::{FetchError, SessionError};
use crate::provider::HistoryProvider;

/// One comparison window's session: the state plus the history provider that
/// feeds it. Every user action is an independent attempt; there is no retry
/// or backoff, and a failed fetch leaves prior state untouched.
pub struct CompareSession<P> {
    state: CompareState,
    provider: P,
}

impl<P: HistoryProvider> CompareSession<P> {
    pub fn new(provider: P) -> Self {
        Self { state: CompareState::new(), provider }
    }

    pub fn state(&self) -> &CompareState {
        &self.state
    }

    /// Current state generation; pairs with [`apply_fetched`](Self::apply_fetched).
    pub fn epoch(&self) -> u64 {
        self.state.epoch()
    }

    /// Add a ticker: uppercase-normalize, locally reject malformed symbols,
    /// duplicates, and the 11th symbol without touching the network, then
    /// fetch and apply.
    pub async fn add_ticker(&mut self, symbol: &str) -> Result<(), SessionError> {
        let symbol = symbol.trim().to_uppercase();
        if !is_valid_symbol(&symbol) {
            return Err(StateError::InvalidSymbol(symbol).into());
        }
        if self.state.contains(&symbol) {
            return Err(StateError::DuplicateSymbol(symbol).into());
        }
        if self.state.len() >= MAX_SERIES {
            return Err(StateError::CapacityExceeded { max: MAX_SERIES }.into());
        }

        let epoch = self.state.epoch();
        let limit = self.state.config().period.bar_limit();
        let bars = self
            .provider
            .fetch_history(&symbol, limit)
            .await
            .map_err(|source| SessionError::Fetch { symbol: symbol.clone(), source })?;
        self.apply_fetched(&symbol, epoch, bars)
    }

    /// Apply a completed fetch that started at `epoch`. Discards the result
    /// when the state has moved on (removal or period switch while the fetch
    /// was in flight) or when the symbol appeared through another path.
    pub fn apply_fetched(&mut self, symbol: &str, epoch: u64, bars: Vec<Bar>) -> Result<(), SessionError> {
        if self.state.epoch() != epoch || self.state.contains(symbol) {
            debug!("discarding stale fetch for {}", symbol);
            return Err(SessionError::Superseded);
        }
        self.state.add_series(symbol, bars)?;
        Ok(())
    }

    pub fn remove_ticker(&mut self, symbol: &str) -> Result<(), SessionError> {
        let symbol = symbol.trim().to_uppercase();
        self.state.remove(&symbol)?;
        Ok(())
    }

    pub fn set_chart_type(&mut self, chart_type: ChartType) {
        self.state.set_chart_type(chart_type);
    }

    pub fn set_scale_type(&mut self, scale_type: ScaleType) {
        self.state.set_scale_type(scale_type);
    }

    /// Switch the lookback window and sequentially refetch every displayed
    /// symbol at the new bar limit. A symbol whose refetch fails keeps its
    /// previous bars; the failures are reported together.
    pub async fn set_period(&mut self, period: Period) -> Result<(), SessionError> {
        self.state.set_period(period);
        let limit = period.bar_limit();
        let mut failures: Vec<(String, FetchError)> = Vec::new();

        for symbol in self.state.symbols() {
            match self.provider.fetch_history(&symbol, limit).await {
                Ok(bars) => {
                    // The symbol can only vanish if a caller removed it via
                    // another handle; replace_bars re-checks membership.
                    if let Err(err) = self.state.replace_bars(&symbol, bars) {
                        warn!("period reload skipped for {}: {}", symbol, err);
                    }
                }
                Err(err) => {
                    warn!("period reload failed for {}: {}", symbol, err);
                    failures.push((symbol, err));
                }
            }
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(SessionError::Reload { failures })
        }
    }

    /// Render the comparison under the current state.
    pub fn render(&self, opts: &RenderOptions) -> String {
        chart::render(&self.state, opts)
    }
}

/// Tickers are interpolated into request URLs and SVG markup, so only
/// `A-Z 0-9 . -` pass (uppercase-normalized before the check).
fn is_valid_symbol(symbol: &str) -> bool {
    !symbol.is_empty()
        && symbol
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '.' || c == '-')
}
