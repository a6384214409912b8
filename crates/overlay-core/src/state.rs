// File: crates/overlay-core/src/state.rs
// Summary: Explicit comparison-window state: series set, config, generation counter.

use log::debug;

use crate::error::StateError;
use crate::series::{Bar, Series};
use crate::theme::PALETTE;
use crate::types::{ChartConfig, ChartType, Period, ScaleType};

/// Upper bound on concurrently displayed series, matching the palette size.
pub const MAX_SERIES: usize = 10;

/// All mutable state of one comparison window. There are no module-level
/// globals; every mutation goes through a method on this type, which keeps
/// rendering a pure function of `(state, options)`.
#[derive(Clone, Debug, Default)]
pub struct CompareState {
    series: Vec<Series>,
    config: ChartConfig,
    epoch: u64,
}

impl CompareState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Generation counter. Bumped by removals and period switches; a fetch
    /// started at epoch `e` must be discarded when `epoch() != e` at
    /// completion, which closes the remove-during-fetch race.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.series.iter().any(|s| s.symbol == symbol)
    }

    pub fn symbols(&self) -> Vec<String> {
        self.series.iter().map(|s| s.symbol.clone()).collect()
    }

    /// Add a ticker with its fetched history. Rejects duplicates and an
    /// 11th series without any state change; assigns the first palette color
    /// not currently in use (freed colors are reused).
    pub fn add_series(&mut self, symbol: &str, bars: Vec<Bar>) -> Result<(), StateError> {
        if self.contains(symbol) {
            return Err(StateError::DuplicateSymbol(symbol.to_string()));
        }
        if self.series.len() >= MAX_SERIES {
            return Err(StateError::CapacityExceeded { max: MAX_SERIES });
        }
        if bars.is_empty() {
            return Err(StateError::EmptyHistory(symbol.to_string()));
        }
        let color = self.next_color();
        debug!("add series {} ({} bars, color {})", symbol, bars.len(), color);
        self.series.push(Series::new(symbol, color, bars));
        Ok(())
    }

    /// Drop a series and bump the epoch so in-flight fetches for it go stale.
    pub fn remove(&mut self, symbol: &str) -> Result<(), StateError> {
        let idx = self
            .series
            .iter()
            .position(|s| s.symbol == symbol)
            .ok_or_else(|| StateError::UnknownSymbol(symbol.to_string()))?;
        self.series.remove(idx);
        self.epoch += 1;
        debug!("removed series {} (epoch {})", symbol, self.epoch);
        Ok(())
    }

    /// Swap a series' bars in place (period reload), keeping color and order.
    pub fn replace_bars(&mut self, symbol: &str, bars: Vec<Bar>) -> Result<(), StateError> {
        if bars.is_empty() {
            return Err(StateError::EmptyHistory(symbol.to_string()));
        }
        let s = self
            .series
            .iter_mut()
            .find(|s| s.symbol == symbol)
            .ok_or_else(|| StateError::UnknownSymbol(symbol.to_string()))?;
        s.bars = bars;
        Ok(())
    }

    /// Change the lookback window. Bumps the epoch: every displayed symbol
    /// must be refetched and any in-flight fetch is invalidated.
    pub fn set_period(&mut self, period: Period) {
        self.config.period = period;
        self.epoch += 1;
    }

    pub fn set_chart_type(&mut self, chart_type: ChartType) {
        self.config.chart_type = chart_type;
    }

    pub fn set_scale_type(&mut self, scale_type: ScaleType) {
        self.config.scale_type = scale_type;
    }

    fn next_color(&self) -> &'static str {
        for color in PALETTE {
            if !self.series.iter().any(|s| s.color == color) {
                return color;
            }
        }
        // Unreachable while MAX_SERIES <= PALETTE.len().
        PALETTE[0]
    }
}
