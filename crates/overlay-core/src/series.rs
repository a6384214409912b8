// File: crates/overlay-core/src/series.rs
// Summary: Bar and Series models for one ticker's daily price history.

use chrono::NaiveDate;
use thiserror::Error;

/// OHLC invariant violations caught at construction time.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BarError {
    #[error("low above min(open, close)")]
    LowAboveBody,
    #[error("high below max(open, close)")]
    HighBelowBody,
    #[error("low above high")]
    LowAboveHigh,
}

/// One daily sample of a ticker's price history.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl Bar {
    /// Construct a bar enforcing OHLC invariants:
    /// low <= min(open, close), high >= max(open, close), and low <= high.
    pub fn try_new(date: NaiveDate, open: f64, high: f64, low: f64, close: f64) -> Result<Self, BarError> {
        let lo = open.min(close);
        let hi = open.max(close);
        if low > lo { return Err(BarError::LowAboveBody); }
        if high < hi { return Err(BarError::HighBelowBody); }
        if low > high { return Err(BarError::LowAboveHigh); }
        Ok(Self { date, open, high, low, close })
    }
}

/// One open/high/low/close tuple on the aligned axis, possibly percent-transformed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ohlc {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl Ohlc {
    pub fn from_bar(bar: &Bar) -> Self {
        Self { open: bar.open, high: bar.high, low: bar.low, close: bar.close }
    }

    /// Rebase every field to percent change against `base` (a series' first
    /// close). A zero base cannot anchor a percent axis; the sample collapses
    /// to 0% instead of propagating NaN into path data.
    pub fn rebased(&self, base: f64) -> Self {
        if base == 0.0 {
            return Self { open: 0.0, high: 0.0, low: 0.0, close: 0.0 };
        }
        let pct = |v: f64| (v / base - 1.0) * 100.0;
        Self { open: pct(self.open), high: pct(self.high), low: pct(self.low), close: pct(self.close) }
    }
}

/// One ticker's full bar history plus presentation metadata.
///
/// Bars are ordered oldest first with strictly increasing dates; the vector is
/// non-empty for any series held by the comparison state.
#[derive(Clone, Debug)]
pub struct Series {
    pub symbol: String,
    pub color: &'static str,
    pub bars: Vec<Bar>,
}

impl Series {
    pub fn new(symbol: impl Into<String>, color: &'static str, bars: Vec<Bar>) -> Self {
        debug_assert!(!bars.is_empty(), "series requires at least one bar");
        debug_assert!(bars.windows(2).all(|w| w[0].date < w[1].date));
        Self { symbol: symbol.into(), color, bars }
    }

    /// Close of the series' first in-window bar; the percent-rebase baseline.
    pub fn first_close(&self) -> f64 {
        self.bars.first().map(|b| b.close).unwrap_or(0.0)
    }

    /// Close of the most recent bar.
    pub fn latest_price(&self) -> f64 {
        self.bars.last().map(|b| b.close).unwrap_or(0.0)
    }

    /// Relative change from first to last close, in percent.
    pub fn change_percent(&self) -> f64 {
        let first = self.first_close();
        if first == 0.0 {
            return 0.0;
        }
        (self.latest_price() / first - 1.0) * 100.0
    }
}
