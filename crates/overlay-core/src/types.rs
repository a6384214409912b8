// File: crates/overlay-core/src/types.rs
// Summary: Shared types and constants (sizes, insets, presentation enums).

use std::str::FromStr;

use thiserror::Error;

/// Default surface width in pixels.
pub const WIDTH: u32 = 1024;
/// Default surface height in pixels.
pub const HEIGHT: u32 = 640;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(72, 24, 24, 56)
    }
}

/// Lookback window for a comparison, mapped to a daily bar count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Period {
    M1,
    M3,
    M6,
    Y1,
    Y5,
    All,
}

impl Period {
    /// Number of daily bars requested for this window.
    pub const fn bar_limit(&self) -> u32 {
        match self {
            Period::M1 => 30,
            Period::M3 => 90,
            Period::M6 => 180,
            Period::Y1 => 365,
            Period::Y5 => 1825,
            Period::All => 3650,
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Period::M1 => "1M",
            Period::M3 => "3M",
            Period::M6 => "6M",
            Period::Y1 => "1Y",
            Period::Y5 => "5Y",
            Period::All => "ALL",
        }
    }
}

/// Visual encoding of the aligned series.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartType {
    Line,
    Area,
    Mountain,
    Candlestick,
    Ohlc,
}

impl ChartType {
    pub const fn label(&self) -> &'static str {
        match self {
            ChartType::Line => "line",
            ChartType::Area => "area",
            ChartType::Mountain => "mountain",
            ChartType::Candlestick => "candlestick",
            ChartType::Ohlc => "ohlc",
        }
    }

    pub const fn all() -> [ChartType; 5] {
        [
            ChartType::Line,
            ChartType::Area,
            ChartType::Mountain,
            ChartType::Candlestick,
            ChartType::Ohlc,
        ]
    }
}

/// Vertical axis semantics: percent change from each series' first sample, or raw price.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScaleType {
    Percent,
    Price,
}

/// Session-scoped presentation state, read on every redraw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChartConfig {
    pub period: Period,
    pub chart_type: ChartType,
    pub scale_type: ScaleType,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            period: Period::Y1,
            chart_type: ChartType::Line,
            scale_type: ScaleType::Percent,
        }
    }
}

/// Failed parse of a presentation enum from its CLI/user spelling.
#[derive(Debug, Error)]
#[error("unrecognized {kind} '{value}'")]
pub struct ParseError {
    pub kind: &'static str,
    pub value: String,
}

impl FromStr for Period {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "1M" => Ok(Period::M1),
            "3M" => Ok(Period::M3),
            "6M" => Ok(Period::M6),
            "1Y" => Ok(Period::Y1),
            "5Y" => Ok(Period::Y5),
            "ALL" => Ok(Period::All),
            _ => Err(ParseError { kind: "period", value: s.to_string() }),
        }
    }
}

impl FromStr for ChartType {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "line" => Ok(ChartType::Line),
            "area" => Ok(ChartType::Area),
            "mountain" => Ok(ChartType::Mountain),
            "candlestick" | "candle" => Ok(ChartType::Candlestick),
            "ohlc" => Ok(ChartType::Ohlc),
            _ => Err(ParseError { kind: "chart type", value: s.to_string() }),
        }
    }
}

impl FromStr for ScaleType {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "percent" | "%" => Ok(ScaleType::Percent),
            "price" | "$" => Ok(ScaleType::Price),
            _ => Err(ParseError { kind: "scale type", value: s.to_string() }),
        }
    }
}
