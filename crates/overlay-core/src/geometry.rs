// File: crates/overlay-core/src/geometry.rs
// Summary: Per-chart-type shape primitives computed from scaled coordinates.

use crate::align::AlignedPoint;
use crate::scale::Scales;
use crate::series::Series;
use crate::types::{ChartConfig, ChartType, Insets, ScaleType};

/// Plot area in pixel space, inset from the surface edges.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl PlotRect {
    pub fn from_surface(width: u32, height: u32, insets: &Insets) -> Self {
        Self {
            left: insets.left as f64,
            top: insets.top as f64,
            right: (width.saturating_sub(insets.right)) as f64,
            bottom: (height.saturating_sub(insets.bottom)) as f64,
        }
    }
    pub fn width(&self) -> f64 { self.right - self.left }
    pub fn height(&self) -> f64 { self.bottom - self.top }
}

/// One candlestick glyph. Vertical coordinates are pixel-space, so `wick_top`
/// is numerically the smallest value (highest point on screen).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CandleGlyph {
    pub x: f64,
    pub half_width: f64,
    pub wick_top: f64,
    pub wick_bottom: f64,
    pub body_top: f64,
    pub body_bottom: f64,
    /// close >= open
    pub bullish: bool,
}

/// One OHLC bar glyph: wick plus open tick (left) and close tick (right).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OhlcGlyph {
    pub x: f64,
    pub half_width: f64,
    pub wick_top: f64,
    pub wick_bottom: f64,
    pub open_y: f64,
    pub close_y: f64,
}

/// Renderable primitives for a single series.
#[derive(Clone, Debug)]
pub enum Shape {
    /// Polyline segments through close values; a missing sample breaks the
    /// segment (no interpolation across gaps).
    Lines { segments: Vec<Vec<(f64, f64)>> },
    /// Line segments plus a closed fill region down to `baseline_y`.
    Area { segments: Vec<Vec<(f64, f64)>>, baseline_y: f64 },
    Candles { glyphs: Vec<CandleGlyph> },
    Ticks { glyphs: Vec<OhlcGlyph> },
}

#[derive(Clone, Debug)]
pub struct SeriesGeometry {
    pub series_index: usize,
    pub shape: Shape,
}

/// Horizontal space granted to one date slot, shared by all series' glyphs.
pub fn slot_width(plot_width: f64, point_count: usize) -> f64 {
    if point_count == 0 {
        return 2.0;
    }
    (plot_width * 0.8 / point_count as f64).clamp(2.0, 12.0)
}

/// Compute shape primitives for every series under the active chart type.
///
/// All coordinates stay in floating point; rounding is left to serialization.
pub fn build_geometry(
    series: &[Series],
    points: &[AlignedPoint],
    config: &ChartConfig,
    scales: &Scales,
    plot: &PlotRect,
) -> Vec<SeriesGeometry> {
    let n = series.len();
    let slot = slot_width(plot.width(), points.len());
    // Each series gets an equal share of the slot, centered around the date x.
    let glyph = if n > 0 { slot / n as f64 } else { slot };

    series
        .iter()
        .enumerate()
        .map(|(i, _)| {
            let offset = (i as f64 - (n as f64 - 1.0) * 0.5) * glyph;
            let shape = match config.chart_type {
                ChartType::Line => Shape::Lines {
                    segments: close_segments(points, i, scales),
                },
                ChartType::Area | ChartType::Mountain => Shape::Area {
                    segments: close_segments(points, i, scales),
                    baseline_y: baseline_y(config.scale_type, scales),
                },
                ChartType::Candlestick => Shape::Candles {
                    glyphs: candle_glyphs(points, i, scales, offset, glyph),
                },
                ChartType::Ohlc => Shape::Ticks {
                    glyphs: ohlc_glyphs(points, i, scales, offset, glyph),
                },
            };
            SeriesGeometry { series_index: i, shape }
        })
        .collect()
}

/// Fill baseline: 0% for percent scale, the unpadded data minimum for price.
fn baseline_y(scale_type: ScaleType, scales: &Scales) -> f64 {
    match scale_type {
        ScaleType::Percent => scales.y.to_px(0.0),
        ScaleType::Price => scales.y.to_px(scales.y.data_min),
    }
}

/// Walk aligned points in date order collecting close-value polyline
/// segments; a `None` sample ends the current segment.
fn close_segments(points: &[AlignedPoint], idx: usize, scales: &Scales) -> Vec<Vec<(f64, f64)>> {
    let mut segments = Vec::new();
    let mut current: Vec<(f64, f64)> = Vec::new();
    for p in points {
        match p.values[idx] {
            Some(v) => current.push((scales.x.to_px(p.date), scales.y.to_px(v.close))),
            None => {
                if !current.is_empty() {
                    segments.push(std::mem::take(&mut current));
                }
            }
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }
    segments
}

fn candle_glyphs(
    points: &[AlignedPoint],
    idx: usize,
    scales: &Scales,
    offset: f64,
    glyph: f64,
) -> Vec<CandleGlyph> {
    points
        .iter()
        .filter_map(|p| {
            p.values[idx].map(|v| CandleGlyph {
                x: scales.x.to_px(p.date) + offset,
                half_width: glyph * 0.5,
                wick_top: scales.y.to_px(v.high),
                wick_bottom: scales.y.to_px(v.low),
                body_top: scales.y.to_px(v.open.max(v.close)),
                body_bottom: scales.y.to_px(v.open.min(v.close)),
                bullish: v.close >= v.open,
            })
        })
        .collect()
}

fn ohlc_glyphs(
    points: &[AlignedPoint],
    idx: usize,
    scales: &Scales,
    offset: f64,
    glyph: f64,
) -> Vec<OhlcGlyph> {
    points
        .iter()
        .filter_map(|p| {
            p.values[idx].map(|v| OhlcGlyph {
                x: scales.x.to_px(p.date) + offset,
                half_width: glyph * 0.5,
                wick_top: scales.y.to_px(v.high),
                wick_bottom: scales.y.to_px(v.low),
                open_y: scales.y.to_px(v.open),
                close_y: scales.y.to_px(v.close),
            })
        })
        .collect()
}
