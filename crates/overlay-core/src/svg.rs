// File: crates/overlay-core/src/svg.rs
// Summary: Serialize geometry, gridlines, labels, and legends into one SVG string.

use std::fmt::Write;

use crate::align::AlignedPoint;
use crate::chart::RenderOptions;
use crate::geometry::{PlotRect, SeriesGeometry, Shape};
use crate::scale::{linspace, Scales};
use crate::series::Series;
use crate::types::{ChartConfig, ChartType, ScaleType};

const GRID_ROWS: usize = 6;
const MAX_DATE_LABELS: usize = 6;

/// Emit the complete SVG document for an empty comparison (no tickers).
pub fn emit_placeholder(opts: &RenderOptions) -> String {
    let mut out = String::new();
    document_open(&mut out, opts);
    let _ = write!(
        out,
        "<text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\" dominant-baseline=\"middle\" \
         fill=\"{}\" font-size=\"15\">Add a symbol to compare</text>",
        opts.width as f64 * 0.5,
        opts.height as f64 * 0.5,
        opts.theme.placeholder,
    );
    out.push_str("</svg>");
    out
}

/// Emit the complete SVG document: background, gradient defs, grid, series
/// shapes, axis labels, and legend. Pure function of its inputs, so repeated
/// calls with unchanged state produce byte-identical markup.
pub fn emit(
    series: &[Series],
    points: &[AlignedPoint],
    geoms: &[SeriesGeometry],
    config: &ChartConfig,
    scales: &Scales,
    plot: &PlotRect,
    opts: &RenderOptions,
) -> String {
    let mut out = String::new();
    document_open(&mut out, opts);

    if matches!(config.chart_type, ChartType::Area | ChartType::Mountain) {
        gradient_defs(&mut out, series, config.chart_type);
    }

    grid_and_value_labels(&mut out, config, scales, plot, opts);
    if config.scale_type == ScaleType::Percent && scales.y.contains(0.0) {
        let y0 = scales.y.to_px(0.0);
        let _ = write!(
            out,
            "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\" \
             stroke-width=\"1\" stroke-dasharray=\"4 3\"/>",
            plot.left, y0, plot.right, y0, opts.theme.zero_line,
        );
    }
    date_labels(&mut out, points, scales, plot, opts);
    axis_lines(&mut out, plot, opts);

    let multi = series.len() > 1;
    for geom in geoms {
        let s = &series[geom.series_index];
        match &geom.shape {
            Shape::Lines { segments } => stroke_segments(&mut out, segments, s.color, 2.0),
            Shape::Area { segments, baseline_y } => {
                let fill = format!("url(#fill-{})", s.symbol);
                for seg in segments {
                    area_fill_path(&mut out, seg, *baseline_y, &fill);
                }
                let stroke_width = if config.chart_type == ChartType::Mountain { 1.0 } else { 1.5 };
                stroke_segments(&mut out, segments, s.color, stroke_width);
            }
            Shape::Candles { glyphs } => {
                for g in glyphs {
                    // Single-series candles color by direction; with several
                    // series the palette color keeps them distinguishable.
                    let direction = if g.bullish { opts.theme.bullish } else { opts.theme.bearish };
                    let wick_color = if multi { s.color } else { direction };
                    // Wick first so the body draws over it.
                    wick(&mut out, g.x, g.wick_top, g.wick_bottom, wick_color, multi);
                    if multi {
                        let _ = write!(
                            out,
                            "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" \
                             fill=\"{}\" fill-opacity=\"0.55\" stroke=\"{}\" stroke-opacity=\"0.55\"/>",
                            g.x - g.half_width,
                            g.body_top,
                            g.half_width * 2.0,
                            g.body_bottom - g.body_top,
                            s.color,
                            s.color,
                        );
                    } else if g.bullish {
                        let _ = write!(
                            out,
                            "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" \
                             fill=\"none\" stroke=\"{}\" stroke-width=\"1\"/>",
                            g.x - g.half_width,
                            g.body_top,
                            g.half_width * 2.0,
                            g.body_bottom - g.body_top,
                            direction,
                        );
                    } else {
                        let _ = write!(
                            out,
                            "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"{}\"/>",
                            g.x - g.half_width,
                            g.body_top,
                            g.half_width * 2.0,
                            g.body_bottom - g.body_top,
                            direction,
                        );
                    }
                }
            }
            Shape::Ticks { glyphs } => {
                for g in glyphs {
                    wick(&mut out, g.x, g.wick_top, g.wick_bottom, s.color, multi);
                    let _ = write!(
                        out,
                        "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\" stroke-width=\"1\"/>",
                        g.x - g.half_width, g.open_y, g.x, g.open_y, s.color,
                    );
                    let _ = write!(
                        out,
                        "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\" stroke-width=\"1\"/>",
                        g.x, g.close_y, g.x + g.half_width, g.close_y, s.color,
                    );
                }
            }
        }
    }

    legend(&mut out, series, plot, opts);
    out.push_str("</svg>");
    out
}

fn document_open(out: &mut String, opts: &RenderOptions) {
    let _ = write!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">",
        w = opts.width,
        h = opts.height,
    );
    let _ = write!(
        out,
        "<rect x=\"0\" y=\"0\" width=\"{}\" height=\"{}\" fill=\"{}\"/>",
        opts.width, opts.height, opts.theme.background,
    );
}

fn gradient_defs(out: &mut String, series: &[Series], chart_type: ChartType) {
    // Mountain is a denser fill than area; geometry is identical.
    let (top_op, bottom_op) = if chart_type == ChartType::Mountain {
        ("0.60", "0.08")
    } else {
        ("0.35", "0.02")
    };
    out.push_str("<defs>");
    for s in series {
        let _ = write!(
            out,
            "<linearGradient id=\"fill-{}\" x1=\"0\" y1=\"0\" x2=\"0\" y2=\"1\">\
             <stop offset=\"0%\" stop-color=\"{}\" stop-opacity=\"{}\"/>\
             <stop offset=\"100%\" stop-color=\"{}\" stop-opacity=\"{}\"/>\
             </linearGradient>",
            s.symbol, s.color, top_op, s.color, bottom_op,
        );
    }
    out.push_str("</defs>");
}

fn grid_and_value_labels(
    out: &mut String,
    config: &ChartConfig,
    scales: &Scales,
    plot: &PlotRect,
    opts: &RenderOptions,
) {
    for v in linspace(scales.y.min_val, scales.y.max_val, GRID_ROWS) {
        let y = scales.y.to_px(v);
        let _ = write!(
            out,
            "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\" stroke-width=\"1\"/>",
            plot.left, y, plot.right, y, opts.theme.grid,
        );
        let _ = write!(
            out,
            "<text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"end\" fill=\"{}\" font-size=\"11\">{}</text>",
            plot.left - 8.0,
            y + 4.0,
            opts.theme.axis_label,
            value_label(v, config.scale_type),
        );
    }
}

fn value_label(v: f64, scale_type: ScaleType) -> String {
    match scale_type {
        ScaleType::Percent => format!("{:+.2}%", v),
        ScaleType::Price => format!("${:.2}", v),
    }
}

fn date_labels(
    out: &mut String,
    points: &[AlignedPoint],
    scales: &Scales,
    plot: &PlotRect,
    opts: &RenderOptions,
) {
    if points.is_empty() {
        return;
    }
    // Stride keeps the label count at MAX_DATE_LABELS or fewer.
    let stride = (points.len() + MAX_DATE_LABELS - 1) / MAX_DATE_LABELS;
    let stride = stride.max(1);
    let span_days = points
        .last()
        .map(|p| (p.date - points[0].date).num_days())
        .unwrap_or(0);
    let fmt = if span_days > 366 { "%b %Y" } else { "%b %d" };
    for p in points.iter().step_by(stride) {
        let x = scales.x.to_px(p.date);
        let _ = write!(
            out,
            "<text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\" fill=\"{}\" font-size=\"11\">{}</text>",
            x,
            plot.bottom + 18.0,
            opts.theme.axis_label,
            p.date.format(fmt),
        );
    }
}

fn axis_lines(out: &mut String, plot: &PlotRect, opts: &RenderOptions) {
    let _ = write!(
        out,
        "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\" stroke-width=\"1.5\"/>",
        plot.left, plot.bottom, plot.right, plot.bottom, opts.theme.axis_line,
    );
    let _ = write!(
        out,
        "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\" stroke-width=\"1.5\"/>",
        plot.left, plot.top, plot.left, plot.bottom, opts.theme.axis_line,
    );
}

/// Polyline segments as stroked paths; an isolated sample renders as a dot so
/// a gap-surrounded point stays visible.
fn stroke_segments(out: &mut String, segments: &[Vec<(f64, f64)>], color: &str, width: f64) {
    for seg in segments {
        match seg.as_slice() {
            [] => {}
            [(x, y)] => {
                let _ = write!(
                    out,
                    "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"2\" fill=\"{}\"/>",
                    x, y, color,
                );
            }
            pts => {
                out.push_str("<path d=\"");
                for (i, (x, y)) in pts.iter().enumerate() {
                    let cmd = if i == 0 { 'M' } else { 'L' };
                    let _ = write!(out, "{}{:.2},{:.2} ", cmd, x, y);
                }
                let _ = write!(
                    out,
                    "\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\"/>",
                    color, width,
                );
            }
        }
    }
}

fn area_fill_path(out: &mut String, seg: &[(f64, f64)], baseline_y: f64, fill: &str) {
    if seg.len() < 2 {
        return;
    }
    out.push_str("<path d=\"");
    for (i, (x, y)) in seg.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        let _ = write!(out, "{}{:.2},{:.2} ", cmd, x, y);
    }
    let _ = write!(
        out,
        "L{:.2},{:.2} L{:.2},{:.2} Z\" fill=\"{}\" stroke=\"none\"/>",
        seg[seg.len() - 1].0,
        baseline_y,
        seg[0].0,
        baseline_y,
        fill,
    );
}

fn wick(out: &mut String, x: f64, top: f64, bottom: f64, color: &str, multi: bool) {
    if multi {
        let _ = write!(
            out,
            "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\" \
             stroke-width=\"1\" stroke-opacity=\"0.55\"/>",
            x, top, x, bottom, color,
        );
    } else {
        let _ = write!(
            out,
            "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\" stroke-width=\"1\"/>",
            x, top, x, bottom, color,
        );
    }
}

fn legend(out: &mut String, series: &[Series], plot: &PlotRect, opts: &RenderOptions) {
    for (i, s) in series.iter().enumerate() {
        let y = plot.top + 8.0 + i as f64 * 18.0;
        let _ = write!(
            out,
            "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"10\" height=\"10\" fill=\"{}\"/>",
            plot.left + 8.0,
            y,
            s.color,
        );
        let _ = write!(
            out,
            "<text x=\"{:.2}\" y=\"{:.2}\" fill=\"{}\" font-size=\"12\">{} {:+.2}%</text>",
            plot.left + 24.0,
            y + 9.0,
            opts.theme.axis_label,
            s.symbol,
            s.change_percent(),
        );
    }
}
