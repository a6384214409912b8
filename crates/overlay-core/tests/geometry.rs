// File: crates/overlay-core/tests/geometry.rs
// Purpose: Candle/OHLC glyph extents, slot widths, gap handling, baselines.

use chrono::NaiveDate;
use overlay_core::align::align_series;
use overlay_core::geometry::{build_geometry, slot_width, PlotRect, Shape};
use overlay_core::scale::Scales;
use overlay_core::{Bar, ChartConfig, ChartType, ScaleType, Series};

fn d(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn bar(date: &str, close: f64) -> Bar {
    Bar::try_new(d(date), close, close, close, close).unwrap()
}

fn plot() -> PlotRect {
    PlotRect { left: 72.0, top: 24.0, right: 1000.0, bottom: 584.0 }
}

fn config(chart_type: ChartType, scale_type: ScaleType) -> ChartConfig {
    ChartConfig { chart_type, scale_type, ..ChartConfig::default() }
}

#[test]
fn candle_body_and_wick_extents() {
    // One bar (open 50, high 55, low 48, close 52): body spans
    // [y(52), y(50)], wick spans [y(55), y(48)], and the wick contains the body.
    let s = Series::new(
        "TST",
        "#4fc3f7",
        vec![
            Bar::try_new(d("2024-01-02"), 50.0, 55.0, 48.0, 52.0).unwrap(),
            Bar::try_new(d("2024-01-03"), 52.0, 54.0, 49.0, 50.0).unwrap(),
        ],
    );
    let cfg = config(ChartType::Candlestick, ScaleType::Price);
    let points = align_series(std::slice::from_ref(&s), cfg.scale_type);
    let scales = Scales::fit(&points, &plot());
    let geoms = build_geometry(&[s], &points, &cfg, &scales, &plot());

    let glyphs = match &geoms[0].shape {
        Shape::Candles { glyphs } => glyphs,
        other => panic!("expected candles, got {:?}", other),
    };
    let g = &glyphs[0];
    assert_eq!(g.body_top, scales.y.to_px(52.0));
    assert_eq!(g.body_bottom, scales.y.to_px(50.0));
    assert_eq!(g.wick_top, scales.y.to_px(55.0));
    assert_eq!(g.wick_bottom, scales.y.to_px(48.0));
    assert!(g.bullish);
    assert!(g.wick_top <= g.body_top && g.wick_bottom >= g.body_bottom);

    // Second bar closed below its open.
    let g2 = &glyphs[1];
    assert!(!g2.bullish);
    assert_eq!(g2.body_top, scales.y.to_px(52.0));
    assert_eq!(g2.body_bottom, scales.y.to_px(50.0));
    assert!(g2.wick_top <= g2.body_top && g2.wick_bottom >= g2.body_bottom);
}

#[test]
fn slot_width_clamps_between_2_and_12() {
    assert_eq!(slot_width(928.0, 10), 12.0);
    assert_eq!(slot_width(928.0, 10_000), 2.0);
    let mid = slot_width(928.0, 100);
    assert!((mid - 928.0 * 0.8 / 100.0).abs() < 1e-9);
    assert!(mid > 2.0 && mid < 12.0);
}

#[test]
fn concurrent_series_glyphs_do_not_overlap() {
    let dates = ["2024-01-02", "2024-01-03", "2024-01-04"];
    let a = Series::new("AAA", "#4fc3f7", dates.iter().map(|d| bar(d, 10.0)).collect());
    let b = Series::new("BBB", "#ffb74d", dates.iter().map(|d| bar(d, 20.0)).collect());

    let cfg = config(ChartType::Candlestick, ScaleType::Price);
    let points = align_series(&[a.clone(), b.clone()], cfg.scale_type);
    let scales = Scales::fit(&points, &plot());
    let geoms = build_geometry(&[a, b], &points, &cfg, &scales, &plot());

    let (ga, gb) = match (&geoms[0].shape, &geoms[1].shape) {
        (Shape::Candles { glyphs: ga }, Shape::Candles { glyphs: gb }) => (ga, gb),
        _ => panic!("expected candles"),
    };
    for (x, y) in ga.iter().zip(gb.iter()) {
        // Glyphs in the same date slot abut but never overlap.
        assert!((x.x - y.x).abs() >= x.half_width + y.half_width - 1e-9);
    }
    // Per-series width is the slot split evenly.
    let slot = slot_width(plot().width(), 3);
    assert!((ga[0].half_width * 2.0 - slot / 2.0).abs() < 1e-9);
}

#[test]
fn missing_sample_breaks_the_line() {
    let a = Series::new(
        "AAA",
        "#4fc3f7",
        vec![bar("2024-01-02", 1.0), bar("2024-01-03", 2.0), bar("2024-01-04", 3.0)],
    );
    let b = Series::new("BBB", "#ffb74d", vec![bar("2024-01-02", 5.0), bar("2024-01-04", 6.0)]);

    let cfg = config(ChartType::Line, ScaleType::Price);
    let points = align_series(&[a.clone(), b.clone()], cfg.scale_type);
    let scales = Scales::fit(&points, &plot());
    let geoms = build_geometry(&[a, b], &points, &cfg, &scales, &plot());

    match &geoms[0].shape {
        Shape::Lines { segments } => assert_eq!(segments.len(), 1),
        _ => panic!("expected lines"),
    }
    // The sparse series splits into two one-point segments around its gap.
    match &geoms[1].shape {
        Shape::Lines { segments } => {
            assert_eq!(segments.len(), 2);
            assert_eq!(segments[0].len(), 1);
            assert_eq!(segments[1].len(), 1);
        }
        _ => panic!("expected lines"),
    }
}

#[test]
fn area_baseline_follows_scale_type() {
    let s = Series::new(
        "TST",
        "#4fc3f7",
        vec![bar("2024-01-02", 100.0), bar("2024-01-03", 110.0), bar("2024-01-04", 95.0)],
    );

    let pct = config(ChartType::Area, ScaleType::Percent);
    let points = align_series(std::slice::from_ref(&s), pct.scale_type);
    let scales = Scales::fit(&points, &plot());
    let geoms = build_geometry(std::slice::from_ref(&s), &points, &pct, &scales, &plot());
    match &geoms[0].shape {
        Shape::Area { baseline_y, .. } => assert_eq!(*baseline_y, scales.y.to_px(0.0)),
        _ => panic!("expected area"),
    }

    let price = config(ChartType::Mountain, ScaleType::Price);
    let points = align_series(std::slice::from_ref(&s), price.scale_type);
    let scales = Scales::fit(&points, &plot());
    let geoms = build_geometry(std::slice::from_ref(&s), &points, &price, &scales, &plot());
    match &geoms[0].shape {
        // Price baseline sits at the unpadded data minimum.
        Shape::Area { baseline_y, .. } => assert_eq!(*baseline_y, scales.y.to_px(scales.y.data_min)),
        _ => panic!("expected area"),
    }
}

#[test]
fn ohlc_glyph_tick_positions() {
    let s = Series::new(
        "TST",
        "#4fc3f7",
        vec![
            Bar::try_new(d("2024-01-02"), 50.0, 55.0, 48.0, 52.0).unwrap(),
            Bar::try_new(d("2024-01-03"), 52.0, 56.0, 51.0, 54.0).unwrap(),
        ],
    );
    let cfg = config(ChartType::Ohlc, ScaleType::Price);
    let points = align_series(std::slice::from_ref(&s), cfg.scale_type);
    let scales = Scales::fit(&points, &plot());
    let geoms = build_geometry(std::slice::from_ref(&s), &points, &cfg, &scales, &plot());

    match &geoms[0].shape {
        Shape::Ticks { glyphs } => {
            let g = &glyphs[0];
            assert_eq!(g.open_y, scales.y.to_px(50.0));
            assert_eq!(g.close_y, scales.y.to_px(52.0));
            assert_eq!(g.wick_top, scales.y.to_px(55.0));
            assert_eq!(g.wick_bottom, scales.y.to_px(48.0));
        }
        _ => panic!("expected ticks"),
    }
}
