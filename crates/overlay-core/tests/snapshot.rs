// File: crates/overlay-core/tests/snapshot.rs
// Purpose: Golden SVG snapshot harness with bless flow, plus markup checks.
// Behavior:
// - Renders a deterministic small comparison to an SVG string.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if the snapshot exists, compares bytes for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use chrono::NaiveDate;
use overlay_core::{render, Bar, ChartType, CompareState, RenderOptions, ScaleType};

fn d(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn sample_state() -> CompareState {
    let mut state = CompareState::new();
    state
        .add_series(
            "AAA",
            vec![
                Bar::try_new(d("2024-01-02"), 100.0, 104.0, 99.0, 103.0).unwrap(),
                Bar::try_new(d("2024-01-03"), 103.0, 108.0, 102.0, 107.0).unwrap(),
                Bar::try_new(d("2024-01-04"), 107.0, 107.5, 101.0, 102.0).unwrap(),
            ],
        )
        .unwrap();
    state
        .add_series(
            "BBB",
            vec![
                Bar::try_new(d("2024-01-02"), 50.0, 51.0, 49.0, 50.5).unwrap(),
                Bar::try_new(d("2024-01-04"), 50.5, 52.0, 50.0, 51.5).unwrap(),
            ],
        )
        .unwrap();
    state
}

#[test]
fn golden_comparison_svg() {
    let svg = render(&sample_state(), &RenderOptions::default());
    let snap_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join("comparison_line.svg");

    let update = std::env::var("UPDATE_SNAPSHOTS")
        .ok()
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if update {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, svg.as_bytes()).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), svg.len());
        return;
    }

    if snap_path.exists() {
        let want = std::fs::read_to_string(&snap_path).expect("read snapshot");
        assert_eq!(svg, want, "rendered SVG differs from golden snapshot: {}", snap_path.display());
    } else {
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", snap_path.display());
        // Skip without failing on first run
    }
}

#[test]
fn re_render_with_unchanged_state_is_byte_identical() {
    let state = sample_state();
    let opts = RenderOptions::default();
    assert_eq!(render(&state, &opts), render(&state, &opts));
}

#[test]
fn empty_comparison_renders_placeholder_only() {
    let svg = render(&CompareState::new(), &RenderOptions::default());
    assert!(svg.contains("Add a symbol to compare"));
    assert!(!svg.contains("<path"));
    assert!(!svg.contains("<linearGradient"));
}

#[test]
fn area_mode_defines_one_gradient_per_series() {
    let mut state = sample_state();
    state.set_chart_type(ChartType::Area);
    let svg = render(&state, &RenderOptions::default());
    assert!(svg.contains("<defs>"));
    assert!(svg.contains("id=\"fill-AAA\""));
    assert!(svg.contains("id=\"fill-BBB\""));
    assert!(svg.contains("url(#fill-AAA)"));
}

#[test]
fn percent_scale_draws_dashed_zero_baseline() {
    let svg = render(&sample_state(), &RenderOptions::default());
    assert!(svg.contains("stroke-dasharray"));

    let mut state = sample_state();
    state.set_scale_type(ScaleType::Price);
    let svg = render(&state, &RenderOptions::default());
    // Price scale here keeps 0 far outside the range, so no baseline.
    assert!(!svg.contains("stroke-dasharray"));
}

#[test]
fn single_series_candles_color_by_direction() {
    let mut state = CompareState::new();
    state
        .add_series(
            "AAA",
            vec![
                Bar::try_new(d("2024-01-02"), 100.0, 104.0, 99.0, 103.0).unwrap(),
                Bar::try_new(d("2024-01-03"), 103.0, 105.0, 101.0, 102.0).unwrap(),
            ],
        )
        .unwrap();
    state.set_chart_type(ChartType::Candlestick);
    let opts = RenderOptions::default();
    let svg = render(&state, &opts);

    // One bullish and one bearish bar draw with the theme's direction colors,
    // not the series palette color.
    assert!(svg.contains(opts.theme.bullish));
    assert!(svg.contains(opts.theme.bearish));

    // With two series the palette color takes over at reduced opacity.
    state
        .add_series("BBB", vec![Bar::try_new(d("2024-01-02"), 50.0, 51.0, 49.0, 50.5).unwrap()])
        .unwrap();
    let svg = render(&state, &opts);
    assert!(svg.contains("fill-opacity=\"0.55\""));
    assert!(!svg.contains(opts.theme.bullish));
}

#[test]
fn legend_names_every_series() {
    let svg = render(&sample_state(), &RenderOptions::default());
    assert!(svg.contains(">AAA "));
    assert!(svg.contains(">BBB "));
}
