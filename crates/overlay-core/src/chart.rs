// File: crates/overlay-core/src/chart.rs
// Summary: Render options and the full align -> scale -> geometry -> SVG pipeline.

use crate::align::align_series;
use crate::geometry::{build_geometry, PlotRect};
use crate::scale::Scales;
use crate::state::CompareState;
use crate::svg;
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};

#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
    pub insets: Insets,
    pub theme: Theme,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::dark(),
        }
    }
}

/// Render the comparison to a complete SVG document string.
///
/// Full re-render on every call; with at most 10 series of daily bars the
/// output stays small. With no series displayed, the document holds a single
/// centered placeholder message instead of axes and data.
pub fn render(state: &CompareState, opts: &RenderOptions) -> String {
    if state.is_empty() {
        return svg::emit_placeholder(opts);
    }

    let config = state.config();
    let points = align_series(state.series(), config.scale_type);
    let plot = PlotRect::from_surface(opts.width, opts.height, &opts.insets);
    let scales = Scales::fit(&points, &plot);
    let geoms = build_geometry(state.series(), &points, config, &scales, &plot);
    svg::emit(state.series(), &points, &geoms, config, &scales, &plot, opts)
}
