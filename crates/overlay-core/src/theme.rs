// File: crates/overlay-core/src/theme.rs
// Summary: Light/Dark theming plus the fixed series color palette.

/// Fixed palette assigned to series in order of first free entry; at most
/// `state::MAX_SERIES` colors, each unique among displayed series.
pub const PALETTE: [&str; 10] = [
    "#4fc3f7", // light blue
    "#ffb74d", // orange
    "#81c784", // green
    "#e57373", // red
    "#ba68c8", // purple
    "#ffd54f", // amber
    "#4db6ac", // teal
    "#f06292", // pink
    "#a1887f", // brown
    "#90a4ae", // blue grey
];

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: &'static str,
    pub grid: &'static str,
    pub axis_line: &'static str,
    pub axis_label: &'static str,
    pub zero_line: &'static str,
    pub placeholder: &'static str,
    pub bullish: &'static str,
    pub bearish: &'static str,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: "#121214",
            grid: "#28282d",
            axis_line: "#b4b4be",
            axis_label: "#ebebf5",
            zero_line: "#96969f",
            placeholder: "#96969f",
            bullish: "#28c878",
            bearish: "#dc5050",
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: "#fafafc",
            grid: "#e6e6eb",
            axis_line: "#3c3c46",
            axis_label: "#14141e",
            zero_line: "#64646e",
            placeholder: "#64646e",
            bullish: "#14a05a",
            bearish: "#c83c3c",
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: "#000000",
            grid: "#222222",
            axis_line: "#ffffff",
            axis_label: "#ffffff",
            zero_line: "#cccccc",
            placeholder: "#cccccc",
            bullish: "#00ff00",
            bearish: "#ff0000",
        }
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light(), Theme::high_contrast_dark()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    for t in presets() {
        if t.name.eq_ignore_ascii_case(name) {
            return t;
        }
    }
    Theme::dark()
}
