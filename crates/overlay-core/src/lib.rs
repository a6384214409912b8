// File: crates/overlay-core/src/lib.rs
// Summary: Core library entry point; exports the comparison-chart pipeline API.

pub mod align;
pub mod chart;
pub mod error;
pub mod geometry;
pub mod scale;
pub mod series;
pub mod state;
pub mod svg;
pub mod theme;
pub mod types;

pub use align::{align_series, AlignedPoint};
pub use chart::{render, RenderOptions};
pub use error::StateError;
pub use series::{Bar, BarError, Ohlc, Series};
pub use state::{CompareState, MAX_SERIES};
pub use theme::Theme;
pub use types::{ChartConfig, ChartType, Insets, Period, ScaleType};
