// File: crates/overlay-core/src/scale.rs
// Summary: Linear time (X) and value (Y) pixel scales fitted to aligned points.

use chrono::NaiveDate;

use crate::align::AlignedPoint;
use crate::geometry::PlotRect;

/// Midnight UTC of `date`, in epoch milliseconds. The x-axis is linear in
/// elapsed time, so calendar gaps (weekends, holidays) are not compressed.
pub fn epoch_ms(date: NaiveDate) -> i64 {
    date.and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc().timestamp_millis())
        .unwrap_or(0)
}

/// Horizontal scale mapping the aligned date axis to [left_px, right_px].
#[derive(Clone, Copy, Debug)]
pub struct TimeScale {
    pub left_px: f64,
    pub right_px: f64,
    pub t_min: i64,
    pub t_max: i64,
}

impl TimeScale {
    #[inline]
    pub fn to_px(&self, date: NaiveDate) -> f64 {
        // Single-date axis degenerates to the left edge.
        if self.t_max == self.t_min {
            return self.left_px;
        }
        let frac = (epoch_ms(date) - self.t_min) as f64 / (self.t_max - self.t_min) as f64;
        self.left_px + frac * (self.right_px - self.left_px)
    }
}

/// Vertical scale mapping [min_val, max_val] (padded) to [bottom_px, top_px].
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub top_px: f64,
    pub bottom_px: f64,
    /// Unpadded extremes of the scanned data.
    pub data_min: f64,
    pub data_max: f64,
    /// Display range after 5% padding on both ends.
    pub min_val: f64,
    pub max_val: f64,
}

impl ValueScale {
    #[inline]
    pub fn to_px(&self, v: f64) -> f64 {
        // Flat range maps everything to the vertical center.
        if self.max_val == self.min_val {
            return (self.top_px + self.bottom_px) * 0.5;
        }
        let frac = (v - self.min_val) / (self.max_val - self.min_val);
        self.bottom_px - frac * (self.bottom_px - self.top_px)
    }

    /// Whether `v` falls inside the padded display range.
    pub fn contains(&self, v: f64) -> bool {
        v >= self.min_val && v <= self.max_val
    }
}

/// The fitted pair of pixel-mapping scales plus their resolved ranges.
#[derive(Clone, Copy, Debug)]
pub struct Scales {
    pub x: TimeScale,
    pub y: ValueScale,
}

impl Scales {
    /// Fit both scales to the aligned points within `plot`.
    ///
    /// Value range scans all non-null high/low/close: `min(low, close)` to
    /// `max(high, close)`, then pads both ends by 5% of the span. A zero span
    /// keeps the range collapsed (no division happens until `to_px`, which
    /// special-cases it).
    pub fn fit(points: &[AlignedPoint], plot: &PlotRect) -> Scales {
        let mut min_val = f64::INFINITY;
        let mut max_val = f64::NEG_INFINITY;
        for p in points {
            for v in p.values.iter().flatten() {
                min_val = min_val.min(v.low.min(v.close));
                max_val = max_val.max(v.high.max(v.close));
            }
        }
        if !min_val.is_finite() || !max_val.is_finite() {
            min_val = 0.0;
            max_val = 0.0;
        }

        let pad = (max_val - min_val) * 0.05;
        let t_min = points.first().map(|p| epoch_ms(p.date)).unwrap_or(0);
        let t_max = points.last().map(|p| epoch_ms(p.date)).unwrap_or(0);

        Scales {
            x: TimeScale {
                left_px: plot.left,
                right_px: plot.right,
                t_min,
                t_max,
            },
            y: ValueScale {
                top_px: plot.top,
                bottom_px: plot.bottom,
                data_min: min_val,
                data_max: max_val,
                min_val: min_val - pad,
                max_val: max_val + pad,
            },
        }
    }
}

/// Evenly spaced values from `start` to `end` inclusive.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 {
        return vec![start, end];
    }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}
