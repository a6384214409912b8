// File: crates/overlay-core/src/align.rs
// Summary: Merge independently-sampled series onto one sorted date axis.

use std::collections::{BTreeSet, HashMap};

use chrono::NaiveDate;

use crate::series::{Bar, Ohlc, Series};
use crate::types::ScaleType;

/// One row of the common date axis. `values[i]` belongs to the i-th series of
/// the input slice; `None` means that series has no sample on `date`.
#[derive(Clone, Debug, PartialEq)]
pub struct AlignedPoint {
    pub date: NaiveDate,
    pub values: Vec<Option<Ohlc>>,
}

/// Align the given series onto the union of their bar dates, sorted ascending.
///
/// For `ScaleType::Percent` every OHLC field is rebased to percent change
/// against that series' own first close in the window; each series rebases
/// independently, so adding a series never shifts another's baseline.
///
/// Pure and deterministic: identical inputs always produce identical output.
/// Rows where every series is `None` cannot occur, because the axis is built
/// from dates that at least one series sampled.
pub fn align_series(series: &[Series], scale_type: ScaleType) -> Vec<AlignedPoint> {
    let mut dates: BTreeSet<NaiveDate> = BTreeSet::new();
    for s in series {
        for bar in &s.bars {
            dates.insert(bar.date);
        }
    }

    let lookups: Vec<HashMap<NaiveDate, &Bar>> = series
        .iter()
        .map(|s| s.bars.iter().map(|b| (b.date, b)).collect())
        .collect();
    let baselines: Vec<f64> = series.iter().map(|s| s.first_close()).collect();

    dates
        .into_iter()
        .map(|date| {
            let values = series
                .iter()
                .enumerate()
                .map(|(i, _)| {
                    lookups[i].get(&date).map(|bar| {
                        let v = Ohlc::from_bar(bar);
                        match scale_type {
                            ScaleType::Percent => v.rebased(baselines[i]),
                            ScaleType::Price => v,
                        }
                    })
                })
                .collect::<Vec<_>>();
            debug_assert!(values.iter().any(|v| v.is_some()));
            AlignedPoint { date, values }
        })
        .collect()
}
