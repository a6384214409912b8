// File: crates/demo/src/main.rs
// Summary: Demo renders a multi-symbol comparison chart to SVG, from CSV files or HTTP history.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use clap::Parser;

use overlay_core::{theme, Bar, ChartType, Period, RenderOptions, ScaleType};
use overlay_data::error::FetchError;
use overlay_data::{CompareSession, HistoryProvider, HttpHistoryProvider};

#[derive(Parser)]
#[command(version, about = "Overlay Chart demo: render multi-symbol comparison SVGs")]
struct Cli {
    /// Ticker symbols to compare (1-10).
    #[arg(required = true)]
    symbols: Vec<String>,

    /// Lookback window: 1M, 3M, 6M, 1Y, 5Y, ALL.
    #[arg(long, default_value = "1Y")]
    period: Period,

    /// Chart type: line, area, mountain, candlestick, ohlc.
    #[arg(long = "chart", default_value = "line")]
    chart_type: ChartType,

    /// Scale: percent or price.
    #[arg(long = "scale", default_value = "percent")]
    scale_type: ScaleType,

    /// Directory with per-symbol OHLC CSV files ({SYMBOL}.csv). When absent,
    /// history is fetched over HTTP from --api-base.
    #[arg(long)]
    csv_dir: Option<PathBuf>,

    /// History endpoint base URL for HTTP mode.
    #[arg(long, default_value = "http://127.0.0.1:8080")]
    api_base: String,

    #[arg(long, default_value = "target/out")]
    out_dir: PathBuf,

    /// Theme preset name (dark, light, high-contrast-dark).
    #[arg(long, default_value = "dark")]
    theme: String,

    /// Render every chart type instead of just --chart.
    #[arg(long)]
    all_types: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let provider: Box<dyn HistoryProvider> = match &cli.csv_dir {
        Some(dir) => {
            log::info!("loading history from CSV directory {}", dir.display());
            Box::new(CsvHistoryProvider { dir: dir.clone() })
        }
        None => {
            log::info!("fetching history from {}", cli.api_base);
            Box::new(HttpHistoryProvider::new(&cli.api_base))
        }
    };

    let mut session = CompareSession::new(provider);
    session.set_period(cli.period).await.ok(); // no symbols yet, nothing to reload
    session.set_scale_type(cli.scale_type);
    session.set_chart_type(cli.chart_type);

    for symbol in &cli.symbols {
        match session.add_ticker(symbol).await {
            Ok(()) => log::info!("added {}", symbol.to_uppercase()),
            Err(err) => log::error!("skipping {}: {}", symbol, err),
        }
    }
    if session.state().is_empty() {
        anyhow::bail!("no symbol could be loaded");
    }

    let opts = RenderOptions {
        theme: theme::find(&cli.theme),
        ..RenderOptions::default()
    };
    std::fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("creating {}", cli.out_dir.display()))?;

    let types: Vec<ChartType> = if cli.all_types {
        ChartType::all().to_vec()
    } else {
        vec![cli.chart_type]
    };
    for t in types {
        session.set_chart_type(t);
        let svg = session.render(&opts);
        let out = cli.out_dir.join(format!("compare_{}.svg", t.label()));
        std::fs::write(&out, svg).with_context(|| format!("writing {}", out.display()))?;
        println!("Wrote {}", out.display());
    }

    Ok(())
}

/// Offline provider reading `{dir}/{SYMBOL}.csv` with date,open,high,low,close
/// columns (header names matched case-insensitively, date as YYYY-MM-DD).
struct CsvHistoryProvider {
    dir: PathBuf,
}

#[async_trait]
impl HistoryProvider for CsvHistoryProvider {
    async fn fetch_history(&self, symbol: &str, limit: u32) -> Result<Vec<Bar>, FetchError> {
        let path = self.dir.join(format!("{}.csv", symbol));
        let mut bars = load_ohlc_csv(&path).map_err(|e| FetchError::Other(e.to_string()))?;
        if bars.is_empty() {
            return Err(FetchError::EmptyHistory);
        }
        bars.sort_by_key(|b| b.date);
        bars.dedup_by_key(|b| b.date);
        // Keep only the most recent `limit` bars, as the HTTP endpoint would.
        if bars.len() > limit as usize {
            bars.drain(..bars.len() - limit as usize);
        }
        Ok(bars)
    }
}

fn load_ohlc_csv(path: &Path) -> Result<Vec<Bar>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();

    let idx = |names: &[&str]| -> Option<usize> {
        headers
            .iter()
            .position(|h| names.iter().any(|want| h == want))
    };

    let i_date = idx(&["date", "time", "timestamp", "datetime"])
        .context("no date column found")?;
    let i_open = idx(&["open", "o"]).context("no open column found")?;
    let i_high = idx(&["high", "h"]).context("no high column found")?;
    let i_low = idx(&["low", "l"]).context("no low column found")?;
    let i_close = idx(&["close", "c", "adj_close", "close_price"]).context("no close column found")?;

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let field = |i: usize| -> Option<f64> { rec.get(i).and_then(|s| s.trim().parse().ok()) };
        let date = rec
            .get(i_date)
            .and_then(parse_date)
            .with_context(|| format!("bad date in {}", path.display()))?;
        if let (Some(o), Some(h), Some(l), Some(c)) =
            (field(i_open), field(i_high), field(i_low), field(i_close))
        {
            out.push(
                Bar::try_new(date, o, h, l, c)
                    .map_err(|e| anyhow::anyhow!("row {}: {}", date, e))?,
            );
        }
    }
    Ok(out)
}

/// Accept ISO dates or epoch seconds/milliseconds.
fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Ok(d) = s.parse::<NaiveDate>() {
        return Some(d);
    }
    if let Ok(n) = s.parse::<i64>() {
        let secs = if n > 10_i64.pow(12) { n / 1000 } else { n };
        return chrono::DateTime::from_timestamp(secs, 0).map(|dt| dt.date_naive());
    }
    None
}
