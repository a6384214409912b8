// File: crates/overlay-data/src/error.rs
// Summary: Fetch and session error taxonomies.

use overlay_core::{BarError, StateError};
use thiserror::Error;

/// Errors from a `HistoryProvider` implementation. Each failure is local to
/// one symbol and never disturbs already-loaded series.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network-level failure (connect, timeout, body read).
    #[error("history request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-2xx status.
    #[error("history endpoint returned status {code}")]
    Status { code: u16 },

    /// The response body did not match the expected payload shape.
    #[error("undecodable history payload: {0}")]
    Decode(#[from] serde_json::Error),

    /// The endpoint answered 2xx with an empty `data` array.
    #[error("empty history")]
    EmptyHistory,

    /// A decoded row violates the OHLC invariant.
    #[error("malformed bar: {0}")]
    BadBar(#[from] BarError),

    /// Provider-specific failure (file access for offline providers, etc.).
    #[error("provider error: {0}")]
    Other(String),
}

/// Errors surfaced by `CompareSession` operations; all are non-fatal to the
/// session, and a failing operation leaves prior state untouched.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    State(#[from] StateError),

    #[error("fetch for '{symbol}' failed: {source}")]
    Fetch {
        symbol: String,
        source: FetchError,
    },

    /// The state changed while the fetch was in flight (removal or period
    /// switch); the fetched history was discarded.
    #[error("fetch result superseded by a newer state change")]
    Superseded,

    /// One or more symbols failed to refetch after a period change; each
    /// keeps its previous bars.
    #[error("{} symbol(s) failed to reload", failures.len())]
    Reload {
        failures: Vec<(String, FetchError)>,
    },
}
