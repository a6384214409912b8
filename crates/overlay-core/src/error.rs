// File: crates/overlay-core/src/error.rs
// Summary: Comparison-state error taxonomy.

use thiserror::Error;

/// Local, non-fatal rejections of a state mutation; the state is never
/// modified when one of these is returned.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StateError {
    #[error("symbol '{0}' is already displayed")]
    DuplicateSymbol(String),

    #[error("at most {max} symbols can be compared")]
    CapacityExceeded { max: usize },

    #[error("symbol '{0}' is not displayed")]
    UnknownSymbol(String),

    #[error("symbol '{0}' has no history")]
    EmptyHistory(String),

    /// Ticker outside the `A-Z 0-9 . -` charset; symbols are interpolated
    /// into request URLs and SVG markup, so the charset is enforced at entry.
    #[error("'{0}' is not a valid ticker symbol")]
    InvalidSymbol(String),
}
