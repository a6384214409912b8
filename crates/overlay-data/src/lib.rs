// File: crates/overlay-data/src/lib.rs
// Summary: Data-layer entry point; exports provider abstraction and session.

pub mod error;
pub mod http;
pub mod provider;
pub mod session;

pub use error::{FetchError, SessionError};
pub use http::HttpHistoryProvider;
pub use provider::HistoryProvider;
pub use session::CompareSession;
