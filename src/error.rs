//! Error types for page-tree.
//!
//! Only unrecoverable conditions surface as errors. Heuristic misses fall
//! back to a coarser extraction instead of failing.

/// Error type for parse operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input could not be turned into an HTML tree with a body to walk.
    #[error("HTML parsing failed: {0}")]
    ParseError(String),

    /// `Options::url` is set but is not an absolute http(s) URL.
    #[error("Invalid page URL: {0}")]
    InvalidUrl(String),
}

/// Result type alias for parse operations.
pub type Result<T> = std::result::Result<T, Error>;
