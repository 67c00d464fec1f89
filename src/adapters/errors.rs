//! Quote source error types
//!
//! All fetch-related errors are wrapped in the FetchError enum. A fetch
//! error is cycle-scoped: the scheduler logs it and waits for the next
//! tick, which is the only retry mechanism.

use thiserror::Error;

/// Classified failure of a single quote fetch
#[derive(Error, Debug)]
pub enum FetchError {
    /// The endpoint answered with a non-success HTTP status.
    /// The body is captured for diagnostics, not parsed further.
    #[error("Quote endpoint returned status {status}: {body}")]
    BadStatus { status: u16, body: String },

    /// The body was malformed JSON or lacked an expected field.
    #[error("Quote response missing field: {0}")]
    MissingField(&'static str),

    /// Network or timeout failure before a response arrived.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Result type alias for fetch operations
pub type FetchResult<T> = std::result::Result<T, FetchError>;
