// src/error.rs
use thiserror::Error;

/// Why one candidate page produced no text. Recovered inside the fetcher.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("request timed out")]
    Timeout,

    #[error("HTTP {0}")]
    Status(u16),

    #[error("forbidden (403) for both user agents")]
    Rejected,

    #[error("empty body")]
    EmptyBody,
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FetchError::Timeout
        } else {
            FetchError::Transport(e.to_string())
        }
    }
}

/// Why the live phase of an audit was abandoned. Never fatal: the audit
/// falls back to the baseline catalogue.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AuditError {
    #[error("invalid site URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("HTTP client unavailable: {0}")]
    Client(String),

    #[error("none of the {attempted} candidate pages could be fetched")]
    NoPages { attempted: usize },
}
