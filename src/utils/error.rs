use thiserror::Error;

/// Terminal outcome of one submission attempt. Every error ends exactly one
/// attempt; nothing is retried or logged away inside this crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("no base endpoint configured: set HELPBRIDGE_BASE_URL or pass one explicitly")]
    MissingEndpoint,

    #[error("network error: {0}")]
    TransportError(String),

    #[error("server responded with HTTP status {0}")]
    HttpError(u16),

    #[error("no internet connection")]
    NoConnectivity,

    #[error("request timed out")]
    Timeout,

    /// Reserved generic failure. No core path produces it; callers may use it
    /// to coerce failures from outside the taxonomy.
    #[error("ticket submission failed")]
    SubmissionFailed,
}

pub type Result<T> = std::result::Result<T, SubmissionError>;
