use ::scraper::error::SelectorErrorKind;
use chrono::{DateTime, Utc};

/// All errors that can occur while fetching or preparing match statistics.
#[derive(thiserror::Error, Debug)]
pub enum StatsError {
    /// HTTP request failed (network, DNS, TLS, timeout, etc.).
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// Server returned a non-success HTTP status code.
    #[error("unexpected status {status} for {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Failed to read the response body as text.
    #[error("failed to read response body from {url}: {source}")]
    ResponseBody {
        url: String,
        source: reqwest::Error,
    },

    /// The response body was not the JSON document we expected.
    #[error("malformed json from {url}: {source}")]
    Json {
        url: String,
        source: serde_json::Error,
    },

    /// A CSS selector string could not be parsed.
    #[error("invalid CSS selector: {0}")]
    Selector(String),

    /// An environment override could not be interpreted.
    #[error("invalid configuration for {key}: {message}")]
    Config { key: &'static str, message: String },

    /// A date filter whose start lies after its end.
    #[error("invalid date range: {start} is after {end}")]
    InvalidDateRange {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
}

impl<'a> From<SelectorErrorKind<'a>> for StatsError {
    fn from(err: SelectorErrorKind<'a>) -> Self {
        StatsError::Selector(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, StatsError>;
