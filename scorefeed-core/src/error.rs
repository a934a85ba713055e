//! Error types for the feed machinery.

/// Errors produced while fetching or decoding a scores page.
///
/// Every variant is recoverable at the controller boundary: feed state is
/// left untouched, the fetch guard is released, and the next visibility
/// trigger retries the same page.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// Transport-level failure, including timeouts.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The scores endpoint answered with a non-success status.
    #[error("scores endpoint returned {0}")]
    Status(reqwest::StatusCode),

    /// The response body was not the expected bare JSON array of records.
    #[error("malformed scores payload: {0}")]
    Parse(#[from] serde_json::Error),

    /// The configured server URL could not be parsed.
    #[error("invalid server url: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
}
