//! HTTP client for the external scores API.

use std::time::Duration;

use async_trait::async_trait;
use scorefeed_model::{ScorePage, ScoreRecord};
use tracing::debug;

use crate::config::FeedConfig;
use crate::error::FeedError;

/// Route serving the ranked leaderboard window.
pub const SCORES_PATH: &str = "/api/v1/scores";

/// The paginated scores endpoint, as consumed by the feed controller.
///
/// `page` is 1-based; implementations translate it to the wire's
/// limit/offset pair. An empty page is a valid, non-error result. The
/// trait is the seam the controller is tested through.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ScoresApi: Send + Sync {
    /// Fetch one page of the leaderboard. Must not retry internally;
    /// retry policy belongs to the caller.
    async fn fetch_page(&self, page: u32, page_size: usize) -> Result<ScorePage, FeedError>;
}

/// [`ScoresApi`] implementation backed by a shared [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct HttpScoresClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpScoresClient {
    /// Create a client for the configured server.
    ///
    /// The base URL is normalized before validation: a missing scheme
    /// gets `http://` prepended and a trailing slash is trimmed, since
    /// bare `host:port` values are common in hand-edited configs.
    pub fn new(config: &FeedConfig) -> Result<Self, FeedError> {
        let base_url = normalize_base_url(&config.server_url);
        url::Url::parse(&base_url)?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .expect("failed to build HTTP client");

        Ok(Self { client, base_url })
    }

    /// Normalized base URL this client issues requests against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("http://{trimmed}")
    }
}

#[async_trait]
impl ScoresApi for HttpScoresClient {
    async fn fetch_page(&self, page: u32, page_size: usize) -> Result<ScorePage, FeedError> {
        debug_assert!(page >= 1, "page numbers are 1-based");
        let offset = u64::from(page.saturating_sub(1)) * page_size as u64;

        let url = format!("{}{}", self.base_url, SCORES_PATH);
        debug!(page, page_size, offset, "requesting scores page");

        let response = self
            .client
            .get(&url)
            .query(&[("limit", page_size as u64), ("offset", offset)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status(status));
        }

        // Decode via an owned body rather than `Response::json` so a
        // malformed payload surfaces as `Parse`, not as a reqwest error.
        let body = response.text().await?;
        let records: Vec<ScoreRecord> = serde_json::from_str(&body)?;

        Ok(ScorePage::new(records, page, page_size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_adds_scheme_and_trims_slash() {
        assert_eq!(
            normalize_base_url("localhost:8080/"),
            "http://localhost:8080"
        );
        assert_eq!(
            normalize_base_url("https://scores.example.org"),
            "https://scores.example.org"
        );
        assert_eq!(
            normalize_base_url("  http://scores.example.org/  "),
            "http://scores.example.org"
        );
    }

    #[test]
    fn rejects_unparseable_base_url() {
        let config = FeedConfig {
            server_url: "http://score board.example.org".to_string(),
            ..FeedConfig::default()
        };
        assert!(matches!(
            HttpScoresClient::new(&config),
            Err(FeedError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn sample_payload_decodes() {
        let body = r#"[
            {
                "id": "sub-01",
                "user_id": "s1100234",
                "gflops": 412.77,
                "problem_size_n": 40000,
                "block_size_nb": 192,
                "p": 4,
                "q": 4,
                "submitted_at": "2026-05-11T09:30:00Z"
            }
        ]"#;
        let records: Vec<ScoreRecord> = serde_json::from_str(body).expect("valid payload");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].user_id, "s1100234");
        assert_eq!(records[0].p, 4);
    }

    #[test]
    fn non_array_payload_is_a_parse_error() {
        let body = r#"{"error": "teapot"}"#;
        let parsed: Result<Vec<ScoreRecord>, _> = serde_json::from_str(body);
        assert!(parsed.is_err());
    }
}
