//! Feed configuration.

use scorefeed_model::DEFAULT_PAGE_SIZE;
use serde::{Deserialize, Serialize};

/// Settings the feed machinery is constructed from.
///
/// Persistence lives with the consumer (`scorefeedctl` keeps this as a
/// JSON file under the platform config directory); the core only defines
/// the shape and the defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Base URL of the scores server. A missing scheme is tolerated and
    /// normalized to `http://` by the client constructor.
    pub server_url: String,
    /// Records requested per page. Must be at least 1; the exhaustion
    /// check is relative to this value.
    pub page_size: usize,
    /// Client-wide request timeout. No retry or backoff exists beyond
    /// this; failed fetches wait for the next visibility trigger.
    pub request_timeout_secs: u64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            server_url: "http://localhost:8080".to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            request_timeout_secs: 30,
        }
    }
}
