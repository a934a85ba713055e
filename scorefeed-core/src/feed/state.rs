//! Persistent feed state owned by the controller.

use scorefeed_model::ScoreRecord;

/// Cumulative state of the feed.
///
/// Mutated only by the controller in response to fetch completions.
/// Invariants:
/// - `records` holds no two entries with the same `id`, in first-seen
///   order across pages;
/// - `last_page` increases by exactly 1 on each accepted fetch;
/// - `has_more` transitions `true -> false` at most once per feed
///   generation and never reverts within one.
#[derive(Debug)]
pub struct FeedState {
    pub records: Vec<ScoreRecord>,
    pub last_page: u32,
    pub has_more: bool,
}

impl FeedState {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            last_page: 0,
            has_more: true,
        }
    }
}

impl Default for FeedState {
    fn default() -> Self {
        Self::new()
    }
}

/// Externally observable phase of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedPhase {
    /// No fetch outstanding; more data may exist.
    Idle,
    /// A fetch is outstanding.
    Fetching,
    /// A short page was seen; no further triggers produce fetches.
    Exhausted,
}
