//! Summary statistics over the merged feed.

use scorefeed_model::ScoreRecord;

/// Aggregates shown alongside the leaderboard: best run, mean
/// performance, and submission count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeedStats {
    pub top_gflops: f64,
    pub mean_gflops: f64,
    pub submissions: usize,
}

impl FeedStats {
    /// Compute stats over the records merged so far; `None` for an empty
    /// feed.
    pub fn from_records(records: &[ScoreRecord]) -> Option<Self> {
        if records.is_empty() {
            return None;
        }
        let sum: f64 = records.iter().map(|r| r.gflops).sum();
        let top = records
            .iter()
            .map(|r| r.gflops)
            .fold(f64::NEG_INFINITY, f64::max);
        Some(Self {
            top_gflops: top,
            mean_gflops: sum / records.len() as f64,
            submissions: records.len(),
        })
    }
}
