//! Benchmark submission records as served by the scores API.

/// One benchmark submission on the leaderboard.
///
/// Records are immutable once received. `submitted_at` is carried as the
/// server's ISO-8601 string; presentation layers may parse it, the feed
/// machinery never does.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreRecord {
    /// Opaque unique identifier assigned by the server.
    pub id: String,
    /// Identifier of the submitting user.
    pub user_id: String,
    /// Measured performance of the run.
    pub gflops: f64,
    /// Problem size N of the run.
    pub problem_size_n: u32,
    /// Block size NB of the run.
    pub block_size_nb: u32,
    /// Process grid rows.
    pub p: u32,
    /// Process grid columns.
    pub q: u32,
    /// Submission timestamp, ISO-8601, server format.
    pub submitted_at: String,
}
