//! Pages of records returned by a single limit/offset fetch.

use crate::record::ScoreRecord;

/// Page size requested when no override is configured.
///
/// Matches the server's default leaderboard window; the exhaustion check
/// compares against whatever size was actually requested, so overriding
/// this is safe.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// The ordered records returned by one fetch, together with the page
/// number and the page size used to request it.
///
/// Pages are transient: they exist between fetch completion and the merge
/// into the cumulative record list, and are not retained afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ScorePage {
    /// Records in server rank order. May be empty.
    pub records: Vec<ScoreRecord>,
    /// 1-based page number this fetch targeted.
    pub number: u32,
    /// Page size used for the request; the exhaustion signal is relative
    /// to this value, not to [`DEFAULT_PAGE_SIZE`].
    pub size: usize,
}

impl ScorePage {
    /// Assemble a page from a fetch result. `number` is 1-based and `size`
    /// must be the size the request was issued with.
    pub fn new(records: Vec<ScoreRecord>, number: u32, size: usize) -> Self {
        debug_assert!(number >= 1, "page numbers are 1-based");
        debug_assert!(size >= 1, "page size must be positive");
        Self {
            records,
            number,
            size,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether this page is the exhaustion signal.
    ///
    /// The server returns full pages until the data runs out, and exposes
    /// no total count; a short page (zero included) is the only signal
    /// that no further pages exist. A total that is an exact multiple of
    /// the page size therefore costs one extra empty-page round trip.
    pub fn is_last(&self) -> bool {
        self.records.len() < self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str) -> ScoreRecord {
        ScoreRecord {
            id: id.to_string(),
            user_id: format!("user-{id}"),
            gflops: 100.0,
            problem_size_n: 10_000,
            block_size_nb: 192,
            p: 2,
            q: 2,
            submitted_at: "2026-05-01T12:00:00Z".to_string(),
        }
    }

    #[test]
    fn full_page_is_not_last() {
        let page = ScorePage::new((0..20).map(|i| record(&i.to_string())).collect(), 1, 20);
        assert!(!page.is_last());
    }

    #[test]
    fn short_page_is_last() {
        let page = ScorePage::new((0..15).map(|i| record(&i.to_string())).collect(), 2, 20);
        assert!(page.is_last());
    }

    #[test]
    fn empty_page_is_last() {
        let page = ScorePage::new(Vec::new(), 1, 20);
        assert!(page.is_last());
        assert!(page.is_empty());
        assert_eq!(page.len(), 0);
    }
}
