//! Merging fetched pages into the cumulative record list.

use std::collections::HashSet;

use scorefeed_model::{ScorePage, ScoreRecord};

/// Fold a fetched page into `existing`, returning how many records were
/// admitted.
///
/// Page 1 replaces the list verbatim (the refresh path). Later pages
/// append every record whose `id` has not been seen, preserving the
/// page's internal order among admitted records; previously admitted
/// records are never reordered or removed. Adjacent pages can overlap
/// when submissions land between fetches and shift the ranking window,
/// which is why membership is checked per record rather than assuming
/// disjoint pages.
pub fn merge_page(existing: &mut Vec<ScoreRecord>, page: ScorePage) -> usize {
    if page.number <= 1 {
        let admitted = page.records.len();
        *existing = page.records;
        return admitted;
    }

    let mut seen: HashSet<String> = existing.iter().map(|r| r.id.clone()).collect();
    let mut admitted = 0;
    for record in page.records {
        if seen.insert(record.id.clone()) {
            existing.push(record);
            admitted += 1;
        }
    }
    admitted
}
