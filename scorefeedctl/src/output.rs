//! Plain-text output for the fetched leaderboard.

use scorefeed_core::FeedStats;
use scorefeed_model::ScoreRecord;

pub fn print_table(records: &[ScoreRecord]) {
    if records.is_empty() {
        println!("no submissions yet");
        return;
    }
    println!(
        "{:>4}  {:<14} {:>10}  {:<28} {}",
        "rank", "user", "gflops", "configuration", "submitted"
    );
    for (index, record) in records.iter().enumerate() {
        let configuration = format!(
            "N={} NB={} P={} Q={}",
            record.problem_size_n, record.block_size_nb, record.p, record.q
        );
        println!(
            "{:>4}  {:<14} {:>10.2}  {:<28} {}",
            index + 1,
            record.user_id,
            record.gflops,
            configuration,
            humanize_timestamp(&record.submitted_at),
        );
    }
}

pub fn print_stats(stats: &FeedStats) {
    println!();
    println!(
        "top {:.2} gflops | mean {:.2} gflops | {} submissions",
        stats.top_gflops, stats.mean_gflops, stats.submissions
    );
}

/// Render the server's ISO-8601 timestamp in local time; the raw string
/// is shown as-is when it does not parse.
fn humanize_timestamp(raw: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|dt| {
            dt.with_timezone(&chrono::Local)
                .format("%Y-%m-%d %H:%M")
                .to_string()
        })
        .unwrap_or_else(|_| raw.to_string())
}
