//! Command line client for the scorefeed leaderboard.
//!
//! Drives the feed controller with synthetic visibility triggers (one
//! whenever the controller goes idle) until the feed exhausts, then
//! prints the merged leaderboard. Rendering is deliberately plain; this
//! binary is the demo surface for the feed machinery, not a UI.

mod config;
mod output;

use anyhow::Context;
use clap::{Parser, Subcommand};
use scorefeed_core::{FeedConfig, FeedController, TriggerOutcome};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Consecutive failed fetches tolerated before the CLI gives up. The
/// controller itself never retries; each attempt here is a fresh trigger.
const MAX_CONSECUTIVE_FAILURES: u32 = 3;

#[derive(Debug, Parser)]
#[command(
    name = "scorefeedctl",
    version,
    about = "Incremental client for the benchmark scores leaderboard"
)]
struct Cli {
    /// Scores server base URL (overrides the config file)
    #[arg(long)]
    server_url: Option<String>,

    /// Records per page (overrides the config file)
    #[arg(long)]
    page_size: Option<usize>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Fetch the leaderboard page by page and print it
    Fetch {
        /// Stop after this many pages even if more data remains
        #[arg(long)]
        max_pages: Option<u32>,

        /// Emit the records as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print the active configuration
    Config {
        /// Persist the active configuration (including overrides) to disk
        #[arg(long)]
        save: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let mut feed_config = config::load();
    if let Some(url) = cli.server_url {
        feed_config.server_url = url;
    }
    if let Some(size) = cli.page_size {
        anyhow::ensure!(size >= 1, "--page-size must be at least 1");
        feed_config.page_size = size;
    }

    match cli.command {
        Command::Fetch { max_pages, json } => fetch(feed_config, max_pages, json).await,
        Command::Config { save } => show_config(&feed_config, save),
    }
}

async fn fetch(config: FeedConfig, max_pages: Option<u32>, json: bool) -> anyhow::Result<()> {
    let controller = FeedController::from_config(&config)
        .with_context(|| format!("cannot build a client for '{}'", config.server_url))?;

    let mut failures = 0u32;
    loop {
        match controller.handle_trigger().await {
            TriggerOutcome::Fetched { .. } => {
                failures = 0;
                if let Some(max) = max_pages
                    && controller.snapshot().last_page >= max
                {
                    break;
                }
            }
            TriggerOutcome::Exhausted => break,
            TriggerOutcome::Failed => {
                failures += 1;
                if failures >= MAX_CONSECUTIVE_FAILURES {
                    anyhow::bail!("giving up after {failures} consecutive failed fetches");
                }
            }
            TriggerOutcome::Busy | TriggerOutcome::Stale => {}
        }
        if !controller.has_more() {
            break;
        }
    }

    let snapshot = controller.snapshot();
    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot.records)?);
    } else {
        output::print_table(&snapshot.records);
        if let Some(stats) = controller.stats() {
            output::print_stats(&stats);
        }
    }
    Ok(())
}

fn show_config(config: &FeedConfig, save: bool) -> anyhow::Result<()> {
    match config::config_path() {
        Some(path) => println!("config file: {}", path.display()),
        None => println!("config file: <no config directory on this platform>"),
    }
    println!("{}", serde_json::to_string_pretty(config)?);
    if save {
        config::save(config)?;
        println!("saved");
    }
    Ok(())
}
