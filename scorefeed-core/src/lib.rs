//! Incremental paginated feed machinery for the scorefeed client.
//!
//! The scores API serves a ranked leaderboard through limit/offset pages.
//! This crate turns a stream of visibility triggers (the user scrolling
//! near the end of the rendered list) into a single deduplicated,
//! monotonically-growing record list:
//!
//! - [`client`] issues one paginated request at a time and parses the
//!   response;
//! - [`feed::merge`] folds each page into the cumulative list, dropping
//!   already-seen identifiers;
//! - [`feed::guard`] enforces at most one in-flight fetch;
//! - [`feed::controller`] owns the state machine tying the above
//!   together and exposes read-only snapshots to collaborators.
//!
//! Rendering, theming, and the visibility sensor itself live outside this
//! crate; the sensor is consumed as the sending half of a channel.

pub mod client;
pub mod config;
pub mod error;
pub mod feed;

pub use client::{HttpScoresClient, ScoresApi};
pub use config::FeedConfig;
pub use error::FeedError;
pub use feed::controller::{FeedController, FeedSnapshot, TriggerOutcome};
pub use feed::guard::{FetchGuard, FetchPermit};
pub use feed::state::FeedPhase;
pub use feed::stats::FeedStats;
