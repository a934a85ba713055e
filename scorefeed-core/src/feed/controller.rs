//! Feed controller: turns visibility triggers into merged pages.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use scorefeed_model::ScoreRecord;
use tokio::sync::mpsc;
use tracing::{debug, info, trace, warn};

use crate::client::{HttpScoresClient, ScoresApi};
use crate::config::FeedConfig;
use crate::error::FeedError;
use crate::feed::guard::FetchGuard;
use crate::feed::merge::merge_page;
use crate::feed::state::{FeedPhase, FeedState};
use crate::feed::stats::FeedStats;

/// What a single trigger amounted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// A page was fetched and merged; `admitted` records were new.
    Fetched { admitted: usize },
    /// The feed is exhausted; no fetch was issued.
    Exhausted,
    /// Another fetch was in flight; the trigger was dropped, not queued.
    Busy,
    /// The fetch failed; state is unchanged and a later trigger retries
    /// the same page.
    Failed,
    /// The fetch completed after a refresh superseded its generation and
    /// was discarded.
    Stale,
}

/// Read-only view of the feed handed to collaborators.
///
/// Collaborators only ever read; they never mutate feed state.
#[derive(Debug, Clone)]
pub struct FeedSnapshot {
    pub records: Vec<ScoreRecord>,
    pub last_page: u32,
    pub has_more: bool,
}

/// Owns the feed state machine.
///
/// One controller services one leaderboard view. All mutation funnels
/// through fetch completions; the visibility sensor only supplies
/// triggers (see [`FeedController::run`]). Pages are requested strictly
/// in increasing order because the guard rejects overlap and each fetch
/// targets `last_page + 1`.
pub struct FeedController {
    api: Arc<dyn ScoresApi>,
    page_size: usize,
    state: Mutex<FeedState>,
    guard: FetchGuard,
    // Bumped by refresh; a completion whose captured generation no longer
    // matches is discarded instead of applied (stale-response guard).
    generation: AtomicU64,
}

impl std::fmt::Debug for FeedController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedController")
            .field("page_size", &self.page_size)
            .field("in_flight", &self.guard.is_in_flight())
            .field("generation", &self.generation.load(Ordering::Relaxed))
            .finish()
    }
}

impl FeedController {
    /// Create a controller over an arbitrary [`ScoresApi`] implementation.
    pub fn new(api: Arc<dyn ScoresApi>, page_size: usize) -> Self {
        debug_assert!(page_size >= 1, "page size must be positive");
        Self {
            api,
            page_size,
            state: Mutex::new(FeedState::new()),
            guard: FetchGuard::new(),
            generation: AtomicU64::new(0),
        }
    }

    /// Create a controller backed by the HTTP scores client.
    pub fn from_config(config: &FeedConfig) -> Result<Self, FeedError> {
        let client = HttpScoresClient::new(config)?;
        Ok(Self::new(Arc::new(client), config.page_size))
    }

    /// Service one visibility trigger.
    ///
    /// Ignored while exhausted or while a fetch is outstanding; otherwise
    /// fetches `last_page + 1` and applies the outcome. Fetch errors are
    /// recovered here: logged, state untouched, guard released.
    pub async fn handle_trigger(&self) -> TriggerOutcome {
        if !self.lock_state().has_more {
            return TriggerOutcome::Exhausted;
        }
        let Some(_permit) = self.guard.try_acquire() else {
            trace!("fetch already in flight, trigger dropped");
            return TriggerOutcome::Busy;
        };
        // Re-read under the permit: the pre-check above raced with any
        // completing fetch, this read cannot.
        let (page_number, generation) = {
            let state = self.lock_state();
            if !state.has_more {
                return TriggerOutcome::Exhausted;
            }
            (state.last_page + 1, self.generation.load(Ordering::Acquire))
        };

        match self.api.fetch_page(page_number, self.page_size).await {
            Ok(page) => self.apply_page(generation, page),
            Err(err) => {
                warn!(page = page_number, error = %err, "scores fetch failed; feed unchanged");
                TriggerOutcome::Failed
            }
        }
        // _permit drops here: released on every outcome.
    }

    /// The page-1 path: discard the current feed generation and reload.
    ///
    /// Bumps the generation so an in-flight fetch is discarded on
    /// completion rather than merged into the reset state, then issues
    /// the page-1 fetch (which replaces all prior records on success).
    /// Returns [`TriggerOutcome::Busy`] when a fetch is still in flight;
    /// the reset has happened regardless, so the next trigger starts at
    /// page 1.
    pub async fn refresh(&self) -> TriggerOutcome {
        {
            let mut state = self.lock_state();
            self.generation.fetch_add(1, Ordering::AcqRel);
            state.last_page = 0;
            state.has_more = true;
            debug!("feed reset, reloading from page 1");
        }
        self.handle_trigger().await
    }

    /// Service triggers from the visibility sensor until the channel
    /// closes or the feed exhausts.
    ///
    /// The sensor is any producer on the sending half; a bounded channel
    /// keeps bursts of signals from piling up while a fetch is in flight.
    pub async fn run(&self, mut triggers: mpsc::Receiver<()>) {
        while let Some(()) = triggers.recv().await {
            match self.handle_trigger().await {
                TriggerOutcome::Exhausted => break,
                TriggerOutcome::Fetched { .. } if !self.has_more() => break,
                _ => {}
            }
        }
    }

    /// Clone-out view of the current records and completion flag.
    pub fn snapshot(&self) -> FeedSnapshot {
        let state = self.lock_state();
        FeedSnapshot {
            records: state.records.clone(),
            last_page: state.last_page,
            has_more: state.has_more,
        }
    }

    /// Summary statistics over the merged records, `None` when empty.
    pub fn stats(&self) -> Option<FeedStats> {
        FeedStats::from_records(&self.lock_state().records)
    }

    pub fn has_more(&self) -> bool {
        self.lock_state().has_more
    }

    /// Observable phase of the state machine.
    pub fn phase(&self) -> FeedPhase {
        if self.guard.is_in_flight() {
            FeedPhase::Fetching
        } else if self.lock_state().has_more {
            FeedPhase::Idle
        } else {
            FeedPhase::Exhausted
        }
    }

    fn apply_page(&self, generation: u64, page: scorefeed_model::ScorePage) -> TriggerOutcome {
        let mut state = self.lock_state();
        if self.generation.load(Ordering::Acquire) != generation {
            debug!(
                page = page.number,
                "discarding page from a superseded feed generation"
            );
            return TriggerOutcome::Stale;
        }

        let number = page.number;
        let last = page.is_last();
        let admitted = merge_page(&mut state.records, page);
        state.last_page = number;
        if last {
            state.has_more = false;
            info!(total = state.records.len(), "score feed exhausted");
        } else {
            debug!(
                page = number,
                admitted,
                total = state.records.len(),
                "page merged"
            );
        }
        TriggerOutcome::Fetched { admitted }
    }

    fn lock_state(&self) -> MutexGuard<'_, FeedState> {
        self.state.lock().expect("feed state lock poisoned")
    }
}
