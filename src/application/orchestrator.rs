//! Dashboard Orchestrator
//!
//! Owns the poll loop: fetch the snapshot and outbox, build the page, write
//! the document. One tick is a fully independent, idempotent cycle; a slow
//! tick is never cancelled and the last write wins on the output file.
//!
//! Failure tiers:
//! 1. Snapshot fetch/parse failure replaces the whole page with the offline
//!    message. Nothing partial is rendered.
//! 2. Outbox index failure only empties the rituals region; a single failed
//!    post is logged and skipped without aborting the rest.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::domain::{format, Snapshot};
use crate::ports::feed::{OutboxFeed, SnapshotFeed};
use crate::view::overview::{self, OverviewOptions};
use crate::view::{region, rituals, Page, OFFLINE_MESSAGE};

#[derive(Debug, Error)]
pub enum OrchestratorError {
    #[error("Failed to write dashboard: {0}")]
    WriteError(#[from] std::io::Error),
}

/// What a tick produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Snapshot read fine; page rendered (outbox may still be empty-state).
    Rendered,
    /// Snapshot unreachable; offline page written.
    Offline,
}

/// Status snapshot of the orchestrator
#[derive(Debug, Clone)]
pub struct OrchestratorStatus {
    pub is_running: bool,
    pub ticks: u64,
    pub last_outcome: Option<TickOutcome>,
}

/// Coordinates feeds, views, and the output document.
pub struct DashboardOrchestrator<S, O> {
    snapshot_feed: Arc<S>,
    outbox_feed: Arc<O>,
    output: PathBuf,
    overview_opts: OverviewOptions,
    max_posts: usize,
    poll_interval: Duration,
    is_running: Arc<RwLock<bool>>,
    ticks: Arc<RwLock<u64>>,
    last_outcome: Arc<RwLock<Option<TickOutcome>>>,
}

impl<S: SnapshotFeed, O: OutboxFeed> DashboardOrchestrator<S, O> {
    pub fn new(snapshot_feed: S, outbox_feed: O, output: PathBuf) -> Self {
        Self {
            snapshot_feed: Arc::new(snapshot_feed),
            outbox_feed: Arc::new(outbox_feed),
            output,
            overview_opts: OverviewOptions::default(),
            max_posts: 20,
            poll_interval: Duration::from_secs(60),
            is_running: Arc::new(RwLock::new(false)),
            ticks: Arc::new(RwLock::new(0)),
            last_outcome: Arc::new(RwLock::new(None)),
        }
    }

    /// Set custom poll interval
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Set overview render options
    pub fn with_overview_options(mut self, opts: OverviewOptions) -> Self {
        self.overview_opts = opts;
        self
    }

    /// Cap the number of posts fetched per tick
    pub fn with_max_posts(mut self, max_posts: usize) -> Self {
        self.max_posts = max_posts;
        self
    }

    /// Run the poll loop: one tick immediately, then one per interval until
    /// stopped. A failed tick logs and waits for the next interval.
    pub async fn run(&self) -> Result<(), OrchestratorError> {
        *self.is_running.write().await = true;

        tracing::info!(
            "Starting dashboard loop - output: {}, interval: {:?}",
            self.output.display(),
            self.poll_interval
        );

        while *self.is_running.read().await {
            if let Err(e) = self.tick().await {
                tracing::error!("Tick error: {}", e);
                // Keep polling; the next tick starts from scratch
            }
            tokio::time::sleep(self.poll_interval).await;
        }

        tracing::info!("Dashboard loop stopped");
        Ok(())
    }

    /// Execute one render cycle and write the document.
    pub async fn tick(&self) -> Result<TickOutcome, OrchestratorError> {
        let (page, outcome) = self.render_page().await;

        if let Some(parent) = self.output.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        tokio::fs::write(&self.output, page.to_html()).await?;

        *self.ticks.write().await += 1;
        *self.last_outcome.write().await = Some(outcome);
        Ok(outcome)
    }

    /// Build the page for the current state of the feeds without writing it.
    pub async fn render_page(&self) -> (Page, TickOutcome) {
        let mut page = Page::new();

        let root = match self.snapshot_feed.fetch_snapshot().await {
            Ok(root) => root,
            Err(e) => {
                tracing::error!("Snapshot fetch failed: {}", e);
                page.set_offline(OFFLINE_MESSAGE);
                return (page, TickOutcome::Offline);
            }
        };

        let snapshot = Snapshot::new(root);
        page.set(region::UPDATED, format::unix_date(Utc::now().timestamp()));
        overview::apply(&mut page, &snapshot, &self.overview_opts);

        match self.fetch_posts().await {
            Some(posts) => rituals::apply(&mut page, &posts),
            None => rituals::apply_empty(&mut page),
        }

        (page, TickOutcome::Rendered)
    }

    /// Fetch the outbox posts, isolating all failures to this source.
    /// `None` means the index itself was unreachable.
    async fn fetch_posts(&self) -> Option<Vec<(String, String)>> {
        let names = match self.outbox_feed.fetch_index().await {
            Ok(names) => names,
            Err(e) => {
                tracing::warn!("Outbox index fetch failed: {}", e);
                return None;
            }
        };

        let mut posts = Vec::with_capacity(names.len().min(self.max_posts));
        for name in names.into_iter().take(self.max_posts) {
            match self.outbox_feed.fetch_post(&name).await {
                Ok(body) => posts.push((name, body)),
                Err(e) => {
                    tracing::warn!("Skipping post {}: {}", name, e);
                }
            }
        }
        Some(posts)
    }

    /// Stop the poll loop after the current tick.
    pub async fn stop(&self) {
        *self.is_running.write().await = false;
        tracing::info!("Stop signal sent to dashboard loop");
    }

    /// Get current status snapshot
    pub async fn status(&self) -> OrchestratorStatus {
        OrchestratorStatus {
            is_running: *self.is_running.read().await,
            ticks: *self.ticks.read().await,
            last_outcome: *self.last_outcome.read().await,
        }
    }
}

impl<S, O> Clone for DashboardOrchestrator<S, O> {
    fn clone(&self) -> Self {
        Self {
            snapshot_feed: Arc::clone(&self.snapshot_feed),
            outbox_feed: Arc::clone(&self.outbox_feed),
            output: self.output.clone(),
            overview_opts: self.overview_opts.clone(),
            max_posts: self.max_posts,
            poll_interval: self.poll_interval,
            is_running: Arc::clone(&self.is_running),
            ticks: Arc::clone(&self.ticks),
            last_outcome: Arc::clone(&self.last_outcome),
        }
    }
}
