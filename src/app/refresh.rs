//! Commit list fetching and selection reconciliation
//!
//! Fetches run on a worker thread. Each request carries a generation number
//! and only the newest request's result is applied; a slow response that
//! arrives after a newer request was issued is dropped.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::github::GithubError;
use crate::model::{Commit, Notification};
use crate::selection::Transition;

use super::state::{App, AppSink};

/// Result of one background fetch
#[derive(Debug)]
pub(crate) struct FetchEvent {
    pub generation: u64,
    pub result: Result<Vec<Commit>, GithubError>,
}

impl App {
    /// Start fetching the commit list in the background
    ///
    /// Any fetch still in flight is superseded.
    pub fn refresh_commits(&mut self) {
        self.fetcher.generation += 1;
        self.fetcher.in_flight = true;
        self.fetcher.user_requested = false;
        let generation = self.fetcher.generation;

        if self.commits_view.commits.is_empty() {
            self.commits_view.set_loading();
        }

        let tx = self.fetcher.tx.clone();
        let source = Arc::clone(&self.source);
        let repo = self.link.repo.clone();

        tracing::debug!(generation, repo = %repo, "fetching commits");
        thread::spawn(move || {
            let result = source.list_commits(&repo);
            // Receiver is gone only when the app has shut down
            let _ = tx.send(FetchEvent { generation, result });
        });
    }

    /// Refetch on user request (Ctrl+L)
    pub(crate) fn refresh_by_user(&mut self) {
        self.refresh_commits();
        self.fetcher.user_requested = true;
        self.notification = Some(Notification::info("Refetching commits…"));
    }

    /// Is a fetch in flight?
    pub fn is_loading(&self) -> bool {
        self.fetcher.in_flight
    }

    /// Apply any finished fetches without blocking
    ///
    /// Returns `true` if the newest fetch finished.
    pub fn poll_fetch(&mut self) -> bool {
        let mut applied = false;
        while let Ok(event) = self.fetcher.rx.try_recv() {
            applied |= self.on_fetch_event(event);
        }
        applied
    }

    /// Block until the newest fetch finishes or `timeout` elapses
    ///
    /// Returns `true` if it finished.
    pub fn wait_for_fetch(&mut self, timeout: Duration) -> bool {
        let deadline = std::time::Instant::now() + timeout;
        while self.fetcher.in_flight {
            let remaining = deadline.saturating_duration_since(std::time::Instant::now());
            if remaining.is_zero() {
                return false;
            }
            match self.fetcher.rx.recv_timeout(remaining) {
                Ok(event) => {
                    self.on_fetch_event(event);
                }
                Err(_) => return false,
            }
        }
        true
    }

    fn on_fetch_event(&mut self, event: FetchEvent) -> bool {
        if event.generation != self.fetcher.generation {
            tracing::debug!(
                generation = event.generation,
                current = self.fetcher.generation,
                "dropping superseded fetch result"
            );
            return false;
        }
        self.fetcher.in_flight = false;

        match event.result {
            Ok(commits) => {
                tracing::info!(count = commits.len(), "commits loaded");
                self.error_message = None;
                let transition = self.on_commits_loaded(commits);
                if std::mem::take(&mut self.fetcher.user_requested) {
                    self.notify_refreshed(transition.is_recovery());
                }
            }
            Err(e) => {
                // Selection and link stay as they were
                tracing::error!(error = %e, "failed to fetch commits");
                self.fetcher.user_requested = false;
                self.commits_view.set_unavailable(e.to_string());
                self.error_message = Some(format!("Failed to fetch commits: {}", e));
            }
        }
        true
    }

    /// Replace the commit list and reconcile the selection against it
    pub(crate) fn on_commits_loaded(&mut self, commits: Vec<Commit>) -> Transition {
        self.commits_view.set_commits(commits);

        let mut sink = AppSink {
            link: &mut self.link,
            notification: &mut self.notification,
        };
        let transition = self
            .selection
            .on_commits_loaded(&self.commits_view.commits, &mut sink);

        self.sync_cursor();
        self.schedule_preview();
        transition
    }

    /// Move the list cursor to the selected commit
    pub(crate) fn sync_cursor(&mut self) {
        if let Some(sha) = self.selection.selected() {
            let sha = sha.to_string();
            self.commits_view.focus(&sha);
        }
    }

    /// Report a finished user refresh
    ///
    /// A warning raised by this refresh's reconciliation stays; anything
    /// older is replaced.
    fn notify_refreshed(&mut self, recovered: bool) {
        if !recovered {
            let count = self.commits_view.commits.len();
            self.notification = Some(Notification::success(format!(
                "Refetched ({} commits)",
                count
            )));
        }
    }
}
