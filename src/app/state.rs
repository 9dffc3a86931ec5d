//! Application state and view management

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};

use crate::config::FlatviewConfig;
use crate::github::{CommitSource, GhExecutor};
use crate::model::{FilePreview, FlatLink, Notification};
use crate::selection::{Resolved, SelectionSink, SelectionState};
use crate::ui::views::CommitsView;

use super::refresh::FetchEvent;

/// Available views in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Commits,
    Help,
}

/// Identifies one preview: a file at a commit
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PreviewKey {
    pub sha: String,
    pub file_name: String,
}

/// Cached preview to avoid refetching on every render
#[derive(Debug)]
pub(crate) struct PreviewCache {
    pub key: PreviewKey,
    pub result: Result<FilePreview, String>,
}

/// Background fetch bookkeeping
#[derive(Debug)]
pub(crate) struct Fetcher {
    pub tx: Sender<FetchEvent>,
    pub rx: Receiver<FetchEvent>,
    /// Bumped for every request; only the newest request's result is applied
    pub generation: u64,
    pub in_flight: bool,
    /// The running request was started by the user (Ctrl+L)
    pub user_requested: bool,
}

impl Fetcher {
    fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            tx,
            rx,
            generation: 0,
            in_flight: false,
            user_requested: false,
        }
    }
}

/// Routes selection side effects into the link and the notification slot
pub(crate) struct AppSink<'a> {
    pub link: &'a mut FlatLink,
    pub notification: &'a mut Option<Notification>,
}

impl SelectionSink for AppSink<'_> {
    fn persist(&mut self, sha: Option<&str>) {
        self.link.set_sha(sha);
    }

    fn warn(&mut self, message: String) {
        *self.notification = Some(Notification::warning(message));
    }
}

/// The main application state
pub struct App {
    /// Is the application running?
    pub running: bool,
    /// Current view
    pub current_view: View,
    /// Commit list view state
    pub commits_view: CommitsView,
    /// Selected commit
    pub selection: SelectionState,
    /// Shareable link (persisted selection state)
    pub link: FlatLink,
    /// Commit list and file contents provider
    pub(crate) source: Arc<dyn CommitSource>,
    /// Error message to display
    pub error_message: Option<String>,
    /// Notification to display (success/info/warning messages)
    pub notification: Option<Notification>,
    /// Preview pane enabled (p key toggle)
    pub preview_enabled: bool,
    /// Cached preview content
    pub(crate) preview_cache: Option<PreviewCache>,
    /// Pending preview fetch (deferred to idle tick)
    pub(crate) preview_pending: Option<PreviewKey>,
    /// Preview scroll offset
    pub(crate) preview_scroll: u16,
    /// Help panel scroll offset
    pub(crate) help_scroll: u16,
    pub(crate) fetcher: Fetcher,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("running", &self.running)
            .field("current_view", &self.current_view)
            .field("selection", &self.selection)
            .field("link", &self.link)
            .field("error_message", &self.error_message)
            .finish_non_exhaustive()
    }
}

impl App {
    /// Construct an App that talks to GitHub through `gh`
    ///
    /// The initial commit fetch starts immediately.
    pub fn new(link: FlatLink, config: &FlatviewConfig) -> Self {
        let source = Arc::new(GhExecutor::from_config(&config.github));
        Self::with_source(link, config.display.preview, source)
    }

    /// Construct an App with an explicit commit source
    pub fn with_source(link: FlatLink, preview_enabled: bool, source: Arc<dyn CommitSource>) -> Self {
        let mut app = Self {
            running: true,
            current_view: View::Commits,
            commits_view: CommitsView::new(link.repo.to_string()),
            selection: SelectionState::new(link.sha.as_deref()),
            link,
            source,
            error_message: None,
            notification: None,
            preview_enabled,
            preview_cache: None,
            preview_pending: None,
            preview_scroll: 0,
            help_scroll: 0,
            fetcher: Fetcher::new(),
        };

        // Load initial commit list
        app.refresh_commits();

        app
    }

    /// Selected SHA, its predecessor and the data file to show
    pub fn resolved(&self) -> Option<Resolved> {
        self.selection
            .resolve(&self.commits_view.commits, self.link.filename.as_deref())
    }

    /// Link to share: the persisted link with the shown file filled in
    pub fn shareable_link(&self) -> FlatLink {
        let mut link = self.link.clone();
        if link.filename.is_none()
            && let Some(file_name) = self.resolved().and_then(|r| r.file_name)
        {
            link.set_filename(Some(&file_name));
        }
        link
    }

    /// Navigate to a specific view
    pub(crate) fn go_to_view(&mut self, view: View) {
        if self.current_view != view {
            if view == View::Help {
                self.help_scroll = 0;
            }
            self.current_view = view;
        }
    }

    /// Go back to the commit list
    pub(crate) fn go_back(&mut self) {
        self.current_view = View::Commits;
    }

    /// Set running to false to quit the application.
    pub(crate) fn quit(&mut self) {
        self.running = false;
    }

    /// Clear expired notification
    pub fn clear_expired_notification(&mut self) {
        if let Some(ref notification) = self.notification
            && notification.is_expired()
        {
            self.notification = None;
        }
    }
}
