//! Commits View - the repository's commit history
//!
//! The main view of flatview. The cursor always mirrors the selected commit:
//! moving it asks the app to select the commit under it.

mod input;
mod render;

use crate::model::Commit;

/// Input mode for Commits View
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Normal navigation mode
    #[default]
    Normal,
    /// Typing a SHA prefix
    ShaInput,
}

/// Where the commit list stands
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ListStatus {
    /// Fetch in flight and nothing to show yet
    #[default]
    Loading,
    /// Fetch failed; the message is shown instead of the list
    Unavailable(String),
    /// `commits` holds the latest fetch result (possibly empty)
    Ready,
}

/// Actions that CommitsView can request from App
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitsAction {
    /// No action needed
    None,
    /// Select the commit with this SHA
    Select(String),
    /// Select the first commit matching this SHA prefix
    SubmitSha(String),
    /// Switch to the next data file of the selected commit
    NextFile,
    /// Copy the shareable link
    CopyLink,
    /// Toggle the preview panel
    TogglePreview,
}

/// Commits View state
#[derive(Debug, Default)]
pub struct CommitsView {
    /// Commits to display, newest first
    pub commits: Vec<Commit>,
    /// Index of the selected commit in `commits`
    pub selected_index: usize,
    /// Index of the selection's predecessor, if any
    pub previous_index: Option<usize>,
    /// Fetch status of the list
    pub status: ListStatus,
    /// Current input mode
    pub input_mode: InputMode,
    /// Input buffer for SHA entry
    pub input_buffer: String,
    /// Repository label for the title bar (`owner/name`)
    pub repo_label: String,
}

pub mod empty_text {
    pub const TITLE: &str = "No commits found.";
    pub const HINT: &str = "Flat commits appear here once the workflow has run.";
    pub const UNAVAILABLE: &str = "Commit list unavailable.";
    pub const RETRY_HINT: &str = "Press Ctrl+L to try again.";
}

impl CommitsView {
    /// Create a new CommitsView
    pub fn new(repo_label: impl Into<String>) -> Self {
        Self {
            repo_label: repo_label.into(),
            ..Self::default()
        }
    }

    /// Replace the commits with a fresh fetch result
    ///
    /// The cursor goes to the top; the app focuses the reconciled selection
    /// right after.
    pub fn set_commits(&mut self, commits: Vec<Commit>) {
        self.commits = commits;
        self.status = ListStatus::Ready;
        self.selected_index = 0;
        self.previous_index = None;
    }

    /// Mark the list as loading
    pub fn set_loading(&mut self) {
        self.status = ListStatus::Loading;
    }

    /// Mark the list as unavailable
    ///
    /// Commits from an earlier successful fetch stay displayed.
    pub fn set_unavailable(&mut self, message: impl Into<String>) {
        self.status = ListStatus::Unavailable(message.into());
    }

    /// Move the cursor to the commit with `sha`
    ///
    /// Also marks its predecessor. Unknown SHAs leave the cursor alone.
    pub fn focus(&mut self, sha: &str) {
        if let Some(index) = self.commits.iter().position(|c| c.sha == sha) {
            self.selected_index = index;
            self.previous_index = (index + 1 < self.commits.len()).then_some(index + 1);
        }
    }

    /// Get the commit under the cursor
    pub fn selected_commit(&self) -> Option<&Commit> {
        self.commits.get(self.selected_index)
    }

    /// Move cursor up (towards newer commits)
    pub fn move_up(&mut self) -> CommitsAction {
        if self.selected_index > 0 {
            self.select_index(self.selected_index - 1)
        } else {
            CommitsAction::None
        }
    }

    /// Move cursor down (towards older commits)
    pub fn move_down(&mut self) -> CommitsAction {
        if self.selected_index + 1 < self.commits.len() {
            self.select_index(self.selected_index + 1)
        } else {
            CommitsAction::None
        }
    }

    /// Move to the newest commit
    pub fn move_to_top(&mut self) -> CommitsAction {
        if self.commits.is_empty() || self.selected_index == 0 {
            return CommitsAction::None;
        }
        self.select_index(0)
    }

    /// Move to the oldest commit
    pub fn move_to_bottom(&mut self) -> CommitsAction {
        let last = self.commits.len().saturating_sub(1);
        if self.commits.is_empty() || self.selected_index == last {
            return CommitsAction::None;
        }
        self.select_index(last)
    }

    fn select_index(&mut self, index: usize) -> CommitsAction {
        match self.commits.get(index) {
            Some(commit) => {
                let sha = commit.sha.clone();
                self.focus(&sha);
                CommitsAction::Select(sha)
            }
            None => CommitsAction::None,
        }
    }

    /// Start SHA input mode
    pub fn start_sha_input(&mut self) {
        self.input_mode = InputMode::ShaInput;
        self.input_buffer.clear();
    }

    /// Cancel input mode
    pub fn cancel_input(&mut self) {
        self.input_mode = InputMode::Normal;
        self.input_buffer.clear();
    }
}
