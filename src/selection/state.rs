//! Selection state and its side effects

use crate::model::{Commit, FlatMessage, short_sha};

use super::{SelectReason, Transition, contains, reconcile, resolve_previous};

/// Receiver of selection side effects
pub trait SelectionSink {
    /// Write the new selection to persisted state (the shareable link)
    fn persist(&mut self, sha: Option<&str>);

    /// Report a recoverable problem to the user
    fn warn(&mut self, message: String);
}

/// What downstream rendering needs about the current selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub sha: String,
    pub previous_sha: Option<String>,
    /// Data file referenced by the selected commit's message
    pub file_name: Option<String>,
}

/// Current selection plus the last value written to persisted state
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    selected: Option<String>,
    /// Mirrors the persisted SHA; starts as the requested SHA from the link
    persisted: Option<String>,
}

impl SelectionState {
    /// Create state from the SHA requested by the persisted link
    pub fn new(requested: Option<&str>) -> Self {
        Self {
            selected: None,
            persisted: requested.filter(|s| !s.is_empty()).map(str::to_string),
        }
    }

    /// Currently selected SHA
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// SHA currently held by persisted state
    pub fn persisted(&self) -> Option<&str> {
        self.persisted.as_deref()
    }

    /// Reconcile against a newly loaded commit list and apply the result
    ///
    /// Calling this again with the same list is a no-op.
    pub fn on_commits_loaded(
        &mut self,
        commits: &[Commit],
        sink: &mut impl SelectionSink,
    ) -> Transition {
        let transition = reconcile(commits, self.persisted(), self.selected());

        match &transition {
            Transition::Clear => {
                self.selected = None;
            }
            Transition::Keep => {}
            Transition::Select { sha, reason } => {
                match reason {
                    SelectReason::Recovered { requested } => {
                        tracing::warn!(requested = %requested, fallback = %sha, "requested commit not found");
                        sink.warn(format!(
                            "Commit {} not found; reverted to most recent ({})",
                            short_sha(requested),
                            short_sha(sha)
                        ));
                    }
                    SelectReason::Requested | SelectReason::Latest => {
                        tracing::info!(sha = %sha, ?reason, "commit selected");
                    }
                }
                self.apply(sha, sink);
            }
        }

        transition
    }

    /// Select a commit picked by the user
    ///
    /// Returns `false` (and changes nothing) when `sha` is not in `commits`
    /// or is already selected.
    pub fn select(&mut self, commits: &[Commit], sha: &str, sink: &mut impl SelectionSink) -> bool {
        if self.selected() == Some(sha) || !contains(commits, sha) {
            return false;
        }
        tracing::debug!(sha = %sha, "commit picked");
        self.apply(sha, sink);
        true
    }

    /// Resolve selected SHA, its predecessor and the referenced file
    ///
    /// The message is only parsed when something is selected.
    pub fn resolve(&self, commits: &[Commit], preferred_file: Option<&str>) -> Option<Resolved> {
        let sha = self.selected()?;
        let commit = commits.iter().find(|c| c.sha == sha)?;
        let message = FlatMessage::parse(&commit.message);

        Some(Resolved {
            sha: sha.to_string(),
            previous_sha: resolve_previous(commits, sha).map(str::to_string),
            file_name: message.file_name(preferred_file).map(str::to_string),
        })
    }

    fn apply(&mut self, sha: &str, sink: &mut impl SelectionSink) {
        self.selected = Some(sha.to_string());
        if self.persisted() != Some(sha) {
            self.persisted = Some(sha.to_string());
            sink.persist(Some(sha));
        }
    }
}
