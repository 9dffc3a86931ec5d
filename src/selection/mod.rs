//! Commit selection
//!
//! Decides which commit is selected given a freshly fetched commit list
//! (newest-first), the SHA requested by the persisted link, and the current
//! selection. [`reconcile`] is a pure transition function; [`SelectionState`]
//! applies its result and forwards side effects (link updates, warnings)
//! to a [`SelectionSink`].

mod state;

pub use state::{Resolved, SelectionSink, SelectionState};

use crate::model::Commit;

/// Why a commit became selected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectReason {
    /// The requested SHA is in the list
    Requested,
    /// The requested SHA is not in the list; fell back to the newest commit
    Recovered { requested: String },
    /// Nothing requested; picked the newest commit
    Latest,
}

/// Result of reconciling a selection against a commit list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// The list is empty, so nothing can be selected
    Clear,
    /// The current selection is still in the list
    Keep,
    /// Select the given commit
    Select { sha: String, reason: SelectReason },
}

impl Transition {
    /// SHA selected by this transition, if it selects one
    pub fn selected_sha(&self) -> Option<&str> {
        match self {
            Transition::Select { sha, .. } => Some(sha),
            Transition::Clear | Transition::Keep => None,
        }
    }

    /// Whether applying this transition should emit a warning
    pub fn is_recovery(&self) -> bool {
        matches!(
            self,
            Transition::Select {
                reason: SelectReason::Recovered { .. },
                ..
            }
        )
    }
}

/// Reconcile the selection against a commit list
///
/// `commits` is ordered newest-first. Empty strings in `requested` and
/// `current` are treated as absent.
pub fn reconcile(commits: &[Commit], requested: Option<&str>, current: Option<&str>) -> Transition {
    let Some(latest) = commits.first() else {
        return Transition::Clear;
    };

    let requested = requested.filter(|s| !s.is_empty());
    let current = current.filter(|s| !s.is_empty());

    if let Some(current) = current
        && contains(commits, current)
    {
        return Transition::Keep;
    }

    match requested {
        Some(requested) if contains(commits, requested) => Transition::Select {
            sha: requested.to_string(),
            reason: SelectReason::Requested,
        },
        Some(requested) => Transition::Select {
            sha: latest.sha.clone(),
            reason: SelectReason::Recovered {
                requested: requested.to_string(),
            },
        },
        None => Transition::Select {
            sha: latest.sha.clone(),
            reason: SelectReason::Latest,
        },
    }
}

/// SHA of the commit right before `selected` (the next element newest-first)
///
/// `None` when `selected` is the oldest commit or is not in the list.
pub fn resolve_previous<'a>(commits: &'a [Commit], selected: &str) -> Option<&'a str> {
    let index = position(commits, selected)?;
    commits.get(index + 1).map(|c| c.sha.as_str())
}

/// Index of `sha` in `commits`
pub fn position(commits: &[Commit], sha: &str) -> Option<usize> {
    commits.iter().position(|c| c.sha == sha)
}

/// Whether `sha` names a commit in `commits`
pub fn contains(commits: &[Commit], sha: &str) -> bool {
    position(commits, sha).is_some()
}

/// First commit whose SHA starts with `prefix` (case-insensitive)
pub fn find_by_prefix<'a>(commits: &'a [Commit], prefix: &str) -> Option<&'a Commit> {
    let prefix = prefix.trim().to_ascii_lowercase();
    if prefix.is_empty() {
        return None;
    }
    commits
        .iter()
        .find(|c| c.sha.to_ascii_lowercase().starts_with(&prefix))
}
