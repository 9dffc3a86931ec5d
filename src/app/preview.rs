//! Deferred file preview fetching
//!
//! Selection changes only record which preview is wanted. The fetch itself
//! happens on the next idle tick, so holding j/k does not issue a request
//! per keystroke.

use crate::model::FilePreview;
use crate::ui::widgets::PreviewContent;

use super::state::{App, PreviewCache, PreviewKey};

impl App {
    /// Preview the current selection calls for, if any
    fn wanted_preview(&self) -> Option<PreviewKey> {
        let resolved = self.resolved()?;
        Some(PreviewKey {
            sha: resolved.sha,
            file_name: resolved.file_name?,
        })
    }

    /// Record that the preview for the current selection is wanted
    pub(crate) fn schedule_preview(&mut self) {
        self.preview_scroll = 0;
        if !self.preview_enabled {
            self.preview_pending = None;
            return;
        }

        let wanted = self.wanted_preview();
        let cached = self
            .preview_cache
            .as_ref()
            .is_some_and(|c| Some(&c.key) == wanted.as_ref());
        self.preview_pending = if cached { None } else { wanted };
    }

    /// Is a preview fetch waiting for the idle tick?
    pub fn has_pending_preview(&self) -> bool {
        self.preview_pending.is_some()
    }

    /// Fetch the pending preview (called on idle)
    pub fn resolve_pending_preview(&mut self) {
        let Some(key) = self.preview_pending.take() else {
            return;
        };
        // Selection moved on since this was scheduled
        if self.wanted_preview().as_ref() != Some(&key) {
            return;
        }

        let previous_sha = self.resolved().and_then(|r| r.previous_sha);
        let repo = self.link.repo.clone();

        let result = match self.source.file_contents(&repo, &key.file_name, &key.sha) {
            Ok(contents) => {
                let previous_contents = previous_sha.as_deref().and_then(|prev| {
                    // Missing in the predecessor is normal for a new file
                    self.source
                        .file_contents(&repo, &key.file_name, prev)
                        .inspect_err(|e| tracing::debug!(error = %e, "no previous version"))
                        .ok()
                });
                Ok(FilePreview {
                    file_name: key.file_name.clone(),
                    sha: key.sha.clone(),
                    contents,
                    previous_sha,
                    previous_contents,
                })
            }
            Err(e) => {
                tracing::warn!(file = %key.file_name, sha = %key.sha, error = %e, "preview fetch failed");
                Err(e.to_string())
            }
        };

        self.preview_cache = Some(PreviewCache { key, result });
    }

    /// What the preview panel should show right now
    pub(crate) fn preview_content(&self) -> PreviewContent<'_> {
        let Some(sha) = self.selection.selected() else {
            return PreviewContent::NoSelection;
        };
        let Some(wanted) = self.wanted_preview() else {
            return PreviewContent::NoFile { sha };
        };

        match &self.preview_cache {
            Some(cache) if cache.key == wanted => match &cache.result {
                Ok(preview) => PreviewContent::Ready(preview),
                Err(error) => PreviewContent::Failed {
                    file_name: &cache.key.file_name,
                    error,
                },
            },
            _ => match &self.preview_pending {
                Some(pending) => PreviewContent::Loading {
                    file_name: &pending.file_name,
                },
                None => PreviewContent::NoSelection,
            },
        }
    }
}
