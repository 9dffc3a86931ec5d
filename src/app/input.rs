//! Key event handling

use crossterm::event::KeyEvent;

use crate::keys;
use crate::model::{FlatMessage, Notification, short_sha};
use crate::selection::find_by_prefix;
use crate::ui::views::{CommitsAction, InputMode};

use super::clipboard;
use super::state::{App, AppSink, View};

impl App {
    /// Handle key events
    pub fn on_key_event(&mut self, key: KeyEvent) {
        // Ctrl+C quits from anywhere
        if keys::is_force_quit_key(&key) {
            self.quit();
            return;
        }

        // Any key dismisses the error banner
        self.error_message = None;

        // Typing a SHA: every key goes to the input buffer
        if self.current_view == View::Commits && self.commits_view.input_mode == InputMode::ShaInput
        {
            let action = self.commits_view.handle_key(key);
            self.handle_commits_action(action);
            return;
        }

        if keys::is_refresh_key(&key) {
            self.refresh_by_user();
            return;
        }

        match self.current_view {
            View::Commits => self.on_commits_key(key),
            View::Help => self.on_help_key(key),
        }
    }

    fn on_commits_key(&mut self, key: KeyEvent) {
        match key.code {
            keys::QUIT | keys::ESC => self.quit(),
            keys::HELP => self.go_to_view(View::Help),
            keys::PREVIEW_DOWN if self.preview_enabled => {
                self.preview_scroll = self.preview_scroll.saturating_add(1);
            }
            keys::PREVIEW_UP if self.preview_enabled => {
                self.preview_scroll = self.preview_scroll.saturating_sub(1);
            }
            _ => {
                let action = self.commits_view.handle_key(key);
                self.handle_commits_action(action);
            }
        }
    }

    fn on_help_key(&mut self, key: KeyEvent) {
        match key.code {
            keys::QUIT | keys::ESC | keys::HELP => self.go_back(),
            code if keys::is_move_down(code) => {
                self.help_scroll = self.help_scroll.saturating_add(1);
            }
            code if keys::is_move_up(code) => {
                self.help_scroll = self.help_scroll.saturating_sub(1);
            }
            keys::GO_TOP => self.help_scroll = 0,
            _ => {}
        }
    }

    fn handle_commits_action(&mut self, action: CommitsAction) {
        match action {
            CommitsAction::None => {}
            CommitsAction::Select(sha) => self.select_commit(&sha),
            CommitsAction::SubmitSha(prefix) => self.select_by_prefix(&prefix),
            CommitsAction::NextFile => self.next_file(),
            CommitsAction::CopyLink => self.copy_link(),
            CommitsAction::TogglePreview => self.toggle_preview(),
        }
    }

    /// Select a commit picked in the list
    pub(crate) fn select_commit(&mut self, sha: &str) {
        let mut sink = AppSink {
            link: &mut self.link,
            notification: &mut self.notification,
        };
        let changed = self
            .selection
            .select(&self.commits_view.commits, sha, &mut sink);

        self.sync_cursor();
        if changed {
            self.schedule_preview();
        }
    }

    fn select_by_prefix(&mut self, prefix: &str) {
        match find_by_prefix(&self.commits_view.commits, prefix) {
            Some(commit) => {
                let sha = commit.sha.clone();
                self.select_commit(&sha);
            }
            None => {
                self.notification = Some(Notification::warning(format!(
                    "No commit matches {}",
                    prefix
                )));
            }
        }
    }

    /// Show the next data file of the selected commit
    fn next_file(&mut self) {
        let Some(commit) = self
            .selection
            .selected()
            .and_then(|sha| self.commits_view.commits.iter().find(|c| c.sha == sha))
        else {
            return;
        };

        let message = FlatMessage::parse(&commit.message);
        let current = message.file_name(self.link.filename.as_deref());
        match message.next_file_name(current).map(str::to_string) {
            Some(next) => {
                let sha = short_sha(&commit.sha).to_string();
                self.link.set_filename(Some(&next));
                self.notification = Some(Notification::info(format!("{} @ {}", next, sha)));
                self.schedule_preview();
            }
            None => {
                self.notification = Some(Notification::warning("Commit lists no data files"));
            }
        }
    }

    fn copy_link(&mut self) {
        let link = self.shareable_link().to_string();
        match clipboard::copy_to_clipboard(&link) {
            Ok(()) => self.notification = Some(Notification::success("Copied link")),
            Err(e) => self.error_message = Some(e),
        }
    }

    fn toggle_preview(&mut self) {
        self.preview_enabled = !self.preview_enabled;
        self.schedule_preview();
    }
}
