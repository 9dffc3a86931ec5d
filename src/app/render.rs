//! UI rendering

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
};

use crate::keys;
use crate::ui::{views::InputMode, widgets};

use super::state::{App, View};

/// Minimum width for showing the preview beside the list
const SPLIT_MIN_WIDTH: u16 = 80;

impl App {
    /// Render the UI
    pub fn render(&self, frame: &mut Frame) {
        // Reserve one row for the status bar
        let area = frame.area();
        let main_area = Rect {
            height: area.height.saturating_sub(1),
            ..area
        };

        match self.current_view {
            View::Commits => self.render_commits(frame, main_area),
            View::Help => widgets::render_help_panel(frame, main_area, self.help_scroll),
        }

        self.render_status_bar(frame);

        if let Some(ref error) = self.error_message {
            widgets::render_error_banner(frame, error, 1);
        }
    }

    fn render_commits(&self, frame: &mut Frame, area: Rect) {
        let notification = self.notification.as_ref();

        if !self.preview_enabled || area.width < SPLIT_MIN_WIDTH {
            self.commits_view.render(frame, area, notification);
            return;
        }

        let [list_area, preview_area] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(area);

        self.commits_view.render(frame, list_area, notification);
        widgets::render_preview_panel(
            frame,
            preview_area,
            self.preview_content(),
            self.preview_scroll,
        );
    }

    fn render_status_bar(&self, frame: &mut Frame) {
        let hints = match self.current_view {
            View::Help => keys::HELP_VIEW_HINTS,
            View::Commits if self.commits_view.input_mode == InputMode::ShaInput => {
                keys::SHA_INPUT_HINTS
            }
            View::Commits => keys::COMMITS_VIEW_HINTS,
        };

        let label = self
            .selection
            .selected()
            .map(|sha| format!("{} @ {}", self.link.repo, crate::model::short_sha(sha)));
        widgets::render_status_bar(frame, label.as_deref(), hints);
    }
}
