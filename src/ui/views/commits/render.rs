//! Rendering for CommitsView

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::model::{Commit, Notification};
use crate::ui::{components, symbols, theme};

use super::{CommitsView, InputMode, ListStatus, empty_text};

impl CommitsView {
    /// Render the view with optional notification in title bar
    pub fn render(&self, frame: &mut Frame, area: Rect, notification: Option<&Notification>) {
        let (list_area, input_area) = match self.input_mode {
            InputMode::Normal => (area, None),
            InputMode::ShaInput => {
                let chunks =
                    Layout::vertical([Constraint::Min(1), Constraint::Length(3)]).split(area);
                (chunks[0], Some(chunks[1]))
            }
        };

        self.render_list(frame, list_area, notification);

        if let Some(input_area) = input_area {
            self.render_input_bar(frame, input_area);
        }
    }

    fn render_list(&self, frame: &mut Frame, area: Rect, notification: Option<&Notification>) {
        let title = self.build_title();

        let title_width = title.width();
        let available_for_notif = area.width.saturating_sub(title_width as u16 + 4) as usize;
        let notif_line = notification
            .filter(|n| !n.is_expired())
            .map(|n| components::build_notification_title(n, Some(available_for_notif)))
            .filter(|line| !line.spans.is_empty());

        let block = components::bordered_block_with_notification(title, notif_line);

        if self.commits.is_empty() {
            let empty = match &self.status {
                ListStatus::Loading => components::loading_state(),
                ListStatus::Unavailable(message) => {
                    components::empty_state(empty_text::UNAVAILABLE, Some(message.as_str()))
                }
                ListStatus::Ready => {
                    components::empty_state(empty_text::TITLE, Some(empty_text::HINT))
                }
            };
            frame.render_widget(empty.block(block), area);
            return;
        }

        let inner_height = area.height.saturating_sub(2) as usize;
        if inner_height == 0 {
            return;
        }

        let scroll_offset = self.calculate_scroll_offset(inner_height);

        let lines: Vec<Line> = self
            .commits
            .iter()
            .enumerate()
            .skip(scroll_offset)
            .take(inner_height)
            .map(|(idx, commit)| self.build_commit_line(idx, commit))
            .collect();

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn build_title(&self) -> Line<'static> {
        let suffix = match &self.status {
            ListStatus::Loading if !self.commits.is_empty() => " [refreshing]".to_string(),
            ListStatus::Unavailable(_) if !self.commits.is_empty() => {
                format!(" [{}]", empty_text::UNAVAILABLE.trim_end_matches('.'))
            }
            _ if !self.commits.is_empty() => format!(" ({})", self.commits.len()),
            _ => String::new(),
        };

        Line::from(format!(" flatview - {}{} ", self.repo_label, suffix))
            .bold()
            .cyan()
            .centered()
    }

    /// Keep the cursor visible, leaving one line of context when possible
    pub(crate) fn calculate_scroll_offset(&self, visible_height: usize) -> usize {
        if visible_height == 0 || self.selected_index < visible_height {
            return 0;
        }
        self.selected_index + 1 - visible_height
    }

    pub(crate) fn build_commit_line(&self, idx: usize, commit: &Commit) -> Line<'static> {
        let is_selected = idx == self.selected_index;
        let is_previous = self.previous_index == Some(idx);

        let (marker, marker_color) = if is_selected {
            (symbols::markers::SELECTED, theme::commits_view::SELECTED_MARKER)
        } else if is_previous {
            (symbols::markers::PREVIOUS, theme::commits_view::PREVIOUS_MARKER)
        } else {
            (symbols::markers::NORMAL, theme::commits_view::SHA)
        };

        let spans = vec![
            Span::styled(format!("{} ", marker), Style::default().fg(marker_color)),
            Span::styled(
                format!("{} ", commit.short_sha()),
                Style::default().fg(theme::commits_view::SHA),
            ),
            Span::styled(
                format!("{} ", commit.display_timestamp()),
                Style::default().fg(theme::commits_view::TIMESTAMP),
            ),
            Span::styled(
                format!("{} ", commit.author_name),
                Style::default().fg(theme::commits_view::AUTHOR),
            ),
            Span::raw(commit.title().to_string()),
        ];

        let line = Line::from(spans);
        if is_selected {
            line.style(
                Style::default()
                    .fg(theme::selection::FG)
                    .bg(theme::selection::BG)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            line
        }
    }

    fn render_input_bar(&self, frame: &mut Frame, area: Rect) {
        let input_text = format!("SHA: {}", self.input_buffer);

        let available_width = area.width.saturating_sub(2) as usize;
        if available_width == 0 {
            return;
        }

        // Show the end of the input when it does not fit
        let char_count = input_text.chars().count();
        let display_text = if char_count > available_width {
            let skip = char_count.saturating_sub(available_width.saturating_sub(1));
            format!("…{}", input_text.chars().skip(skip).collect::<String>())
        } else {
            input_text
        };

        let paragraph = Paragraph::new(display_text)
            .block(components::bordered_block(Line::from(" / Select by SHA ")));
        frame.render_widget(paragraph, area);

        let cursor_pos = char_count.min(available_width);
        frame.set_cursor_position((area.x + cursor_pos as u16 + 1, area.y + 1));
    }
}
