//! Help panel widget
//!
//! `build_help_lines()` produces the key binding listing from `keys`.

use ratatui::{
    prelude::*,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::keys;

/// Build all help panel lines
pub fn build_help_lines() -> Vec<Line<'static>> {
    let mut lines = vec![Line::from("Key bindings:".bold()), Line::from("")];

    push_section(&mut lines, "Global", keys::GLOBAL_KEYS);
    push_section(&mut lines, "Navigation", keys::NAV_KEYS);
    push_section(&mut lines, "Commits", keys::COMMITS_KEYS);
    push_section(&mut lines, "SHA Input", keys::INPUT_KEYS);

    lines
}

fn push_section(lines: &mut Vec<Line<'static>>, title: &str, entries: &[keys::KeyBindEntry]) {
    lines.push(Line::from(format!("{title}:")).underlined());

    for entry in entries {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:10}", entry.key),
                Style::default().fg(Color::Yellow),
            ),
            Span::raw(entry.description),
        ]));
    }

    lines.push(Line::from(""));
}

/// Render help content showing key bindings.
///
/// `scroll` is the vertical scroll offset (0 = top). Values beyond the
/// content length are clamped by ratatui's Paragraph.
pub fn render_help_panel(frame: &mut Frame, area: Rect, scroll: u16) {
    let title = Line::from(" flatview - Help ").bold().white().centered();

    frame.render_widget(
        Paragraph::new(build_help_lines())
            .block(Block::default().borders(Borders::ALL).title(title))
            .scroll((scroll, 0)),
        area,
    );
}
