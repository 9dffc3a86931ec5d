//! Placeholder content for a panel with nothing to list

use ratatui::{
    style::Stylize,
    text::Line,
    widgets::{Paragraph, Wrap},
};

/// Centered message with an optional dimmed hint below it
///
/// Wraps so long hints (fetch errors) stay readable in narrow panels.
pub fn empty_state(title: &str, hint: Option<&str>) -> Paragraph<'static> {
    let mut lines = vec![Line::default(), Line::from(title.to_string()).centered()];
    lines.extend(hint.into_iter().flat_map(|hint| {
        [
            Line::default(),
            Line::from(hint.to_string()).dark_gray().centered(),
        ]
    }));

    Paragraph::new(lines).wrap(Wrap { trim: true })
}

/// Shown until the first commit fetch completes
pub fn loading_state() -> Paragraph<'static> {
    empty_state("Loading commits…", Some("Fetching history through gh"))
}
