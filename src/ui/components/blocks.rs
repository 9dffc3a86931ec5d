//! Block components for UI rendering
//!
//! Common block patterns used across views.

use ratatui::{
    text::Line,
    widgets::{Block, Borders},
};

/// Create a block with title and specified borders
pub fn titled_block<'a>(title: Line<'a>, borders: Borders) -> Block<'a> {
    Block::default().borders(borders).title(title)
}

/// Create a block with all borders and a title
pub fn bordered_block<'a>(title: Line<'a>) -> Block<'a> {
    titled_block(title, Borders::ALL)
}

/// Create a bordered block whose title is followed by a notification
///
/// The notification line (from [`build_notification_title`](super::build_notification_title))
/// is appended to the title spans so it shares the top border.
pub fn bordered_block_with_notification<'a>(
    title: Line<'a>,
    notification: Option<Line<'a>>,
) -> Block<'a> {
    let Some(notification) = notification else {
        return bordered_block(title);
    };

    let alignment = title.alignment;
    let mut spans = title.spans;
    spans.extend(notification.spans);

    let mut combined = Line::from(spans).style(title.style);
    combined.alignment = alignment;
    bordered_block(combined)
}
