//! Styled one-line messages: error banners and title-bar notifications

use ratatui::{
    prelude::*,
    text::{Line, Span},
};

use crate::model::{Notification, NotificationKind};

const SEPARATOR: &str = " | ";
const ELLIPSIS: char = '…';

/// Error line: a red "Error:" badge followed by the message in red
pub fn build_error_line(error: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(" Error: ", Style::default().fg(Color::White).bg(Color::Red)),
        Span::styled(format!(" {} ", error), Style::default().fg(Color::Red)),
    ])
}

fn badge(kind: NotificationKind) -> (&'static str, Color) {
    match kind {
        NotificationKind::Success => ("Success:", Color::Green),
        NotificationKind::Info => ("Info:", Color::Cyan),
        NotificationKind::Warning => ("Warning:", Color::Yellow),
    }
}

/// Cut `message` to `max` characters, ending in an ellipsis when shortened
fn fit(message: &str, max: usize) -> Option<String> {
    let count = message.chars().count();
    if count <= max {
        return Some(message.to_string());
    }
    // Room for at least one character plus the ellipsis
    if max < 2 {
        return None;
    }
    let mut cut: String = message.chars().take(max - 1).collect();
    cut.push(ELLIPSIS);
    Some(cut)
}

/// Notification spans to append to a block title: ` | Warning: message `
///
/// With `max_width`, the message is shortened to fit; an empty line comes
/// back when not even the badge and one character fit.
pub fn build_notification_title(
    notification: &Notification,
    max_width: Option<usize>,
) -> Line<'static> {
    let (label, color) = badge(notification.kind);
    let label = format!("{} ", label);

    // Separator, badge and the trailing space around the message
    let chrome = SEPARATOR.len() + label.len() + 1;
    let room = max_width.map_or(usize::MAX, |max| max.saturating_sub(chrome));

    let Some(message) = fit(&notification.message, room) else {
        return Line::default();
    };

    Line::from(vec![
        Span::raw(SEPARATOR),
        Span::styled(label, Style::default().fg(Color::Black).bg(color)),
        Span::styled(format!("{} ", message), Style::default().fg(color)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_build_error_line() {
        let line = build_error_line("gh is not installed or not in PATH");
        assert_eq!(line.spans.len(), 2);
        assert_eq!(line.spans[0].content, " Error: ");
        assert_eq!(line.spans[1].content, " gh is not installed or not in PATH ");
    }

    #[test]
    fn test_notification_fits() {
        let n = Notification::warning("Commit deadbee not found");
        let line = build_notification_title(&n, None);
        assert_eq!(text(&line), " | Warning: Commit deadbee not found ");
    }

    #[test]
    fn test_notification_truncated() {
        let n = Notification::info("Refetched the whole commit list");
        let line = build_notification_title(&n, Some(20));
        let rendered = text(&line);
        assert_eq!(rendered, " | Info: Refetched… ");
        assert!(rendered.chars().count() <= 20);
    }

    #[test]
    fn test_notification_no_room() {
        let n = Notification::success("Copied link");
        assert!(build_notification_title(&n, Some(5)).spans.is_empty());
    }

    #[test]
    fn test_fit() {
        assert_eq!(fit("abc", 3).as_deref(), Some("abc"));
        assert_eq!(fit("abcdef", 4).as_deref(), Some("abc…"));
        assert_eq!(fit("abcdef", 1), None);
    }
}
