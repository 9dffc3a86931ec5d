//! Preview panel widget
//!
//! Shows the data file referenced by the selected commit: which commits are
//! being compared, the size of both versions, and the selected version's
//! contents.

use ratatui::{
    prelude::*,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::model::{FilePreview, format_delta, short_sha};
use crate::ui::{components, symbols, theme};

/// What the preview panel should show
#[derive(Debug, Clone, Copy)]
pub enum PreviewContent<'a> {
    /// Nothing selected (list loading, unavailable or empty)
    NoSelection,
    /// The selected commit's message names no data file
    NoFile { sha: &'a str },
    /// Contents are being fetched
    Loading { file_name: &'a str },
    /// Fetching the selected version failed
    Failed { file_name: &'a str, error: &'a str },
    /// Contents available
    Ready(&'a FilePreview),
}

/// Build the panel's lines
pub fn build_preview_lines(content: PreviewContent<'_>) -> Vec<Line<'static>> {
    match content {
        PreviewContent::NoSelection => vec![Line::from("No commit selected").dark_gray()],
        PreviewContent::NoFile { sha } => vec![
            Line::from(format!("{} {}", short_sha(sha), symbols::empty::NO_FILE)).dark_gray(),
        ],
        PreviewContent::Loading { file_name } => vec![
            file_line(file_name),
            Line::from(""),
            Line::from("Loading…").dark_gray(),
        ],
        PreviewContent::Failed { file_name, error } => vec![
            file_line(file_name),
            Line::from(""),
            components::build_error_line(error),
        ],
        PreviewContent::Ready(preview) => build_ready_lines(preview),
    }
}

fn file_line(file_name: &str) -> Line<'static> {
    Line::from(Span::styled(
        file_name.to_string(),
        Style::default()
            .fg(theme::preview::FILE_NAME)
            .add_modifier(Modifier::BOLD),
    ))
}

fn label(text: &'static str) -> Span<'static> {
    Span::styled(text, Style::default().fg(theme::preview::LABEL))
}

fn build_ready_lines(preview: &FilePreview) -> Vec<Line<'static>> {
    let mut lines = vec![file_line(&preview.file_name)];

    lines.push(Line::from(vec![
        label("selected  "),
        Span::raw(format!("{}  {} B", short_sha(&preview.sha), preview.size())),
    ]));

    let previous = match (&preview.previous_sha, preview.previous_size()) {
        (Some(sha), Some(size)) => format!("{}  {} B", short_sha(sha), size),
        (Some(sha), None) => format!("{}  (file absent)", short_sha(sha)),
        (None, _) => symbols::empty::NO_PREVIOUS.to_string(),
    };
    lines.push(Line::from(vec![label("previous  "), Span::raw(previous)]));

    if let Some(delta) = preview.delta_bytes() {
        let color = if delta >= 0 {
            theme::preview::GROWN
        } else {
            theme::preview::SHRUNK
        };
        lines.push(Line::from(vec![
            label("delta     "),
            Span::styled(format_delta(delta), Style::default().fg(color)),
        ]));
    }

    lines.push(Line::from(""));

    let content_lines = preview.display_lines();
    let width = content_lines.len().to_string().len();
    for (i, text) in content_lines.into_iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:>width$} ", i + 1, width = width),
                Style::default().fg(theme::preview::LINE_NUMBER),
            ),
            Span::raw(text),
        ]));
    }

    lines
}

/// Render the preview panel
pub fn render_preview_panel(frame: &mut Frame, area: Rect, content: PreviewContent<'_>, scroll: u16) {
    let title = Line::from(" Preview ").bold().centered();
    let paragraph = Paragraph::new(build_preview_lines(content))
        .block(components::bordered_block(title))
        .scroll((scroll, 0));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn sample_preview() -> FilePreview {
        FilePreview {
            file_name: "data.json".to_string(),
            sha: "bbbbbbbbbbbb".to_string(),
            contents: "[1,2,3]".to_string(),
            previous_sha: Some("aaaaaaaaaaaa".to_string()),
            previous_contents: Some("[1,2]".to_string()),
        }
    }

    #[test]
    fn test_ready_lines_header() {
        let preview = sample_preview();
        let lines = build_preview_lines(PreviewContent::Ready(&preview));
        assert_eq!(line_text(&lines[0]), "data.json");
        assert_eq!(line_text(&lines[1]), "selected  bbbbbbb  7 B");
        assert_eq!(line_text(&lines[2]), "previous  aaaaaaa  5 B");
        assert_eq!(line_text(&lines[3]), "delta     +2 B");
    }

    #[test]
    fn test_ready_lines_numbered_contents() {
        let preview = sample_preview();
        let lines = build_preview_lines(PreviewContent::Ready(&preview));
        // Pretty-printed array: "[", "  1,", "  2,", "  3", "]"
        assert_eq!(line_text(&lines[5]), "1 [");
        assert_eq!(line_text(&lines[9]), "5 ]");
    }

    #[test]
    fn test_ready_lines_without_previous() {
        let preview = FilePreview {
            previous_sha: None,
            previous_contents: None,
            ..sample_preview()
        };
        let lines = build_preview_lines(PreviewContent::Ready(&preview));
        assert_eq!(line_text(&lines[2]), "previous  no earlier commit");
        // No delta line
        assert_eq!(line_text(&lines[3]), "");
    }

    #[test]
    fn test_ready_lines_previous_file_absent() {
        let preview = FilePreview {
            previous_contents: None,
            ..sample_preview()
        };
        let lines = build_preview_lines(PreviewContent::Ready(&preview));
        assert_eq!(line_text(&lines[2]), "previous  aaaaaaa  (file absent)");
    }

    #[test]
    fn test_no_file_line() {
        let lines = build_preview_lines(PreviewContent::NoFile {
            sha: "c3c3c3c3c3c3",
        });
        assert_eq!(line_text(&lines[0]), "c3c3c3c (no data file)");
    }

    #[test]
    fn test_failed_lines_show_error() {
        let lines = build_preview_lines(PreviewContent::Failed {
            file_name: "data.json",
            error: "HTTP 404",
        });
        assert_eq!(lines.len(), 3);
        assert_eq!(line_text(&lines[2]), " Error:  HTTP 404 ");
    }
}
