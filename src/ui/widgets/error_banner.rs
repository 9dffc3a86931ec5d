//! Error banner drawn over the row above the status bar

use ratatui::{
    Frame,
    layout::Rect,
    widgets::{Clear, Paragraph},
};

use crate::ui::components;

/// Row the banner occupies: inset by two columns, `rows_below` rows up from
/// the bottom of `screen`
fn banner_area(screen: Rect, rows_below: u16) -> Option<Rect> {
    let from_bottom = rows_below + 1;
    (screen.height > from_bottom && screen.width > 4).then(|| Rect {
        x: screen.x + 2,
        y: screen.bottom() - from_bottom,
        width: screen.width - 4,
        height: 1,
    })
}

/// Render `error` just above the bottom `status_bar_height` rows
pub fn render_error_banner(frame: &mut Frame, error: &str, status_bar_height: u16) {
    let Some(area) = banner_area(frame.area(), status_bar_height) else {
        return;
    };
    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(components::build_error_line(error)), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_sits_above_status_bar() {
        let area = banner_area(Rect::new(0, 0, 80, 24), 1).unwrap();
        assert_eq!(area, Rect::new(2, 22, 76, 1));
    }

    #[test]
    fn test_no_banner_on_tiny_screen() {
        assert!(banner_area(Rect::new(0, 0, 80, 2), 1).is_none());
        assert!(banner_area(Rect::new(0, 0, 4, 24), 1).is_none());
    }
}
