//! Color theme definitions
//!
//! Centralized color constants for consistent UI appearance.

use ratatui::style::Color;

/// Colors for the commit list
pub mod commits_view {
    use super::*;

    /// Short SHA color
    pub const SHA: Color = Color::Yellow;
    /// Timestamp color
    pub const TIMESTAMP: Color = Color::DarkGray;
    /// Author color
    pub const AUTHOR: Color = Color::Cyan;
    /// Marker of the commit compared against (predecessor of the selection)
    pub const PREVIOUS_MARKER: Color = Color::Magenta;
    /// Marker of the selected commit
    pub const SELECTED_MARKER: Color = Color::Green;
}

/// Colors for the preview panel
pub mod preview {
    use super::*;

    /// File name in the header
    pub const FILE_NAME: Color = Color::Cyan;
    /// Header labels
    pub const LABEL: Color = Color::DarkGray;
    /// Size grew
    pub const GROWN: Color = Color::Green;
    /// Size shrank
    pub const SHRUNK: Color = Color::Red;
    /// Line numbers
    pub const LINE_NUMBER: Color = Color::DarkGray;
}

/// Selection highlight
pub mod selection {
    use super::*;

    pub const FG: Color = Color::White;
    pub const BG: Color = Color::DarkGray;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_is_readable() {
        assert_ne!(selection::FG, selection::BG);
    }

    #[test]
    fn test_markers_differ() {
        assert_ne!(commits_view::PREVIOUS_MARKER, commits_view::SELECTED_MARKER);
    }

    #[test]
    fn test_delta_colors_differ() {
        assert_ne!(preview::GROWN, preview::SHRUNK);
    }
}
