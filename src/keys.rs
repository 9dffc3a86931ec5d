//! Keybinding definitions for flatview
//!
//! All keybindings are defined here so the help panel and status bar stay in
//! sync with input handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Color;

// =============================================================================
// Key detection helpers (for modifier keys)
// =============================================================================

/// Check if key is Ctrl+L (refetch)
/// Note: Accept both 'l' and 'L' for terminal compatibility
pub fn is_refresh_key(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('l') | KeyCode::Char('L'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Check if key is Ctrl+C (quit from anywhere)
pub fn is_force_quit_key(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

// =============================================================================
// Global keys (available in all views)
// =============================================================================

/// Quit application or go back
pub const QUIT: KeyCode = KeyCode::Char('q');

/// Show help
pub const HELP: KeyCode = KeyCode::Char('?');

/// Back / cancel
pub const ESC: KeyCode = KeyCode::Esc;

// =============================================================================
// Navigation keys
// =============================================================================

/// Move cursor up (vim style)
pub const MOVE_UP: KeyCode = KeyCode::Char('k');

/// Move cursor up (arrow key)
pub const MOVE_UP_ARROW: KeyCode = KeyCode::Up;

/// Move cursor down (vim style)
pub const MOVE_DOWN: KeyCode = KeyCode::Char('j');

/// Move cursor down (arrow key)
pub const MOVE_DOWN_ARROW: KeyCode = KeyCode::Down;

/// Go to top (newest commit)
pub const GO_TOP: KeyCode = KeyCode::Char('g');

/// Go to bottom (oldest commit)
pub const GO_BOTTOM: KeyCode = KeyCode::Char('G');

/// Check if key is move up (k or ↑)
pub fn is_move_up(code: KeyCode) -> bool {
    matches!(code, MOVE_UP | MOVE_UP_ARROW)
}

/// Check if key is move down (j or ↓)
pub fn is_move_down(code: KeyCode) -> bool {
    matches!(code, MOVE_DOWN | MOVE_DOWN_ARROW)
}

// =============================================================================
// Input keys (used in input modes)
// =============================================================================

/// Submit input (Enter in input mode)
pub const SUBMIT: KeyCode = KeyCode::Enter;

// =============================================================================
// Commits View keys
// =============================================================================

/// Start SHA input
pub const SHA_INPUT: KeyCode = KeyCode::Char('/');

/// Cycle through the data files of the selected commit
pub const NEXT_FILE: KeyCode = KeyCode::Char('f');

/// Copy the shareable link
pub const COPY_LINK: KeyCode = KeyCode::Char('y');

/// Toggle preview panel
pub const TOGGLE_PREVIEW: KeyCode = KeyCode::Char('p');

/// Scroll preview down
pub const PREVIEW_DOWN: KeyCode = KeyCode::Char('J');

/// Scroll preview up
pub const PREVIEW_UP: KeyCode = KeyCode::Char('K');

// =============================================================================
// Help text generation
// =============================================================================

/// Key binding entry for help display
pub struct KeyBindEntry {
    pub key: &'static str,
    pub description: &'static str,
}

/// Global key bindings for help display
pub const GLOBAL_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "q",
        description: "Quit / Back",
    },
    KeyBindEntry {
        key: "?",
        description: "Help",
    },
    KeyBindEntry {
        key: "Esc",
        description: "Back / Cancel input",
    },
    KeyBindEntry {
        key: "Ctrl+l",
        description: "Refetch commits",
    },
    KeyBindEntry {
        key: "Ctrl+c",
        description: "Quit",
    },
];

/// Navigation key bindings for help display
pub const NAV_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "j/k",
        description: "Select older/newer commit",
    },
    KeyBindEntry {
        key: "g/G",
        description: "Select newest/oldest commit",
    },
];

/// Commits View key bindings for help display
pub const COMMITS_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "/",
        description: "Select commit by SHA prefix",
    },
    KeyBindEntry {
        key: "f",
        description: "Next data file in commit",
    },
    KeyBindEntry {
        key: "y",
        description: "Copy shareable link",
    },
    KeyBindEntry {
        key: "p",
        description: "Toggle preview panel",
    },
    KeyBindEntry {
        key: "J/K",
        description: "Scroll preview",
    },
];

/// Input mode key bindings for help display
pub const INPUT_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "Enter",
        description: "Select matching commit",
    },
    KeyBindEntry {
        key: "Esc",
        description: "Cancel",
    },
];

// =============================================================================
// Status bar hints
// =============================================================================

/// Key hint for status bar display (colored badges)
#[derive(Clone, Copy)]
pub struct KeyHint {
    pub key: &'static str,
    pub label: &'static str,
    pub color: Color,
}

pub const HINT_HELP: KeyHint = KeyHint {
    key: "?",
    label: "Help",
    color: Color::Cyan,
};
pub const HINT_SHA: KeyHint = KeyHint {
    key: "/",
    label: "SHA",
    color: Color::Yellow,
};
pub const HINT_FILE: KeyHint = KeyHint {
    key: "f",
    label: "File",
    color: Color::Magenta,
};
pub const HINT_COPY: KeyHint = KeyHint {
    key: "y",
    label: "Copy link",
    color: Color::Green,
};
pub const HINT_PREVIEW: KeyHint = KeyHint {
    key: "p",
    label: "Preview",
    color: Color::Blue,
};
pub const HINT_REFRESH: KeyHint = KeyHint {
    key: "^L",
    label: "Refetch",
    color: Color::Cyan,
};
pub const HINT_QUIT: KeyHint = KeyHint {
    key: "q",
    label: "Quit",
    color: Color::Red,
};
pub const HINT_BACK: KeyHint = KeyHint {
    key: "q",
    label: "Back",
    color: Color::Red,
};
pub const HINT_SUBMIT: KeyHint = KeyHint {
    key: "Enter",
    label: "Select",
    color: Color::Green,
};
pub const HINT_CANCEL: KeyHint = KeyHint {
    key: "Esc",
    label: "Cancel",
    color: Color::Red,
};

/// Hints for the commits view in normal mode
pub const COMMITS_VIEW_HINTS: &[KeyHint] = &[
    HINT_HELP,
    HINT_SHA,
    HINT_FILE,
    HINT_COPY,
    HINT_PREVIEW,
    HINT_REFRESH,
    HINT_QUIT,
];

/// Hints while typing a SHA
pub const SHA_INPUT_HINTS: &[KeyHint] = &[HINT_SUBMIT, HINT_CANCEL];

/// Hints for the help view
pub const HELP_VIEW_HINTS: &[KeyHint] = &[HINT_BACK];
