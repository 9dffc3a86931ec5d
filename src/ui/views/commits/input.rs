//! Input handling for CommitsView

use crossterm::event::{KeyCode, KeyEvent};

use crate::keys;

use super::{CommitsAction, CommitsView, InputMode};

impl CommitsView {
    /// Handle key event and return action
    pub fn handle_key(&mut self, key: KeyEvent) -> CommitsAction {
        match self.input_mode {
            InputMode::Normal => self.handle_normal_key(key),
            InputMode::ShaInput => self.handle_sha_input_key(key),
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) -> CommitsAction {
        match key.code {
            k if keys::is_move_down(k) => self.move_down(),
            k if keys::is_move_up(k) => self.move_up(),
            k if k == keys::GO_TOP => self.move_to_top(),
            k if k == keys::GO_BOTTOM => self.move_to_bottom(),
            k if k == keys::SHA_INPUT => {
                if !self.commits.is_empty() {
                    self.start_sha_input();
                }
                CommitsAction::None
            }
            k if k == keys::NEXT_FILE => {
                if self.selected_commit().is_some() {
                    CommitsAction::NextFile
                } else {
                    CommitsAction::None
                }
            }
            k if k == keys::COPY_LINK => CommitsAction::CopyLink,
            k if k == keys::TOGGLE_PREVIEW => CommitsAction::TogglePreview,
            _ => CommitsAction::None,
        }
    }

    fn handle_sha_input_key(&mut self, key: KeyEvent) -> CommitsAction {
        match key.code {
            keys::ESC => {
                self.cancel_input();
                CommitsAction::None
            }
            keys::SUBMIT => {
                let prefix = self.input_buffer.trim().to_string();
                self.cancel_input();
                if prefix.is_empty() {
                    CommitsAction::None
                } else {
                    CommitsAction::SubmitSha(prefix)
                }
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
                CommitsAction::None
            }
            KeyCode::Char(c) if c.is_ascii_hexdigit() => {
                self.input_buffer.push(c);
                CommitsAction::None
            }
            _ => CommitsAction::None,
        }
    }
}
