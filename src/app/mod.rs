//! Application module
//!
//! Contains the main application state and logic, split into:
//! - `state`: App struct and view management
//! - `refresh`: commit list fetching and selection reconciliation
//! - `preview`: deferred file preview fetching
//! - `input`: Key event handling
//! - `render`: UI rendering
//! - `clipboard`: copying the shareable link

mod clipboard;
mod input;
mod preview;
mod refresh;
mod render;
mod state;

pub use state::{App, View};
