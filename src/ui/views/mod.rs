//! View components
//!
//! Each view represents a screen in the application.

mod commits;

pub use commits::{CommitsAction, CommitsView, InputMode, ListStatus};
