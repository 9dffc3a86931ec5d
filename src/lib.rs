//! flatview - terminal viewer for Flat Data repositories
//!
//! Browses the commits a Flat Data workflow made to a GitHub repository and
//! previews the data file each commit changed.
//!
//! This library provides:
//! - [`app`]: Application state and logic
//! - [`config`]: Configuration file support
//! - [`github`]: GitHub CLI execution and parsing
//! - [`keys`]: Key binding definitions
//! - [`logging`]: Log file setup
//! - [`model`]: Domain models
//! - [`selection`]: Commit selection reconciliation
//! - [`ui`]: User interface components

pub mod app;
pub mod config;
pub mod github;
pub mod keys;
pub mod logging;
pub mod model;
pub mod selection;
pub mod ui;
