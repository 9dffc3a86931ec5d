//! GitHub access layer
//!
//! Fetches commit lists and file contents through the GitHub CLI (`gh`) and
//! parses its JSON output.

pub mod constants;
mod executor;
/// Parser module (public for integration testing)
pub mod parser;

pub use executor::GhExecutor;

use std::io;
use thiserror::Error;

use crate::model::{Commit, RepoRef};

/// Errors that can occur when talking to GitHub
#[derive(Error, Debug)]
pub enum GithubError {
    #[error("Repository {0} not found (or not visible to the current gh account)")]
    RepositoryNotFound(String),

    #[error("gh command failed (exit code {exit_code}): {stderr}")]
    CommandFailed { stderr: String, exit_code: i32 },

    #[error("Failed to parse GitHub response: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("gh is not installed or not in PATH")]
    GhNotFound,

    #[error("gh version {version} is not supported (minimum: {minimum})")]
    UnsupportedVersion { version: String, minimum: String },
}

/// Source of commit lists and file contents
///
/// Implementations are called from a worker thread, hence `Send + Sync`.
pub trait CommitSource: Send + Sync {
    /// Fetch the repository's commits, newest first
    fn list_commits(&self, repo: &RepoRef) -> Result<Vec<Commit>, GithubError>;

    /// Fetch the raw contents of `path` at commit `sha`
    fn file_contents(&self, repo: &RepoRef, path: &str, sha: &str) -> Result<String, GithubError>;
}
