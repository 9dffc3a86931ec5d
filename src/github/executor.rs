//! gh command executor
//!
//! Handles running gh commands and capturing their output.

use std::process::Command;

use super::constants::{self, commands, errors, flags, headers, special};
use super::parser::Parser;
use super::{CommitSource, GithubError};
use crate::config::GithubConfig;
use crate::model::{Commit, RepoRef};

/// Executor for gh commands
#[derive(Debug, Clone)]
pub struct GhExecutor {
    /// Binary to run (normally `gh`)
    program: String,
    /// Commits per request
    per_page: u32,
    /// Only list commits by this author (None = all authors)
    author: Option<String>,
}

impl Default for GhExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl GhExecutor {
    /// Create a new executor using `gh` from PATH
    pub fn new() -> Self {
        Self {
            program: constants::GH_COMMAND.to_string(),
            per_page: constants::DEFAULT_PER_PAGE,
            author: None,
        }
    }

    /// Create an executor from the `[github]` config section
    pub fn from_config(config: &GithubConfig) -> Self {
        Self {
            program: config.command.clone(),
            per_page: config.per_page.clamp(1, constants::DEFAULT_PER_PAGE),
            author: Some(config.author.clone()).filter(|a| !a.is_empty()),
        }
    }

    /// Run a gh command with the given arguments
    pub fn run(&self, args: &[&str]) -> Result<String, GithubError> {
        tracing::debug!(program = %self.program, ?args, "running gh");

        let output = Command::new(&self.program).args(args).output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                GithubError::GhNotFound
            } else {
                GithubError::IoError(e)
            }
        })?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            let exit_code = output.status.code().unwrap_or(-1);
            tracing::debug!(exit_code, stderr = %stderr.trim(), "gh failed");

            Err(GithubError::CommandFailed { stderr, exit_code })
        }
    }

    /// Get the gh version
    pub fn version(&self) -> Result<String, GithubError> {
        let output = self.run(&[flags::VERSION])?;
        // Output format: "gh version 2.40.1 (2023-12-13)\nhttps://..."
        let first_line = output.lines().next().unwrap_or("").trim();
        let rest = first_line
            .strip_prefix(special::VERSION_PREFIX)
            .unwrap_or(first_line);
        Ok(rest.split_whitespace().next().unwrap_or("").to_string())
    }

    /// Check if gh version is supported
    pub fn check_version(&self) -> Result<(), GithubError> {
        let version = self.version()?;
        if !is_version_supported(&version, constants::MIN_GH_VERSION) {
            return Err(GithubError::UnsupportedVersion {
                version,
                minimum: constants::MIN_GH_VERSION.to_string(),
            });
        }
        Ok(())
    }

    /// Run `gh api` for the commit list
    pub fn commits_raw(&self, repo: &RepoRef) -> Result<String, GithubError> {
        let path = constants::commits_path(
            &repo.owner,
            &repo.name,
            self.per_page,
            self.author.as_deref(),
        );
        self.run(&[commands::API, &path])
            .map_err(|e| not_found_as(e, || GithubError::RepositoryNotFound(repo.to_string())))
    }

    /// Run `gh api` for a file's raw contents
    pub fn contents_raw(&self, repo: &RepoRef, path: &str, sha: &str) -> Result<String, GithubError> {
        let api_path = constants::contents_path(&repo.owner, &repo.name, path, sha);
        self.run(&[commands::API, flags::HEADER, headers::ACCEPT_RAW, &api_path])
    }
}

impl CommitSource for GhExecutor {
    fn list_commits(&self, repo: &RepoRef) -> Result<Vec<Commit>, GithubError> {
        let output = self.commits_raw(repo)?;
        Parser::parse_commits(&output)
    }

    fn file_contents(&self, repo: &RepoRef, path: &str, sha: &str) -> Result<String, GithubError> {
        self.contents_raw(repo, path, sha)
    }
}

/// Replace a 404 command failure with a more specific error
fn not_found_as(err: GithubError, replacement: impl FnOnce() -> GithubError) -> GithubError {
    match err {
        GithubError::CommandFailed { ref stderr, .. } if stderr.contains(errors::NOT_FOUND) => {
            replacement()
        }
        other => other,
    }
}

/// Compare version strings (simple semver comparison)
///
/// Handles prerelease suffixes like "2.40.0-rc1" by stripping the suffix.
fn is_version_supported(version: &str, minimum: &str) -> bool {
    let parse_version = |v: &str| -> Option<(u32, u32, u32)> {
        let parts: Vec<&str> = v.split('.').collect();
        if parts.len() >= 2 {
            let major = parts[0].parse().ok()?;
            let minor = parts[1].parse().ok()?;
            let patch = parts
                .get(2)
                .and_then(|p| p.split('-').next().and_then(|n| n.parse().ok()))
                .unwrap_or(0);
            Some((major, minor, patch))
        } else {
            None
        }
    };

    match (parse_version(version), parse_version(minimum)) {
        (Some(v), Some(m)) => v >= m,
        _ => false,
    }
}
