//! GitHub API output parser
//!
//! Parses the JSON returned by `gh api` into structured data.

use serde::Deserialize;

use super::GithubError;
use crate::model::Commit;

#[derive(Debug, Deserialize)]
struct CommitEntry {
    sha: String,
    commit: CommitDetail,
}

#[derive(Debug, Deserialize)]
struct CommitDetail {
    #[serde(default)]
    message: String,
    #[serde(default)]
    author: Option<CommitAuthor>,
}

#[derive(Debug, Deserialize)]
struct CommitAuthor {
    #[serde(default)]
    name: String,
    #[serde(default)]
    date: String,
}

/// Parser for gh command output
pub struct Parser;

impl Parser {
    /// Parse the output of `gh api repos/{owner}/{repo}/commits`
    ///
    /// GitHub returns commits newest-first; the order is preserved.
    /// The output is a single page (one JSON array).
    pub fn parse_commits(output: &str) -> Result<Vec<Commit>, GithubError> {
        let trimmed = output.trim();
        if trimmed.is_empty() {
            return Ok(Vec::new());
        }

        let entries: Vec<CommitEntry> = serde_json::from_str(trimmed)
            .map_err(|e| GithubError::ParseError(format!("commit list: {}", e)))?;
        Ok(entries.into_iter().map(Self::to_commit).collect())
    }

    fn to_commit(entry: CommitEntry) -> Commit {
        let (author_name, timestamp) = match entry.commit.author {
            Some(author) => (author.name, author.date),
            None => (String::new(), String::new()),
        };

        Commit {
            sha: entry.sha,
            message: entry.commit.message,
            author_name,
            timestamp,
        }
    }
}
