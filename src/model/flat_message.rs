//! Flat commit message model
//!
//! Commits produced by the Flat data action carry a title line followed by a
//! JSON body describing the files that were fetched:
//!
//! ```text
//! Flat: latest data (2021-06-01T12:00:00.000Z)
//!
//! {"date":"2021-06-01T12:00:00.000Z","files":[{"name":"data.json","deltaBytes":120}]}
//! ```
//!
//! Parsing is total: a message that does not follow the convention simply
//! yields no files.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

/// Timestamp in parentheses at the end of a Flat title line
static TITLE_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\(([0-9]{4}-[0-9]{2}-[0-9]{2}T[^)]*)\)\s*$").expect("valid title date regex")
});

/// One data file mentioned in a Flat commit body
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FlatFile {
    pub name: String,
    #[serde(rename = "deltaBytes", default)]
    pub delta_bytes: i64,
    #[serde(default)]
    pub source: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FlatBody {
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    files: Vec<FlatFile>,
}

/// Parsed view of a commit message
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FlatMessage {
    /// First line of the message
    pub title: String,
    /// Fetch date from the body, or the title's parenthesised timestamp
    pub date: Option<String>,
    /// Files listed in the body (empty for non-Flat commits)
    pub files: Vec<FlatFile>,
}

impl FlatMessage {
    /// Parse a raw commit message
    pub fn parse(message: &str) -> Self {
        let (title, body) = match message.split_once("\n\n") {
            Some((title, body)) => (title, body),
            None => (message, ""),
        };
        let title = title.lines().next().unwrap_or("").trim().to_string();

        let parsed: Option<FlatBody> = serde_json::from_str(body.trim()).ok();
        let (date, files) = match parsed {
            Some(body) => (body.date, body.files),
            None => (None, Vec::new()),
        };

        let date = date.or_else(|| {
            TITLE_DATE
                .captures(&title)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str().to_string())
        });

        Self { title, date, files }
    }

    /// Resolve the file this commit refers to
    ///
    /// Returns `preferred` when the commit lists it, otherwise the first listed
    /// file, otherwise `None`.
    pub fn file_name(&self, preferred: Option<&str>) -> Option<&str> {
        self.file(preferred).map(|f| f.name.as_str())
    }

    /// Like [`file_name`](Self::file_name) but returns the whole entry
    pub fn file(&self, preferred: Option<&str>) -> Option<&FlatFile> {
        preferred
            .and_then(|name| self.files.iter().find(|f| f.name == name))
            .or_else(|| self.files.first())
    }

    /// Name of the file listed after `current`, wrapping around
    pub fn next_file_name(&self, current: Option<&str>) -> Option<&str> {
        if self.files.is_empty() {
            return None;
        }
        let next = current
            .and_then(|name| self.files.iter().position(|f| f.name == name))
            .map(|idx| (idx + 1) % self.files.len())
            .unwrap_or(0);
        Some(self.files[next].name.as_str())
    }
}
