//! Shareable link model
//!
//! The link is where the selection is persisted: it names the repository and
//! carries the selected SHA and file as query parameters, e.g.
//! `https://flatgithub.com/octo/weather?filename=data.json&sha=3f2a9c1`.

use std::fmt;

use thiserror::Error;
use url::Url;

/// Default host for generated links
pub const DEFAULT_BASE_URL: &str = "https://flatgithub.com";

/// Host assumed for scheme-less `owner/repo` shorthand
const SHORTHAND_BASE: &str = "https://github.com/";

/// Errors that can occur when parsing a link
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LinkError {
    #[error("Missing repository owner/name in {0:?} (expected owner/repo)")]
    MissingRepository(String),

    #[error("Invalid link {input:?}: {source}")]
    InvalidUrl {
        input: String,
        #[source]
        source: url::ParseError,
    },
}

/// A GitHub repository reference
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RepoRef {
    pub owner: String,
    pub name: String,
}

impl RepoRef {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Persisted selection state: repository plus optional SHA and file name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatLink {
    /// Scheme and host used when formatting (no trailing slash)
    pub base_url: String,
    pub repo: RepoRef,
    /// Selected commit SHA (`None` = no selection persisted)
    pub sha: Option<String>,
    /// Selected data file
    pub filename: Option<String>,
}

impl FlatLink {
    /// Create a link with no selection
    pub fn new(repo: RepoRef) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            repo,
            sha: None,
            filename: None,
        }
    }

    /// Parse `owner/repo`, `host/owner/repo` or a full link with query string
    ///
    /// Any host is accepted; the first two path segments name the repository.
    /// Unknown query keys are ignored; empty values count as absent.
    pub fn parse(input: &str) -> Result<Self, LinkError> {
        let url = to_url(input.trim()).map_err(|source| LinkError::InvalidUrl {
            input: input.to_string(),
            source,
        })?;

        let mut segments = url
            .path_segments()
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty())
            .map(decode);
        let (owner, name) = match (segments.next(), segments.next()) {
            (Some(owner), Some(name)) => (owner, name.trim_end_matches(".git").to_string()),
            _ => return Err(LinkError::MissingRepository(input.to_string())),
        };
        if name.is_empty() {
            return Err(LinkError::MissingRepository(input.to_string()));
        }

        let mut link = Self::new(RepoRef::new(owner, name));
        for (key, value) in url.query_pairs() {
            match key.as_ref() {
                "sha" => link.set_sha(Some(&value)),
                "filename" => link.set_filename(Some(&value)),
                _ => {}
            }
        }

        Ok(link)
    }

    /// Use a different base URL for formatting
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Record a new selected SHA
    pub fn set_sha(&mut self, sha: Option<&str>) {
        self.sha = sha.filter(|s| !s.is_empty()).map(str::to_string);
    }

    /// Record a new selected file name
    pub fn set_filename(&mut self, filename: Option<&str>) {
        self.filename = filename.filter(|s| !s.is_empty()).map(str::to_string);
    }
}

/// Scheme-qualified input is parsed as is; otherwise a leading segment that
/// looks like a host (`github.com`, `localhost:3000`) gets `https://`, and
/// bare `owner/repo` is resolved against github.com
fn to_url(input: &str) -> Result<Url, url::ParseError> {
    if input.contains("://") {
        return Url::parse(input);
    }

    let first = input.split(['/', '?', '#']).next().unwrap_or("");
    if first.contains('.') || first.contains(':') {
        Url::parse(&format!("https://{}", input))
    } else {
        Url::parse(&format!("{}{}", SHORTHAND_BASE, input.trim_start_matches('/')))
    }
}

/// Percent-decode a path segment, keeping it verbatim if it is not UTF-8
fn decode(segment: &str) -> String {
    urlencoding::decode(segment)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| segment.to_string())
}

impl fmt::Display for FlatLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}",
            self.base_url,
            urlencoding::encode(&self.repo.owner),
            urlencoding::encode(&self.repo.name)
        )?;

        let params: Vec<String> = [
            ("filename", self.filename.as_deref()),
            ("sha", self.sha.as_deref()),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| format!("{}={}", key, urlencoding::encode(v))))
        .collect();

        if !params.is_empty() {
            write!(f, "?{}", params.join("&"))?;
        }
        Ok(())
    }
}
