//! gh-specific constants
//!
//! Centralized definitions for gh command names, flags, and API paths.

/// gh command binary name
pub const GH_COMMAND: &str = "gh";

/// Minimum supported gh version (`gh api` with `-H` and query strings)
pub const MIN_GH_VERSION: &str = "2.0.0";

/// Default number of commits fetched per request (GitHub's maximum page size)
pub const DEFAULT_PER_PAGE: u32 = 100;

/// gh subcommands
pub mod commands {
    pub const API: &str = "api";
}

/// gh command flags
pub mod flags {
    /// Extra request header
    pub const HEADER: &str = "-H";
    /// Show version
    pub const VERSION: &str = "--version";
}

/// Request headers
pub mod headers {
    /// Ask the contents API for the raw file instead of base64 JSON
    pub const ACCEPT_RAW: &str = "Accept: application/vnd.github.raw";
}

/// Special gh values
pub mod special {
    /// Version output prefix (e.g., "gh version 2.40.1 (2023-12-13)")
    pub const VERSION_PREFIX: &str = "gh version ";
}

/// Error detection patterns in gh output
pub mod errors {
    /// Pattern indicating the repository or file does not exist
    pub const NOT_FOUND: &str = "HTTP 404";
}

/// Percent-encode each `/`-separated segment of a repository path
fn encode_path(path: &str) -> String {
    path.split('/')
        .filter(|segment| !segment.is_empty())
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

/// API path for listing commits
pub fn commits_path(owner: &str, repo: &str, per_page: u32, author: Option<&str>) -> String {
    let mut path = format!(
        "repos/{}/{}/commits?per_page={}",
        urlencoding::encode(owner),
        urlencoding::encode(repo),
        per_page
    );
    if let Some(author) = author.filter(|a| !a.is_empty()) {
        path.push_str("&author=");
        path.push_str(&urlencoding::encode(author));
    }
    path
}

/// API path for a file's contents at a commit
pub fn contents_path(owner: &str, repo: &str, file: &str, sha: &str) -> String {
    format!(
        "repos/{}/{}/contents/{}?ref={}",
        urlencoding::encode(owner),
        urlencoding::encode(repo),
        encode_path(file),
        urlencoding::encode(sha)
    )
}
