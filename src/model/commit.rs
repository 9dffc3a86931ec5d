//! Commit data model

/// Number of SHA characters shown in lists and links' display text
pub const SHORT_SHA_LEN: usize = 7;

/// A single commit of the Flat repository
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Commit {
    /// Full commit SHA (content-addressed, unique)
    pub sha: String,

    /// Raw commit message (title, blank line, JSON body for Flat commits)
    pub message: String,

    /// Author display name
    pub author_name: String,

    /// Author timestamp (ISO 8601 format, as returned by GitHub)
    pub timestamp: String,
}

impl Commit {
    /// Get a display-friendly short SHA
    pub fn short_sha(&self) -> &str {
        short_sha(&self.sha)
    }

    /// First line of the message
    pub fn title(&self) -> &str {
        let title = self.message.lines().next().unwrap_or("").trim();
        if title.is_empty() {
            "(no message)"
        } else {
            title
        }
    }

    /// Timestamp rendered as `YYYY-MM-DD HH:MM`
    ///
    /// Falls back to the raw value when it is not ISO 8601 shaped.
    pub fn display_timestamp(&self) -> String {
        let parts = self
            .timestamp
            .split_once('T')
            .and_then(|(date, time)| Some((date, time.get(..5)?)));
        match parts {
            Some((date, hours_minutes)) => format!("{} {}", date, hours_minutes),
            None => self.timestamp.clone(),
        }
    }
}

/// Truncate a SHA to [`SHORT_SHA_LEN`] characters (char-boundary safe)
pub fn short_sha(sha: &str) -> &str {
    match sha.char_indices().nth(SHORT_SHA_LEN) {
        Some((idx, _)) => &sha[..idx],
        None => sha,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_commit() -> Commit {
        Commit {
            sha: "3f2a9c1d0b8e7f6a5c4d3e2f1a0b9c8d7e6f5a4b".to_string(),
            message: "Flat: latest data (2021-06-01T12:00:00.000Z)\n\n{\"files\":[]}".to_string(),
            author_name: "flat-data".to_string(),
            timestamp: "2021-06-01T12:00:07Z".to_string(),
        }
    }

    #[test]
    fn test_short_sha() {
        let commit = sample_commit();
        assert_eq!(commit.short_sha(), "3f2a9c1");
    }

    #[test]
    fn test_short_sha_shorter_than_limit() {
        assert_eq!(short_sha("abc"), "abc");
        assert_eq!(short_sha(""), "");
    }

    #[test]
    fn test_title() {
        let commit = sample_commit();
        assert_eq!(commit.title(), "Flat: latest data (2021-06-01T12:00:00.000Z)");

        let empty = Commit {
            message: String::new(),
            ..sample_commit()
        };
        assert_eq!(empty.title(), "(no message)");
    }

    #[test]
    fn test_display_timestamp() {
        let commit = sample_commit();
        assert_eq!(commit.display_timestamp(), "2021-06-01 12:00");

        let odd = Commit {
            timestamp: "yesterday".to_string(),
            ..sample_commit()
        };
        assert_eq!(odd.display_timestamp(), "yesterday");
    }

    #[test]
    fn test_display_timestamp_multibyte_time() {
        let commit = Commit {
            timestamp: "2021-06-01T12:0é".to_string(),
            ..sample_commit()
        };
        assert_eq!(commit.display_timestamp(), "2021-06-01T12:0é");

        let short = Commit {
            timestamp: "2021-06-01T1é".to_string(),
            ..sample_commit()
        };
        assert_eq!(short.display_timestamp(), "2021-06-01T1é");
    }
}
