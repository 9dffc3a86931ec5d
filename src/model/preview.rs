//! File preview model
//!
//! Contents of the selected data file at the selected commit and, when there
//! is one, at the commit before it.

/// Fetched contents of one data file at two points in history
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilePreview {
    /// File path inside the repository
    pub file_name: String,
    /// SHA the contents were fetched at
    pub sha: String,
    /// Contents at `sha`
    pub contents: String,
    /// SHA of the predecessor commit, if any
    pub previous_sha: Option<String>,
    /// Contents at `previous_sha` (`None` if there is no predecessor or the
    /// file did not exist there)
    pub previous_contents: Option<String>,
}

impl FilePreview {
    /// Size of the selected version in bytes
    pub fn size(&self) -> usize {
        self.contents.len()
    }

    /// Size of the previous version in bytes
    pub fn previous_size(&self) -> Option<usize> {
        self.previous_contents.as_ref().map(String::len)
    }

    /// Byte delta relative to the previous version
    pub fn delta_bytes(&self) -> Option<i64> {
        self.previous_size()
            .map(|prev| self.size() as i64 - prev as i64)
    }

    /// Lines to display: pretty-printed JSON when the contents parse,
    /// otherwise the raw text
    pub fn display_lines(&self) -> Vec<String> {
        let text = match serde_json::from_str::<serde_json::Value>(&self.contents) {
            Ok(value) => {
                serde_json::to_string_pretty(&value).unwrap_or_else(|_| self.contents.clone())
            }
            Err(_) => self.contents.clone(),
        };
        text.lines().map(str::to_string).collect()
    }
}

/// Format a byte delta with an explicit sign
pub fn format_delta(delta: i64) -> String {
    if delta > 0 {
        format!("+{} B", delta)
    } else {
        format!("{} B", delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_preview() -> FilePreview {
        FilePreview {
            file_name: "data.json".to_string(),
            sha: "bbbbbbb".to_string(),
            contents: "{\"a\":1,\"b\":[1,2]}".to_string(),
            previous_sha: Some("aaaaaaa".to_string()),
            previous_contents: Some("{\"a\":1}".to_string()),
        }
    }

    #[test]
    fn test_sizes_and_delta() {
        let preview = sample_preview();
        assert_eq!(preview.size(), 17);
        assert_eq!(preview.previous_size(), Some(7));
        assert_eq!(preview.delta_bytes(), Some(10));
    }

    #[test]
    fn test_no_previous() {
        let preview = FilePreview {
            previous_sha: None,
            previous_contents: None,
            ..sample_preview()
        };
        assert_eq!(preview.delta_bytes(), None);
    }

    #[test]
    fn test_display_lines_pretty_prints_json() {
        let lines = sample_preview().display_lines();
        assert_eq!(lines.first().map(String::as_str), Some("{"));
        assert!(lines.iter().any(|l| l.trim() == "\"a\": 1,"));
    }

    #[test]
    fn test_display_lines_raw_text() {
        let preview = FilePreview {
            contents: "date,value\n2021-06-01,3\n".to_string(),
            ..sample_preview()
        };
        assert_eq!(preview.display_lines(), vec!["date,value", "2021-06-01,3"]);
    }

    #[test]
    fn test_format_delta() {
        assert_eq!(format_delta(12), "+12 B");
        assert_eq!(format_delta(0), "0 B");
        assert_eq!(format_delta(-3), "-3 B");
    }
}
