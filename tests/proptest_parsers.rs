//! Property-based tests for input parsers
//!
//! Uses proptest to verify parsers handle arbitrary input without panicking.
//! Reference: https://lib.rs/crates/proptest

use proptest::prelude::*;

use flatview::github::parser::Parser;
use flatview::model::{FlatLink, FlatMessage};

// =============================================================================
// Strategy generators
// =============================================================================

/// Generate a commit SHA (40 hex chars)
fn sha_strategy() -> impl Strategy<Value = String> {
    "[a-f0-9]{40}".prop_map(|s| s.to_string())
}

/// Generate a repository owner or name
fn name_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_-]{1,20}".prop_map(|s| s.to_string())
}

/// Generate a data file path (may contain spaces and slashes)
fn file_path_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_ .-]{1,20}(/[a-zA-Z0-9_.-]{1,20}){0,2}".prop_map(|s| s.to_string())
}

// =============================================================================
// Robustness tests: parsers should never panic on arbitrary input
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Commit list parser should not panic on arbitrary input
    #[test]
    fn commits_parser_does_not_panic(input in ".*") {
        let _ = Parser::parse_commits(&input);
    }

    /// Message parser should not panic on arbitrary input
    #[test]
    fn message_parser_does_not_panic(input in ".*") {
        let _ = FlatMessage::parse(&input);
    }

    /// Link parser should not panic on arbitrary input
    #[test]
    fn link_parser_does_not_panic(input in ".*") {
        let _ = FlatLink::parse(&input);
    }
}

// =============================================================================
// Structured tests: well-formed input parses correctly
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// A formatted link parses back to the same state
    #[test]
    fn link_survives_formatting(
        owner in name_strategy(),
        repo in name_strategy(),
        sha in prop::option::of(sha_strategy()),
        filename in prop::option::of(file_path_strategy()),
    ) {
        let input = format!("{}/{}", owner, repo);
        let mut link = FlatLink::parse(&input).unwrap();
        link.set_sha(sha.as_deref());
        link.set_filename(filename.as_deref());

        let parsed = FlatLink::parse(&link.to_string()).unwrap();
        prop_assert_eq!(parsed, link);
    }

    /// Every listed file name comes back out of the message
    #[test]
    fn message_lists_files(files in prop::collection::vec("[a-z]{1,10}\\.json", 0..5)) {
        let entries: Vec<String> = files
            .iter()
            .map(|name| format!("{{\"name\":\"{}\",\"deltaBytes\":0}}", name))
            .collect();
        let message = format!("Flat: latest data\n\n{{\"files\":[{}]}}", entries.join(","));

        let parsed = FlatMessage::parse(&message);
        let names: Vec<&str> = parsed.files.iter().map(|f| f.name.as_str()).collect();
        prop_assert_eq!(names, files.iter().map(String::as_str).collect::<Vec<_>>());
        prop_assert_eq!(parsed.file_name(None), files.first().map(String::as_str));
    }

    /// Well-formed API output yields one commit per entry, in order
    #[test]
    fn commits_parser_keeps_order(shas in prop::collection::vec(sha_strategy(), 0..10)) {
        let entries: Vec<String> = shas
            .iter()
            .map(|sha| format!(
                "{{\"sha\":\"{}\",\"commit\":{{\"message\":\"m\",\"author\":{{\"name\":\"a\",\"date\":\"2021-06-01T00:00:00Z\"}}}}}}",
                sha
            ))
            .collect();
        let output = format!("[{}]", entries.join(","));

        let commits = Parser::parse_commits(&output).unwrap();
        let parsed: Vec<&str> = commits.iter().map(|c| c.sha.as_str()).collect();
        prop_assert_eq!(parsed, shas.iter().map(String::as_str).collect::<Vec<_>>());
    }
}
