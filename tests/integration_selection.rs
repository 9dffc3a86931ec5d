//! Integration tests: selection reconciliation through `App`
//!
//! Drives the app with a scripted commit source and checks the selected
//! commit, the persisted link and the warnings the user sees.

mod common;

use std::thread;
use std::time::Duration;

use common::*;
use flatview::app::App;
use flatview::model::NotificationKind;
use flatview::ui::views::ListStatus;

const TIMEOUT: Duration = Duration::from_secs(5);

#[test]
fn test_requested_commit_is_selected() {
    let source = FakeSource::new([Response::ok(history())]);
    let app = loaded_app(link(Some(SHA_2)), source);

    assert_eq!(app.selection.selected(), Some(SHA_2));
    assert_eq!(app.link.sha.as_deref(), Some(SHA_2));
    assert!(app.notification.is_none());
    assert_eq!(app.commits_view.selected_index, 1);
    assert_eq!(app.commits_view.previous_index, Some(2));
}

#[test]
fn test_no_request_selects_latest() {
    let source = FakeSource::new([Response::ok(history())]);
    let app = loaded_app(link(None), source);

    assert_eq!(app.selection.selected(), Some(SHA_1));
    assert_eq!(app.link.sha.as_deref(), Some(SHA_1));
    assert!(app.notification.is_none());
}

#[test]
fn test_missing_request_recovers_with_warning() {
    let source = FakeSource::new([Response::ok(history())]);
    let app = loaded_app(link(Some(SHA_4)), source);

    assert_eq!(app.selection.selected(), Some(SHA_1));
    assert_eq!(app.link.sha.as_deref(), Some(SHA_1));

    let notification = app.notification.as_ref().expect("recovery warning");
    assert_eq!(notification.kind, NotificationKind::Warning);
    assert!(notification.message.contains("4444444"));
    assert!(notification.message.contains("1111111"));
}

#[test]
fn test_empty_history_selects_nothing() {
    let source = FakeSource::new([Response::ok(Vec::new())]);
    let app = loaded_app(link(Some(SHA_1)), source);

    assert_eq!(app.selection.selected(), None);
    assert_eq!(app.commits_view.status, ListStatus::Ready);
    // Nothing was chosen, so the link keeps what was asked for
    assert_eq!(app.link.sha.as_deref(), Some(SHA_1));
    assert!(app.notification.is_none());
}

#[test]
fn test_fetch_failure_marks_list_unavailable() {
    let source = FakeSource::new([Response::fail("HTTP 502")]);
    let app = loaded_app(link(Some(SHA_1)), source);

    assert!(matches!(app.commits_view.status, ListStatus::Unavailable(_)));
    assert!(app.error_message.as_deref().unwrap().contains("HTTP 502"));
    assert_eq!(app.selection.selected(), None);
    assert_eq!(app.link.sha.as_deref(), Some(SHA_1));
}

#[test]
fn test_failed_refresh_keeps_selection() {
    let source = FakeSource::new([Response::ok(history()), Response::fail("HTTP 502")]);
    let mut app = loaded_app(link(Some(SHA_2)), source);

    app.refresh_commits();
    assert!(app.wait_for_fetch(TIMEOUT));

    assert_eq!(app.selection.selected(), Some(SHA_2));
    assert_eq!(app.link.sha.as_deref(), Some(SHA_2));
    assert_eq!(app.commits_view.commits.len(), 3);
    assert!(matches!(app.commits_view.status, ListStatus::Unavailable(_)));
}

#[test]
fn test_refresh_preserves_selection_when_present() {
    let mut newer = history();
    newer.insert(0, flat_commit(SHA_4, "2021-06-04T00:00:00Z", &["data.json"]));
    let source = FakeSource::new([Response::ok(history()), Response::ok(newer)]);
    let mut app = loaded_app(link(Some(SHA_2)), source);

    app.refresh_commits();
    assert!(app.wait_for_fetch(TIMEOUT));

    assert_eq!(app.commits_view.commits.len(), 4);
    assert_eq!(app.selection.selected(), Some(SHA_2));
    assert_eq!(app.commits_view.selected_index, 2);
    assert!(app.notification.is_none());
}

#[test]
fn test_refresh_recovers_when_selection_disappears() {
    let mut rewritten = history();
    rewritten.remove(1);
    let source = FakeSource::new([Response::ok(history()), Response::ok(rewritten)]);
    let mut app = loaded_app(link(Some(SHA_2)), source);

    app.refresh_commits();
    assert!(app.wait_for_fetch(TIMEOUT));

    assert_eq!(app.selection.selected(), Some(SHA_1));
    assert_eq!(app.link.sha.as_deref(), Some(SHA_1));
    assert_eq!(
        app.notification.as_ref().map(|n| n.kind),
        Some(NotificationKind::Warning)
    );
}

#[test]
fn test_superseded_fetch_is_dropped() {
    let stale = vec![flat_commit(SHA_4, "2021-06-04T00:00:00Z", &["data.json"])];
    let source = FakeSource::new([
        Response::ok(stale).delayed(Duration::from_millis(300)),
        Response::ok(history()),
    ]);
    let mut app = App::with_source(link(None), false, source.clone());

    // The slow first request is running; issue a newer one
    source.wait_for_calls(1);
    app.refresh_commits();
    assert!(app.wait_for_fetch(TIMEOUT));
    assert_eq!(app.selection.selected(), Some(SHA_1));

    // Let the slow response arrive; it must not replace the newer list
    thread::sleep(Duration::from_millis(500));
    assert!(!app.poll_fetch());
    assert_eq!(app.commits_view.commits.len(), 3);
    assert_eq!(app.selection.selected(), Some(SHA_1));
    assert!(!app.is_loading());
}

#[test]
fn test_loading_until_first_fetch() {
    let source = FakeSource::new([Response::ok(history()).delayed(Duration::from_millis(200))]);
    let mut app = App::with_source(link(Some(SHA_1)), false, source);

    assert!(app.is_loading());
    assert_eq!(app.commits_view.status, ListStatus::Loading);
    assert_eq!(app.selection.selected(), None);

    assert!(app.wait_for_fetch(TIMEOUT));
    assert!(!app.is_loading());
    assert_eq!(app.selection.selected(), Some(SHA_1));
}

#[test]
fn test_shareable_link_fills_in_file() {
    let source = FakeSource::new([Response::ok(history())]);
    let app = loaded_app(link(Some(SHA_2)), source);

    assert_eq!(app.link.filename, None);
    assert_eq!(
        app.shareable_link().to_string(),
        format!("https://flatgithub.com/octo/weather?filename=data.json&sha={}", SHA_2)
    );
}
