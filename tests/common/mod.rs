//! Common test utilities for integration tests.
//!
//! Provides a scripted `CommitSource` so `App` can be driven without `gh`
//! or network access.
//!
//! Note: Each integration test file compiles as a separate crate,
//! so not all helpers are used in every test file. We suppress
//! dead_code warnings at the module level.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use flatview::app::App;
use flatview::github::{CommitSource, GithubError};
use flatview::model::{Commit, FlatLink, RepoRef};

/// One scripted response to `list_commits`
#[derive(Debug, Clone)]
pub struct Response {
    pub delay: Duration,
    pub result: Result<Vec<Commit>, String>,
}

impl Response {
    pub fn ok(commits: Vec<Commit>) -> Self {
        Self {
            delay: Duration::ZERO,
            result: Ok(commits),
        }
    }

    pub fn fail(stderr: &str) -> Self {
        Self {
            delay: Duration::ZERO,
            result: Err(stderr.to_string()),
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// Scripted commit source
///
/// `list_commits` pops queued responses in order and repeats the last one
/// once the queue is down to a single entry.
#[derive(Debug, Default)]
pub struct FakeSource {
    responses: Mutex<VecDeque<Response>>,
    files: Mutex<HashMap<(String, String), String>>,
    list_calls: AtomicUsize,
    file_calls: AtomicUsize,
}

impl FakeSource {
    pub fn new(responses: impl IntoIterator<Item = Response>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into_iter().collect()),
            ..Self::default()
        })
    }

    /// Serve `contents` for `path` at `sha`
    pub fn with_file(self: Arc<Self>, sha: &str, path: &str, contents: &str) -> Arc<Self> {
        self.files
            .lock()
            .unwrap()
            .insert((sha.to_string(), path.to_string()), contents.to_string());
        self
    }

    /// Queue another `list_commits` response
    pub fn push(&self, response: Response) {
        self.responses.lock().unwrap().push_back(response);
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn file_calls(&self) -> usize {
        self.file_calls.load(Ordering::SeqCst)
    }

    /// Wait until `list_commits` has been entered `count` times
    pub fn wait_for_calls(&self, count: usize) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while self.list_calls() < count && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(5));
        }
        assert!(self.list_calls() >= count, "list_commits was not called");
    }
}

impl CommitSource for FakeSource {
    fn list_commits(&self, _repo: &RepoRef) -> Result<Vec<Commit>, GithubError> {
        let response = {
            let mut responses = self.responses.lock().unwrap();
            let response = if responses.len() > 1 {
                responses.pop_front()
            } else {
                responses.front().cloned()
            };
            self.list_calls.fetch_add(1, Ordering::SeqCst);
            response.unwrap_or_else(|| Response::ok(Vec::new()))
        };

        thread::sleep(response.delay);
        response.result.map_err(|stderr| GithubError::CommandFailed {
            stderr,
            exit_code: 1,
        })
    }

    fn file_contents(&self, _repo: &RepoRef, path: &str, sha: &str) -> Result<String, GithubError> {
        self.file_calls.fetch_add(1, Ordering::SeqCst);
        self.files
            .lock()
            .unwrap()
            .get(&(sha.to_string(), path.to_string()))
            .cloned()
            .ok_or_else(|| GithubError::CommandFailed {
                stderr: "gh: Not Found (HTTP 404)".to_string(),
                exit_code: 1,
            })
    }
}

/// A Flat commit listing `files`
pub fn flat_commit(sha: &str, date: &str, files: &[&str]) -> Commit {
    let files: Vec<String> = files
        .iter()
        .map(|name| format!("{{\"name\":\"{}\",\"deltaBytes\":1}}", name))
        .collect();
    Commit {
        sha: sha.to_string(),
        message: format!(
            "Flat: latest data ({date})\n\n{{\"date\":\"{date}\",\"files\":[{}]}}",
            files.join(",")
        ),
        author_name: "flat-data".to_string(),
        timestamp: date.to_string(),
    }
}

/// A plain commit with no data files
pub fn plain_commit(sha: &str, message: &str) -> Commit {
    Commit {
        sha: sha.to_string(),
        message: message.to_string(),
        author_name: "Octo Cat".to_string(),
        timestamp: "2021-05-31T10:00:00Z".to_string(),
    }
}

pub const SHA_1: &str = "1111111111111111111111111111111111111111";
pub const SHA_2: &str = "2222222222222222222222222222222222222222";
pub const SHA_3: &str = "3333333333333333333333333333333333333333";
pub const SHA_4: &str = "4444444444444444444444444444444444444444";

/// Newest first: SHA_1, SHA_2 (two files), SHA_3 (plain)
pub fn history() -> Vec<Commit> {
    vec![
        flat_commit(SHA_1, "2021-06-03T00:00:00Z", &["data.json"]),
        flat_commit(SHA_2, "2021-06-02T00:00:00Z", &["data.json", "prices.csv"]),
        plain_commit(SHA_3, "Add flat workflow"),
    ]
}

/// Link for `octo/weather`, optionally requesting a SHA
pub fn link(sha: Option<&str>) -> FlatLink {
    let mut link = FlatLink::new(RepoRef::new("octo", "weather"));
    link.set_sha(sha);
    link
}

/// App with the initial fetch completed
pub fn loaded_app(link: FlatLink, source: Arc<FakeSource>) -> App {
    let mut app = App::with_source(link, false, source);
    assert!(app.wait_for_fetch(Duration::from_secs(5)), "initial fetch timed out");
    app
}
