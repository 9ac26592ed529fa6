//! Mock repository client for testing
//!
//! Hand-written rather than generated so scripted responses and call
//! tracking stay simple to assert on.

use async_trait::async_trait;
use semver_automerge::{
    MergeMethod, MergeResponse, MergeableState, PullRequestRef, RemoteError, RepositoryClient,
    Sleeper,
};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

/// Call record for `merge_pull_request`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeCall {
    pub owner: String,
    pub repo: String,
    pub number: u64,
    pub method: MergeMethod,
}

/// Builds a pull request reference for `acme/widgets#7`.
pub fn pull_request(title: &str, state: MergeableState) -> PullRequestRef {
    PullRequestRef {
        owner: "acme".to_string(),
        repository_name: "widgets".to_string(),
        number: 7,
        title: title.to_string(),
        mergeable_state: state,
    }
}

/// Mock repository client
///
/// - Fetches return the scripted states in order; the last one repeats
/// - Merges return the configured response
/// - Error injection for both operations
pub struct MockRepositoryClient {
    states: Mutex<VecDeque<MergeableState>>,
    last_state: Mutex<MergeableState>,
    merge_response: Mutex<MergeResponse>,
    fetch_calls: Mutex<Vec<u64>>,
    merge_calls: Mutex<Vec<MergeCall>>,
    error_on_fetch: Mutex<Option<String>>,
    error_on_merge: Mutex<Option<String>>,
}

impl MockRepositoryClient {
    /// Create a mock whose fetches report the given states in order
    pub fn with_states(states: impl IntoIterator<Item = MergeableState>) -> Self {
        Self {
            states: Mutex::new(states.into_iter().collect()),
            last_state: Mutex::new(MergeableState::Unknown),
            merge_response: Mutex::new(MergeResponse {
                merged: true,
                message: "Pull Request successfully merged".to_string(),
                sha: Some("6dcb09b5b57875f334f61aebed695e2e4193db5e".to_string()),
            }),
            fetch_calls: Mutex::new(Vec::new()),
            merge_calls: Mutex::new(Vec::new()),
            error_on_fetch: Mutex::new(None),
            error_on_merge: Mutex::new(None),
        }
    }

    /// Create a mock whose fetches always report `clean`
    pub fn clean() -> Self {
        Self::with_states([MergeableState::Clean])
    }

    /// Set the response for `merge_pull_request`
    pub fn set_merge_response(&self, merged: bool, message: &str) {
        *self.merge_response.lock().unwrap() = MergeResponse {
            merged,
            message: message.to_string(),
            sha: None,
        };
    }

    /// Make `fetch_pull_request` return an error
    pub fn fail_fetch(&self, msg: &str) {
        *self.error_on_fetch.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `merge_pull_request` return an error
    pub fn fail_merge(&self, msg: &str) {
        *self.error_on_merge.lock().unwrap() = Some(msg.to_string());
    }

    /// Number of `fetch_pull_request` calls
    pub fn fetch_count(&self) -> usize {
        self.fetch_calls.lock().unwrap().len()
    }

    /// Recorded `merge_pull_request` calls
    pub fn merge_calls(&self) -> Vec<MergeCall> {
        self.merge_calls.lock().unwrap().clone()
    }

    /// Assert that `merge_pull_request` was never called
    pub fn assert_no_merge(&self) {
        assert!(
            self.merge_calls().is_empty(),
            "expected no merge calls, got {:?}",
            self.merge_calls()
        );
    }
}

#[async_trait]
impl RepositoryClient for MockRepositoryClient {
    async fn fetch_pull_request(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> Result<PullRequestRef, RemoteError> {
        self.fetch_calls.lock().unwrap().push(number);

        if let Some(message) = self.error_on_fetch.lock().unwrap().clone() {
            return Err(RemoteError::Request { message });
        }

        let state = {
            let mut last = self.last_state.lock().unwrap();
            if let Some(next) = self.states.lock().unwrap().pop_front() {
                *last = next;
            }
            last.clone()
        };

        Ok(PullRequestRef {
            owner: owner.to_string(),
            repository_name: repo.to_string(),
            number,
            title: String::new(),
            mergeable_state: state,
        })
    }

    async fn merge_pull_request(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        method: MergeMethod,
    ) -> Result<MergeResponse, RemoteError> {
        self.merge_calls.lock().unwrap().push(MergeCall {
            owner: owner.to_string(),
            repo: repo.to_string(),
            number,
            method,
        });

        if let Some(message) = self.error_on_merge.lock().unwrap().clone() {
            return Err(RemoteError::Request { message });
        }

        Ok(self.merge_response.lock().unwrap().clone())
    }
}

/// Sleeper that records requested durations instead of waiting
#[derive(Default)]
pub struct RecordingSleeper {
    sleeps: Mutex<Vec<Duration>>,
}

impl RecordingSleeper {
    /// Durations requested so far
    pub fn sleeps(&self) -> Vec<Duration> {
        self.sleeps.lock().unwrap().clone()
    }
}

#[async_trait]
impl Sleeper for RecordingSleeper {
    async fn sleep(&self, duration: Duration) {
        self.sleeps.lock().unwrap().push(duration);
    }
}
