use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use super::feed::{FeedError, OutboxFeed, SnapshotFeed};

/// Mock snapshot feed that records calls and allows controlled responses.
/// Clones share state, so a clone handed to an orchestrator can still be
/// inspected from the test.
#[derive(Debug, Default, Clone)]
pub struct MockSnapshotFeed {
    calls: Arc<Mutex<u32>>,
    snapshot: Arc<Mutex<Option<Value>>>,
    fail: Arc<Mutex<bool>>,
}

impl MockSnapshotFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the snapshot returned on fetch
    pub fn with_snapshot(self, snapshot: Value) -> Self {
        *self.snapshot.lock().unwrap() = Some(snapshot);
        self
    }

    /// Builder method to make every fetch fail
    pub fn with_failure(self) -> Self {
        *self.fail.lock().unwrap() = true;
        self
    }

    /// Number of fetches performed
    pub fn call_count(&self) -> u32 {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl SnapshotFeed for MockSnapshotFeed {
    async fn fetch_snapshot(&self) -> Result<Value, FeedError> {
        *self.calls.lock().unwrap() += 1;
        if *self.fail.lock().unwrap() {
            return Err(FeedError::Http("simulated snapshot failure".into()));
        }
        self.snapshot
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| FeedError::NotFound("memory.json".into()))
    }
}

/// Mock outbox feed that records calls and allows controlled responses
#[derive(Debug, Default, Clone)]
pub struct MockOutboxFeed {
    calls: Arc<Mutex<Vec<String>>>,
    index: Arc<Mutex<Vec<String>>>,
    posts: Arc<Mutex<HashMap<String, String>>>,
    fail_index: Arc<Mutex<bool>>,
}

impl MockOutboxFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the filenames the index lists
    pub fn with_index(self, names: &[&str]) -> Self {
        *self.index.lock().unwrap() = names.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Builder method to set the body returned for a post filename.
    /// A listed post with no body configured fails its fetch.
    pub fn with_post(self, name: &str, body: &str) -> Self {
        self.posts.lock().unwrap().insert(name.to_string(), body.to_string());
        self
    }

    /// Builder method to make the index fetch fail
    pub fn with_index_failure(self) -> Self {
        *self.fail_index.lock().unwrap() = true;
        self
    }

    /// Get all recorded post fetches, in order
    pub fn get_calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl OutboxFeed for MockOutboxFeed {
    async fn fetch_index(&self) -> Result<Vec<String>, FeedError> {
        if *self.fail_index.lock().unwrap() {
            return Err(FeedError::Http("simulated index failure".into()));
        }
        Ok(self.index.lock().unwrap().clone())
    }

    async fn fetch_post(&self, name: &str) -> Result<String, FeedError> {
        self.calls.lock().unwrap().push(name.to_string());
        self.posts
            .lock()
            .unwrap()
            .get(name)
            .cloned()
            .ok_or_else(|| FeedError::NotFound(name.to_string()))
    }
}
