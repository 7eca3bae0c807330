//! Filesystem feed
//!
//! Reads the snapshot and outbox straight from the agent's data directory.
//! This is the deployment where the dashboard renders on the same host the
//! agent writes to.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;

use crate::ports::feed::{index_posts, FeedError, OutboxFeed, SnapshotFeed};

pub const MEMORY_FILE: &str = "memory.json";
pub const OUTBOX_DIR: &str = "outbox";
pub const INDEX_FILE: &str = "index.json";

/// Feed over a local agent data directory.
#[derive(Debug, Clone)]
pub struct FsFeed {
    data_dir: PathBuf,
}

impl FsFeed {
    pub fn new<P: Into<PathBuf>>(data_dir: P) -> Self {
        Self { data_dir: data_dir.into() }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn outbox_path(&self, name: &str) -> PathBuf {
        // Post names come from the index document; keep reads inside the
        // outbox directory even if an index entry carries path separators.
        let file = Path::new(name)
            .file_name()
            .map(|f| f.to_os_string())
            .unwrap_or_else(|| name.into());
        self.data_dir.join(OUTBOX_DIR).join(file)
    }

    async fn read_json(&self, path: &Path) -> Result<Value, FeedError> {
        if !path.exists() {
            return Err(FeedError::NotFound(path.display().to_string()));
        }
        let text = tokio::fs::read_to_string(path).await?;
        serde_json::from_str(&text)
            .map_err(|e| FeedError::Parse(format!("{}: {}", path.display(), e)))
    }
}

#[async_trait]
impl SnapshotFeed for FsFeed {
    async fn fetch_snapshot(&self) -> Result<Value, FeedError> {
        self.read_json(&self.data_dir.join(MEMORY_FILE)).await
    }
}

#[async_trait]
impl OutboxFeed for FsFeed {
    async fn fetch_index(&self) -> Result<Vec<String>, FeedError> {
        let index = self
            .read_json(&self.data_dir.join(OUTBOX_DIR).join(INDEX_FILE))
            .await?;
        Ok(index_posts(&index))
    }

    async fn fetch_post(&self, name: &str) -> Result<String, FeedError> {
        let path = self.outbox_path(name);
        if !path.exists() {
            return Err(FeedError::NotFound(path.display().to_string()));
        }
        Ok(tokio::fs::read_to_string(path).await?)
    }
}
