//! Data-source traits for the two external feeds
//!
//! The dashboard reads two independent sources: the agent memory snapshot and
//! the outbox (an index document plus the post files it names). Failures are
//! isolated per source, so each trait carries its own fetch surface.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::domain::value::seq_at;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("document not found: {0}")]
    NotFound(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("HTTP error: {0}")]
    Http(String),
    #[error("failed to parse document: {0}")]
    Parse(String),
}

/// Source of the agent memory snapshot.
#[async_trait]
pub trait SnapshotFeed: Send + Sync {
    /// Fetch and parse the snapshot document. Any failure here is a tier-1
    /// failure for the render cycle.
    async fn fetch_snapshot(&self) -> Result<Value, FeedError>;
}

/// Source of the outbox index and its referenced posts.
#[async_trait]
pub trait OutboxFeed: Send + Sync {
    /// Fetch the index and return the post filenames it lists, newest first
    /// as the index writer ordered them.
    async fn fetch_index(&self) -> Result<Vec<String>, FeedError>;

    /// Fetch one post as raw markdown text.
    async fn fetch_post(&self, name: &str) -> Result<String, FeedError>;
}

/// Extract post filenames from a parsed index document.
///
/// The index writer has shipped two shapes: a bare array of filenames, and an
/// object with a `posts` array. Both are accepted; anything else yields an
/// empty list.
pub fn index_posts(index: &Value) -> Vec<String> {
    let entries = match index {
        Value::Array(items) => items.as_slice(),
        _ => seq_at(index, "posts"),
    };
    entries
        .iter()
        .filter_map(|v| v.as_str())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_index_posts_object_form() {
        let idx = json!({"posts": ["b.md", "a.md"], "count": 2, "updated_at": 1});
        assert_eq!(index_posts(&idx), vec!["b.md", "a.md"]);
    }

    #[test]
    fn test_index_posts_bare_array_form() {
        let idx = json!(["x.md", "y.md"]);
        assert_eq!(index_posts(&idx), vec!["x.md", "y.md"]);
    }

    #[test]
    fn test_index_posts_degenerate_shapes() {
        assert!(index_posts(&json!({})).is_empty());
        assert!(index_posts(&json!(null)).is_empty());
        assert!(index_posts(&json!({"posts": "nope"})).is_empty());
        // Non-string entries are skipped, empty names dropped
        assert_eq!(index_posts(&json!({"posts": ["a.md", 42, ""]})), vec!["a.md"]);
    }
}
