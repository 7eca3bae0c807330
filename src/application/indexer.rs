//! Outbox index builder
//!
//! The agent writes ritual posts into the outbox with timestamped filenames
//! (`post_YYYYMMDD_HHMMSS_<kind>_<id>.md`); the dashboard only reads what the
//! index lists. This builder scans the outbox, keeps the newest posts by
//! filename order, and writes `index.json` next to them.

use std::path::Path;

use serde_json::json;
use thiserror::Error;

pub const DEFAULT_MAX_POSTS: usize = 20;

#[derive(Debug, Error)]
pub enum IndexError {
    #[error("outbox directory not found: {0}")]
    NotFound(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize index: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result of an index build.
#[derive(Debug, Clone)]
pub struct IndexSummary {
    /// Filenames written to the index, newest first.
    pub posts: Vec<String>,
    /// Total markdown files seen before capping.
    pub scanned: usize,
}

/// Scan `outbox_dir` for markdown posts and write `index.json` listing the
/// newest `max_posts`, descending by filename (timestamps embed in names).
pub fn build_index(outbox_dir: &Path, max_posts: usize) -> Result<IndexSummary, IndexError> {
    if !outbox_dir.is_dir() {
        return Err(IndexError::NotFound(outbox_dir.display().to_string()));
    }

    let mut posts: Vec<String> = std::fs::read_dir(outbox_dir)?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().extension().is_some_and(|e| e == "md"))
        .filter_map(|entry| entry.file_name().into_string().ok())
        .collect();

    let scanned = posts.len();
    posts.sort_by(|a, b| b.cmp(a));
    posts.truncate(max_posts);

    let index = json!({
        "posts": posts,
        "count": posts.len(),
        "updated_at": chrono::Utc::now().timestamp(),
    });

    let target = outbox_dir.join("index.json");
    std::fs::write(&target, serde_json::to_string_pretty(&index)?)?;

    tracing::info!(
        "Indexed {} of {} posts to {}",
        posts.len(),
        scanned,
        target.display()
    );

    Ok(IndexSummary { posts, scanned })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_builds_descending_index() {
        let dir = TempDir::new().unwrap();
        for name in [
            "post_20260101_000000_a.md",
            "post_20260301_000000_c.md",
            "post_20260201_000000_b.md",
        ] {
            fs::write(dir.path().join(name), "x").unwrap();
        }
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let summary = build_index(dir.path(), DEFAULT_MAX_POSTS).unwrap();
        assert_eq!(summary.scanned, 3);
        assert_eq!(
            summary.posts,
            vec![
                "post_20260301_000000_c.md",
                "post_20260201_000000_b.md",
                "post_20260101_000000_a.md",
            ]
        );

        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(dir.path().join("index.json")).unwrap())
                .unwrap();
        assert_eq!(written["count"], 3);
        assert_eq!(written["posts"][0], "post_20260301_000000_c.md");
        assert!(written["updated_at"].as_i64().unwrap() > 0);
    }

    #[test]
    fn test_caps_at_max_posts() {
        let dir = TempDir::new().unwrap();
        for i in 0..25 {
            fs::write(dir.path().join(format!("post_{:02}.md", i)), "x").unwrap();
        }

        let summary = build_index(dir.path(), DEFAULT_MAX_POSTS).unwrap();
        assert_eq!(summary.scanned, 25);
        assert_eq!(summary.posts.len(), DEFAULT_MAX_POSTS);
        assert_eq!(summary.posts[0], "post_24.md");
    }

    #[test]
    fn test_missing_dir_errors() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        assert!(matches!(
            build_index(&missing, DEFAULT_MAX_POSTS),
            Err(IndexError::NotFound(_))
        ));
    }

    #[test]
    fn test_rebuild_does_not_index_itself() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("post_1.md"), "x").unwrap();

        build_index(dir.path(), DEFAULT_MAX_POSTS).unwrap();
        let summary = build_index(dir.path(), DEFAULT_MAX_POSTS).unwrap();
        assert_eq!(summary.posts, vec!["post_1.md"]);
    }
}
