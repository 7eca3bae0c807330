//! Ports Layer - Trait definitions for external data sources
//!
//! Following hexagonal architecture, these traits abstract the two feeds the
//! dashboard reads:
//! - Snapshot feed (the agent memory document)
//! - Outbox feed (the post index and the post files it names)

pub mod feed;
pub mod mocks;

pub use feed::{index_posts, FeedError, OutboxFeed, SnapshotFeed};
