//! Adapters Layer - External System Implementations
//!
//! This module contains implementations of the port traits:
//! - `fs`: reads the agent data directory on the local filesystem
//! - `http`: fetches a published copy of the data directory over HTTP
//! - `cli`: command-line interface definitions

pub mod cli;
pub mod fs;
pub mod http;

pub use cli::CliApp;
pub use fs::FsFeed;
pub use http::{HttpFeed, HttpFeedConfig};
