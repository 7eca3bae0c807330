//! Domain Layer - Pure read/format logic for the dashboard
//!
//! This module contains pure types and functions with no I/O:
//! - `value`: defensive dotted-path reads over untyped JSON
//! - `snapshot`: typed views over the agent memory document
//! - `format`: number/date/path display formatting
//! - `markdown`: the markdown-subset renderer for outbox posts

pub mod format;
pub mod markdown;
pub mod snapshot;
pub mod value;

pub use snapshot::{Economy, Launch, Position, RunEvent, Snapshot, TokenIdea, World};
