//! CLI Command Handlers
//!
//! Command-line surface for the seerdeck dashboard renderer.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Seerdeck - Static dashboard renderer for the MemeSeer agent
#[derive(Parser, Debug)]
#[command(
    name = "seerdeck",
    version = env!("CARGO_PKG_VERSION"),
    author = env!("CARGO_PKG_AUTHORS"),
    about = "Static HTML dashboard renderer for the MemeSeer agent memory and outbox",
    long_about = "Seerdeck polls the agent memory snapshot and outbox posts, formats them \
                  with per-field fallbacks, and writes a static HTML dashboard."
)]
pub struct CliApp {
    /// The command to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Poll and re-render the dashboard on an interval
    Run(RunCmd),

    /// Render the dashboard once and exit
    Render(RenderCmd),

    /// Rebuild the outbox index.json from the posts on disk
    Index(IndexCmd),

    /// Fetch the snapshot once and print a text summary
    Status(StatusCmd),
}

/// Start the poll loop
#[derive(Parser, Debug)]
pub struct RunCmd {
    /// Path to configuration file
    #[arg(short, long, value_name = "FILE", default_value = "seerdeck.toml")]
    pub config: PathBuf,

    /// Override the poll interval in seconds
    #[arg(long, value_name = "SECS")]
    pub interval: Option<u64>,
}

/// Single render tick
#[derive(Parser, Debug)]
pub struct RenderCmd {
    /// Path to configuration file
    #[arg(short, long, value_name = "FILE", default_value = "seerdeck.toml")]
    pub config: PathBuf,

    /// Override the output document path
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Rebuild the outbox index
#[derive(Parser, Debug)]
pub struct IndexCmd {
    /// Path to configuration file
    #[arg(short, long, value_name = "FILE", default_value = "seerdeck.toml")]
    pub config: PathBuf,

    /// Maximum posts to list in the index
    #[arg(long, value_name = "N", default_value_t = 20)]
    pub max_posts: usize,
}

/// Snapshot summary
#[derive(Parser, Debug)]
pub struct StatusCmd {
    /// Path to configuration file
    #[arg(short, long, value_name = "FILE", default_value = "seerdeck.toml")]
    pub config: PathBuf,
}
