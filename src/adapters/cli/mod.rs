//! Command-line interface definitions

pub mod commands;

pub use commands::{CliApp, Command, IndexCmd, RenderCmd, RunCmd, StatusCmd};
