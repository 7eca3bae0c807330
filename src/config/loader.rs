//! Configuration Loader
//!
//! Loads and validates configuration from TOML files matching seerdeck.toml
//! structure. A missing config file falls back to built-in defaults so the
//! dashboard can run next to an agent with zero setup.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Main configuration structure matching seerdeck.toml
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub sources: SourcesSection,
    #[serde(default)]
    pub render: RenderSection,
    #[serde(default)]
    pub poll: PollSection,
    #[serde(default)]
    pub logging: LoggingSection,
}

/// Where the snapshot and outbox come from
#[derive(Debug, Clone, Deserialize)]
pub struct SourcesSection {
    /// Feed mode: "fs" reads the agent data directory, "http" fetches a
    /// published copy of it
    #[serde(default = "default_mode")]
    pub mode: String,
    /// Agent data directory (fs mode); the directory holding memory.json
    /// and outbox/. Supports ~ expansion.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    /// Base URL of the published data directory (http mode)
    #[serde(default)]
    pub base_url: String,
    /// HTTP request timeout in seconds (http mode)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Output document settings
#[derive(Debug, Clone, Deserialize)]
pub struct RenderSection {
    /// Where the rendered HTML document is written
    #[serde(default = "default_output")]
    pub output: String,
    /// Relative base the rendered page uses for outbox artifact links
    #[serde(default = "default_outbox_base")]
    pub outbox_base: String,
    /// Most recent positions shown in the positions table
    #[serde(default = "default_max_positions")]
    pub max_positions: usize,
    /// Most recent posts shown in the rituals feed
    #[serde(default = "default_max_posts")]
    pub max_posts: usize,
}

/// Poll cadence
#[derive(Debug, Clone, Deserialize)]
pub struct PollSection {
    /// Seconds between render ticks
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
}

/// Logging configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSection {
    /// Log level filter (trace, debug, info, warn, error)
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_mode() -> String {
    "fs".to_string()
}
fn default_data_dir() -> String {
    "..".to_string()
}
fn default_timeout_secs() -> u64 {
    10
}
fn default_output() -> String {
    "dashboard.html".to_string()
}
fn default_outbox_base() -> String {
    "../outbox".to_string()
}
fn default_max_positions() -> usize {
    5
}
fn default_max_posts() -> usize {
    20
}
fn default_interval_secs() -> u64 {
    60
}
fn default_level() -> String {
    "info".to_string()
}

impl Default for SourcesSection {
    fn default() -> Self {
        Self {
            mode: default_mode(),
            data_dir: default_data_dir(),
            base_url: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for RenderSection {
    fn default() -> Self {
        Self {
            output: default_output(),
            outbox_base: default_outbox_base(),
            max_positions: default_max_positions(),
            max_posts: default_max_posts(),
        }
    }
}

impl Default for PollSection {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
        }
    }
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

/// Load configuration from a TOML file, falling back to defaults when the
/// file does not exist.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::debug!("No config at {}, using defaults", path.display());
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

impl Config {
    /// Validate all configuration parameters
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.sources.mode.as_str() {
            "fs" => {
                if self.sources.data_dir.is_empty() {
                    return Err(ConfigError::ValidationError(
                        "data_dir cannot be empty in fs mode".to_string(),
                    ));
                }
            }
            "http" => {
                if self.sources.base_url.is_empty() {
                    return Err(ConfigError::ValidationError(
                        "base_url cannot be empty in http mode".to_string(),
                    ));
                }
            }
            other => {
                return Err(ConfigError::ValidationError(format!(
                    "mode must be \"fs\" or \"http\", got \"{}\"",
                    other
                )));
            }
        }

        if self.poll.interval_secs == 0 {
            return Err(ConfigError::ValidationError(format!(
                "interval_secs must be > 0, got {}",
                self.poll.interval_secs
            )));
        }

        if self.render.output.is_empty() {
            return Err(ConfigError::ValidationError(
                "output cannot be empty".to_string(),
            ));
        }

        if self.render.max_positions == 0 {
            return Err(ConfigError::ValidationError(format!(
                "max_positions must be > 0, got {}",
                self.render.max_positions
            )));
        }

        Ok(())
    }

    /// Data directory with ~ expanded.
    pub fn data_dir(&self) -> String {
        shellexpand::tilde(&self.sources.data_dir).to_string()
    }
}
