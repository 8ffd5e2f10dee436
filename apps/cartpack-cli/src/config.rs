//! # CLI Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command-line flags (highest priority)                              │
//! │     --pretty, --fit-table                                              │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     CARTPACK_LOG_LEVEL=debug                                           │
//! │     CARTPACK_PRETTY=true                                               │
//! │     CARTPACK_FIT_TABLE=true                                            │
//! │     CARTPACK_MAX_ITEMS=20000                                           │
//! │                                                                         │
//! │  3. TOML Config File                                                   │
//! │     --config <path>, or ./cartpack.toml if present                     │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                   │
//! │     level = "info", compact output, no fit table, 5000 units max       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `RUST_LOG`, when set, replaces the configured level entirely.
//!
//! ## Configuration File Format
//! ```toml
//! # cartpack.toml
//! [log]
//! level = "debug"   # trace | debug | info | warn | error
//!
//! [output]
//! pretty = true
//! include_fit_table = false
//!
//! [limits]
//! max_items = 5000  # units per manifest, checked before expansion
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{CliError, CliResult};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "cartpack.toml";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

// =============================================================================
// Settings Sections
// =============================================================================

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogSettings {
    /// Minimum level written to stderr.
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LogSettings {
    fn default() -> Self {
        LogSettings {
            level: default_level(),
        }
    }
}

/// Output settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputSettings {
    /// Pretty-print the JSON report.
    #[serde(default)]
    pub pretty: bool,

    /// Add each item's ranked fitting containers to the report.
    #[serde(default)]
    pub include_fit_table: bool,
}

/// Input size limits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LimitSettings {
    /// Most units a manifest may expand to.
    #[serde(default = "default_max_items")]
    pub max_items: usize,
}

fn default_max_items() -> usize {
    5000
}

impl Default for LimitSettings {
    fn default() -> Self {
        LimitSettings {
            max_items: default_max_items(),
        }
    }
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    #[serde(default)]
    pub log: LogSettings,

    #[serde(default)]
    pub output: OutputSettings,

    #[serde(default)]
    pub limits: LimitSettings,
}

impl CliConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (an explicit path must exist; the default may not)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> CliResult<Self> {
        let mut config = match config_path {
            Some(path) => {
                if !path.exists() {
                    return Err(CliError::ConfigNotFound(path.display().to_string()));
                }
                Self::from_file(&path)?
            }
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::from_file(path)?
                } else {
                    Self::default()
                }
            }
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Reads and parses a TOML config file.
    pub fn from_file(path: &Path) -> CliResult<Self> {
        debug!(?path, "Loading config from file");
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses TOML config text.
    pub fn from_toml_str(contents: &str) -> CliResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Applies `CARTPACK_*` overrides from `lookup`.
    ///
    /// Unparseable boolean and numeric values are ignored.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(level) = lookup("CARTPACK_LOG_LEVEL") {
            self.log.level = level;
        }

        if let Some(pretty) = lookup("CARTPACK_PRETTY").and_then(|v| v.parse().ok()) {
            self.output.pretty = pretty;
        }

        if let Some(table) = lookup("CARTPACK_FIT_TABLE").and_then(|v| v.parse().ok()) {
            self.output.include_fit_table = table;
        }

        if let Some(max) = lookup("CARTPACK_MAX_ITEMS").and_then(|v| v.parse().ok()) {
            self.limits.max_items = max;
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> CliResult<()> {
        let level = self.log.level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(CliError::InvalidConfig(format!(
                "Unknown log level: '{}'. Valid options: {}",
                self.log.level,
                LOG_LEVELS.join(", ")
            )));
        }

        if self.limits.max_items == 0 {
            return Err(CliError::InvalidConfig(
                "limits.max_items must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
