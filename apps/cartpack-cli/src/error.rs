//! CLI error types.
//!
//! Every failure the binary can hit, mapped to one message on stderr and a
//! non-zero exit code.

use cartpack_core::{CoreError, ValidationError};
use thiserror::Error;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}\n\nUsage: cartpack <manifest.json> [--config <path>] [--pretty] [--fit-table]")]
    Usage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid manifest: {0}")]
    Manifest(#[from] serde_json::Error),

    #[error("Invalid config file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Config file not found: {0}")]
    ConfigNotFound(String),

    #[error("Packing rejected: {0}")]
    Core(#[from] CoreError),

    #[error("Invalid line item: {0}")]
    LineItem(#[from] ValidationError),

    #[error("Manifest holds {count} units, limit is {max} (see [limits] max_items)")]
    TooManyItems { count: u64, max: usize },
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;
