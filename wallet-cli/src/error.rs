use std::path::PathBuf;
use thiserror::Error;

/// Global error type for the wallet CLI.
#[derive(Error, Debug)]
pub enum CliError {
    /// A snapshot file could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A snapshot file was not valid JSON, or held an invalid record.
    #[error("Invalid snapshot {path}: {source}")]
    Snapshot {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Configuration sources could not be merged or deserialized.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// The price feed request failed or returned an unusable body.
    #[error("Price feed request failed: {0}")]
    Feed(#[from] reqwest::Error),

    /// Input rejected by the wallet core.
    #[error(transparent)]
    Wallet(#[from] wallet::WalletError),

    /// Failed to serialize command output.
    #[error("JSON output error: {0}")]
    Output(#[from] serde_json::Error),
}

/// A specialized Result type for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
