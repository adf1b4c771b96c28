//! Error types for the CLI.

use std::path::PathBuf;

/// All errors that can occur while running the CLI.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("input error: {0}")]
    Input(String),

    #[error("failed to read input file {path}: {source}")]
    InputRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse input: {0}")]
    InputParse(#[from] toml::de::Error),

    #[error("cost analysis failed: {0}")]
    Engine(#[from] nanotca::TcaError),

    #[error("{0} transaction(s) failed validation")]
    Validation(usize),

    #[error("failed to encode JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
