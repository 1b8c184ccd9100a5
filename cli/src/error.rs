use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Message(String),

    #[error("no ledger state at {0}; run `func-variation init` first")]
    StateNotFound(PathBuf),

    #[error("ledger state already exists at {0}; pass --force to overwrite")]
    StateExists(PathBuf),

    #[error(transparent)]
    Ledger(#[from] func_variation::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
