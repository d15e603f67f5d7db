use std::path::PathBuf;

use thiserror::Error;

/// Custom error types for tagmatter
#[derive(Debug, Error)]
pub enum TagmatterError {
    #[error("Note not found: {0}")]
    NoteNotFound(PathBuf),

    #[error("Vault directory not found: {0}")]
    VaultNotFound(PathBuf),

    #[error("Invalid config file: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
