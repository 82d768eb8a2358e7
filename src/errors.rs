// src/errors.rs

//! Crate-wide error aliases and helpers.
//!
//! Only the ambient layers (snapshot loading, CLI) return errors. The
//! engine derivations themselves tolerate corrupted store data and return
//! best-effort values instead of failing (missing dependency ids, stored
//! cycles), so none of them produce a `TaskdagError`.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaskdagError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Task not found: {0}")]
    TaskNotFound(String),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, TaskdagError>;
