// src/errors.rs

//! Crate-wide error aliases and helpers.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlandagError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Malformed instruction on line {line}: {text:?}")]
    MalformedInstruction { line: usize, text: String },

    #[error("Cycle detected in DAG: {0}")]
    DagCycle(String),

    #[error("Worker count must be >= 1 (got {0})")]
    InvalidWorkerCount(usize),

    #[error("Task '{0}' has a zero duration")]
    ZeroDuration(String),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, PlandagError>;
