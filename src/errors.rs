// src/errors.rs

//! Crate-wide error types and aliases.

use thiserror::Error;

use crate::engine::TaskName;

/// Returned by [`WorkStack::top`](crate::engine::WorkStack::top) when there
/// is nothing left to pop.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("stack is empty")]
pub struct EmptyStackError;

/// Why a run stopped early.
///
/// This is what [`execute`](crate::engine::execute) hands back to its caller.
#[derive(Error, Debug)]
pub enum TaskError {
    /// A task name was appended that the registry does not know. Appending
    /// succeeds; this error is only raised once the missing task would run.
    #[error("invalid task reference: no task registered under '{0}'")]
    InvalidTaskReference(TaskName),

    /// The unit's own body returned an error.
    #[error(transparent)]
    Failed(#[from] anyhow::Error),
}

#[derive(Error, Debug)]
pub enum TaskstackError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Task not registered: {0}")]
    UnknownTask(TaskName),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Task run failed: {0}")]
    Task(#[from] TaskError),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, TaskstackError>;
