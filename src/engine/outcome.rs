// src/engine/outcome.rs

//! Per-invocation outcome records and the sinks that receive them.

use std::fmt;

use chrono::{DateTime, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use crate::engine::TaskName;
use crate::errors::TaskError;

/// Unique identifier of a single task invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExecutionId(pub Uuid);

impl ExecutionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ExecutionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ExecutionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Record of one task invocation, handed to the [`OutcomeSink`] by value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub execution_id: ExecutionId,
    pub start: DateTime<Utc>,
    pub stop: DateTime<Utc>,
    /// Always empty: once a task is on the stack the engine no longer knows
    /// which registry name it came from.
    pub name: TaskName,
    pub error: Option<OutcomeError>,
}

/// Which kind of failure ended an invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The entry was appended under a name the registry does not know.
    InvalidTaskReference,
    /// The task body returned an error.
    Failed,
}

/// Owned copy of a [`TaskError`] for the sink: its kind plus the rendered
/// error chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutcomeError {
    pub kind: FailureKind,
    pub message: String,
}

impl From<&TaskError> for OutcomeError {
    fn from(err: &TaskError) -> Self {
        let kind = match err {
            TaskError::InvalidTaskReference(_) => FailureKind::InvalidTaskReference,
            TaskError::Failed(_) => FailureKind::Failed,
        };
        Self {
            kind,
            message: format!("{err:#}"),
        }
    }
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    pub fn elapsed(&self) -> chrono::Duration {
        self.stop - self.start
    }
}

/// Caller-supplied reporting callback, invoked once per executed task.
///
/// Errors returned from here are logged and otherwise discarded; they never
/// stop or alter the run.
pub trait OutcomeSink {
    fn record(&mut self, outcome: Outcome) -> anyhow::Result<()>;
}

impl<F> OutcomeSink for F
where
    F: FnMut(Outcome) -> anyhow::Result<()>,
{
    fn record(&mut self, outcome: Outcome) -> anyhow::Result<()> {
        self(outcome)
    }
}

/// Drops every outcome.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscardSink;

impl OutcomeSink for DiscardSink {
    fn record(&mut self, _outcome: Outcome) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Reports each outcome as a structured `tracing` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl OutcomeSink for TracingSink {
    fn record(&mut self, outcome: Outcome) -> anyhow::Result<()> {
        let elapsed_ms = outcome.elapsed().num_milliseconds();
        match outcome.error {
            None => info!(
                execution_id = %outcome.execution_id,
                start = %outcome.start,
                elapsed_ms,
                "task succeeded"
            ),
            Some(ref error) => warn!(
                execution_id = %outcome.execution_id,
                start = %outcome.start,
                elapsed_ms,
                kind = ?error.kind,
                error = %error.message,
                "task failed"
            ),
        }
        Ok(())
    }
}
