// src/engine/mod.rs

//! Sequential task execution engine.
//!
//! - [`stack`] is the LIFO container of pending work.
//! - [`task`] defines the [`Task`] contract and the entries kept on the stack.
//! - [`registry`] maps task names to tasks.
//! - [`append`] is the handle a running task uses to schedule more work.
//! - [`outcome`] holds the per-invocation record and the sink contract.
//! - [`executor`] owns the run loop.

/// Task name as used for registry keys and appends.
pub type TaskName = String;

pub mod append;
pub mod executor;
pub mod outcome;
pub mod registry;
pub mod stack;
pub mod task;

pub use append::Append;
pub use executor::execute;
pub use outcome::{
    DiscardSink, ExecutionId, FailureKind, Outcome, OutcomeError, OutcomeSink, TracingSink,
};
pub use registry::{TaskRegistry, TaskRegistryBuilder};
pub use stack::WorkStack;
pub use task::{FnTask, StackEntry, Task, TaskFuture, TaskRef, task_fn};
