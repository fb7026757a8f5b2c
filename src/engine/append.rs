// src/engine/append.rs

//! The per-run "schedule task by name" capability.

use tracing::{debug, warn};

use crate::engine::{StackEntry, TaskRegistry, WorkStack};

/// Handle lent to the running task so it can schedule follow-up work.
///
/// Bound to exactly one run's stack and registry. The name is looked up when
/// [`append_task`](Self::append_task) is called, not when the entry is later
/// popped. Because the stack is LIFO, the most recently appended task runs
/// next, ahead of everything that was queued before it.
pub struct Append<'r> {
    stack: &'r mut WorkStack<StackEntry>,
    registry: &'r TaskRegistry,
}

impl<'r> Append<'r> {
    pub fn new(stack: &'r mut WorkStack<StackEntry>, registry: &'r TaskRegistry) -> Self {
        Self { stack, registry }
    }

    /// Resolve `name` through the registry and push the result.
    ///
    /// Never fails. An unknown name is pushed as an unresolved entry and only
    /// errors when it comes up for execution.
    pub fn append_task(&mut self, name: &str) {
        let entry = match self.registry.lookup(name) {
            Some(task) => {
                debug!(task = %name, "appending task");
                StackEntry::Resolved(task)
            }
            None => {
                warn!(task = %name, "appending unregistered task; it will fail when run");
                StackEntry::Unresolved(name.to_string())
            }
        };
        self.stack.push(entry);
    }

    /// Number of entries still pending on the run's stack.
    pub fn pending(&self) -> usize {
        self.stack.len()
    }
}
