// src/engine/registry.rs

//! Name-keyed lookup table of tasks.

use std::collections::HashMap;
use std::fmt;

use crate::engine::{TaskName, TaskRef};
use crate::errors::{Result, TaskstackError};

/// Mapping from task name to task.
///
/// Fully built before a run starts; the engine only ever reads it. Looking
/// up an absent name is not an error here, it simply yields `None`.
#[derive(Clone, Default)]
pub struct TaskRegistry {
    tasks: HashMap<TaskName, TaskRef>,
}

impl TaskRegistry {
    pub fn builder() -> TaskRegistryBuilder {
        TaskRegistryBuilder::default()
    }

    pub fn lookup(&self, name: &str) -> Option<TaskRef> {
        self.tasks.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tasks.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Registered names, sorted for stable output.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tasks.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Resolve an ordered list of names into tasks, in the same order.
    ///
    /// Unlike appends made during a run, this fails up front on the first
    /// unknown name.
    pub fn resolve_all<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<TaskRef>> {
        names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                self.lookup(name)
                    .ok_or_else(|| TaskstackError::UnknownTask(name.to_string()))
            })
            .collect()
    }
}

impl fmt::Debug for TaskRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskRegistry")
            .field("names", &self.names())
            .finish()
    }
}

impl<N: Into<TaskName>> FromIterator<(N, TaskRef)> for TaskRegistry {
    fn from_iter<I: IntoIterator<Item = (N, TaskRef)>>(iter: I) -> Self {
        Self {
            tasks: iter.into_iter().map(|(name, task)| (name.into(), task)).collect(),
        }
    }
}

/// Builder for [`TaskRegistry`].
#[derive(Default)]
pub struct TaskRegistryBuilder {
    tasks: HashMap<TaskName, TaskRef>,
}

impl TaskRegistryBuilder {
    /// Register `task` under `name`. A later registration of the same name
    /// replaces the earlier one.
    pub fn register(mut self, name: impl Into<TaskName>, task: TaskRef) -> Self {
        self.tasks.insert(name.into(), task);
        self
    }

    pub fn build(self) -> TaskRegistry {
        TaskRegistry { tasks: self.tasks }
    }
}
