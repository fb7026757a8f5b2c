// src/engine/task.rs

//! The unit-of-work contract.
//!
//! A [`Task`] is invoked with a cancellation token and an [`Append`] handle
//! and reports success or an opaque error. Tasks carry no name of their own;
//! only the registry key they were stored under identifies them.

use std::fmt;
use std::future::{self, Future};
use std::pin::Pin;
use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::engine::{Append, TaskName};
use crate::errors::TaskError;

/// Future returned by [`Task::run`].
pub type TaskFuture<'a> = Pin<Box<dyn Future<Output = anyhow::Result<()>> + Send + 'a>>;

/// Shared handle to a task, as stored in registries and on the work stack.
pub type TaskRef = Arc<dyn Task>;

/// A unit of work.
///
/// The executor awaits each task to completion before it pops the next one.
/// Tasks may spawn concurrent work internally, but only the final result is
/// observed. Reacting to `cancel` is the task's own job; the executor never
/// checks it.
pub trait Task: Send + Sync {
    fn run<'a>(
        &'a self,
        cancel: CancellationToken,
        append: &'a mut Append<'_>,
    ) -> TaskFuture<'a>;
}

/// Adapter turning a synchronous closure into a [`Task`].
///
/// Built with [`task_fn`].
pub struct FnTask<F> {
    body: F,
}

impl<F> Task for FnTask<F>
where
    F: Fn(&CancellationToken, &mut Append<'_>) -> anyhow::Result<()> + Send + Sync,
{
    fn run<'a>(
        &'a self,
        cancel: CancellationToken,
        append: &'a mut Append<'_>,
    ) -> TaskFuture<'a> {
        let result = (self.body)(&cancel, append);
        Box::pin(future::ready(result))
    }
}

impl<F> fmt::Debug for FnTask<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnTask").finish_non_exhaustive()
    }
}

/// Wrap a closure as a shareable task.
///
/// ```ignore
/// let refresh = task_fn(|_cancel, append| {
///     append.append_task("notify");
///     Ok(())
/// });
/// ```
pub fn task_fn<F>(body: F) -> TaskRef
where
    F: Fn(&CancellationToken, &mut Append<'_>) -> anyhow::Result<()>
        + Send
        + Sync
        + 'static,
{
    Arc::new(FnTask { body })
}

/// What actually sits on the work stack.
///
/// Initial tasks and successful registry lookups are `Resolved`. A lookup of
/// an unregistered name still pushes an entry, but one that fails with
/// [`TaskError::InvalidTaskReference`] once it is popped and invoked.
#[derive(Clone)]
pub enum StackEntry {
    Resolved(TaskRef),
    Unresolved(TaskName),
}

impl StackEntry {
    pub(crate) async fn invoke(
        &self,
        cancel: CancellationToken,
        append: &mut Append<'_>,
    ) -> Result<(), TaskError> {
        match self {
            StackEntry::Resolved(task) => {
                task.run(cancel, append).await.map_err(TaskError::Failed)
            }
            StackEntry::Unresolved(name) => Err(TaskError::InvalidTaskReference(name.clone())),
        }
    }
}

impl fmt::Debug for StackEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StackEntry::Resolved(_) => f.write_str("Resolved(<task>)"),
            StackEntry::Unresolved(name) => f.debug_tuple("Unresolved").field(name).finish(),
        }
    }
}
