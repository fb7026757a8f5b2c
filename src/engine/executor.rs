// src/engine/executor.rs

//! The sequential run loop.

use chrono::Utc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::engine::{
    Append, ExecutionId, Outcome, OutcomeError, OutcomeSink, StackEntry, TaskRef, TaskRegistry,
    WorkStack,
};
use crate::errors::TaskError;

/// Run `tasks` to completion, one at a time.
///
/// - The first element of `tasks` runs first, then the second, and so on.
/// - Each task gets a clone of `cancel` and an [`Append`] bound to this
///   run; anything it appends runs right after it, most recent append first,
///   ahead of the rest of the queue.
/// - Every invocation is timed and reported to `sink` with a fresh
///   [`ExecutionId`]. Sink failures are logged and ignored.
/// - The first task error ends the run. Whatever is still queued is dropped
///   unexecuted and the error is returned as-is.
///
/// `cancel` is passed through but never checked between tasks.
pub async fn execute<S>(
    cancel: &CancellationToken,
    registry: &TaskRegistry,
    tasks: Vec<TaskRef>,
    sink: &mut S,
) -> Result<(), TaskError>
where
    S: OutcomeSink + ?Sized,
{
    // Reversed so that the first task ends up on top.
    let mut stack: WorkStack<StackEntry> =
        tasks.into_iter().rev().map(StackEntry::Resolved).collect();
    info!(initial = stack.len(), "starting task run");

    let mut executed: usize = 0;

    loop {
        let Ok(entry) = stack.top() else {
            info!(executed, "work stack drained; run complete");
            return Ok(());
        };

        let execution_id = ExecutionId::new();
        let start = Utc::now();
        debug!(%execution_id, pending = stack.len(), "invoking task");

        let result = {
            let mut append = Append::new(&mut stack, registry);
            entry.invoke(cancel.clone(), &mut append).await
        };

        let stop = Utc::now();
        executed += 1;

        let outcome = Outcome {
            execution_id,
            start,
            stop,
            name: String::new(),
            error: result.as_ref().err().map(OutcomeError::from),
        };
        if let Err(err) = sink.record(outcome) {
            warn!(%execution_id, error = %err, "failed to record task outcome; ignoring");
        }

        if let Err(err) = result {
            warn!(
                %execution_id,
                executed,
                discarded = stack.len(),
                error = %err,
                "task failed; aborting run"
            );
            return Err(err);
        }
    }
}
