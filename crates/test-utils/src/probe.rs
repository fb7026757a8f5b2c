#![allow(dead_code)]

use std::future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use taskstack::engine::{Append, Task, TaskFuture, TaskRef};
use tokio_util::sync::CancellationToken;

/// Shared, ordered log of which probes ran.
pub type Journal = Arc<Mutex<Vec<String>>>;

pub fn journal() -> Journal {
    Arc::new(Mutex::new(Vec::new()))
}

pub fn entries(journal: &Journal) -> Vec<String> {
    journal.lock().unwrap().clone()
}

/// Test task that writes its label into a [`Journal`] when it runs.
///
/// It can also append task names (optionally only for its first N runs)
/// and fail with a given message.
pub struct ProbeTask {
    label: String,
    journal: Journal,
    appends: Vec<String>,
    append_limit: Option<usize>,
    fail_with: Option<String>,
    runs: AtomicUsize,
}

impl ProbeTask {
    pub fn new(label: &str, journal: &Journal) -> ProbeTaskBuilder {
        ProbeTaskBuilder {
            task: ProbeTask {
                label: label.to_string(),
                journal: Arc::clone(journal),
                appends: Vec::new(),
                append_limit: None,
                fail_with: None,
                runs: AtomicUsize::new(0),
            },
        }
    }
}

impl Task for ProbeTask {
    fn run<'a>(
        &'a self,
        _cancel: CancellationToken,
        append: &'a mut Append<'_>,
    ) -> TaskFuture<'a> {
        let run = self.runs.fetch_add(1, Ordering::SeqCst);
        self.journal.lock().unwrap().push(self.label.clone());

        if self.append_limit.is_none_or(|limit| run < limit) {
            for name in &self.appends {
                append.append_task(name);
            }
        }

        let result = match self.fail_with {
            Some(ref msg) => Err(anyhow::anyhow!("{msg}")),
            None => Ok(()),
        };
        Box::pin(future::ready(result))
    }
}

pub struct ProbeTaskBuilder {
    task: ProbeTask,
}

impl ProbeTaskBuilder {
    /// Append `name` every time the probe runs (see [`Self::append_limit`]).
    pub fn appends(mut self, name: &str) -> Self {
        self.task.appends.push(name.to_string());
        self
    }

    /// Only append during the first `limit` runs of this probe.
    pub fn append_limit(mut self, limit: usize) -> Self {
        self.task.append_limit = Some(limit);
        self
    }

    pub fn fails_with(mut self, msg: &str) -> Self {
        self.task.fail_with = Some(msg.to_string());
        self
    }

    pub fn build(self) -> TaskRef {
        Arc::new(self.task)
    }
}
