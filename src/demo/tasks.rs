// src/demo/tasks.rs

use std::future;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, bail};
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::engine::{Append, Task, TaskFuture};
use crate::types::DataState;

pub const VALIDATE_DATA: &str = "validate-data";
pub const REFRESH_DATA: &str = "refresh-data";
pub const CHECK_ELIGIBILITY: &str = "check-eligibility";

/// Signalled by a [`DataSource`] when its data needs refreshing.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("data is outdated")]
pub struct DataOutdated;

/// Where `validate-data` gets its data from.
pub type DataSource = Arc<dyn Fn() -> anyhow::Result<String> + Send + Sync>;

/// Canned data source for a [`DataState`].
pub fn source_for(state: DataState) -> DataSource {
    match state {
        DataState::Fresh => Arc::new(|| -> anyhow::Result<String> {
            Ok("snapshot is current".to_string())
        }),
        DataState::Stale => Arc::new(|| -> anyhow::Result<String> { Err(DataOutdated.into()) }),
        DataState::Broken => Arc::new(|| -> anyhow::Result<String> {
            bail!("data source unavailable")
        }),
    }
}

/// Validates data from a [`DataSource`].
///
/// Outdated data is not a failure: a `refresh-data` task is appended and this
/// task succeeds. Any other source error fails the run.
pub struct ValidateData {
    source: DataSource,
}

impl ValidateData {
    pub fn new(source: DataSource) -> Self {
        Self { source }
    }

    fn validate(
        &self,
        cancel: &CancellationToken,
        append: &mut Append<'_>,
    ) -> anyhow::Result<()> {
        if cancel.is_cancelled() {
            bail!("validation cancelled");
        }

        match (self.source)() {
            Ok(data) => {
                info!(%data, "data validated");
                Ok(())
            }
            Err(err) if err.chain().any(|cause| cause.is::<DataOutdated>()) => {
                info!("data outdated; scheduling refresh");
                append.append_task(REFRESH_DATA);
                Ok(())
            }
            Err(err) => Err(err).context("fetching data for validation"),
        }
    }
}

impl Task for ValidateData {
    fn run<'a>(
        &'a self,
        cancel: CancellationToken,
        append: &'a mut Append<'_>,
    ) -> TaskFuture<'a> {
        Box::pin(future::ready(self.validate(&cancel, append)))
    }
}

/// Re-fetches data. Appends nothing.
///
/// The refresh is simulated by waiting `delay`; cancellation during the wait
/// fails the task.
#[derive(Debug, Clone)]
pub struct RefreshData {
    delay: Duration,
}

impl RefreshData {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Task for RefreshData {
    fn run<'a>(
        &'a self,
        cancel: CancellationToken,
        _append: &'a mut Append<'_>,
    ) -> TaskFuture<'a> {
        Box::pin(async move {
            if cancel.is_cancelled() {
                bail!("refresh cancelled before it started");
            }

            debug!(delay_ms = self.delay.as_millis() as u64, "refreshing data");
            tokio::select! {
                _ = cancel.cancelled() => bail!("refresh cancelled"),
                _ = tokio::time::sleep(self.delay) => {}
            }

            info!("data refreshed");
            Ok(())
        })
    }
}

/// Final check of the demo plan. Succeeds unless the run was cancelled.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckEligibility;

impl Task for CheckEligibility {
    fn run<'a>(
        &'a self,
        cancel: CancellationToken,
        _append: &'a mut Append<'_>,
    ) -> TaskFuture<'a> {
        let result = if cancel.is_cancelled() {
            Err(anyhow::anyhow!("eligibility check cancelled"))
        } else {
            info!("subject is eligible");
            Ok(())
        };
        Box::pin(future::ready(result))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::engine::{DiscardSink, TaskRef, TaskRegistry, execute, task_fn};

    /// Error from a lower layer that keeps `DataOutdated` as its source.
    #[derive(Error, Debug)]
    #[error("upstream fetch failed")]
    struct UpstreamError(#[source] DataOutdated);

    #[tokio::test]
    async fn outdated_data_nested_in_source_chain_schedules_refresh() {
        let refreshes = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&refreshes);
        let registry = TaskRegistry::builder()
            .register(
                REFRESH_DATA,
                task_fn(move |_, _| {
                    counter.fetch_add(1, Ordering::SeqCst);
                    Ok(())
                }),
            )
            .build();

        let source: DataSource =
            Arc::new(|| -> anyhow::Result<String> { Err(UpstreamError(DataOutdated).into()) });
        let validate: TaskRef = Arc::new(ValidateData::new(source));

        let cancel = CancellationToken::new();
        let result = execute(&cancel, &registry, vec![validate], &mut DiscardSink).await;

        assert!(result.is_ok());
        assert_eq!(refreshes.load(Ordering::SeqCst), 1);
    }
}
