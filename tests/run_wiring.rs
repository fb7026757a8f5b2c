// tests/run_wiring.rs

use clap::Parser;
use taskstack::cli::CliArgs;
use taskstack::errors::{TaskError, TaskstackError};
use taskstack::run_with_sink;
use taskstack_test_utils::sinks::RecordingSink;
use taskstack_test_utils::{init_tracing, with_timeout};
use tokio_util::sync::CancellationToken;

fn args(extra: &[&str]) -> CliArgs {
    CliArgs::try_parse_from(std::iter::once("taskstack").chain(extra.iter().copied()))
        .expect("valid args")
}

#[tokio::test]
async fn unknown_plan_task_fails_before_anything_runs() {
    init_tracing();

    let mut sink = RecordingSink::new();
    let cancel = CancellationToken::new();
    let result = run_with_sink(
        &args(&["--task", "validate-data", "--task", "ghost"]),
        &cancel,
        &mut sink,
    )
    .await;

    match result {
        Err(TaskstackError::UnknownTask(name)) => assert_eq!(name, "ghost"),
        Err(e) => panic!("expected UnknownTask, got: {e:?}"),
        Ok(()) => panic!("expected error, got Ok"),
    }
    // validate-data was listed first but never ran.
    assert!(sink.is_empty());
}

#[tokio::test]
async fn dry_run_executes_nothing() {
    init_tracing();

    let mut sink = RecordingSink::new();
    let cancel = CancellationToken::new();
    let result = run_with_sink(
        &args(&["--dry-run", "--data-state", "stale"]),
        &cancel,
        &mut sink,
    )
    .await;

    assert!(result.is_ok());
    assert!(sink.is_empty());
}

#[tokio::test]
async fn data_state_flag_drives_the_demo_plan() {
    init_tracing();

    let mut sink = RecordingSink::new();
    let cancel = CancellationToken::new();
    let result = with_timeout(run_with_sink(
        &args(&["--data-state", "stale"]),
        &cancel,
        &mut sink,
    ))
    .await;

    // validate-data, the appended refresh-data, then check-eligibility.
    assert!(result.is_ok());
    assert_eq!(sink.len(), 3);
}

#[tokio::test]
async fn task_failure_surfaces_as_task_error() {
    init_tracing();

    let mut sink = RecordingSink::new();
    let cancel = CancellationToken::new();
    let result = run_with_sink(
        &args(&[
            "--task",
            "validate-data",
            "--task",
            "check-eligibility",
            "--data-state",
            "broken",
        ]),
        &cancel,
        &mut sink,
    )
    .await;

    assert!(matches!(
        result,
        Err(TaskstackError::Task(TaskError::Failed(_)))
    ));
    assert_eq!(sink.len(), 1);
}
