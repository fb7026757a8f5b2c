// tests/execute_failure.rs

use taskstack::engine::{
    DiscardSink, FailureKind, OutcomeError, TaskRef, TaskRegistry, execute,
};
use taskstack::errors::TaskError;
use taskstack_test_utils::init_tracing;
use taskstack_test_utils::probe::{ProbeTask, entries, journal};
use taskstack_test_utils::sinks::{FailingSink, RecordingSink};
use tokio_util::sync::CancellationToken;

#[tokio::test]
async fn failing_task_stops_the_run_and_is_returned() {
    init_tracing();

    let log = journal();
    let tasks: Vec<TaskRef> = vec![
        ProbeTask::new("f1", &log).build(),
        ProbeTask::new("f2", &log).fails_with("E").build(),
        ProbeTask::new("f3", &log).build(),
    ];

    let mut sink = RecordingSink::new();
    let cancel = CancellationToken::new();
    let result = execute(&cancel, &TaskRegistry::default(), tasks, &mut sink).await;

    match result {
        Err(TaskError::Failed(err)) => assert_eq!(err.to_string(), "E"),
        Err(e) => panic!("expected Failed, got: {e:?}"),
        Ok(()) => panic!("expected error, got Ok"),
    }

    assert_eq!(entries(&log), vec!["f1", "f2"]);

    let outcomes = sink.outcomes();
    assert_eq!(outcomes.len(), 2);
    assert!(outcomes[0].is_success());
    assert_eq!(
        outcomes[1].error,
        Some(OutcomeError {
            kind: FailureKind::Failed,
            message: "E".to_string(),
        })
    );
    assert_ne!(outcomes[0].execution_id, outcomes[1].execution_id);
    for outcome in &outcomes {
        assert!(outcome.start <= outcome.stop);
    }
}

#[tokio::test]
async fn pending_appends_are_discarded_after_failure() {
    init_tracing();

    let log = journal();
    let registry = TaskRegistry::builder()
        .register("never", ProbeTask::new("never", &log).build())
        .register("boom", ProbeTask::new("boom", &log).fails_with("boom").build())
        .build();

    // Appends "never" first, then "boom": boom runs first and fails, so
    // "never" and "tail" are dropped.
    let tasks: Vec<TaskRef> = vec![
        ProbeTask::new("head", &log).appends("never").appends("boom").build(),
        ProbeTask::new("tail", &log).build(),
    ];

    let mut sink = RecordingSink::new();
    let cancel = CancellationToken::new();
    let result = execute(&cancel, &registry, tasks, &mut sink).await;

    assert!(matches!(result, Err(TaskError::Failed(_))));
    assert_eq!(entries(&log), vec!["head", "boom"]);
    assert_eq!(sink.len(), 2);
}

#[tokio::test]
async fn unregistered_append_fails_only_when_invoked() {
    init_tracing();

    let log = journal();
    let tasks: Vec<TaskRef> = vec![
        ProbeTask::new("appender", &log).appends("ghost").build(),
        ProbeTask::new("tail", &log).build(),
    ];

    let mut sink = RecordingSink::new();
    let cancel = CancellationToken::new();
    let result = execute(&cancel, &TaskRegistry::default(), tasks, &mut sink).await;

    match result {
        Err(TaskError::InvalidTaskReference(name)) => assert_eq!(name, "ghost"),
        Err(e) => panic!("expected InvalidTaskReference, got: {e:?}"),
        Ok(()) => panic!("expected error, got Ok"),
    }

    // The appending task itself succeeded; the ghost entry was reported as a
    // failed invocation and the tail never ran.
    assert_eq!(entries(&log), vec!["appender"]);
    let outcomes = sink.outcomes();
    assert_eq!(outcomes.len(), 2);
    assert!(outcomes[0].is_success());
    let error = outcomes[1].error.as_ref().expect("ghost entry failed");
    assert_eq!(error.kind, FailureKind::InvalidTaskReference);
    assert!(error.message.contains("'ghost'"));
}

#[tokio::test]
async fn sink_failures_do_not_affect_the_run() {
    init_tracing();

    let log = journal();
    let tasks: Vec<TaskRef> = vec![
        ProbeTask::new("a", &log).build(),
        ProbeTask::new("b", &log).build(),
    ];

    let mut sink = FailingSink::new();
    let cancel = CancellationToken::new();
    let result = execute(&cancel, &TaskRegistry::default(), tasks, &mut sink).await;

    assert!(result.is_ok());
    assert_eq!(entries(&log), vec!["a", "b"]);
    assert_eq!(sink.calls(), 2);
}

#[tokio::test]
async fn closures_work_as_sinks() {
    init_tracing();

    let log = journal();
    let tasks: Vec<TaskRef> = vec![ProbeTask::new("only", &log).build()];

    let mut seen = Vec::new();
    let mut sink = |outcome: taskstack::engine::Outcome| -> anyhow::Result<()> {
        seen.push(outcome.execution_id);
        Ok(())
    };
    let cancel = CancellationToken::new();
    let result = execute(&cancel, &TaskRegistry::default(), tasks, &mut sink).await;

    assert!(result.is_ok());
    assert_eq!(seen.len(), 1);
}

#[tokio::test]
async fn discarding_sink_still_reports_task_failure() {
    init_tracing();

    let log = journal();
    let tasks: Vec<TaskRef> = vec![
        ProbeTask::new("ok", &log).build(),
        ProbeTask::new("bad", &log).fails_with("bad input").build(),
        ProbeTask::new("skipped", &log).build(),
    ];

    let cancel = CancellationToken::new();
    let result = execute(&cancel, &TaskRegistry::default(), tasks, &mut DiscardSink).await;

    assert!(matches!(result, Err(TaskError::Failed(ref e)) if e.to_string() == "bad input"));
    assert_eq!(entries(&log), vec!["ok", "bad"]);
}
