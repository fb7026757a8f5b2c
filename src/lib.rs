// src/lib.rs

pub mod cli;
pub mod config;
pub mod demo;
pub mod engine;
pub mod errors;
pub mod logging;
pub mod types;

use std::path::PathBuf;

use anyhow::Result;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::loader::load_from_path;
use crate::config::{ConfigFile, RawConfigFile};
use crate::engine::{OutcomeSink, TaskRegistry, TracingSink, execute};
use crate::errors::TaskstackError;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - Ctrl-C handling via a cancellation token
/// - [`run_with_sink`], reporting outcomes through `tracing`
pub async fn run(args: CliArgs) -> Result<()> {
    let cancel = CancellationToken::new();
    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                eprintln!("failed to listen for Ctrl+C: {e}");
                return;
            }
            info!("Ctrl+C received; cancelling run");
            cancel.cancel();
        });
    }

    let mut sink = TracingSink;
    run_with_sink(&args, &cancel, &mut sink).await?;
    Ok(())
}

/// Resolve the plan from `args`, build the demo registry and execute the
/// plan, reporting every invocation to `sink`.
///
/// Unknown plan names fail with [`TaskstackError::UnknownTask`] before any
/// task runs. With `--dry-run` the plan is printed and nothing runs.
pub async fn run_with_sink<S>(
    args: &CliArgs,
    cancel: &CancellationToken,
    sink: &mut S,
) -> crate::errors::Result<()>
where
    S: OutcomeSink + ?Sized,
{
    let cfg = resolve_config(args)?;
    let registry = demo::registry(&cfg.demo);

    // Fail before anything runs if the plan names an unknown task.
    let tasks = registry.resolve_all(cfg.run.tasks.as_slice())?;

    if args.dry_run {
        print_dry_run(&cfg, &registry);
        return Ok(());
    }

    info!(plan = ?cfg.run.tasks, "running plan");
    execute(cancel, &registry, tasks, sink)
        .await
        .map_err(TaskstackError::from)
}

/// Load the plan file (if any), apply CLI overrides, then validate.
pub(crate) fn resolve_config(args: &CliArgs) -> crate::errors::Result<ConfigFile> {
    let mut raw = match args.config {
        Some(ref path) => load_from_path(PathBuf::from(path))?,
        None => RawConfigFile::default(),
    };

    if !args.tasks.is_empty() {
        raw.run.tasks = args.tasks.clone();
    }
    if let Some(state) = args.data_state {
        raw.demo.data_state = state;
    }

    let cfg = ConfigFile::try_from(raw)?;
    debug!(?cfg, "resolved run plan");
    Ok(cfg)
}

fn print_dry_run(cfg: &ConfigFile, registry: &TaskRegistry) {
    println!("taskstack dry-run");
    println!("  demo.data_state = {:?}", cfg.demo.data_state);
    println!("  demo.refresh_delay_ms = {}", cfg.demo.refresh_delay_ms);
    println!();

    println!("plan ({}):", cfg.run.tasks.len());
    for (idx, name) in cfg.run.tasks.iter().enumerate() {
        println!("  {}. {name}", idx + 1);
    }
    println!();

    println!("registered tasks ({}):", registry.len());
    for name in registry.names() {
        println!("  - {name}");
    }

    debug!("dry-run complete (no execution)");
}
