// src/config/model.rs

use serde::Deserialize;

use crate::engine::TaskName;
use crate::types::DataState;

/// Run plan as read from a TOML file, before validation.
///
/// ```toml
/// [run]
/// tasks = ["validate-data", "check-eligibility"]
///
/// [demo]
/// data_state = "stale"
/// refresh_delay_ms = 250
/// ```
///
/// Both sections are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawConfigFile {
    #[serde(default)]
    pub run: RunSection,

    #[serde(default)]
    pub demo: DemoSection,
}

/// `[run]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct RunSection {
    /// Initial task names, in execution order.
    #[serde(default = "default_tasks")]
    pub tasks: Vec<TaskName>,
}

fn default_tasks() -> Vec<TaskName> {
    vec!["validate-data".to_string(), "check-eligibility".to_string()]
}

impl Default for RunSection {
    fn default() -> Self {
        Self {
            tasks: default_tasks(),
        }
    }
}

/// `[demo]` section, consumed by the bundled demo tasks.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DemoSection {
    #[serde(default)]
    pub data_state: DataState,

    /// How long `refresh-data` pretends to work, in milliseconds.
    #[serde(default)]
    pub refresh_delay_ms: u64,
}

/// Validated run plan.
///
/// Only obtainable through `TryFrom<RawConfigFile>` (or [`Default`]).
#[derive(Debug, Clone, Default)]
pub struct ConfigFile {
    pub run: RunSection,
    pub demo: DemoSection,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(run: RunSection, demo: DemoSection) -> Self {
        Self { run, demo }
    }
}
