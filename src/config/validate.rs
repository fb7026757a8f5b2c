// src/config/validate.rs

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{Result, TaskstackError};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = TaskstackError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw.run, raw.demo))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    validate_task_names(cfg)?;
    Ok(())
}

// Duplicates are fine; the engine happily runs the same task twice.
fn validate_task_names(cfg: &RawConfigFile) -> Result<()> {
    for (idx, name) in cfg.run.tasks.iter().enumerate() {
        if name.trim().is_empty() {
            return Err(TaskstackError::ConfigError(format!(
                "[run].tasks[{idx}] must not be blank"
            )));
        }
    }
    Ok(())
}
