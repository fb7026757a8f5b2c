// src/demo/mod.rs

//! Bundled demo tasks used by the `taskstack` binary.
//!
//! They show the append contract in action: `validate-data` appends
//! `refresh-data` when it finds stale data and then reports success itself,
//! so the refresh runs next. Nothing re-runs the validation afterwards.

pub mod tasks;

use std::sync::Arc;
use std::time::Duration;

use crate::config::DemoSection;
use crate::engine::TaskRegistry;

pub use tasks::{
    CHECK_ELIGIBILITY, CheckEligibility, DataOutdated, DataSource, REFRESH_DATA, RefreshData,
    VALIDATE_DATA, ValidateData, source_for,
};

/// Build the registry of demo tasks for the given settings.
pub fn registry(demo: &DemoSection) -> TaskRegistry {
    TaskRegistry::builder()
        .register(VALIDATE_DATA, Arc::new(ValidateData::new(source_for(demo.data_state))))
        .register(
            REFRESH_DATA,
            Arc::new(RefreshData::new(Duration::from_millis(demo.refresh_delay_ms))),
        )
        .register(CHECK_ELIGIBILITY, Arc::new(CheckEligibility))
        .build()
}
