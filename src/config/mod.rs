// src/config/mod.rs

//! Run-plan configuration.
//!
//! - `model.rs`: the TOML-backed data model.
//! - `loader.rs`: reading a plan from disk.
//! - `validate.rs`: turning a raw plan into a checked [`ConfigFile`].

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_from_path};
pub use model::{ConfigFile, DemoSection, RawConfigFile, RunSection};
