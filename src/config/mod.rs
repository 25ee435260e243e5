// src/config/mod.rs

//! Configuration loading and validation for scd-notify.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a config file from disk (`loader.rs`).
//! - Validate ranges and non-empty commands (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{
    config_path_from, default_config_path, load_and_validate, load_from_path, CONFIG_PATH_ENV,
};
pub use model::{ConfigFile, RawConfigFile};
