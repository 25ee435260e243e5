// src/config/loader.rs

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::Result;

/// Environment variable that overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "SCD_NOTIFY_CONFIG";

/// Load a configuration file from a given path and return the raw
/// `RawConfigFile`.
///
/// This only performs TOML deserialization (which already rejects missing
/// fields, wrong types and unknown log levels); it does **not** check value
/// ranges. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawConfigFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let config: RawConfigFile = toml::from_str(&contents)?;

    Ok(config)
}

/// Load a configuration file from path and run validation.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let raw_config = load_from_path(&path)?;
    let config = ConfigFile::try_from(raw_config)?;
    Ok(config)
}

/// Resolve the config path.
///
/// `SCD_NOTIFY_CONFIG` wins; otherwise `scd-notify.toml` in the user's
/// config directory (e.g. `~/.config/scd-notify.toml`).
pub fn default_config_path() -> PathBuf {
    config_path_from(std::env::var_os(CONFIG_PATH_ENV))
}

/// Same as [`default_config_path`], with the env value passed in.
pub fn config_path_from(env_value: Option<OsString>) -> PathBuf {
    if let Some(path) = env_value.filter(|p| !p.is_empty()) {
        return PathBuf::from(path);
    }

    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("scd-notify.toml")
}
