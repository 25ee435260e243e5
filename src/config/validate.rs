// src/config/validate.rs

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{Result, ScdNotifyError};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = ScdNotifyError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    ensure_not_blank("scdaemon", &cfg.scdaemon)?;
    ensure_not_blank("notify_command", &cfg.notify_command)?;
    ensure_not_blank("cancel_command", &cfg.cancel_command)?;
    validate_wait_time("auth_wait_time", cfg.auth_wait_time.as_secs_f64())?;
    validate_wait_time("sign_wait_time", cfg.sign_wait_time.as_secs_f64())?;
    validate_wait_time("decrypt_wait_time", cfg.decrypt_wait_time.as_secs_f64())?;
    Ok(())
}

fn ensure_not_blank(key: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ScdNotifyError::ConfigError(format!(
            "{key} must not be empty"
        )));
    }
    Ok(())
}

fn validate_wait_time(key: &str, secs: f64) -> Result<()> {
    // `Duration::from_secs_f64` panics on non-finite or overflowing input.
    if !secs.is_finite() || secs <= 0.0 || secs > u32::MAX as f64 {
        return Err(ScdNotifyError::ConfigError(format!(
            "{key} must be a positive number of seconds (got {secs})"
        )));
    }
    Ok(())
}
