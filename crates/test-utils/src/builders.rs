use scd_notify::config::{ConfigFile, RawConfigFile};
use scd_notify::types::{LogLevel, WaitTime};

/// Builder for `ConfigFile` to simplify test setup.
///
/// Defaults wrap `cat` and use no-op shell commands with one-second waits.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile {
                scdaemon: "cat".to_string(),
                notify_command: "true".to_string(),
                cancel_command: "true".to_string(),
                auth_wait_time: WaitTime::Whole(1),
                sign_wait_time: WaitTime::Whole(1),
                decrypt_wait_time: WaitTime::Whole(1),
                log_level: None,
            },
        }
    }

    pub fn scdaemon(mut self, path: &str) -> Self {
        self.config.scdaemon = path.to_string();
        self
    }

    pub fn notify_command(mut self, cmd: &str) -> Self {
        self.config.notify_command = cmd.to_string();
        self
    }

    pub fn cancel_command(mut self, cmd: &str) -> Self {
        self.config.cancel_command = cmd.to_string();
        self
    }

    pub fn auth_wait_time(mut self, secs: impl Into<WaitTime>) -> Self {
        self.config.auth_wait_time = secs.into();
        self
    }

    pub fn sign_wait_time(mut self, secs: impl Into<WaitTime>) -> Self {
        self.config.sign_wait_time = secs.into();
        self
    }

    pub fn decrypt_wait_time(mut self, secs: impl Into<WaitTime>) -> Self {
        self.config.decrypt_wait_time = secs.into();
        self
    }

    pub fn log_level(mut self, level: LogLevel) -> Self {
        self.config.log_level = Some(level);
        self
    }

    /// The unvalidated config, for tests that exercise validation.
    pub fn build_raw(self) -> RawConfigFile {
        self.config
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}
