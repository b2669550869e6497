use std::path::PathBuf;

use crate::audit::DEFAULT_LOG_FILE;
use crate::flags::Flags;

/// Startup settings, read once from the command-line flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    pub log_path: PathBuf,
    pub quiet: bool,
    pub debug: bool,
    pub color: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            log_path: PathBuf::from(DEFAULT_LOG_FILE),
            quiet: false,
            debug: false,
            color: true,
        }
    }
}

impl From<&Flags> for ShellConfig {
    fn from(flags: &Flags) -> Self {
        let defaults = ShellConfig::default();
        Self {
            log_path: flags
                .get_value("log")
                .map(PathBuf::from)
                .unwrap_or(defaults.log_path),
            quiet: flags.is_set("quiet"),
            debug: flags.is_set("debug"),
            color: !flags.is_set("no-color"),
        }
    }
}

impl ShellConfig {
    pub fn log_level(&self) -> log::LevelFilter {
        if self.debug {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        }
    }
}
