use std::env;
use std::path::{Path, PathBuf};

/// Mutable state shared by every command of one shell session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellState {
    current_dir: PathBuf,
}

impl ShellState {
    pub fn new(current_dir: impl Into<PathBuf>) -> Self {
        Self {
            current_dir: current_dir.into(),
        }
    }

    /// Starts from the process working directory.
    pub fn from_process() -> std::io::Result<Self> {
        Ok(Self::new(env::current_dir()?))
    }

    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    pub(crate) fn set_current_dir(&mut self, dir: PathBuf) {
        self.current_dir = dir;
    }

    pub fn prompt(&self) -> String {
        format!("{}$ ", self.current_dir.display())
    }
}
