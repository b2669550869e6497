mod file_ops;

use std::{fmt, path::PathBuf};

use chrono::Local;

use self::file_ops::FileOps;

pub const DEFAULT_LOG_FILE: &str = "shell.log";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug)]
pub enum AuditError {
    Io(PathBuf, std::io::Error),
}

impl fmt::Display for AuditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuditError::Io(path, e) => write!(f, "audit log {}: {}", path.display(), e),
        }
    }
}

impl std::error::Error for AuditError {}

/// Append-only record of every command line and how it ended.
///
/// ```text
/// === Shell started at 2024-05-01 10:00:00 ===
/// [2024-05-01 10:00:03] cat nofile.txt
/// [2024-05-01 10:00:03] ERROR: cat: /home/user/nofile.txt: No such file or directory
/// ```
#[derive(Debug, Clone)]
pub struct AuditLog {
    file_ops: FileOps,
}

impl AuditLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            file_ops: FileOps::new(path.into()),
        }
    }

    pub fn path(&self) -> &std::path::Path {
        self.file_ops.path()
    }

    pub fn start_session(&self) -> Result<(), AuditError> {
        let banner = format!("=== Shell started at {} ===", timestamp());
        self.append(&[String::new(), banner])
    }

    /// Records one command. A failed command gets a second `ERROR:` line
    /// carrying the same timestamp.
    pub fn record(&self, command_line: &str, error: Option<&str>) -> Result<(), AuditError> {
        let stamp = timestamp();
        let mut lines = vec![format!("[{}] {}", stamp, command_line)];
        if let Some(message) = error {
            lines.push(format!("[{}] ERROR: {}", stamp, message));
        }
        self.append(&lines)
    }

    fn append(&self, lines: &[String]) -> Result<(), AuditError> {
        self.file_ops
            .append_lines(lines)
            .map_err(|e| AuditError::Io(self.file_ops.path().to_path_buf(), e))
    }
}

fn timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}
