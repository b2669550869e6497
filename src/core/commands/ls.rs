use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

use super::args::ParsedArgs;
use super::fs_ops::{format_mtime, mode_string};
use super::{Command, CommandContext, CommandError, CommandResult, Outcome};

/// `ls [-l] [path]`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LsCommand;

impl LsCommand {
    fn detailed_line(dir: &Path, name: &str) -> std::io::Result<String> {
        let entry = dir.join(name);
        // Dangling links still get a line of their own
        let meta = fs::metadata(&entry).or_else(|_| fs::symlink_metadata(&entry))?;
        Ok(format!(
            "{} {:8} {} {}",
            mode_string(meta.permissions().mode()),
            meta.len(),
            format_mtime(&meta)?,
            name
        ))
    }
}

impl Command for LsCommand {
    fn execute(&self, args: &[String], ctx: &mut CommandContext<'_>) -> CommandResult {
        let parsed = ParsedArgs::parse(args, &["-l"]);
        let path = ctx.resolve(parsed.last().unwrap_or(""));

        if !path.exists() {
            return Err(CommandError::NotFound(path));
        }
        if !path.is_dir() {
            return Err(CommandError::NotADirectory(path));
        }

        let mut names = fs::read_dir(&path)?
            .map(|entry| entry.map(|e| e.file_name().to_string_lossy().into_owned()))
            .collect::<std::io::Result<Vec<_>>>()?;
        names.sort();

        let lines = if parsed.has("-l") {
            names
                .iter()
                .map(|name| Self::detailed_line(&path, name))
                .collect::<std::io::Result<Vec<_>>>()?
        } else {
            names
        };

        if lines.is_empty() {
            Ok(Outcome::Silent)
        } else {
            Ok(Outcome::Output(lines.join("\n")))
        }
    }
}
