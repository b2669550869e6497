use std::{env, fs, path::Path};

use rustyline::completion::Pair;

use crate::path::PathResolver;

/// Completes path tokens against the entries of the directory they name.
///
/// Relative tokens are read against the process working directory, which
/// `cd` keeps equal to the shell's current directory.
#[derive(Clone)]
pub struct PathCompleter {
    resolver: PathResolver,
}

impl PathCompleter {
    pub fn new(resolver: PathResolver) -> Self {
        Self { resolver }
    }

    pub fn complete_path(&self, incomplete: &str) -> Vec<Pair> {
        let cwd = match env::current_dir() {
            Ok(cwd) => cwd,
            Err(_) => return Vec::new(),
        };
        self.complete_in(incomplete, &cwd)
    }

    pub(crate) fn complete_in(&self, incomplete: &str, cwd: &Path) -> Vec<Pair> {
        // Everything up to the last '/' names the directory, the rest is a prefix
        let (dir_part, prefix) = match incomplete.rfind('/') {
            Some(idx) => incomplete.split_at(idx + 1),
            None => ("", incomplete),
        };
        let dir = self.resolver.resolve(dir_part, cwd);

        let Ok(entries) = fs::read_dir(&dir) else {
            return Vec::new();
        };

        let mut matches: Vec<Pair> = entries
            .filter_map(Result::ok)
            .filter_map(|entry| {
                let name = entry.file_name().to_str()?.to_string();
                if !name.starts_with(prefix) || (prefix.is_empty() && name.starts_with('.')) {
                    return None;
                }
                let candidate = format!("{}{}", dir_part, name);
                Some(if entry.path().is_dir() {
                    Pair {
                        display: format!("{}/", name),
                        replacement: format!("{}/", candidate),
                    }
                } else {
                    Pair {
                        display: name,
                        replacement: format!("{} ", candidate),
                    }
                })
            })
            .collect();

        matches.sort_by(|a, b| a.display.cmp(&b.display));
        matches
    }
}
