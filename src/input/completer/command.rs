use rustyline::completion::Pair;

/// Completes the first word of a line against the built-in command names.
#[derive(Clone)]
pub struct CommandCompleter {
    commands: Vec<&'static str>,
}

impl CommandCompleter {
    pub fn new(mut commands: Vec<&'static str>) -> Self {
        commands.sort_unstable();
        commands.dedup();
        Self { commands }
    }

    pub fn complete_command(&self, word: &str) -> Vec<Pair> {
        self.commands
            .iter()
            .filter(|cmd| cmd.starts_with(word))
            .map(|cmd| Pair {
                display: cmd.to_string(),
                replacement: format!("{} ", cmd),
            })
            .collect()
    }

    /// The rest of the only command starting with `word`, if there is one.
    pub fn hint(&self, word: &str) -> Option<String> {
        if word.is_empty() {
            return None;
        }
        let mut candidates = self.commands.iter().filter(|cmd| cmd.starts_with(word));
        match (candidates.next(), candidates.next()) {
            (Some(cmd), None) if *cmd != word => Some(cmd[word.len()..].to_string()),
            _ => None,
        }
    }
}
