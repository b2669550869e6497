use rustyline::{error::ReadlineError, history::DefaultHistory, Editor};

use crate::{core::Console, highlight::SyntaxHighlighter, input::ShellCompleter};

pub(crate) type LineEditor = Editor<ShellCompleter, DefaultHistory>;

/// Console backed by the interactive line editor. Confirmation prompts are
/// read from the same editor as the shell prompt.
pub(crate) struct TerminalConsole<'a> {
    editor: &'a mut LineEditor,
    highlighter: &'a SyntaxHighlighter,
}

impl<'a> TerminalConsole<'a> {
    pub(crate) fn new(editor: &'a mut LineEditor, highlighter: &'a SyntaxHighlighter) -> Self {
        Self {
            editor,
            highlighter,
        }
    }
}

impl Console for TerminalConsole<'_> {
    fn print(&mut self, text: &str) {
        println!("{}", text);
    }

    fn error(&mut self, text: &str) {
        eprintln!("{}", self.highlighter.highlight_error(text));
    }

    fn read_line(&mut self, prompt: &str) -> Option<String> {
        match self.editor.readline(prompt) {
            Ok(answer) => Some(answer),
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => None,
            Err(e) => {
                log::warn!("could not read confirmation: {}", e);
                None
            }
        }
    }
}
