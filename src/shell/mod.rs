use rustyline::{config::Configurer, error::ReadlineError};

mod dispatcher;
mod parser;
mod terminal;

pub use dispatcher::{Dispatcher, Flow};
pub use parser::{parse_line, Input, ParsedCommand};

use crate::{
    audit::AuditLog,
    config::ShellConfig,
    core::{commands::CommandExecutor, ShellState},
    error::ShellError,
    highlight::SyntaxHighlighter,
    input::ShellCompleter,
    path::PathResolver,
};

use terminal::{LineEditor, TerminalConsole};

const INTERRUPT_HINT: &str = "Use 'exit' to quit";

pub struct Shell {
    editor: LineEditor,
    dispatcher: Dispatcher,
    highlighter: SyntaxHighlighter,
    config: ShellConfig,
}

impl Shell {
    pub fn new(config: ShellConfig) -> Result<Self, ShellError> {
        let state = ShellState::from_process()?;

        // Pin the log to the startup directory so `cd` does not move it
        let audit = AuditLog::new(state.current_dir().join(&config.log_path));
        audit.start_session()?;

        let resolver = PathResolver::new();
        let executor = CommandExecutor::new(resolver.clone());

        let mut builtins: Vec<&'static str> = executor.names().collect();
        builtins.push("exit");
        let highlighter = SyntaxHighlighter::new(config.color, builtins.clone());
        let completer = ShellCompleter::new(builtins, resolver, highlighter.clone());

        let mut editor = LineEditor::new()?;
        editor.set_helper(Some(completer));
        // Confirmation answers must not end up in history
        editor.set_auto_add_history(false);

        // Only fires while a command runs; at the prompt the editor reports it
        ctrlc::set_handler(move || {
            println!("\n{}", INTERRUPT_HINT);
        })?;

        log::info!("audit log at {}", audit.path().display());

        Ok(Shell {
            editor,
            dispatcher: Dispatcher::new(state, executor, audit),
            highlighter,
            config,
        })
    }

    pub fn run(&mut self) -> Result<(), ShellError> {
        if !self.config.quiet {
            println!("minish started. Type 'exit' to quit.");
        }

        loop {
            let prompt = self.dispatcher.state().prompt();
            match self.editor.readline(&prompt) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        if let Err(e) = self.editor.add_history_entry(line.as_str()) {
                            if !self.config.quiet {
                                eprintln!("Warning: Couldn't add to history: {}", e);
                            }
                        }
                    }

                    let mut console = TerminalConsole::new(&mut self.editor, &self.highlighter);
                    if self.dispatcher.handle_line(&line, &mut console) == Flow::Exit {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("{}", INTERRUPT_HINT);
                }
                Err(ReadlineError::Eof) => break,
                Err(e) => {
                    eprintln!("Error: {}", e);
                }
            }
        }
        Ok(())
    }
}
