use crate::{
    audit::AuditLog,
    core::{
        commands::{CommandExecutor, CommandResult, Outcome},
        Console, ShellState,
    },
    error::ShellError,
};

use super::parser::{parse_line, Input, ParsedCommand};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Owns the session state and routes each input line to its command.
///
/// Every command line ends in exactly one report to the console and one
/// audit record. When the record itself cannot be written the outcome has
/// already been shown, so `recover` adds an `Error:` line after it.
pub struct Dispatcher {
    state: ShellState,
    executor: CommandExecutor,
    audit: AuditLog,
}

impl Dispatcher {
    pub fn new(state: ShellState, executor: CommandExecutor, audit: AuditLog) -> Self {
        Self {
            state,
            executor,
            audit,
        }
    }

    pub fn state(&self) -> &ShellState {
        &self.state
    }

    pub fn handle_line(&mut self, line: &str, console: &mut dyn Console) -> Flow {
        match parse_line(line) {
            Input::Empty => Flow::Continue,
            Input::Exit => Flow::Exit,
            Input::Command(command) => {
                let line = line.trim();
                if let Err(e) = self.dispatch(line, &command, console) {
                    self.recover(line, &e, console);
                }
                Flow::Continue
            }
        }
    }

    fn dispatch(
        &mut self,
        line: &str,
        command: &ParsedCommand,
        console: &mut dyn Console,
    ) -> Result<(), ShellError> {
        let Some(builtin) = self.executor.lookup(&command.name) else {
            let message = format!("{}: command not found", command.name);
            console.error(&message);
            self.audit.record(line, Some(&message))?;
            return Ok(());
        };

        log::debug!("dispatching {} with {:?}", builtin.name(), command.args);
        let result = self
            .executor
            .execute(builtin, &command.args, &mut self.state, console);
        let error = Self::report(builtin.name(), result, console);
        self.audit.record(line, error.as_deref())?;
        Ok(())
    }

    /// Shows the outcome and hands back the error message, if any, for the
    /// audit log.
    fn report(name: &str, result: CommandResult, console: &mut dyn Console) -> Option<String> {
        match result {
            Ok(Outcome::Silent) => None,
            Ok(Outcome::Output(text)) => {
                console.print(&text);
                None
            }
            Ok(Outcome::Cancelled) => {
                console.print("Operation cancelled");
                None
            }
            Err(err) => {
                log::debug!("{} failed ({:?})", name, err.class());
                let message = format!("{}: {}", name, err);
                console.error(&message);
                Some(message)
            }
        }
    }

    fn recover(&self, line: &str, err: &ShellError, console: &mut dyn Console) {
        console.error(&format!("Error: {}", err));
        if let Err(log_err) = self.audit.record(line, Some(&err.to_string())) {
            log::warn!("could not record failure of '{}': {}", line, log_err);
        }
    }
}
