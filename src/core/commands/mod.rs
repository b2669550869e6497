use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

mod args;
mod cat;
mod cd;
mod cp;
mod fs_ops;
mod ls;
mod mv;
mod rm;

pub use cat::CatCommand;
pub use cd::CdCommand;
pub use cp::CpCommand;
pub use ls::LsCommand;
pub use mv::MvCommand;
pub use rm::RmCommand;

use super::{Console, ShellState};
use crate::path::PathResolver;

/// Why a command failed. `Display` renders the message without the
/// command-name prefix; the dispatcher adds that.
#[derive(Debug)]
pub enum CommandError {
    Usage(&'static str),
    NotFound(PathBuf),
    NoSuchDirectory(PathBuf),
    NotADirectory(PathBuf),
    IsADirectory(PathBuf),
    NeedsRecursive(PathBuf),
    NotPermitted(PathBuf),
    IoError(std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    Usage,
    NotFound,
    TypeMismatch,
    Safety,
    System,
}

impl CommandError {
    pub fn class(&self) -> ErrorClass {
        match self {
            CommandError::Usage(_) => ErrorClass::Usage,
            CommandError::NotFound(_) | CommandError::NoSuchDirectory(_) => ErrorClass::NotFound,
            CommandError::NotADirectory(_)
            | CommandError::IsADirectory(_)
            | CommandError::NeedsRecursive(_) => ErrorClass::TypeMismatch,
            CommandError::NotPermitted(_) => ErrorClass::Safety,
            CommandError::IoError(_) => ErrorClass::System,
        }
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Usage(msg) => write!(f, "{}", msg),
            CommandError::NotFound(path) => {
                write!(f, "{}: No such file or directory", path.display())
            }
            CommandError::NoSuchDirectory(path) => {
                write!(f, "{}: No such directory", path.display())
            }
            CommandError::NotADirectory(path) => write!(f, "{}: Not a directory", path.display()),
            CommandError::IsADirectory(path) => write!(f, "{}: Is a directory", path.display()),
            CommandError::NeedsRecursive(path) => {
                write!(f, "{}: Is a directory (use -r)", path.display())
            }
            CommandError::NotPermitted(path) => write!(
                f,
                "cannot remove '{}': Operation not permitted",
                path.display()
            ),
            CommandError::IoError(err) => write!(f, "error: {}", err),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<std::io::Error> for CommandError {
    fn from(err: std::io::Error) -> Self {
        CommandError::IoError(err)
    }
}

/// What a successful command leaves for the user to see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Silent,
    Output(String),
    Cancelled,
}

pub type CommandResult = Result<Outcome, CommandError>;

/// Everything a handler may touch while it runs.
pub struct CommandContext<'a> {
    pub state: &'a mut ShellState,
    pub resolver: &'a PathResolver,
    pub console: &'a mut dyn Console,
}

impl CommandContext<'_> {
    pub fn resolve(&self, token: &str) -> PathBuf {
        self.resolver.resolve(token, self.state.current_dir())
    }
}

pub trait Command {
    fn execute(&self, args: &[String], ctx: &mut CommandContext<'_>) -> CommandResult;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandType {
    Ls(LsCommand),
    Cd(CdCommand),
    Cat(CatCommand),
    Cp(CpCommand),
    Mv(MvCommand),
    Rm(RmCommand),
}

impl CommandType {
    pub const ALL: [CommandType; 6] = [
        CommandType::Ls(LsCommand),
        CommandType::Cd(CdCommand),
        CommandType::Cat(CatCommand),
        CommandType::Cp(CpCommand),
        CommandType::Mv(MvCommand),
        CommandType::Rm(RmCommand),
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CommandType::Ls(_) => "ls",
            CommandType::Cd(_) => "cd",
            CommandType::Cat(_) => "cat",
            CommandType::Cp(_) => "cp",
            CommandType::Mv(_) => "mv",
            CommandType::Rm(_) => "rm",
        }
    }
}

impl Command for CommandType {
    fn execute(&self, args: &[String], ctx: &mut CommandContext<'_>) -> CommandResult {
        match self {
            CommandType::Ls(cmd) => cmd.execute(args, ctx),
            CommandType::Cd(cmd) => cmd.execute(args, ctx),
            CommandType::Cat(cmd) => cmd.execute(args, ctx),
            CommandType::Cp(cmd) => cmd.execute(args, ctx),
            CommandType::Mv(cmd) => cmd.execute(args, ctx),
            CommandType::Rm(cmd) => cmd.execute(args, ctx),
        }
    }
}

/// Fixed table of the built-in commands.
#[derive(Clone)]
pub struct CommandExecutor {
    commands: BTreeMap<&'static str, CommandType>,
    resolver: PathResolver,
}

impl Default for CommandExecutor {
    fn default() -> Self {
        Self::new(PathResolver::new())
    }
}

impl CommandExecutor {
    pub fn new(resolver: PathResolver) -> Self {
        let commands = CommandType::ALL
            .iter()
            .map(|cmd| (cmd.name(), *cmd))
            .collect();
        Self { commands, resolver }
    }

    pub fn lookup(&self, name: &str) -> Option<CommandType> {
        self.commands.get(name).copied()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.keys().copied()
    }

    pub fn execute(
        &self,
        command: CommandType,
        args: &[String],
        state: &mut ShellState,
        console: &mut dyn Console,
    ) -> CommandResult {
        let mut ctx = CommandContext {
            state,
            resolver: &self.resolver,
            console,
        };
        command.execute(args, &mut ctx)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_builtin_command_detection() {
        let executor = CommandExecutor::default();

        for name in ["ls", "cd", "cat", "cp", "mv", "rm"] {
            assert_eq!(executor.lookup(name).map(|c| c.name()), Some(name));
        }
        for name in ["exit", "LS", ""] {
            assert!(executor.lookup(name).is_none());
        }
    }

    #[test]
    fn test_names_sorted() {
        let executor = CommandExecutor::default();
        let names: Vec<_> = executor.names().collect();
        assert_eq!(names, vec!["cat", "cd", "cp", "ls", "mv", "rm"]);
    }

    #[test]
    fn test_command_error_display() {
        let path = PathBuf::from("/tmp/x");
        assert_eq!(
            CommandError::NotFound(path.clone()).to_string(),
            "/tmp/x: No such file or directory"
        );
        assert_eq!(
            CommandError::NeedsRecursive(path.clone()).to_string(),
            "/tmp/x: Is a directory (use -r)"
        );
        assert_eq!(
            CommandError::NotPermitted(PathBuf::from("/")).to_string(),
            "cannot remove '/': Operation not permitted"
        );
        assert_eq!(
            CommandError::Usage("missing file name").to_string(),
            "missing file name"
        );
        let io_err = CommandError::from(io::Error::new(io::ErrorKind::Other, "disk on fire"));
        assert_eq!(io_err.to_string(), "error: disk on fire");
        assert_eq!(io_err.class(), ErrorClass::System);
    }

    #[test]
    fn test_error_classes() {
        let path = PathBuf::from("/x");
        assert_eq!(CommandError::Usage("x").class(), ErrorClass::Usage);
        assert_eq!(
            CommandError::NoSuchDirectory(path.clone()).class(),
            ErrorClass::NotFound
        );
        assert_eq!(
            CommandError::IsADirectory(path.clone()).class(),
            ErrorClass::TypeMismatch
        );
        assert_eq!(CommandError::NotPermitted(path).class(), ErrorClass::Safety);
    }
}
