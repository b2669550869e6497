use super::args::ParsedArgs;
use super::fs_ops::{copy_file, copy_tree};
use super::{Command, CommandContext, CommandError, CommandResult, Outcome};

/// `cp [-r] <source> <destination>`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CpCommand;

impl Command for CpCommand {
    fn execute(&self, args: &[String], ctx: &mut CommandContext<'_>) -> CommandResult {
        let parsed = ParsedArgs::parse(args, &["-r"]);
        let [source, destination, ..] = parsed.positional() else {
            return Err(CommandError::Usage("missing source or destination"));
        };
        let source = ctx.resolve(source);
        let destination = ctx.resolve(destination);

        if !source.exists() {
            return Err(CommandError::NotFound(source));
        }

        if source.is_dir() {
            if !parsed.has("-r") {
                return Err(CommandError::NeedsRecursive(source));
            }
            copy_tree(&source, &destination)?;
        } else {
            copy_file(&source, &destination)?;
        }

        Ok(Outcome::Output(format!(
            "Copied {} to {}",
            source.display(),
            destination.display()
        )))
    }
}
