use std::fs;

use super::{Command, CommandContext, CommandError, CommandResult, Outcome};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CatCommand;

impl Command for CatCommand {
    fn execute(&self, args: &[String], ctx: &mut CommandContext<'_>) -> CommandResult {
        let token = args.first().ok_or(CommandError::Usage("missing file name"))?;
        let path = ctx.resolve(token);

        if !path.exists() {
            return Err(CommandError::NotFound(path));
        }
        if path.is_dir() {
            return Err(CommandError::IsADirectory(path));
        }

        let content = fs::read_to_string(&path)?;
        Ok(Outcome::Output(
            content.strip_suffix('\n').unwrap_or(&content).to_string(),
        ))
    }
}
