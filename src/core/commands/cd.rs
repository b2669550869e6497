use std::env;

use super::{Command, CommandContext, CommandError, CommandResult, Outcome};
use crate::path::normalize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CdCommand;

impl Command for CdCommand {
    fn execute(&self, args: &[String], ctx: &mut CommandContext<'_>) -> CommandResult {
        let token = args.first().map(|s| s.as_str()).unwrap_or("~");
        let target = if token == ".." {
            ctx.state
                .current_dir()
                .parent()
                .unwrap_or(ctx.state.current_dir())
                .to_path_buf()
        } else {
            normalize(&ctx.resolve(token))
        };

        if !target.is_dir() {
            return Err(CommandError::NoSuchDirectory(target));
        }

        env::set_current_dir(&target)?;
        log::debug!("working directory is now {}", target.display());
        ctx.state.set_current_dir(target);
        Ok(Outcome::Silent)
    }
}
