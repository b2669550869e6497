use super::fs_ops::move_path;
use super::{Command, CommandContext, CommandError, CommandResult, Outcome};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MvCommand;

impl Command for MvCommand {
    fn execute(&self, args: &[String], ctx: &mut CommandContext<'_>) -> CommandResult {
        // mv takes no flags, every token is an operand
        let [source, destination, ..] = args else {
            return Err(CommandError::Usage("missing source or destination"));
        };
        let source = ctx.resolve(source);
        let destination = ctx.resolve(destination);

        if source.symlink_metadata().is_err() {
            return Err(CommandError::NotFound(source));
        }

        move_path(&source, &destination)?;
        Ok(Outcome::Output(format!(
            "Moved {} to {}",
            source.display(),
            destination.display()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::commands::testing::run;
    use crate::core::commands::CommandType;
    use crate::core::console::scripted::ScriptedConsole;
    use std::fs;

    const MV: CommandType = CommandType::Mv(MvCommand);

    #[test]
    fn test_mv_renames_file() -> std::io::Result<()> {
        let tmp = tempfile::tempdir()?;
        fs::write(tmp.path().join("old.txt"), "payload")?;

        let mut console = ScriptedConsole::new();
        let result = run(MV, &["old.txt", "new.txt"], tmp.path(), &mut console);
        assert_eq!(
            result.ok(),
            Some(Outcome::Output(format!(
                "Moved {0}/old.txt to {0}/new.txt",
                tmp.path().display()
            )))
        );
        assert!(!tmp.path().join("old.txt").exists());
        assert_eq!(fs::read_to_string(tmp.path().join("new.txt"))?, "payload");
        Ok(())
    }

    #[test]
    fn test_mv_directory_into_directory() -> std::io::Result<()> {
        let tmp = tempfile::tempdir()?;
        fs::create_dir_all(tmp.path().join("src/inner"))?;
        fs::create_dir(tmp.path().join("target"))?;

        let mut console = ScriptedConsole::new();
        let result = run(MV, &["src", "target"], tmp.path(), &mut console);
        assert!(result.is_ok());
        assert!(tmp.path().join("target/src/inner").is_dir());
        assert!(!tmp.path().join("src").exists());
        Ok(())
    }

    #[test]
    fn test_mv_overwrites_file() -> std::io::Result<()> {
        let tmp = tempfile::tempdir()?;
        fs::write(tmp.path().join("a"), "new")?;
        fs::write(tmp.path().join("b"), "old")?;

        let mut console = ScriptedConsole::new();
        assert!(run(MV, &["a", "b"], tmp.path(), &mut console).is_ok());
        assert_eq!(fs::read_to_string(tmp.path().join("b"))?, "new");
        Ok(())
    }

    #[test]
    fn test_mv_missing_operands() -> std::io::Result<()> {
        let tmp = tempfile::tempdir()?;
        let mut console = ScriptedConsole::new();
        let result = run(MV, &["lonely"], tmp.path(), &mut console);
        assert!(matches!(
            result,
            Err(CommandError::Usage("missing source or destination"))
        ));
        Ok(())
    }

    #[test]
    fn test_mv_missing_source() -> std::io::Result<()> {
        let tmp = tempfile::tempdir()?;
        let mut console = ScriptedConsole::new();
        let result = run(MV, &["ghost", "elsewhere"], tmp.path(), &mut console);
        assert_eq!(
            result.err().map(|e| e.to_string()),
            Some(format!(
                "{}/ghost: No such file or directory",
                tmp.path().display()
            ))
        );
        Ok(())
    }
}
