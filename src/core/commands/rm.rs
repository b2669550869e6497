use std::fs;
use std::path::Path;

use super::args::ParsedArgs;
use super::{Command, CommandContext, CommandError, CommandResult, Outcome};
use crate::path::normalize;

/// `rm [-r] <path>`
///
/// Directories need `-r` and an explicit `y` at the confirmation prompt.
/// The filesystem root and `..` are never removed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RmCommand;

impl RmCommand {
    fn is_protected(token: &str, target: &Path) -> bool {
        matches!(token, "/" | "..") || normalize(target) == Path::new("/")
    }

    fn confirmed(ctx: &mut CommandContext<'_>, target: &Path) -> bool {
        let prompt = format!("rm: remove directory '{}'? (y/n): ", target.display());
        ctx.console
            .read_line(&prompt)
            .is_some_and(|answer| answer.trim().eq_ignore_ascii_case("y"))
    }
}

impl Command for RmCommand {
    fn execute(&self, args: &[String], ctx: &mut CommandContext<'_>) -> CommandResult {
        let parsed = ParsedArgs::parse(args, &["-r"]);
        let token = parsed
            .first()
            .ok_or(CommandError::Usage("missing file or directory name"))?;
        let target = ctx.resolve(token);

        if Self::is_protected(token, &target) {
            return Err(CommandError::NotPermitted(target));
        }

        // Links are removed themselves, never followed
        let meta = match fs::symlink_metadata(&target) {
            Ok(meta) => meta,
            Err(_) => return Err(CommandError::NotFound(target)),
        };

        if meta.is_dir() {
            if !parsed.has("-r") {
                return Err(CommandError::NeedsRecursive(target));
            }
            if !Self::confirmed(ctx, &target) {
                return Ok(Outcome::Cancelled);
            }
            fs::remove_dir_all(&target)?;
        } else {
            fs::remove_file(&target)?;
        }

        Ok(Outcome::Output(format!("Removed {}", target.display())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::commands::testing::run;
    use crate::core::commands::CommandType;
    use crate::core::console::scripted::ScriptedConsole;

    const RM: CommandType = CommandType::Rm(RmCommand);

    #[test]
    fn test_rm_file() -> std::io::Result<()> {
        let tmp = tempfile::tempdir()?;
        fs::write(tmp.path().join("junk.txt"), "x")?;

        let mut console = ScriptedConsole::new();
        let result = run(RM, &["junk.txt"], tmp.path(), &mut console);
        assert_eq!(
            result.ok(),
            Some(Outcome::Output(format!(
                "Removed {}/junk.txt",
                tmp.path().display()
            )))
        );
        assert!(!tmp.path().join("junk.txt").exists());
        assert!(console.prompts.is_empty());
        Ok(())
    }

    #[test]
    fn test_rm_protected_paths() -> std::io::Result<()> {
        let tmp = tempfile::tempdir()?;
        for tokens in [&["/"][..], &["-r", "/"][..], &[".."][..], &["-r", ".."][..]] {
            let mut console = ScriptedConsole::answering(&["y"]);
            let result = run(RM, tokens, tmp.path(), &mut console);
            let message = result.err().map(|e| e.to_string()).unwrap_or_default();
            assert!(message.ends_with("Operation not permitted"), "{}", message);
            assert!(console.prompts.is_empty());
        }
        assert!(tmp.path().exists());
        Ok(())
    }

    #[test]
    fn test_rm_root_in_disguise() {
        let mut console = ScriptedConsole::answering(&["y"]);
        let result = run(RM, &["-r", "/tmp/../"], Path::new("/tmp"), &mut console);
        assert!(matches!(result, Err(CommandError::NotPermitted(_))));
    }

    #[test]
    fn test_rm_directory_needs_recursive_flag() -> std::io::Result<()> {
        let tmp = tempfile::tempdir()?;
        fs::create_dir(tmp.path().join("keep"))?;

        let mut console = ScriptedConsole::answering(&["y"]);
        let result = run(RM, &["keep"], tmp.path(), &mut console);
        assert!(matches!(result, Err(CommandError::NeedsRecursive(_))));
        assert!(tmp.path().join("keep").is_dir());
        Ok(())
    }

    #[test]
    fn test_rm_directory_confirmed() -> std::io::Result<()> {
        let tmp = tempfile::tempdir()?;
        fs::create_dir_all(tmp.path().join("doomed/inner"))?;
        fs::write(tmp.path().join("doomed/inner/f"), "x")?;

        let mut console = ScriptedConsole::answering(&[" Y "]);
        let result = run(RM, &["-r", "doomed"], tmp.path(), &mut console);
        assert!(matches!(result, Ok(Outcome::Output(_))));
        assert!(!tmp.path().join("doomed").exists());
        assert_eq!(
            console.prompts,
            vec![format!(
                "rm: remove directory '{}/doomed'? (y/n): ",
                tmp.path().display()
            )]
        );
        Ok(())
    }

    #[test]
    fn test_rm_directory_declined() -> std::io::Result<()> {
        let tmp = tempfile::tempdir()?;
        fs::create_dir(tmp.path().join("precious"))?;

        for answer in [&["n"][..], &["yes"][..], &[][..]] {
            let mut console = ScriptedConsole::answering(answer);
            let result = run(RM, &["precious", "-r"], tmp.path(), &mut console);
            assert_eq!(result.ok(), Some(Outcome::Cancelled));
            assert!(tmp.path().join("precious").is_dir());
        }
        Ok(())
    }

    #[test]
    fn test_rm_missing() -> std::io::Result<()> {
        let tmp = tempfile::tempdir()?;
        let mut console = ScriptedConsole::new();

        let result = run(RM, &["ghost"], tmp.path(), &mut console);
        assert!(matches!(result, Err(CommandError::NotFound(_))));

        let result = run(RM, &["-r"], tmp.path(), &mut console);
        assert_eq!(
            result.err().map(|e| e.to_string()),
            Some("missing file or directory name".to_string())
        );
        Ok(())
    }

    #[test]
    fn test_rm_symlink_to_directory_removes_link_only() -> std::io::Result<()> {
        let tmp = tempfile::tempdir()?;
        fs::create_dir(tmp.path().join("real"))?;
        std::os::unix::fs::symlink(tmp.path().join("real"), tmp.path().join("link"))?;

        let mut console = ScriptedConsole::new();
        let result = run(RM, &["link"], tmp.path(), &mut console);
        assert!(result.is_ok());
        assert!(tmp.path().join("real").is_dir());
        assert!(tmp.path().join("link").symlink_metadata().is_err());
        Ok(())
    }
}
