use std::ffi::{CStr, CString, OsStr};
use std::os::unix::ffi::OsStrExt;
use std::path::{Component, Path, PathBuf};

/// Turns path tokens typed at the prompt into absolute paths.
///
/// Resolution is purely lexical: nothing is checked against the filesystem,
/// so every handler validates the result itself.
#[derive(Debug, Clone)]
pub struct PathResolver {
    home: Option<PathBuf>,
}

impl Default for PathResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl PathResolver {
    pub fn new() -> Self {
        Self {
            home: dirs::home_dir(),
        }
    }

    pub fn with_home(home: impl Into<PathBuf>) -> Self {
        Self {
            home: Some(home.into()),
        }
    }

    pub fn resolve(&self, token: &str, current_dir: &Path) -> PathBuf {
        if token.is_empty() {
            return current_dir.to_path_buf();
        }

        if let Some(expanded) = self.expand_tilde(token) {
            return expanded;
        }

        let path = Path::new(token);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            current_dir.join(path)
        }
    }

    /// `~` and `~/x` use our own home, `~name` and `~name/x` look `name` up in
    /// the password database. An unknown user leaves the token alone.
    fn expand_tilde(&self, token: &str) -> Option<PathBuf> {
        let rest = token.strip_prefix('~')?;
        let (user, subpath) = rest.split_once('/').unwrap_or((rest, ""));

        let mut expanded = if user.is_empty() {
            self.home.clone()?
        } else {
            user_home(user)?
        };
        for part in subpath.split('/') {
            if !part.is_empty() {
                expanded.push(part);
            }
        }
        Some(expanded)
    }
}

fn user_home(name: &str) -> Option<PathBuf> {
    let name = CString::new(name).ok()?;
    let mut buf: Vec<libc::c_char> = vec![0; 1024];

    loop {
        // SAFETY: every pointer refers to a live local; getpwnam_r only
        // writes into `pwd` and `buf`, and `result` is checked before use.
        let mut pwd: libc::passwd = unsafe { std::mem::zeroed() };
        let mut result: *mut libc::passwd = std::ptr::null_mut();
        let rc = unsafe {
            libc::getpwnam_r(
                name.as_ptr(),
                &mut pwd,
                buf.as_mut_ptr(),
                buf.len(),
                &mut result,
            )
        };

        if rc == libc::ERANGE && buf.len() < 1 << 20 {
            buf.resize(buf.len() * 2, 0);
            continue;
        }
        if rc != 0 || result.is_null() || pwd.pw_dir.is_null() {
            return None;
        }

        // SAFETY: pw_dir points into `buf`, which is still alive here
        let dir = unsafe { CStr::from_ptr(pwd.pw_dir) };
        return Some(PathBuf::from(OsStr::from_bytes(dir.to_bytes())));
    }
}

/// Lexically folds `.` and `..` out of an absolute path.
///
/// `..` at the root stays at the root.
pub fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if normalized.parent().is_some() {
                    normalized.pop();
                } else if !normalized.has_root() {
                    normalized.push("..");
                }
            }
            other => normalized.push(other.as_os_str()),
        }
    }

    if normalized.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        normalized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> PathResolver {
        PathResolver::with_home("/home/tester")
    }

    #[test]
    fn test_empty_token_is_current_dir() {
        let cwd = Path::new("/a/b");
        assert_eq!(resolver().resolve("", cwd), PathBuf::from("/a/b"));
    }

    #[test]
    fn test_absolute_token_unchanged() {
        let cwd = Path::new("/a/b");
        assert_eq!(
            resolver().resolve("/abs/path", cwd),
            PathBuf::from("/abs/path")
        );
    }

    #[test]
    fn test_relative_token_joined() {
        let cwd = Path::new("/a/b");
        assert_eq!(resolver().resolve("sub", cwd), PathBuf::from("/a/b/sub"));
        assert_eq!(
            resolver().resolve("../c", cwd),
            PathBuf::from("/a/b/../c")
        );
    }

    #[test]
    fn test_tilde_expansion() {
        let cwd = Path::new("/a/b");
        assert_eq!(resolver().resolve("~", cwd), PathBuf::from("/home/tester"));
        assert_eq!(
            resolver().resolve("~/docs//notes.txt", cwd),
            PathBuf::from("/home/tester/docs/notes.txt")
        );
    }

    #[test]
    fn test_other_user_tilde_uses_password_database() {
        let cwd = Path::new("/a/b");
        let Some(root_home) = user_home("root") else {
            return;
        };
        assert_eq!(resolver().resolve("~root", cwd), root_home);
        assert_eq!(resolver().resolve("~root/x//y", cwd), root_home.join("x/y"));
    }

    #[test]
    fn test_unknown_user_tilde_is_relative() {
        let cwd = Path::new("/a/b");
        assert_eq!(
            resolver().resolve("~no_such_user_here/x", cwd),
            PathBuf::from("/a/b/~no_such_user_here/x")
        );
    }

    #[test]
    fn test_tilde_without_home() {
        let resolver = PathResolver { home: None };
        assert_eq!(
            resolver.resolve("~", Path::new("/a")),
            PathBuf::from("/a/~")
        );
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(Path::new("/home/user/..")), PathBuf::from("/home"));
        assert_eq!(normalize(Path::new("/a/./b/../c")), PathBuf::from("/a/c"));
        assert_eq!(normalize(Path::new("/..")), PathBuf::from("/"));
        assert_eq!(normalize(Path::new("/a/../..")), PathBuf::from("/"));
    }
}
