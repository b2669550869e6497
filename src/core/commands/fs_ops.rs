use std::fs::{self, File, Metadata};
use std::io;
use std::os::unix::fs::{MetadataExt, PermissionsExt};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

pub(crate) const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// `ls -l` style permission string, e.g. `drwxr-xr-x`.
pub(crate) fn mode_string(mode: u32) -> String {
    let file_type = match mode & libc::S_IFMT as u32 {
        m if m == libc::S_IFDIR as u32 => 'd',
        m if m == libc::S_IFLNK as u32 => 'l',
        m if m == libc::S_IFCHR as u32 => 'c',
        m if m == libc::S_IFBLK as u32 => 'b',
        m if m == libc::S_IFIFO as u32 => 'p',
        m if m == libc::S_IFSOCK as u32 => 's',
        _ => '-',
    };

    let mut out = String::with_capacity(10);
    out.push(file_type);
    for (shift, special, special_char) in [
        (6, libc::S_ISUID as u32, 's'),
        (3, libc::S_ISGID as u32, 's'),
        (0, libc::S_ISVTX as u32, 't'),
    ] {
        let bits = (mode >> shift) & 0o7;
        out.push(if bits & 0o4 != 0 { 'r' } else { '-' });
        out.push(if bits & 0o2 != 0 { 'w' } else { '-' });
        let exec = bits & 0o1 != 0;
        out.push(match (mode & special != 0, exec) {
            (true, true) => special_char,
            (true, false) => special_char.to_ascii_uppercase(),
            (false, true) => 'x',
            (false, false) => '-',
        });
    }
    out
}

pub(crate) fn format_mtime(meta: &Metadata) -> io::Result<String> {
    let modified: DateTime<Local> = meta.modified()?.into();
    Ok(modified.format(TIME_FORMAT).to_string())
}

/// Copies one file, keeping its permission bits and modification time.
///
/// When `dst` is an existing directory the file lands inside it under its
/// own name. Returns the path actually written.
pub(crate) fn copy_file(src: &Path, dst: &Path) -> io::Result<PathBuf> {
    let target = if dst.is_dir() {
        match src.file_name() {
            Some(name) => dst.join(name),
            None => dst.to_path_buf(),
        }
    } else {
        dst.to_path_buf()
    };

    if is_same_file(src, &target)? {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!(
                "'{}' and '{}' are the same file",
                src.display(),
                target.display()
            ),
        ));
    }

    fs::copy(src, &target)?;
    let meta = fs::metadata(src)?;
    File::open(&target)?.set_modified(meta.modified()?)?;
    Ok(target)
}

/// Same device and inode. A missing `target` is never the same file.
fn is_same_file(src: &Path, target: &Path) -> io::Result<bool> {
    let target_meta = match fs::metadata(target) {
        Ok(meta) => meta,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(err) => return Err(err),
    };
    let src_meta = fs::metadata(src)?;
    Ok(src_meta.dev() == target_meta.dev() && src_meta.ino() == target_meta.ino())
}

/// Copies a directory tree to `dst`, which must not exist yet.
pub(crate) fn copy_tree(src: &Path, dst: &Path) -> io::Result<()> {
    if dst.exists() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("{}: File exists", dst.display()),
        ));
    }
    if is_inside(dst, src)? {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!(
                "cannot copy a directory, '{}', into itself, '{}'",
                src.display(),
                dst.display()
            ),
        ));
    }
    copy_tree_unchecked(src, dst)
}

fn copy_tree_unchecked(src: &Path, dst: &Path) -> io::Result<()> {
    // Collected before dst exists so a fresh dst never shows up in the listing
    let entries = fs::read_dir(src)?.collect::<io::Result<Vec<_>>>()?;
    fs::create_dir(dst)?;

    for entry in entries {
        let from = entry.path();
        let to = dst.join(entry.file_name());
        if fs::metadata(&from)?.is_dir() {
            copy_tree_unchecked(&from, &to)?;
        } else {
            copy_file(&from, &to)?;
        }
    }

    let mode = fs::metadata(src)?.permissions().mode();
    fs::set_permissions(dst, fs::Permissions::from_mode(mode))
}

fn is_inside(dst: &Path, src: &Path) -> io::Result<bool> {
    let src = fs::canonicalize(src)?;
    // dst does not exist yet, so canonicalize its parent instead
    let dst_parent = match dst.parent() {
        Some(parent) if parent.exists() => fs::canonicalize(parent)?,
        _ => return Ok(false),
    };
    Ok(dst_parent.starts_with(&src))
}

/// Renames `src` to `dst`, falling back to copy and delete when the two are
/// on different filesystems. An existing directory `dst` receives `src`
/// under its own name.
pub(crate) fn move_path(src: &Path, dst: &Path) -> io::Result<()> {
    let target = match (dst.is_dir(), src.file_name()) {
        (true, Some(name)) => dst.join(name),
        _ => dst.to_path_buf(),
    };

    match fs::rename(src, &target) {
        Err(err) if err.raw_os_error() == Some(libc::EXDEV) => {
            log::debug!(
                "rename across devices, copying {} to {}",
                src.display(),
                target.display()
            );
            move_by_copy(src, &target)
        }
        other => other,
    }
}

/// Copies `src` to `target` and deletes `src` once the copy is complete.
/// A failed copy leaves `src` in place.
pub(crate) fn move_by_copy(src: &Path, target: &Path) -> io::Result<()> {
    if fs::symlink_metadata(src)?.is_dir() {
        copy_tree(src, target)?;
        fs::remove_dir_all(src)
    } else {
        copy_file(src, target)?;
        fs::remove_file(src)
    }
}
