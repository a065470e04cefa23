//! File system probes
//!
//! Existence checks and child enumeration shared by the directory and file
//! operations.

use std::ffi::OsStr;
use std::fs;
use std::io::{ErrorKind, Result};
use std::path::{Path, PathBuf};

/// Kind of directory entry to enumerate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
}

impl EntryKind {
    fn matches(self, path: &Path) -> bool {
        match self {
            EntryKind::Directory => path.is_dir(),
            EntryKind::File => path.is_file(),
        }
    }
}

/// Check if file exists
pub fn file_exists(path: &Path) -> bool {
    path.exists() && path.is_file()
}

/// Check if directory exists
pub fn directory_exists(path: &Path) -> bool {
    path.exists() && path.is_dir()
}

/// Check if any entry sits at the path. Symlinks count even when dangling.
pub fn entry_exists(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

/// Lists the immediate children of `dir` of the given kind whose file name
/// satisfies `filter`, sorted by path.
pub fn list_children<F>(dir: &Path, kind: EntryKind, filter: F) -> Result<Vec<PathBuf>>
where
    F: Fn(&OsStr) -> bool,
{
    let mut children = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !kind.matches(&path) {
            continue;
        }
        let keep = path.file_name().is_some_and(&filter);
        if keep {
            children.push(path);
        }
    }
    children.sort();
    Ok(children)
}

/// Moves a file, copying it when source and destination are on different devices.
pub fn move_file(from: &Path, to: &Path) -> Result<()> {
    match fs::rename(from, to) {
        Err(e) if e.kind() == ErrorKind::CrossesDevices => {
            fs::copy(from, to)?;
            fs::remove_file(from)
        }
        other => other,
    }
}

/// Returns `true` if `dir` has neither subdirectories nor files.
pub fn is_directory_empty(dir: &Path) -> Result<bool> {
    Ok(fs::read_dir(dir)?.next().is_none())
}
