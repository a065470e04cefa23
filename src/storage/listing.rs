//! Directory listing
//!
//! Shared listing and search logic for the directory and file operations.

use std::path::{Path, PathBuf};

use crate::error::StorageError;
use crate::storage::filesystem::{EntryKind, directory_exists, list_children};
use crate::storage::matcher::NameMatcher;

/// Lists the children of `path` of the given kind, optionally filtered by name.
pub fn list_entries(
    path: &Path,
    kind: EntryKind,
    matcher: Option<&NameMatcher>,
) -> Result<Vec<PathBuf>, StorageError> {
    if !directory_exists(path) {
        return Err(StorageError::DirectoryNotFound(
            "The specified path does not exist".into(),
        ));
    }

    let entries = match matcher {
        // Names that are not valid UTF-8 never match a search.
        Some(matcher) => list_children(path, kind, |name| {
            name.to_str().is_some_and(|name| matcher.matches(name))
        })?,
        None => list_children(path, kind, |_| true)?,
    };
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[cfg(target_os = "linux")]
    #[test]
    fn non_utf8_names_are_listed_but_never_matched() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempdir().expect("create temp dir");
        let odd = dir.path().join(OsStr::from_bytes(b"report\xff.txt"));
        fs::write(&odd, b"").unwrap();
        fs::write(dir.path().join("report.txt"), b"").unwrap();

        let all = list_entries(dir.path(), EntryKind::File, None).unwrap();
        assert_eq!(all.len(), 2);
        assert!(all.contains(&odd));

        let matcher = NameMatcher::new("report", false);
        let found = list_entries(dir.path(), EntryKind::File, Some(&matcher)).unwrap();
        assert_eq!(found, vec![dir.path().join("report.txt")]);

        let matcher = NameMatcher::new("\u{FFFD}", false);
        let found = list_entries(dir.path(), EntryKind::File, Some(&matcher)).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn missing_directory_is_reported() {
        let dir = tempdir().expect("create temp dir");
        let err = list_entries(&dir.path().join("gone"), EntryKind::Directory, None).unwrap_err();
        assert!(matches!(err, StorageError::DirectoryNotFound(_)));
    }
}
