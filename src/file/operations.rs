//! File operations
//!
//! Move, delete, list, search and rename files inside directories.

use log::info;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{StorageError, complete};
use crate::outcome::OperationResult;
use crate::storage::{
    EntryKind, NameMatcher, directory_exists, entry_exists, file_exists, list_entries, move_file,
};
use crate::validation::{require_arguments, require_plain_names};

/// Moves `file_name` from `source_path` into `destination_path`.
///
/// # Arguments
///
/// * `file_name` - Name of the file, including its extension.
/// * `source_path` - Directory currently holding the file.
/// * `destination_path` - Directory the file is moved into.
/// * `forced` - Move even when the destination directory does not exist yet;
///   the directory is created first.
///
/// # Returns
///
/// * `OperationResult` - Failure without touching either directory if the
///   file is missing or a file with the same name already sits at the
///   destination.
pub fn move_file_if_exists(
    file_name: &str,
    source_path: impl AsRef<Path>,
    destination_path: impl AsRef<Path>,
    forced: bool,
) -> OperationResult {
    let (source, destination) = (source_path.as_ref(), destination_path.as_ref());
    complete(
        "move_file_if_exists",
        move_named_file(file_name, source, destination, forced),
    )
}

fn move_named_file(
    file_name: &str,
    source: &Path,
    destination: &Path,
    forced: bool,
) -> Result<((), &'static str), StorageError> {
    require_arguments(&[&file_name, &source, &destination])?;
    require_plain_names(&[file_name])?;

    if !directory_exists(source) {
        return Err(StorageError::SourceNotFound);
    }

    let old_path = source.join(file_name);
    let new_path = destination.join(file_name);

    if !file_exists(&old_path) {
        return Err(StorageError::FileNotFound(
            "File does not exist at the source path".into(),
        ));
    }

    if directory_exists(destination) {
        if entry_exists(&new_path) {
            return Err(StorageError::AlreadyExists(
                "File with same name already exists at the destination path".into(),
            ));
        }
    } else if forced {
        fs::create_dir_all(destination)?;
        info!("Created destination directory {}", destination.display());
    } else {
        return Err(StorageError::DestinationMissing);
    }

    move_file(&old_path, &new_path)?;
    info!(
        "Moved file {} -> {}",
        old_path.display(),
        new_path.display()
    );
    Ok(((), "File moved successfully"))
}

/// Deletes `file_name` inside the directory `path`.
pub fn delete_file_if_exists(path: impl AsRef<Path>, file_name: &str) -> OperationResult {
    let path = path.as_ref();
    complete("delete_file_if_exists", delete_file(path, file_name))
}

fn delete_file(path: &Path, file_name: &str) -> Result<((), &'static str), StorageError> {
    require_arguments(&[&path, &file_name])?;
    require_plain_names(&[file_name])?;

    if !directory_exists(path) {
        return Err(StorageError::DirectoryNotFound(
            "The path specified does not exist".into(),
        ));
    }

    let file_path = path.join(file_name);
    if !file_exists(&file_path) {
        return Err(StorageError::FileNotFound(
            "File to delete does not exist at the specified path".into(),
        ));
    }

    fs::remove_file(&file_path)?;
    info!("Deleted file {}", file_path.display());
    Ok(((), "File deleted successfully"))
}

/// Lists the files directly inside `path`, sorted by name.
pub fn get_all_files_from_path(path: impl AsRef<Path>) -> OperationResult<Vec<PathBuf>> {
    let path = path.as_ref();
    complete(
        "get_all_files_from_path",
        require_arguments(&[&path])
            .and_then(|_| list_entries(path, EntryKind::File, None))
            .map(|files| (files, "Successfully returned file names in the directory")),
    )
}

/// Searches the files directly inside `path` by name.
///
/// An empty `search_text` returns every file. With `exact` set, only names
/// equal to `search_text` match.
pub fn search_files_from_path(
    path: impl AsRef<Path>,
    search_text: &str,
    exact: bool,
) -> OperationResult<Vec<PathBuf>> {
    let path = path.as_ref();
    if search_text.is_empty() {
        return get_all_files_from_path(path);
    }

    let matcher = NameMatcher::new(search_text, exact);
    complete(
        "search_files_from_path",
        require_arguments(&[&path])
            .and_then(|_| list_entries(path, EntryKind::File, Some(&matcher)))
            .map(|files| {
                (
                    files,
                    "Successfully returned matching file names in the directory",
                )
            }),
    )
}

/// Renames the file `old_name` inside `path` to `new_name`.
pub fn rename_file_if_exists(
    path: impl AsRef<Path>,
    old_name: &str,
    new_name: &str,
) -> OperationResult {
    let path = path.as_ref();
    complete("rename_file_if_exists", rename_file(path, old_name, new_name))
}

fn rename_file(
    path: &Path,
    old_name: &str,
    new_name: &str,
) -> Result<((), &'static str), StorageError> {
    require_arguments(&[&path, &old_name, &new_name])?;
    require_plain_names(&[old_name, new_name])?;

    if !directory_exists(path) {
        return Err(StorageError::DirectoryNotFound(
            "The path specified does not exist".into(),
        ));
    }

    let old_path = path.join(old_name);
    let new_path = path.join(new_name);

    if !file_exists(&old_path) {
        return Err(StorageError::FileNotFound(
            "The file to rename does not exist at the specified path".into(),
        ));
    }

    if entry_exists(&new_path) {
        return Err(StorageError::AlreadyExists(
            "A file with new name specified already exists at the specified path".into(),
        ));
    }

    fs::rename(&old_path, &new_path)?;
    info!("Renamed file {} -> {}", old_path.display(), new_path.display());
    Ok(((), "Renamed file successfully"))
}
