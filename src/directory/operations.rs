//! Directory operations
//!
//! Create, move, delete, list, search and rename directories. Every function
//! validates its arguments, checks the file system and reports back through an
//! [`OperationResult`].

use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{StorageError, complete};
use crate::outcome::OperationResult;
use crate::storage::{
    EntryKind, NameMatcher, directory_exists, entry_exists, is_directory_empty, list_entries,
};
use crate::validation::{require_arguments, require_plain_names};

/// Creates a directory, including missing parents, unless it already exists.
pub fn create_directory_if_not_exists(path: impl AsRef<Path>) -> OperationResult {
    let path = path.as_ref();
    complete("create_directory_if_not_exists", create_directory(path))
}

fn create_directory(path: &Path) -> Result<((), &'static str), StorageError> {
    require_arguments(&[&path])?;

    if directory_exists(path) {
        debug!("Directory {} already exists", path.display());
        return Ok(((), "Directory already exists"));
    }

    fs::create_dir_all(path)?;
    info!("Created directory {}", path.display());
    Ok(((), "Directory created successfully"))
}

/// Moves a directory and its contents to `destination`.
///
/// Fails if the source does not exist or anything already sits at the
/// destination.
pub fn move_directory_if_exists(
    source: impl AsRef<Path>,
    destination: impl AsRef<Path>,
) -> OperationResult {
    let (source, destination) = (source.as_ref(), destination.as_ref());
    complete(
        "move_directory_if_exists",
        move_directory(source, destination),
    )
}

fn move_directory(source: &Path, destination: &Path) -> Result<((), &'static str), StorageError> {
    require_arguments(&[&source, &destination])?;

    if !directory_exists(source) {
        return Err(StorageError::SourceNotFound);
    }

    if entry_exists(destination) {
        return Err(StorageError::AlreadyExists(
            "Destination path already exists".into(),
        ));
    }

    fs::rename(source, destination)?;
    info!(
        "Moved directory {} -> {}",
        source.display(),
        destination.display()
    );
    Ok(((), "Directory successfully moved"))
}

/// Deletes a directory together with all its subdirectories and files.
pub fn delete_directory_if_exists(path: impl AsRef<Path>) -> OperationResult {
    let path = path.as_ref();
    complete("delete_directory_if_exists", delete_directory(path))
}

fn delete_directory(path: &Path) -> Result<((), &'static str), StorageError> {
    require_arguments(&[&path])?;

    if !directory_exists(path) {
        return Err(StorageError::DirectoryNotFound(
            "Directory path does not exist".into(),
        ));
    }

    fs::remove_dir_all(path)?;
    info!("Deleted directory tree {}", path.display());
    Ok(((), "Deleted directory successfully"))
}

/// Deletes a directory only when it contains no subdirectories and no files.
pub fn delete_directory_if_empty(path: impl AsRef<Path>) -> OperationResult {
    let path = path.as_ref();
    complete("delete_directory_if_empty", delete_empty_directory(path))
}

fn delete_empty_directory(path: &Path) -> Result<((), &'static str), StorageError> {
    require_arguments(&[&path])?;

    if !directory_exists(path) {
        return Err(StorageError::DirectoryNotFound(
            "The directory path does not exist".into(),
        ));
    }

    if !is_directory_empty(path)? {
        return Err(StorageError::NotEmpty);
    }

    fs::remove_dir(path)?;
    info!("Deleted empty directory {}", path.display());
    Ok(((), "Directory deleted"))
}

/// Lists the immediate subdirectories of `path`.
///
/// The payload holds full paths sorted by name.
pub fn get_all_directories_from_path(path: impl AsRef<Path>) -> OperationResult<Vec<PathBuf>> {
    let path = path.as_ref();
    complete(
        "get_all_directories_from_path",
        require_arguments(&[&path])
            .and_then(|_| list_entries(path, EntryKind::Directory, None))
            .map(|dirs| (dirs, "Successfully returned sub directory names in the directory")),
    )
}

/// Searches the immediate subdirectories of `path` by name.
///
/// # Arguments
///
/// * `path` - Directory whose children are searched.
/// * `search_text` - Text to look for. When empty, every subdirectory is returned.
/// * `exact` - If `true`, only names equal to `search_text` match; otherwise
///   names containing it match.
pub fn search_directories_from_path(
    path: impl AsRef<Path>,
    search_text: &str,
    exact: bool,
) -> OperationResult<Vec<PathBuf>> {
    let path = path.as_ref();
    if search_text.is_empty() {
        return get_all_directories_from_path(path);
    }

    let matcher = NameMatcher::new(search_text, exact);
    complete(
        "search_directories_from_path",
        require_arguments(&[&path])
            .and_then(|_| list_entries(path, EntryKind::Directory, Some(&matcher)))
            .map(|dirs| {
                (
                    dirs,
                    "Successfully returned matching sub directory names in the directory",
                )
            }),
    )
}

/// Renames the directory `old_name` under `path` to `new_name`.
pub fn rename_directory_if_exists(
    path: impl AsRef<Path>,
    old_name: &str,
    new_name: &str,
) -> OperationResult {
    let path = path.as_ref();
    complete(
        "rename_directory_if_exists",
        rename_directory(path, old_name, new_name),
    )
}

fn rename_directory(
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

    if !directory_exists(&old_path) {
        return Err(StorageError::DirectoryNotFound(
            "The directory to rename does not exist at the specified path".into(),
        ));
    }

    if entry_exists(&new_path) {
        return Err(StorageError::AlreadyExists(
            "The new name already exists at the specified path".into(),
        ));
    }

    fs::rename(&old_path, &new_path)?;
    info!(
        "Renamed directory {} -> {}",
        old_path.display(),
        new_path.display()
    );
    Ok(((), "Renamed directory successfully"))
}
