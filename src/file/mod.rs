//! File module
//!
//! Defensive wrappers around moving, deleting, renaming, listing and
//! searching files.

mod operations;

pub use operations::{
    delete_file_if_exists, get_all_files_from_path, move_file_if_exists, rename_file_if_exists,
    search_files_from_path,
};
