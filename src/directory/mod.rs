//! Directory module
//!
//! Defensive wrappers around directory creation, removal, moves, renames,
//! listing and search.

mod operations;

// Re-export public functions
pub use operations::{
    create_directory_if_not_exists, delete_directory_if_empty, delete_directory_if_exists,
    get_all_directories_from_path, move_directory_if_exists, rename_directory_if_exists,
    search_directories_from_path,
};
