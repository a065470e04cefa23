//! dirhelper
//!
//! Defensive wrappers around common file system operations and a small
//! typed XML persistence helper. Directory and file operations never return
//! an error: they validate their arguments, check the file system and report
//! the outcome as an [`OperationResult`].

pub mod config;
pub mod directory;
pub mod error;
pub mod file;
pub mod outcome;
pub mod persistence;
pub mod storage;
pub mod utils;
pub mod validation;

pub use config::HelperConfig;
pub use directory::{
    create_directory_if_not_exists, delete_directory_if_empty, delete_directory_if_exists,
    get_all_directories_from_path, move_directory_if_exists, rename_directory_if_exists,
    search_directories_from_path,
};
pub use error::{HelperError, PersistenceError, StorageError};
pub use file::{
    delete_file_if_exists, get_all_files_from_path, move_file_if_exists, rename_file_if_exists,
    search_files_from_path,
};
pub use outcome::OperationResult;
pub use persistence::XmlStore;
pub use validation::{ARGUMENTS_MISSING, Argument, any_missing};
