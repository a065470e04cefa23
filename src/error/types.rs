//! Error types
//!
//! Defines domain-specific error types for the storage facade and the
//! persistence helper.

use std::fmt;
use std::io;

use crate::validation::ARGUMENTS_MISSING;

/// Storage facade errors
///
/// The `Display` text of each variant is the message carried by a failed
/// `OperationResult`.
#[derive(Debug)]
pub enum StorageError {
    InvalidArguments,
    InvalidName(String),
    SourceNotFound,
    DirectoryNotFound(String),
    FileNotFound(String),
    AlreadyExists(String),
    DestinationMissing,
    NotEmpty,
    IoError(io::Error),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::InvalidArguments => write!(f, "{}", ARGUMENTS_MISSING),
            StorageError::InvalidName(name) => {
                write!(f, "Name must be a single path component: {}", name)
            }
            StorageError::SourceNotFound => write!(f, "Specified source path does not exist"),
            StorageError::DirectoryNotFound(msg) => write!(f, "{}", msg),
            StorageError::FileNotFound(msg) => write!(f, "{}", msg),
            StorageError::AlreadyExists(msg) => write!(f, "{}", msg),
            StorageError::DestinationMissing => write!(
                f,
                "The destination path does not exist. Use a forced move to move regardless of the destination path"
            ),
            StorageError::NotEmpty => write!(f, "The directory is not empty"),
            StorageError::IoError(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for StorageError {
    fn from(error: io::Error) -> Self {
        StorageError::IoError(error)
    }
}

/// Persistence helper errors
#[derive(Debug)]
pub enum PersistenceError {
    Io(io::Error),
    Serialize(quick_xml::SeError),
    Deserialize(quick_xml::DeError),
}

impl fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersistenceError::Io(e) => write!(f, "I/O error: {}", e),
            PersistenceError::Serialize(e) => write!(f, "Failed to serialize: {}", e),
            PersistenceError::Deserialize(e) => write!(f, "Failed to deserialize: {}", e),
        }
    }
}

impl std::error::Error for PersistenceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PersistenceError::Io(e) => Some(e),
            PersistenceError::Serialize(e) => Some(e),
            PersistenceError::Deserialize(e) => Some(e),
        }
    }
}

impl From<io::Error> for PersistenceError {
    fn from(error: io::Error) -> Self {
        PersistenceError::Io(error)
    }
}

impl From<quick_xml::SeError> for PersistenceError {
    fn from(error: quick_xml::SeError) -> Self {
        PersistenceError::Serialize(error)
    }
}

impl From<quick_xml::DeError> for PersistenceError {
    fn from(error: quick_xml::DeError) -> Self {
        PersistenceError::Deserialize(error)
    }
}

/// General helper error that encompasses all error types
#[derive(Debug)]
pub enum HelperError {
    Storage(StorageError),
    Persistence(PersistenceError),
    Config(config::ConfigError),
}

impl fmt::Display for HelperError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HelperError::Storage(e) => write!(f, "Storage error: {}", e),
            HelperError::Persistence(e) => write!(f, "Persistence error: {}", e),
            HelperError::Config(e) => write!(f, "Configuration error: {}", e),
        }
    }
}

impl std::error::Error for HelperError {}

impl From<StorageError> for HelperError {
    fn from(error: StorageError) -> Self {
        HelperError::Storage(error)
    }
}

impl From<PersistenceError> for HelperError {
    fn from(error: PersistenceError) -> Self {
        HelperError::Persistence(error)
    }
}

impl From<config::ConfigError> for HelperError {
    fn from(error: config::ConfigError) -> Self {
        HelperError::Config(error)
    }
}
