//! Argument validation
//!
//! Guard-clause checks for missing or empty arguments.

use std::ffi::{OsStr, OsString};
use std::path::{Component, Path, PathBuf};

use crate::error::StorageError;

/// Message returned by every operation that receives a missing argument.
pub const ARGUMENTS_MISSING: &str = "Arguments cannot be null";

/// A value that can be absent or empty.
pub trait Argument {
    /// Returns `true` if the value is absent or its text form is empty.
    fn is_missing(&self) -> bool;
}

impl Argument for str {
    fn is_missing(&self) -> bool {
        self.is_empty()
    }
}

impl Argument for String {
    fn is_missing(&self) -> bool {
        self.is_empty()
    }
}

impl Argument for OsStr {
    fn is_missing(&self) -> bool {
        self.is_empty()
    }
}

impl Argument for OsString {
    fn is_missing(&self) -> bool {
        self.is_empty()
    }
}

impl Argument for Path {
    fn is_missing(&self) -> bool {
        self.as_os_str().is_empty()
    }
}

impl Argument for PathBuf {
    fn is_missing(&self) -> bool {
        self.as_os_str().is_empty()
    }
}

impl<T: Argument> Argument for Option<T> {
    fn is_missing(&self) -> bool {
        match self {
            Some(value) => value.is_missing(),
            None => true,
        }
    }
}

impl<T: Argument + ?Sized> Argument for &T {
    fn is_missing(&self) -> bool {
        (**self).is_missing()
    }
}

/// Checks whether any of the given arguments is missing.
///
/// An empty list has nothing to check and yields `false`.
pub fn any_missing(values: &[&dyn Argument]) -> bool {
    values.iter().any(|value| value.is_missing())
}

/// Guard clause form of [`any_missing`].
pub fn require_arguments(values: &[&dyn Argument]) -> Result<(), StorageError> {
    if any_missing(values) {
        Err(StorageError::InvalidArguments)
    } else {
        Ok(())
    }
}

/// Checks that each name is a single plain path component, so joining it to
/// a directory stays inside that directory.
pub fn require_plain_names(names: &[&str]) -> Result<(), StorageError> {
    for name in names {
        let mut components = Path::new(name).components();
        let plain = matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        );
        if !plain || name.contains(['/', '\\']) {
            return Err(StorageError::InvalidName(name.to_string()));
        }
    }
    Ok(())
}
