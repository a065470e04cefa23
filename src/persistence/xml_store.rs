//! XML object store
//!
//! Saves and loads values to `<base_directory>/<TypeName>.xml`. One file per
//! type: saving two values of the same type overwrites the first.
//!
//! The root element is named after the type as well, so primitives and
//! sequences are stored as `<u32>5</u32>` or `<Vec>a</Vec><Vec>b</Vec>`.
//!
//! Round trips go through `quick-xml` and share its limits:
//! - leading and trailing whitespace of text values is trimmed on load;
//! - an empty sequence field writes no element, so the field needs
//!   `#[serde(default)]` to load back as empty.

use log::{debug, info};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use crate::config::HelperConfig;
use crate::directory::create_directory_if_not_exists;
use crate::error::{HelperError, PersistenceError, handle_error};
use crate::file::delete_file_if_exists;
use crate::outcome::OperationResult;

const EXTENSION: &str = "xml";

/// Returns the unqualified name of `T` without generic arguments,
/// e.g. `Settings` for `my_app::prefs::Settings` and `Vec` for `Vec<u8>`.
pub fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

/// Persists values of type `T` as XML files named after the type.
#[derive(Debug, Clone)]
pub struct XmlStore<T> {
    base_directory: PathBuf,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Default for XmlStore<T> {
    fn default() -> Self {
        Self::new("")
    }
}

impl<T> XmlStore<T> {
    /// Creates a store writing into `base_directory`. An empty path means the
    /// current working directory.
    pub fn new(base_directory: impl Into<PathBuf>) -> Self {
        Self {
            base_directory: base_directory.into(),
            _marker: PhantomData,
        }
    }

    pub fn from_config(config: &HelperConfig) -> Self {
        Self::new(config.base_directory_path())
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    fn file_name(&self) -> String {
        format!("{}.{}", short_type_name::<T>(), EXTENSION)
    }

    /// Full path of the file backing this store.
    pub fn file_path(&self) -> PathBuf {
        self.base_directory.join(self.file_name())
    }

    fn ensure_base_directory(&self) {
        if self.base_directory.as_os_str().is_empty() {
            return;
        }
        let result = create_directory_if_not_exists(&self.base_directory);
        debug!(
            "Base directory {}: {}",
            self.base_directory.display(),
            result
        );
    }

    /// Removes the persisted file.
    pub fn delete(&self) -> OperationResult {
        let directory = if self.base_directory.as_os_str().is_empty() {
            Path::new(".")
        } else {
            self.base_directory.as_path()
        };
        delete_file_if_exists(directory, &self.file_name())
    }
}

impl<T> XmlStore<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Serializes `value` into the store's file, creating the base directory
    /// on demand. Returns the path written to.
    pub fn try_save(&self, value: &T) -> Result<PathBuf, PersistenceError> {
        self.ensure_base_directory();
        let path = self.file_path();

        let xml = quick_xml::se::to_string_with_root(short_type_name::<T>(), value)?;
        let mut writer = BufWriter::new(File::create(&path)?);
        writer.write_all(xml.as_bytes())?;
        writer.flush()?;

        info!("Saved {} to {}", short_type_name::<T>(), path.display());
        Ok(path)
    }

    /// Reads a new `T` back from the store's file.
    pub fn try_load(&self) -> Result<T, PersistenceError> {
        let path = self.file_path();
        let reader = BufReader::new(File::open(&path)?);
        let value = quick_xml::de::from_reader(reader)?;

        info!("Loaded {} from {}", short_type_name::<T>(), path.display());
        Ok(value)
    }

    /// [`try_save`](Self::try_save) with the error folded into the outcome.
    pub fn save(&self, value: &T) -> OperationResult<PathBuf> {
        match self.try_save(value) {
            Ok(path) => OperationResult::with_payload(path, "Object saved successfully"),
            Err(err) => persistence_failure(err),
        }
    }

    /// [`try_load`](Self::try_load) with the error folded into the outcome.
    pub fn load(&self) -> OperationResult<T> {
        match self.try_load() {
            Ok(value) => OperationResult::with_payload(value, "Object loaded successfully"),
            Err(err) => persistence_failure(err),
        }
    }

    /// Loads the value stored for the type of `_sample`.
    pub fn load_like(&self, _sample: &T) -> OperationResult<T> {
        self.load()
    }
}

fn persistence_failure<T>(err: PersistenceError) -> OperationResult<T> {
    let message = err.to_string();
    handle_error(&HelperError::from(err));
    OperationResult::failure(message)
}
