//! Configuration management for dirhelper
//!
//! The only setting is the base directory used by the persistence helper.
//! It is layered from a built-in default, an optional configuration file and
//! `DIRHELPER_*` environment variables.

use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable prefix, e.g. `DIRHELPER_BASE_DIRECTORY`.
pub const ENV_PREFIX: &str = "DIRHELPER";

/// Helper configuration
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct HelperConfig {
    /// Directory persisted objects are written to. Empty means the current
    /// working directory.
    pub base_directory: String,
}

impl HelperConfig {
    /// Load configuration from `path` (if present) with environment overrides
    pub fn load(path: impl AsRef<Path>) -> Result<Self, config::ConfigError> {
        Self::load_with_environment(path.as_ref(), Environment::with_prefix(ENV_PREFIX))
    }

    /// Environment values win over the file, the file wins over defaults.
    fn load_with_environment(
        path: &Path,
        environment: Environment,
    ) -> Result<Self, config::ConfigError> {
        let settings = Config::builder()
            .set_default("base_directory", "")?
            .add_source(File::from(path).required(false))
            .add_source(environment)
            .build()?;

        let config: HelperConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_base_directory(base_directory: impl Into<String>) -> Self {
        Self {
            base_directory: base_directory.into(),
        }
    }

    /// Get base directory as PathBuf
    pub fn base_directory_path(&self) -> PathBuf {
        PathBuf::from(&self.base_directory)
    }

    fn validate(&self) -> Result<(), config::ConfigError> {
        if self.base_directory.contains('\0') {
            return Err(config::ConfigError::Message(
                "base_directory cannot contain NUL bytes".into(),
            ));
        }
        Ok(())
    }
}
