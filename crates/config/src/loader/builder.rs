//! Configuration loader entry point.
//!
//! Responsibilities:
//! - Provide the `ConfigLoader` builder and the `load` shorthand.
//! - Try the configuration file first and fall back to environment variables.
//! - Optionally populate the environment from a `.env` file before resolving.
//!
//! Does NOT handle:
//! - Decoding configuration files (see `file.rs` and `format.rs`).
//! - Reading individual `DB_*` variables (see `env.rs`).
//!
//! Invariants / Assumptions:
//! - Only `ConfigFileNotFound` triggers the environment fallback; every other error is returned as-is.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before any `.env` file is read.
//! - Nothing is cached; each `load()` resolves from scratch.

use std::path::{Path, PathBuf};

use super::env::resolve_from_env;
use super::file::{find_config_file, read_config_file};
use crate::constants::ENV_DOTENV_DISABLED;
use crate::error::ConfigError;
use crate::types::Config;

/// Loads a database `Config` from `dbconfig.<ext>` or the `DB_*` environment variables.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    search_dir: PathBuf,
    dotenv_path: Option<PathBuf>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Create a loader that searches the current directory.
    pub fn new() -> Self {
        Self {
            search_dir: PathBuf::from("."),
            dotenv_path: None,
        }
    }

    /// Set the directory searched for `dbconfig.<ext>`.
    pub fn with_search_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.search_dir = dir.into();
        self
    }

    /// Read `.env` from an explicit path instead of discovering it from the working directory.
    pub fn with_dotenv_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.dotenv_path = Some(path.into());
        self
    }

    pub fn search_dir(&self) -> &Path {
        &self.search_dir
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(ENV_DOTENV_DISABLED).ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from a .env file if present.
    ///
    /// If `DOTENV_DISABLED` environment variable is set to "true" or "1",
    /// the .env file will not be loaded (useful for testing). Variables that
    /// are already set in the process environment are not overridden.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `.env` file exists but has invalid syntax (`ConfigError::DotenvParse`)
    /// - The `.env` file exists but cannot be read due to I/O errors (`ConfigError::DotenvIo`)
    ///
    /// Missing `.env` files are silently ignored (returns `Ok(self)`).
    ///
    /// SAFETY: Error messages never include raw .env line contents to prevent secret leakage.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        let result = match &self.dotenv_path {
            Some(path) => dotenvy::from_path(path),
            None => dotenvy::dotenv().map(|_| ()),
        };

        match result {
            Ok(()) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Resolve the configuration.
    ///
    /// The configuration file in the search directory is used when present;
    /// otherwise the `DB_*` environment variables are read. Errors other than
    /// "file not found" are returned without attempting the fallback.
    pub fn load(&self) -> Result<Config, ConfigError> {
        match find_config_file(&self.search_dir) {
            Ok((path, format)) => {
                tracing::debug!(
                    path = %path.display(),
                    format = format.extension(),
                    "Loading database configuration file"
                );
                read_config_file(&path, format)
            }
            Err(ConfigError::ConfigFileNotFound { dir }) => {
                tracing::info!(
                    dir = %dir.display(),
                    "No database configuration file found, using environment variables"
                );
                resolve_from_env()
            }
            Err(e) => Err(e),
        }
    }
}

/// Load the configuration for `dir`: `dir/dbconfig.json` if present, else the environment.
pub fn load(dir: impl AsRef<Path>) -> Result<Config, ConfigError> {
    ConfigLoader::new()
        .with_search_dir(dir.as_ref())
        .load()
}
