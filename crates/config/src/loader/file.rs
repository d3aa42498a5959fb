//! Configuration file discovery and loading.
//!
//! Responsibilities:
//! - Search a directory for `dbconfig.<ext>` in format priority order.
//! - Read a configuration file and decode it with the matching format handler.
//!
//! Does NOT handle:
//! - Falling back to environment variables (see `builder.rs`).
//! - Choosing the search directory.
//!
//! Invariants:
//! - A missing file is reported as `ConfigFileNotFound` only when no format matched.
//! - Any other filesystem error while searching is `ConfigFileNotLoaded` and stops the search.
//! - Decoding failures, including enum and SSL field validation, are `ConfigFileParse`.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::format::ConfigFormat;
use crate::error::ConfigError;
use crate::types::Config;

/// Locate the highest-priority configuration file inside `dir`.
pub fn find_config_file(dir: &Path) -> Result<(PathBuf, ConfigFormat), ConfigError> {
    for format in ConfigFormat::SEARCH_ORDER.iter().copied() {
        let candidate = dir.join(format.file_name());
        match std::fs::metadata(&candidate) {
            Ok(_) => return Ok((candidate, format)),
            Err(e) if e.kind() == ErrorKind::NotFound => continue,
            Err(e) => {
                return Err(ConfigError::ConfigFileNotLoaded {
                    path: candidate,
                    source: e,
                });
            }
        }
    }

    Err(ConfigError::ConfigFileNotFound {
        dir: dir.to_path_buf(),
    })
}

/// Read and decode the configuration file at `path` using `format`.
pub(crate) fn read_config_file(path: &Path, format: ConfigFormat) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ConfigFileNotLoaded {
        path: path.to_path_buf(),
        source: e,
    })?;

    let config = format.decode(path, &content)?;
    tracing::debug!(
        path = %path.display(),
        db_type = %config.db_type,
        host = %config.host,
        port = config.port,
        database = %config.database,
        ssl_mode = %config.ssl_mode(),
        "Resolved database configuration from file"
    );
    Ok(config)
}

/// Resolve a `Config` from the file at `path`.
///
/// The format is inferred from the file extension; unrecognized extensions
/// are decoded as JSON.
pub fn resolve_from_file(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let format = ConfigFormat::from_path(path).unwrap_or(ConfigFormat::Json);
    read_config_file(path, format)
}
