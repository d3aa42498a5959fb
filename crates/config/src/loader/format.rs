//! Supported configuration file formats.
//!
//! Formats are searched in `ConfigFormat::SEARCH_ORDER`; the first
//! `dbconfig.<extension>` present in the search directory wins.

use std::path::Path;

use crate::constants::CONFIG_FILE_STEM;
use crate::error::ConfigError;
use crate::types::Config;

/// A structured document format that can hold a `Config`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
}

impl ConfigFormat {
    /// Priority order used when searching a directory.
    pub const SEARCH_ORDER: &'static [ConfigFormat] = &[ConfigFormat::Json];

    pub const fn extension(self) -> &'static str {
        match self {
            ConfigFormat::Json => "json",
        }
    }

    /// File name searched for in a configuration directory.
    pub fn file_name(self) -> String {
        format!("{}.{}", CONFIG_FILE_STEM, self.extension())
    }

    /// Infer the format from a path's extension.
    pub fn from_path(path: &Path) -> Option<ConfigFormat> {
        let ext = path.extension()?.to_str()?;
        Self::SEARCH_ORDER
            .iter()
            .copied()
            .find(|format| format.extension().eq_ignore_ascii_case(ext))
    }

    /// Decode `content` read from `path` into a validated `Config`.
    pub fn decode(self, path: &Path, content: &str) -> Result<Config, ConfigError> {
        match self {
            ConfigFormat::Json => {
                serde_json::from_str(content).map_err(|e| ConfigError::ConfigFileParse {
                    path: path.to_path_buf(),
                    source: e,
                })
            }
        }
    }
}
