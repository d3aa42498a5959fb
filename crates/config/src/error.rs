//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define error variants for every configuration resolution failure.
//! - Pair each variant with a stable `DBCONFIG-xxxx` code, a short message and a detail string.
//! - Provide the static code table (`ErrorCode::ALL`) used by callers that report codes.
//!
//! Does NOT handle:
//! - Deciding which errors trigger the environment fallback (see `loader/builder.rs`).
//! - Logging; errors are returned to the caller, never logged here.
//!
//! Invariants:
//! - Codes are stable and unique; the table is fixed at compile time.
//! - `ConfigFileNotFound` is the only variant the loader swallows.
//! - Dotenv errors NEVER include raw .env line contents to prevent secret leakage.

use std::fmt;
use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Stable error codes reported alongside every `ConfigError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    DbTypeParse,
    SslModeParse,
    ConfigFileNotFound,
    ConfigFileNotLoaded,
    EnvConfigNotLoaded,
    ConfigFileParse,
    EnvConfigParse,
    DotenvNotLoaded,
}

impl ErrorCode {
    /// Every known code, in registry order.
    pub const ALL: [ErrorCode; 8] = [
        ErrorCode::DbTypeParse,
        ErrorCode::SslModeParse,
        ErrorCode::ConfigFileNotFound,
        ErrorCode::ConfigFileNotLoaded,
        ErrorCode::EnvConfigNotLoaded,
        ErrorCode::ConfigFileParse,
        ErrorCode::EnvConfigParse,
        ErrorCode::DotenvNotLoaded,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::DbTypeParse => "DBCONFIG-1001",
            ErrorCode::SslModeParse => "DBCONFIG-1005",
            ErrorCode::ConfigFileNotFound => "DBCONFIG-1011",
            ErrorCode::ConfigFileNotLoaded => "DBCONFIG-1012",
            ErrorCode::EnvConfigNotLoaded => "DBCONFIG-1013",
            ErrorCode::ConfigFileParse => "DBCONFIG-1014",
            ErrorCode::EnvConfigParse => "DBCONFIG-1015",
            ErrorCode::DotenvNotLoaded => "DBCONFIG-1016",
        }
    }

    /// Human-readable description registered for the code.
    pub const fn description(self) -> &'static str {
        match self {
            ErrorCode::DbTypeParse => "DbType parse error",
            ErrorCode::SslModeParse => "SSLMode parse error",
            ErrorCode::ConfigFileNotFound => "Configuration file not found",
            ErrorCode::ConfigFileNotLoaded => "Configuration file not loaded",
            ErrorCode::EnvConfigNotLoaded => "Environment configuration not loaded",
            ErrorCode::ConfigFileParse => "Configuration file parse error",
            ErrorCode::EnvConfigParse => "Environment configuration cannot be parsed",
            ErrorCode::DotenvNotLoaded => "Dotenv file not loaded",
        }
    }

    /// Find the code registered under `code` (e.g. `"DBCONFIG-1013"`).
    pub fn lookup(code: &str) -> Option<ErrorCode> {
        Self::ALL.into_iter().find(|c| c.as_str() == code)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur while resolving a database configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("DbType parse error: \"{value}\" value for DbType is invalid")]
    DbTypeParse { value: String },

    #[error("SSLMode parse error: \"{value}\" value for SSLMode is invalid")]
    SslModeParse { value: String },

    #[error("Configuration file not found in {}", .dir.display())]
    ConfigFileNotFound { dir: PathBuf },

    #[error("Configuration file not loaded: {}: {source}", .path.display())]
    ConfigFileNotLoaded {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Configuration file parse error: {}: {source}", .path.display())]
    ConfigFileParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Environment configuration not loaded: {var} environment variable not found")]
    EnvConfigNotLoaded { var: &'static str },

    #[error("Environment configuration parse error: {var}: {detail}")]
    EnvConfigParse { var: &'static str, detail: String },

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}

impl ConfigError {
    /// Stable code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            ConfigError::DbTypeParse { .. } => ErrorCode::DbTypeParse,
            ConfigError::SslModeParse { .. } => ErrorCode::SslModeParse,
            ConfigError::ConfigFileNotFound { .. } => ErrorCode::ConfigFileNotFound,
            ConfigError::ConfigFileNotLoaded { .. } => ErrorCode::ConfigFileNotLoaded,
            ConfigError::ConfigFileParse { .. } => ErrorCode::ConfigFileParse,
            ConfigError::EnvConfigNotLoaded { .. } => ErrorCode::EnvConfigNotLoaded,
            ConfigError::EnvConfigParse { .. } => ErrorCode::EnvConfigParse,
            ConfigError::DotenvParse { .. }
            | ConfigError::DotenvIo { .. }
            | ConfigError::DotenvUnknown => ErrorCode::DotenvNotLoaded,
        }
    }

    /// Short message for this error. Matches the registered description
    /// except for `EnvConfigParse`, whose registry text differs.
    pub fn message(&self) -> &'static str {
        match self.code() {
            ErrorCode::EnvConfigParse => "Environment configuration parse error",
            code => code.description(),
        }
    }

    /// Free-text detail identifying the offending input.
    pub fn detail(&self) -> String {
        match self {
            ConfigError::DbTypeParse { value } => {
                format!("\"{value}\" value for DbType is invalid")
            }
            ConfigError::SslModeParse { value } => {
                format!("\"{value}\" value for SSLMode is invalid")
            }
            ConfigError::ConfigFileNotFound { dir } => {
                format!("no configuration file found in {}", dir.display())
            }
            ConfigError::ConfigFileNotLoaded { source, .. } => source.to_string(),
            ConfigError::ConfigFileParse { source, .. } => source.to_string(),
            ConfigError::EnvConfigNotLoaded { var } => {
                format!("{var} environment variable not found")
            }
            ConfigError::EnvConfigParse { detail, .. } => detail.clone(),
            ConfigError::DotenvParse { error_index } => {
                format!("invalid syntax at position {error_index}")
            }
            ConfigError::DotenvIo { kind } => kind.to_string(),
            ConfigError::DotenvUnknown => String::new(),
        }
    }
}
