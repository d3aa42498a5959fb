//! Centralized constants for database configuration loading.
//!
//! This module contains file names, defaults and environment variable names
//! shared by the file and environment resolvers.

// =============================================================================
// Config File
// =============================================================================

/// File stem searched for inside the configuration directory (`dbconfig.<ext>`).
pub const CONFIG_FILE_STEM: &str = "dbconfig";

// =============================================================================
// Defaults
// =============================================================================

/// Port used when `DB_PORT` is not set.
pub const DEFAULT_DB_PORT: u16 = 5432;

// =============================================================================
// Environment Variables
// =============================================================================

pub const ENV_DB_TYPE: &str = "DB_TYPE";
pub const ENV_DB_HOST: &str = "DB_HOST";
pub const ENV_DB_PORT: &str = "DB_PORT";
pub const ENV_DB_DATABASE: &str = "DB_DATABASE";
pub const ENV_DB_USER: &str = "DB_USER";
pub const ENV_DB_PASSWORD: &str = "DB_PASSWORD";
pub const ENV_DB_SSL_MODE: &str = "DB_SSL_MODE";
pub const ENV_DB_SSL_CA: &str = "DB_SSL_CA";
pub const ENV_DB_SSL_CERT: &str = "DB_SSL_CERT";
pub const ENV_DB_SSL_KEY: &str = "DB_SSL_KEY";

/// Every variable read by the environment resolver, in read order.
pub const DB_ENV_VARS: [&str; 10] = [
    ENV_DB_TYPE,
    ENV_DB_HOST,
    ENV_DB_PORT,
    ENV_DB_DATABASE,
    ENV_DB_USER,
    ENV_DB_PASSWORD,
    ENV_DB_SSL_MODE,
    ENV_DB_SSL_CA,
    ENV_DB_SSL_CERT,
    ENV_DB_SSL_KEY,
];

/// When set to `1` or `true`, `.env` files are never loaded.
pub const ENV_DOTENV_DISABLED: &str = "DOTENV_DISABLED";
