//! Database connection configuration.
//!
//! This crate resolves a single immutable [`Config`] for a database client,
//! either from a `dbconfig.json` file in a given directory or, when no such
//! file exists, from `DB_*` environment variables.
//!
//! ```rust,no_run
//! let config = dbconfig::load("/etc/myapp")?;
//! println!("connecting to {}:{}", config.host, config.port);
//! # Ok::<(), dbconfig::ConfigError>(())
//! ```

pub mod constants;
mod error;
mod loader;
pub mod types;

pub use error::{ConfigError, ErrorCode};
pub use loader::{
    ConfigFormat, ConfigLoader, find_config_file, load, resolve_from_env, resolve_from_file,
};
pub use types::{Config, DbType, SslConfig, SslField, SslFieldMissing, SslMode};
