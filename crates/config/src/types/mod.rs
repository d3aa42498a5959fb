//! Configuration type definitions for database connections.
//!
//! Responsibilities:
//! - Define the closed enumerations `DbType` and `SslMode` with canonical string tokens.
//! - Define the SSL credential sum type and the resolved `Config`.
//!
//! Does NOT handle:
//! - Configuration loading from files or environment variables (see `loader` module).
//! - Opening database connections.
//!
//! Invariants:
//! - Enum tokens are matched case-sensitively; there are no aliases.
//! - Secrets use `secrecy::SecretString` to prevent accidental logging.

mod config;
mod db_type;
mod ssl;

pub use config::Config;
pub use db_type::DbType;
pub use ssl::{SslConfig, SslField, SslFieldMissing, SslMode};
