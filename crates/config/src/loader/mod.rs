//! Configuration loader for files and environment variables.
//!
//! Responsibilities:
//! - Locate and decode `dbconfig.<ext>` files in format priority order.
//! - Resolve configuration from `DB_*` environment variables.
//! - Provide the `ConfigLoader` entry point that falls back from file to environment.
//!
//! Does NOT handle:
//! - Type definitions and enum validation (see `types` module).
//! - Opening database connections.
//!
//! Invariants / Assumptions:
//! - A configuration file, when present, is used exclusively; it is never merged with the environment.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

mod builder;
mod env;
mod file;
mod format;

#[cfg(test)]
mod tests;

pub use builder::{ConfigLoader, load};
pub use env::resolve_from_env;
pub use file::{find_config_file, resolve_from_file};
pub use format::ConfigFormat;
