//! Scenario tests for the configuration loader.
//!
//! Responsibilities:
//! - Test environment variable resolution order, defaults and SSL requirements.
//! - Test file loading through `ConfigLoader` and the file-to-environment fallback.
//! - Test `.env` loading and logging hygiene.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.
//! - Every environment test clears all `DB_*` variables before setting its own.

use std::sync::Mutex;

use crate::constants::DB_ENV_VARS;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Run `f` with only the given `DB_*` variables set; every other `DB_*` variable is unset.
pub fn with_db_env<R>(vars: &[(&str, &str)], f: impl FnOnce() -> R) -> R {
    let mut all: Vec<(&str, Option<&str>)> =
        DB_ENV_VARS.iter().map(|name| (*name, None)).collect();
    for (name, value) in vars {
        match all.iter_mut().find(|(n, _)| n == name) {
            Some(entry) => entry.1 = Some(*value),
            None => all.push((*name, Some(*value))),
        }
    }
    temp_env::with_vars(all, f)
}

/// A complete, valid environment without SSL settings.
pub const BASE_ENV: [(&str, &str); 5] = [
    ("DB_TYPE", "POSTGRESQL"),
    ("DB_HOST", "localhost"),
    ("DB_USER", "postgres"),
    ("DB_PASSWORD", "postgres"),
    ("DB_DATABASE", "postgres"),
];

/// `BASE_ENV` plus `extra`, with entries in `extra` taking precedence.
pub fn base_env_with<'a>(extra: &[(&'a str, &'a str)]) -> Vec<(&'a str, &'a str)> {
    let mut vars: Vec<(&str, &str)> = BASE_ENV
        .iter()
        .copied()
        .filter(|(name, _)| !extra.iter().any(|(n, _)| n == name))
        .collect();
    vars.extend_from_slice(extra);
    vars
}
