//! Environment variable resolution for database configuration.
//!
//! Responsibilities:
//! - Read the `DB_*` variables in a fixed order and assemble a `Config`.
//! - Apply defaults for `DB_PORT` and `DB_SSL_MODE`.
//! - Provide `env_var_or_none` with empty/whitespace filtering.
//!
//! Does NOT handle:
//! - Loading `.env` files (handled by `ConfigLoader::load_dotenv`).
//! - Deciding when to use the environment instead of a file (see `builder.rs`).
//!
//! Invariants:
//! - `DB_TYPE` is checked first, so an empty environment reports `DB_TYPE`.
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Present values are returned verbatim; surrounding whitespace is kept.
//! - Resolution only reads process state; it is safe to call repeatedly.

use secrecy::SecretString;

use crate::constants::{
    DEFAULT_DB_PORT, ENV_DB_DATABASE, ENV_DB_HOST, ENV_DB_PASSWORD, ENV_DB_PORT, ENV_DB_SSL_CA,
    ENV_DB_SSL_CERT, ENV_DB_SSL_KEY, ENV_DB_SSL_MODE, ENV_DB_TYPE, ENV_DB_USER,
};
use crate::error::ConfigError;
use crate::types::{Config, DbType, SslConfig, SslField, SslMode};

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Any other value is returned unchanged, including surrounding whitespace.
pub(crate) fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|s| !s.trim().is_empty())
}

fn required(var: &'static str) -> Result<String, ConfigError> {
    env_var_or_none(var).ok_or(ConfigError::EnvConfigNotLoaded { var })
}

fn parse_port() -> Result<u16, ConfigError> {
    let Some(raw) = env_var_or_none(ENV_DB_PORT) else {
        return Ok(DEFAULT_DB_PORT);
    };

    match raw.parse::<u16>() {
        Ok(0) => Err(ConfigError::EnvConfigParse {
            var: ENV_DB_PORT,
            detail: "\"0\" value for DB_PORT is invalid: must be a positive integer".to_string(),
        }),
        Ok(port) => Ok(port),
        Err(e) => Err(ConfigError::EnvConfigParse {
            var: ENV_DB_PORT,
            detail: format!("\"{raw}\" value for DB_PORT is invalid: {e}"),
        }),
    }
}

fn ssl_env_var(field: SslField) -> &'static str {
    match field {
        SslField::Ca => ENV_DB_SSL_CA,
        SslField::Cert => ENV_DB_SSL_CERT,
        SslField::Key => ENV_DB_SSL_KEY,
    }
}

fn resolve_ssl() -> Result<Option<SslConfig>, ConfigError> {
    let mode = match env_var_or_none(ENV_DB_SSL_MODE) {
        Some(raw) => raw
            .parse::<SslMode>()
            .map_err(|e| ConfigError::EnvConfigParse {
                var: ENV_DB_SSL_MODE,
                detail: e.detail(),
            })?,
        None => SslMode::default(),
    };

    let lookup = |needed: bool, var: &str| {
        if needed {
            env_var_or_none(var)
        } else {
            None
        }
    };

    SslConfig::from_parts(
        mode,
        lookup(mode.requires_ca(), ENV_DB_SSL_CA),
        lookup(mode.requires_client_cert(), ENV_DB_SSL_CERT),
        lookup(mode.requires_client_cert(), ENV_DB_SSL_KEY),
    )
    .map_err(|missing| ConfigError::EnvConfigNotLoaded {
        var: ssl_env_var(missing.field),
    })
}

/// Resolve a `Config` from the `DB_*` environment variables.
///
/// Variables are read in order, stopping at the first failure:
/// `DB_TYPE`, `DB_HOST`, `DB_PORT`, `DB_DATABASE`, `DB_USER`, `DB_PASSWORD`,
/// `DB_SSL_MODE`, then the SSL paths required by the resolved mode.
pub fn resolve_from_env() -> Result<Config, ConfigError> {
    let db_type: DbType =
        required(ENV_DB_TYPE)?
            .parse()
            .map_err(|e: ConfigError| ConfigError::EnvConfigParse {
                var: ENV_DB_TYPE,
                detail: e.detail(),
            })?;
    let host = required(ENV_DB_HOST)?;
    let port = parse_port()?;
    let database = required(ENV_DB_DATABASE)?;
    let user = required(ENV_DB_USER)?;
    let password = SecretString::new(required(ENV_DB_PASSWORD)?.into());
    let ssl = resolve_ssl()?;

    let config = Config {
        db_type,
        host,
        port,
        user,
        password,
        database,
        ssl,
    };

    tracing::debug!(
        db_type = %config.db_type,
        host = %config.host,
        port = config.port,
        database = %config.database,
        ssl_mode = %config.ssl_mode(),
        "Resolved database configuration from environment"
    );
    Ok(config)
}
