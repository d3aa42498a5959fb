//! Database engine identifier.
//!
//! Invariants:
//! - Canonical tokens are uppercase (`MYSQL`, `POSTGRESQL`, `COCKROACHDB`).
//! - Parsing is case-sensitive; no aliases are accepted.
//! - Serde goes through the canonical token, so file decoding uses the same validator.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Target database engine family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DbType {
    Mysql,
    Postgresql,
    Cockroachdb,
}

impl DbType {
    /// Every supported engine.
    pub const ALL: [DbType; 3] = [DbType::Mysql, DbType::Postgresql, DbType::Cockroachdb];

    /// Canonical token for this engine.
    pub const fn as_str(self) -> &'static str {
        match self {
            DbType::Mysql => "MYSQL",
            DbType::Postgresql => "POSTGRESQL",
            DbType::Cockroachdb => "COCKROACHDB",
        }
    }
}

impl fmt::Display for DbType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DbType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MYSQL" => Ok(DbType::Mysql),
            "POSTGRESQL" => Ok(DbType::Postgresql),
            "COCKROACHDB" => Ok(DbType::Cockroachdb),
            other => Err(ConfigError::DbTypeParse {
                value: other.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for DbType {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DbType> for String {
    fn from(value: DbType) -> Self {
        value.as_str().to_string()
    }
}
