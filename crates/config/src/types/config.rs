//! Resolved database configuration and its on-disk document shape.
//!
//! Responsibilities:
//! - Define the main `Config` structure handed to database clients.
//! - Define `ConfigDocument`, the JSON shape of `dbconfig.json`.
//! - Convert between the two, applying the SSL requirement table on the way in.
//!
//! Does NOT handle:
//! - Locating or reading configuration files (see `loader::file`).
//! - Environment variable resolution (see `loader::env`).
//!
//! Invariants:
//! - The password is held as a `SecretString` and never appears in `Debug` output.
//! - `ssl` is `None` for every non-verifying mode.
//! - Serializing a `Config` and decoding it back yields an equal value.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::types::db_type::DbType;
use crate::types::ssl::{SslConfig, SslFieldMissing, SslMode};

/// Fully resolved database connection configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "ConfigDocument", into = "ConfigDocument")]
pub struct Config {
    /// Database engine family.
    pub db_type: DbType,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: SecretString,
    /// Database (schema) name.
    pub database: String,
    /// SSL credentials; present only for `verify-ca` and `verify-full`.
    pub ssl: Option<SslConfig>,
}

impl Config {
    /// Effective SSL mode (`disable` when no SSL section is present).
    pub fn ssl_mode(&self) -> SslMode {
        self.ssl.as_ref().map(SslConfig::mode).unwrap_or_default()
    }

    /// Render the configuration as a pretty-printed `dbconfig.json` document.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl PartialEq for Config {
    fn eq(&self, other: &Self) -> bool {
        self.db_type == other.db_type
            && self.host == other.host
            && self.port == other.port
            && self.user == other.user
            && self.password.expose_secret() == other.password.expose_secret()
            && self.database == other.database
            && self.ssl == other.ssl
    }
}

impl Eq for Config {}

/// `ssl` object of the configuration document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct SslDocument {
    pub mode: SslMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ca: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cert: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

/// JSON shape of `dbconfig.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct ConfigDocument {
    #[serde(rename = "type")]
    pub db_type: DbType,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssl: Option<SslDocument>,
}

impl TryFrom<ConfigDocument> for Config {
    type Error = SslFieldMissing;

    fn try_from(doc: ConfigDocument) -> Result<Self, Self::Error> {
        let ssl = match doc.ssl {
            Some(ssl) => SslConfig::from_parts(ssl.mode, ssl.ca, ssl.cert, ssl.key)?,
            None => None,
        };

        Ok(Config {
            db_type: doc.db_type,
            host: doc.host,
            port: doc.port,
            user: doc.user,
            password: SecretString::new(doc.password.into()),
            database: doc.database,
            ssl,
        })
    }
}

impl From<Config> for ConfigDocument {
    fn from(config: Config) -> Self {
        let ssl = config.ssl.map(|ssl| match ssl {
            SslConfig::VerifyCa { ca } => SslDocument {
                mode: SslMode::VerifyCa,
                ca: Some(ca),
                cert: None,
                key: None,
            },
            SslConfig::VerifyFull { ca, cert, key } => SslDocument {
                mode: SslMode::VerifyFull,
                ca: Some(ca),
                cert: Some(cert),
                key: Some(key),
            },
        });

        ConfigDocument {
            db_type: config.db_type,
            host: config.host,
            port: config.port,
            user: config.user,
            password: config.password.expose_secret().to_string(),
            database: config.database,
            ssl,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VERIFY_FULL_JSON: &str = r#"{"type":"POSTGRESQL","host":"localhost","port":5432,"user":"postgres","password":"postgres","database":"postgres","ssl":{"mode":"verify-full","ca":"ca.crt","cert":"client.crt","key":"client.key"}}"#;

    #[test]
    fn test_decode_verify_full_document() {
        let config: Config = serde_json::from_str(VERIFY_FULL_JSON).unwrap();

        assert_eq!(config.db_type, DbType::Postgresql);
        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 5432);
        assert_eq!(config.user, "postgres");
        assert_eq!(config.password.expose_secret(), "postgres");
        assert_eq!(config.database, "postgres");
        assert_eq!(
            config.ssl,
            Some(SslConfig::VerifyFull {
                ca: "ca.crt".to_string(),
                cert: "client.crt".to_string(),
                key: "client.key".to_string(),
            })
        );
        assert_eq!(config.ssl_mode(), SslMode::VerifyFull);
    }

    #[test]
    fn test_encode_then_decode_preserves_fields() {
        let config: Config = serde_json::from_str(VERIFY_FULL_JSON).unwrap();
        let json = serde_json::to_string(&config).unwrap();
        let decoded: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, config);
    }

    #[test]
    fn test_non_verifying_mode_drops_ssl_section() {
        let json = r#"{"type":"MYSQL","host":"db","port":3306,"user":"u","password":"p","database":"d","ssl":{"mode":"require","ca":"ignored.crt"}}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert!(config.ssl.is_none());
        assert_eq!(config.ssl_mode(), SslMode::Disable);

        let encoded = serde_json::to_string(&config).unwrap();
        assert!(!encoded.contains("ssl"));
    }

    #[test]
    fn test_verify_full_document_missing_cert_is_rejected() {
        let json = r#"{"type":"POSTGRESQL","host":"h","port":5432,"user":"u","password":"p","database":"d","ssl":{"mode":"verify-full","ca":"ca.crt","key":"client.key"}}"#;
        let err = serde_json::from_str::<Config>(json).unwrap_err();
        assert!(
            err.to_string()
                .contains("ssl.cert is required when ssl.mode is verify-full"),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn test_invalid_enum_tokens_are_rejected() {
        let json = r#"{"type":"postgresql","host":"h","port":5432,"user":"u","password":"p","database":"d"}"#;
        let err = serde_json::from_str::<Config>(json).unwrap_err();
        assert!(err.to_string().contains("value for DbType is invalid"));

        let json = r#"{"type":"MYSQL","host":"h","port":5432,"user":"u","password":"p","database":"d","ssl":{"mode":"strict"}}"#;
        let err = serde_json::from_str::<Config>(json).unwrap_err();
        assert!(err.to_string().contains("value for SSLMode is invalid"));
    }

    #[test]
    fn test_debug_output_redacts_password() {
        let json = r#"{"type":"MYSQL","host":"h","port":3306,"user":"u","password":"hunter2-secret","database":"d"}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        let debug = format!("{config:?}");
        assert!(!debug.contains("hunter2-secret"));
        assert!(debug.contains("REDACTED"));
    }

    #[test]
    fn test_to_json_pretty_uses_document_keys() {
        let config: Config = serde_json::from_str(VERIFY_FULL_JSON).unwrap();
        let json = config.to_json_pretty().unwrap();
        assert!(json.contains("\"type\": \"POSTGRESQL\""));
        assert!(json.contains("\"mode\": \"verify-full\""));
    }
}
