//! SSL mode and SSL credential types.
//!
//! Responsibilities:
//! - Define `SslMode` and its canonical lowercase-with-hyphens tokens.
//! - Define `SslConfig`, which only exists for the verifying modes.
//! - Apply the mode-to-required-fields table when assembling an `SslConfig`.
//!
//! Does NOT handle:
//! - Reading SSL values from the environment or files (see `loader` module).
//! - Opening or validating the certificate files themselves.
//!
//! Invariants:
//! - `disable`, `allow`, `prefer` and `require` never produce an `SslConfig`.
//! - `verify-ca` carries a CA path; `verify-full` carries CA, cert and key paths.
//! - Empty strings count as missing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::ConfigError;

/// Transport security posture requested for the connection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SslMode {
    #[default]
    Disable,
    Allow,
    Prefer,
    Require,
    VerifyCa,
    VerifyFull,
}

impl SslMode {
    pub const ALL: [SslMode; 6] = [
        SslMode::Disable,
        SslMode::Allow,
        SslMode::Prefer,
        SslMode::Require,
        SslMode::VerifyCa,
        SslMode::VerifyFull,
    ];

    /// Canonical token for this mode.
    pub const fn as_str(self) -> &'static str {
        match self {
            SslMode::Disable => "disable",
            SslMode::Allow => "allow",
            SslMode::Prefer => "prefer",
            SslMode::Require => "require",
            SslMode::VerifyCa => "verify-ca",
            SslMode::VerifyFull => "verify-full",
        }
    }

    /// Whether a CA certificate path must be supplied.
    pub const fn requires_ca(self) -> bool {
        matches!(self, SslMode::VerifyCa | SslMode::VerifyFull)
    }

    /// Whether a client certificate and key must be supplied.
    pub const fn requires_client_cert(self) -> bool {
        matches!(self, SslMode::VerifyFull)
    }
}

impl fmt::Display for SslMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SslMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "disable" => Ok(SslMode::Disable),
            "allow" => Ok(SslMode::Allow),
            "prefer" => Ok(SslMode::Prefer),
            "require" => Ok(SslMode::Require),
            "verify-ca" => Ok(SslMode::VerifyCa),
            "verify-full" => Ok(SslMode::VerifyFull),
            other => Err(ConfigError::SslModeParse {
                value: other.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for SslMode {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SslMode> for String {
    fn from(value: SslMode) -> Self {
        value.as_str().to_string()
    }
}

/// SSL field that a verifying mode requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SslField {
    Ca,
    Cert,
    Key,
}

impl SslField {
    pub const fn as_str(self) -> &'static str {
        match self {
            SslField::Ca => "ca",
            SslField::Cert => "cert",
            SslField::Key => "key",
        }
    }
}

/// A required SSL field was absent for the selected mode.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("ssl.{} is required when ssl.mode is {mode}", .field.as_str())]
pub struct SslFieldMissing {
    pub mode: SslMode,
    pub field: SslField,
}

/// Credential material for the verifying SSL modes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SslConfig {
    /// Verify the server certificate against a CA.
    VerifyCa { ca: String },
    /// Verify the server certificate and hostname, presenting a client certificate.
    VerifyFull { ca: String, cert: String, key: String },
}

impl SslConfig {
    pub fn mode(&self) -> SslMode {
        match self {
            SslConfig::VerifyCa { .. } => SslMode::VerifyCa,
            SslConfig::VerifyFull { .. } => SslMode::VerifyFull,
        }
    }

    pub fn ca(&self) -> &str {
        match self {
            SslConfig::VerifyCa { ca } | SslConfig::VerifyFull { ca, .. } => ca,
        }
    }

    pub fn cert(&self) -> Option<&str> {
        match self {
            SslConfig::VerifyCa { .. } => None,
            SslConfig::VerifyFull { cert, .. } => Some(cert),
        }
    }

    pub fn key(&self) -> Option<&str> {
        match self {
            SslConfig::VerifyCa { .. } => None,
            SslConfig::VerifyFull { key, .. } => Some(key),
        }
    }

    /// Assemble the SSL section for `mode` from optional parts.
    ///
    /// Non-verifying modes return `Ok(None)` and ignore any supplied paths.
    /// Required fields are checked in the order cert, key, ca.
    pub fn from_parts(
        mode: SslMode,
        ca: Option<String>,
        cert: Option<String>,
        key: Option<String>,
    ) -> Result<Option<SslConfig>, SslFieldMissing> {
        let require = |value: Option<String>, field: SslField| {
            value
                .filter(|v| !v.is_empty())
                .ok_or(SslFieldMissing { mode, field })
        };

        match mode {
            SslMode::Disable | SslMode::Allow | SslMode::Prefer | SslMode::Require => Ok(None),
            SslMode::VerifyCa => Ok(Some(SslConfig::VerifyCa {
                ca: require(ca, SslField::Ca)?,
            })),
            SslMode::VerifyFull => {
                let cert = require(cert, SslField::Cert)?;
                let key = require(key, SslField::Key)?;
                let ca = require(ca, SslField::Ca)?;
                Ok(Some(SslConfig::VerifyFull { ca, cert, key }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some(s: &str) -> Option<String> {
        Some(s.to_string())
    }

    #[test]
    fn test_parse_canonical_tokens() {
        for mode in SslMode::ALL {
            assert_eq!(mode.as_str().parse::<SslMode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_parse_rejects_unknown_tokens() {
        for input in ["VERIFY-FULL", "verify_full", "true", "", "off"] {
            assert!(
                matches!(input.parse::<SslMode>(), Err(ConfigError::SslModeParse { .. })),
                "{input:?} should not parse"
            );
        }
    }

    #[test]
    fn test_default_is_disable() {
        assert_eq!(SslMode::default(), SslMode::Disable);
    }

    #[test]
    fn test_non_verifying_modes_have_no_ssl_config() {
        for mode in [SslMode::Disable, SslMode::Allow, SslMode::Prefer, SslMode::Require] {
            let ssl = SslConfig::from_parts(mode, some("ca.crt"), some("c.crt"), some("c.key"));
            assert_eq!(ssl, Ok(None), "{mode} should not carry SSL config");
        }
    }

    #[test]
    fn test_verify_ca_requires_only_ca() {
        let ssl = SslConfig::from_parts(SslMode::VerifyCa, some("ca.crt"), None, None).unwrap();
        assert_eq!(
            ssl,
            Some(SslConfig::VerifyCa {
                ca: "ca.crt".to_string()
            })
        );

        let err = SslConfig::from_parts(SslMode::VerifyCa, None, some("c.crt"), None).unwrap_err();
        assert_eq!(err.field, SslField::Ca);
    }

    #[test]
    fn test_verify_full_checks_cert_key_then_ca() {
        let err = SslConfig::from_parts(SslMode::VerifyFull, None, None, None).unwrap_err();
        assert_eq!(err.field, SslField::Cert);

        let err =
            SslConfig::from_parts(SslMode::VerifyFull, some("ca.crt"), some("c.crt"), None)
                .unwrap_err();
        assert_eq!(err.field, SslField::Key);

        let err =
            SslConfig::from_parts(SslMode::VerifyFull, None, some("c.crt"), some("c.key"))
                .unwrap_err();
        assert_eq!(err.field, SslField::Ca);
        assert_eq!(err.to_string(), "ssl.ca is required when ssl.mode is verify-full");
    }

    #[test]
    fn test_empty_string_counts_as_missing() {
        let err = SslConfig::from_parts(SslMode::VerifyCa, some(""), None, None).unwrap_err();
        assert_eq!(err.field, SslField::Ca);
    }

    #[test]
    fn test_accessors() {
        let ssl = SslConfig::VerifyFull {
            ca: "ca.crt".to_string(),
            cert: "client.crt".to_string(),
            key: "client.key".to_string(),
        };
        assert_eq!(ssl.mode(), SslMode::VerifyFull);
        assert_eq!(ssl.ca(), "ca.crt");
        assert_eq!(ssl.cert(), Some("client.crt"));
        assert_eq!(ssl.key(), Some("client.key"));
    }
}
