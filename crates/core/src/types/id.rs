//! Newtype IDs for applications and contracts.
//!
//! Arkane identifies registered applications with opaque strings and smart
//! contracts with unsigned integers. Wrapping both prevents passing a contract
//! id where an application id is expected.

use core::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when parsing an [`AppId`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppIdError {
    /// The id contains a character outside the unreserved URI set.
    #[error("app id '{id}' contains '{found}'; only letters, digits, '-', '.', '_' and '~' are allowed")]
    InvalidCharacter {
        /// The rejected input.
        id: String,
        /// First offending character.
        found: char,
    },
    /// The id is `.` or `..`, which would be resolved as a relative path.
    #[error("app id '{0}' is a relative path segment")]
    DotSegment(String),
}

/// Identifier of an application registered with the Arkane business API.
///
/// The empty identifier is the [`AppId::INVALID`] sentinel. It is also the
/// default, so a configuration that never sets an application id resolves to
/// the sentinel and every contract endpoint refuses to build.
///
/// The id is spliced into URI paths, so it must be a single path segment
/// made of RFC 3986 unreserved characters.
///
/// # Example
///
/// ```rust
/// use arkane_core::AppId;
///
/// assert!(!AppId::default().is_valid());
/// assert!(AppId::parse("42").unwrap().is_valid());
/// assert_eq!(AppId::parse("42").unwrap().to_string(), "42");
///
/// assert!(AppId::parse("../wallets").is_err());
/// assert!(AppId::parse("app 1").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AppId(String);

impl AppId {
    /// The sentinel used when no application has been configured.
    pub const INVALID: Self = Self(String::new());

    /// Parse an application id. The empty string parses to [`AppId::INVALID`].
    ///
    /// # Errors
    ///
    /// Returns an error if the input:
    /// - Contains a character other than ASCII letters, digits, `-`, `.`, `_`, `~`
    /// - Is exactly `.` or `..`
    pub fn parse(s: &str) -> Result<Self, AppIdError> {
        if let Some(found) = s
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_' | '~')))
        {
            return Err(AppIdError::InvalidCharacter {
                id: s.to_owned(),
                found,
            });
        }

        if s == "." || s == ".." {
            return Err(AppIdError::DotSegment(s.to_owned()));
        }

        Ok(Self(s.to_owned()))
    }

    /// Whether this id differs from [`AppId::INVALID`].
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.0.is_empty()
    }

    /// Get the underlying string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for AppId {
    type Err = AppIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for AppId {
    type Error = AppIdError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<AppId> for String {
    fn from(id: AppId) -> Self {
        id.0
    }
}

/// Numeric identifier of an Arkane smart contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContractId(u64);

impl ContractId {
    /// Create a new ID from a u64 value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the underlying u64 value.
    #[must_use]
    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ContractId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ContractId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<ContractId> for u64 {
    fn from(id: ContractId) -> Self {
        id.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_app_id_is_invalid() {
        assert_eq!(AppId::default(), AppId::INVALID);
        assert!(!AppId::INVALID.is_valid());
    }

    #[test]
    fn test_app_id_display() {
        let app = AppId::parse("2f0d1c3e-app").unwrap();
        assert!(app.is_valid());
        assert_eq!(format!("{app}"), "2f0d1c3e-app");
        assert_eq!(app.as_str(), "2f0d1c3e-app");
    }

    #[test]
    fn test_app_id_serde_is_transparent() {
        let app: AppId = serde_json::from_str("\"42\"").unwrap();
        assert_eq!(app, AppId::parse("42").unwrap());
        assert_eq!(serde_json::to_string(&app).unwrap(), "\"42\"");
    }

    #[test]
    fn test_parse_empty_is_invalid_sentinel() {
        assert_eq!(AppId::parse("").unwrap(), AppId::INVALID);
    }

    #[test]
    fn test_parse_accepts_unreserved_characters() {
        for id in ["42", "c0ffee-app", "my_app.v2", "a~b", "..."] {
            assert!(AppId::parse(id).is_ok(), "{id} should parse");
        }
    }

    #[test]
    fn test_parse_rejects_path_characters() {
        assert_eq!(
            AppId::parse("../../wallets"),
            Err(AppIdError::InvalidCharacter {
                id: "../../wallets".to_string(),
                found: '/',
            })
        );
        assert!(matches!(
            AppId::parse("app 1"),
            Err(AppIdError::InvalidCharacter { found: ' ', .. })
        ));
        assert!(matches!(
            AppId::parse("42?x=1"),
            Err(AppIdError::InvalidCharacter { found: '?', .. })
        ));
        assert!(matches!(
            AppId::parse("a%2Fb"),
            Err(AppIdError::InvalidCharacter { found: '%', .. })
        ));
    }

    #[test]
    fn test_parse_rejects_dot_segments() {
        assert_eq!(AppId::parse(".."), Err(AppIdError::DotSegment("..".to_string())));
        assert_eq!(AppId::parse("."), Err(AppIdError::DotSegment(".".to_string())));
    }

    #[test]
    fn test_deserialize_rejects_path_characters() {
        assert!(serde_json::from_str::<AppId>("\"../wallets\"").is_err());
    }

    #[test]
    fn test_contract_id_conversions() {
        let id = ContractId::from(7_u64);
        assert_eq!(id.as_u64(), 7);
        assert_eq!(u64::from(id), 7);
        assert_eq!(id.to_string(), "7");
    }

    #[test]
    fn test_contract_id_serde_is_transparent() {
        let id: ContractId = serde_json::from_str("1234").unwrap();
        assert_eq!(id, ContractId::new(1234));
    }
}
