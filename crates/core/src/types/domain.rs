//! Staging/production base-URL pairs.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// Errors that can occur when constructing a [`DomainTarget`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The base URL is not an absolute URL with a host.
    #[error("base URL '{url}' is not an absolute URL: {reason}")]
    NotAbsolute {
        /// The rejected input.
        url: String,
        /// Why parsing rejected it.
        reason: String,
    },
    /// The base URL ends with a slash, which would double up when paths are appended.
    #[error("base URL '{0}' must not end with a trailing slash")]
    TrailingSlash(String),
    /// The base URL carries a query or fragment, which paths cannot be appended after.
    #[error("base URL '{0}' must not have a query or fragment")]
    QueryOrFragment(String),
}

/// A pair of base URLs for one Arkane API family.
///
/// Endpoint paths are appended to the selected URL by plain concatenation,
/// so both URLs are absolute and carry no trailing slash.
///
/// ## Examples
///
/// ```
/// use arkane_core::DomainTarget;
///
/// let api = DomainTarget::new(
///     "https://api-staging.arkane.network",
///     "https://api.arkane.network",
/// )
/// .unwrap();
///
/// assert_eq!(api.select(true), "https://api-staging.arkane.network");
/// assert_eq!(api.select(false), "https://api.arkane.network");
///
/// assert!(DomainTarget::new("/relative", "https://api.arkane.network").is_err());
/// assert!(DomainTarget::new("https://api.arkane.network/", "https://api.arkane.network").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "DomainTargetFields")]
pub struct DomainTarget {
    staging: String,
    production: String,
}

/// Unvalidated shape used while deserializing.
#[derive(Deserialize)]
struct DomainTargetFields {
    staging: String,
    production: String,
}

impl TryFrom<DomainTargetFields> for DomainTarget {
    type Error = DomainError;

    fn try_from(fields: DomainTargetFields) -> Result<Self, Self::Error> {
        Self::new(fields.staging, fields.production)
    }
}

impl DomainTarget {
    /// Create a domain pair from a staging and a production base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if either URL:
    /// - Is not an absolute URL with a host
    /// - Has a query string or fragment
    /// - Ends with a trailing slash
    pub fn new(
        staging: impl Into<String>,
        production: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let staging = staging.into();
        let production = production.into();
        validate_base_url(&staging)?;
        validate_base_url(&production)?;
        Ok(Self {
            staging,
            production,
        })
    }

    /// The Arkane login (OpenID Connect) hosts.
    #[must_use]
    pub fn arkane_authentication() -> Self {
        Self::from_static(
            "https://login-staging.arkane.network",
            "https://login.arkane.network",
        )
    }

    /// The Arkane business API hosts.
    #[must_use]
    pub fn arkane_business() -> Self {
        Self::from_static(
            "https://business-staging.arkane.network",
            "https://business.arkane.network",
        )
    }

    /// The Arkane wallet API hosts.
    #[must_use]
    pub fn arkane_api() -> Self {
        Self::from_static(
            "https://api-staging.arkane.network",
            "https://api.arkane.network",
        )
    }

    fn from_static(staging: &'static str, production: &'static str) -> Self {
        Self {
            staging: staging.to_owned(),
            production: production.to_owned(),
        }
    }

    /// Returns the staging URL when `staging` is true, the production URL otherwise.
    #[must_use]
    pub fn select(&self, staging: bool) -> &str {
        if staging {
            &self.staging
        } else {
            &self.production
        }
    }

    /// The staging base URL.
    #[must_use]
    pub fn staging(&self) -> &str {
        &self.staging
    }

    /// The production base URL.
    #[must_use]
    pub fn production(&self) -> &str {
        &self.production
    }
}

fn validate_base_url(raw: &str) -> Result<(), DomainError> {
    let parsed = Url::parse(raw).map_err(|e| DomainError::NotAbsolute {
        url: raw.to_owned(),
        reason: e.to_string(),
    })?;

    if parsed.cannot_be_a_base() || parsed.host_str().is_none() {
        return Err(DomainError::NotAbsolute {
            url: raw.to_owned(),
            reason: "missing host".to_owned(),
        });
    }

    if parsed.query().is_some() || parsed.fragment().is_some() {
        return Err(DomainError::QueryOrFragment(raw.to_owned()));
    }

    if raw.ends_with('/') {
        return Err(DomainError::TrailingSlash(raw.to_owned()));
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_select_staging_and_production() {
        let target = DomainTarget::new("https://s.example.net", "https://p.example.net").unwrap();
        assert_eq!(target.select(true), "https://s.example.net");
        assert_eq!(target.select(false), "https://p.example.net");
    }

    #[test]
    fn test_arkane_defaults_pass_validation() {
        for target in [
            DomainTarget::arkane_authentication(),
            DomainTarget::arkane_business(),
            DomainTarget::arkane_api(),
        ] {
            assert!(DomainTarget::new(target.staging(), target.production()).is_ok());
        }
    }

    #[test]
    fn test_rejects_relative_url() {
        let result = DomainTarget::new("api.arkane.network", "https://api.arkane.network");
        assert!(matches!(result, Err(DomainError::NotAbsolute { .. })));
    }

    #[test]
    fn test_rejects_empty_url() {
        let result = DomainTarget::new("https://api.arkane.network", "");
        assert!(matches!(result, Err(DomainError::NotAbsolute { .. })));
    }

    #[test]
    fn test_rejects_url_without_host() {
        let result = DomainTarget::new("mailto:ops@arkane.network", "https://api.arkane.network");
        assert!(matches!(result, Err(DomainError::NotAbsolute { .. })));
    }

    #[test]
    fn test_rejects_trailing_slash() {
        let result = DomainTarget::new("https://api-staging.arkane.network", "https://api.arkane.network/");
        assert_eq!(
            result.unwrap_err(),
            DomainError::TrailingSlash("https://api.arkane.network/".to_string())
        );
    }

    #[test]
    fn test_rejects_query_and_fragment() {
        for raw in [
            "https://api.arkane.network?x=1",
            "https://api.arkane.network#frag",
            "https://api.arkane.network/v1?",
        ] {
            assert_eq!(
                DomainTarget::new("https://api-staging.arkane.network", raw).unwrap_err(),
                DomainError::QueryOrFragment(raw.to_string())
            );
        }
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: DomainTarget = serde_json::from_str(
            r#"{"staging": "https://s.example.net", "production": "https://p.example.net"}"#,
        )
        .unwrap();
        assert_eq!(ok.production(), "https://p.example.net");

        let bad = serde_json::from_str::<DomainTarget>(
            r#"{"staging": "https://s.example.net/", "production": "https://p.example.net"}"#,
        );
        assert!(bad.is_err());
    }
}
