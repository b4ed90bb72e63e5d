//! Arkane client configuration loaded from environment variables or YAML.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `ARKANE_USE_STAGING` - Target the staging hosts (default: true)
//! - `ARKANE_APP_ID` - Application id registered with the business API
//! - `ARKANE_CLIENT_ID` - OAuth client id for the login realm
//! - `ARKANE_AUTH_GRANT` - OAuth grant type (default: password)
//! - `ARKANE_AUTH_STAGING_URL` / `ARKANE_AUTH_PRODUCTION_URL` - Login hosts
//! - `ARKANE_BUSINESS_STAGING_URL` / `ARKANE_BUSINESS_PRODUCTION_URL` - Business API hosts
//! - `ARKANE_API_STAGING_URL` / `ARKANE_API_PRODUCTION_URL` - Wallet API hosts
//! - `ARKANE_CONTRACTS_FILE` - YAML file listing the application's contracts
//!
//! # YAML
//!
//! [`ArkaneConfig::from_yaml_file`] reads the same settings from a document
//! such as:
//!
//! ```yaml
//! use_staging: false
//! app_id: "42"
//! authentication_mode:
//!   client_id: Arketype
//!   grant: password
//! api:
//!   staging: https://api-staging.arkane.network
//!   production: https://api.arkane.network
//! contracts:
//!   - id: 7
//!     systemName: heroes
//! ```
//!
//! Omitted fields keep their defaults.

use std::path::Path;

use arkane_core::{AppId, AuthenticationMode, Contract, DomainError, DomainTarget};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Invalid base URL in {0}: {1}")]
    InvalidDomain(String, #[source] DomainError),
    #[error("Failed to read {0}: {1}")]
    Io(String, String),
    #[error("Failed to parse {0}: {1}")]
    Parse(String, String),
}

/// Settings for resolving Arkane endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArkaneConfig {
    /// Target staging hosts instead of production
    pub use_staging: bool,
    /// Application whose contracts are managed
    pub app_id: AppId,
    /// OAuth client and grant for the login realm
    pub authentication_mode: AuthenticationMode,
    /// Login (OpenID Connect) hosts
    pub authentication: DomainTarget,
    /// Business API hosts
    pub business: DomainTarget,
    /// Wallet API hosts
    pub api: DomainTarget,
    /// Contracts registered with the application, in lookup order
    pub contracts: Vec<Contract>,
}

impl Default for ArkaneConfig {
    fn default() -> Self {
        Self {
            use_staging: true,
            app_id: AppId::INVALID,
            authentication_mode: AuthenticationMode::default(),
            authentication: DomainTarget::arkane_authentication(),
            business: DomainTarget::arkane_business(),
            api: DomainTarget::arkane_api(),
            contracts: Vec::new(),
        }
    }
}

impl ArkaneConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable cannot be parsed, a base URL is
    /// invalid, or the contracts file cannot be read.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// [`ArkaneConfig::from_env`] passes `std::env::var`; tests pass a map.
    ///
    /// # Errors
    ///
    /// Same as [`ArkaneConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let use_staging = match lookup("ARKANE_USE_STAGING") {
            Some(raw) => parse_bool("ARKANE_USE_STAGING", &raw)?,
            None => defaults.use_staging,
        };

        let app_id = match lookup("ARKANE_APP_ID") {
            Some(raw) => AppId::parse(&raw).map_err(|e| {
                ConfigError::InvalidEnvVar("ARKANE_APP_ID".to_string(), e.to_string())
            })?,
            None => defaults.app_id,
        };

        let authentication_mode = AuthenticationMode::new(
            lookup("ARKANE_CLIENT_ID")
                .unwrap_or_else(|| AuthenticationMode::PLACEHOLDER_CLIENT_ID.to_string()),
            lookup("ARKANE_AUTH_GRANT")
                .unwrap_or_else(|| AuthenticationMode::DEFAULT_GRANT.to_string()),
        );

        let authentication = domain_from(&lookup, "ARKANE_AUTH", &defaults.authentication)?;
        let business = domain_from(&lookup, "ARKANE_BUSINESS", &defaults.business)?;
        let api = domain_from(&lookup, "ARKANE_API", &defaults.api)?;

        let contracts = match lookup("ARKANE_CONTRACTS_FILE") {
            Some(path) => load_contracts_file(Path::new(&path))?,
            None => Vec::new(),
        };

        Ok(Self {
            use_staging,
            app_id,
            authentication_mode,
            authentication,
            business,
            api,
            contracts,
        })
    }

    /// Parse configuration from a YAML document.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if the document is malformed or a base
    /// URL fails validation.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(yaml)
            .map_err(|e| ConfigError::Parse("YAML configuration".to_string(), e.to_string()))
    }

    /// Load configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` if the file cannot be read, otherwise as
    /// [`ArkaneConfig::from_yaml_str`].
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.display().to_string(), e.to_string()))?;
        let config: Self = serde_yaml::from_str(&content)
            .map_err(|e| ConfigError::Parse(path.display().to_string(), e.to_string()))?;
        info!(path = %path.display(), contracts = config.contracts.len(), "Loaded Arkane configuration");
        Ok(config)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse a boolean flag, accepting `true`/`false`/`1`/`0`/`yes`/`no`.
fn parse_bool(key: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("expected a boolean, got '{other}'"),
        )),
    }
}

/// Build a domain pair from `{prefix}_STAGING_URL` and `{prefix}_PRODUCTION_URL`,
/// falling back to the default pair for whichever is unset.
fn domain_from<F>(
    lookup: &F,
    prefix: &str,
    default: &DomainTarget,
) -> Result<DomainTarget, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let staging_key = format!("{prefix}_STAGING_URL");
    let production_key = format!("{prefix}_PRODUCTION_URL");

    let staging = lookup(&staging_key);
    let production = lookup(&production_key);
    if staging.is_none() && production.is_none() {
        return Ok(default.clone());
    }

    DomainTarget::new(
        staging.unwrap_or_else(|| default.staging().to_string()),
        production.unwrap_or_else(|| default.production().to_string()),
    )
    .map_err(|e| ConfigError::InvalidDomain(format!("{staging_key}/{production_key}"), e))
}

/// Read the YAML list of contracts referenced by `ARKANE_CONTRACTS_FILE`.
fn load_contracts_file(path: &Path) -> Result<Vec<Contract>, ConfigError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::Io(path.display().to_string(), e.to_string()))?;
    let contracts: Vec<Contract> = serde_yaml::from_str(&content)
        .map_err(|e| ConfigError::Parse(path.display().to_string(), e.to_string()))?;
    info!(path = %path.display(), contracts = contracts.len(), "Loaded contracts file");
    Ok(contracts)
}
