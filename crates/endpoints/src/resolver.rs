//! Endpoint URI resolution.
//!
//! [`EndpointResolver`] owns an [`ArkaneConfig`] and composes the REST
//! endpoint URIs for the Arkane login realm, wallet API and business API.
//! Every URI is recomputed from the current configuration on each call.
//!
//! Contract-scoped builders take `Option<&Contract>` so lookup results can be
//! passed straight through:
//!
//! ```rust
//! # use arkane_core::{AppId, Contract};
//! # use arkane_endpoints::{ArkaneConfig, EndpointError, EndpointResolver};
//! let mut resolver = EndpointResolver::new(ArkaneConfig::default());
//! resolver.set_app_id(AppId::parse("42").unwrap());
//! resolver.push_contract(Contract::new(7_u64, "heroes"));
//!
//! let uri = resolver.token_uri(resolver.contract_by_name("heroes"));
//! assert_eq!(
//!     uri.as_deref(),
//!     Ok("https://business-staging.arkane.network/api/apps/42/contracts/7/token-types")
//! );
//!
//! let missing = resolver.token_uri(resolver.contract_by_name("shields"));
//! assert_eq!(missing, Err(EndpointError::MissingContract));
//! ```
//!
//! Mutation goes through `&mut self`; share a configured resolver behind an
//! `Arc` for read-only use across threads.

use arkane_core::{AppId, AuthenticationMode, Contract, ContractId, DomainTarget};
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::ArkaneConfig;
use crate::error::EndpointError;

const TOKEN_PATH: &str = "/auth/realms/Arkane/protocol/openid-connect/token";
const WALLETS_PATH: &str = "/api/wallets";
const APPS_PATH: &str = "/api/apps";

// The Connect hosts are selected opposite to every other family: staging
// resolves to the production host and vice versa. Existing clients depend on
// this mapping.
const CONNECT_WHEN_STAGING: &str = "https://connect.arkane.network";
const CONNECT_WHEN_PRODUCTION: &str = "https://connect-staging.arkane.network";

/// Resolves Arkane REST endpoints from a configuration.
#[derive(Debug, Clone)]
pub struct EndpointResolver {
    config: ArkaneConfig,
}

/// Snapshot of every endpoint that does not depend on a contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EndpointSet {
    pub environment: &'static str,
    pub authentication: String,
    pub connect: String,
    pub wallets: String,
    pub apps: String,
    /// Absent when no valid application id is configured.
    pub contracts: Option<String>,
}

impl EndpointResolver {
    /// Create a resolver over the given configuration.
    ///
    /// Logs a warning for each entry of [`EndpointResolver::missing_settings`],
    /// so callers should apply their overrides to the configuration first.
    #[must_use]
    pub fn new(config: ArkaneConfig) -> Self {
        let resolver = Self { config };
        debug!(
            environment = environment_name(resolver.config.use_staging),
            app_id = %resolver.config.app_id,
            contracts = resolver.config.contracts.len(),
            "Endpoint resolver configured"
        );
        for setting in resolver.missing_settings() {
            warn!(setting, "Arkane setting not configured");
        }
        resolver
    }

    /// Settings still at their unusable defaults.
    ///
    /// Contains `"app id"` while the app id is [`AppId::INVALID`] (contract
    /// endpoints are unavailable) and `"client id"` while the client id is
    /// the placeholder.
    #[must_use]
    pub fn missing_settings(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if !self.config.app_id.is_valid() {
            missing.push("app id");
        }
        if self.config.authentication_mode.is_placeholder() {
            missing.push("client id");
        }
        missing
    }

    /// The underlying configuration.
    #[must_use]
    pub const fn config(&self) -> &ArkaneConfig {
        &self.config
    }

    /// Consume the resolver and return its configuration.
    #[must_use]
    pub fn into_config(self) -> ArkaneConfig {
        self.config
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Settings
    // ─────────────────────────────────────────────────────────────────────────

    #[must_use]
    pub const fn use_staging(&self) -> bool {
        self.config.use_staging
    }

    pub const fn set_use_staging(&mut self, use_staging: bool) {
        self.config.use_staging = use_staging;
    }

    #[must_use]
    pub const fn app_id(&self) -> &AppId {
        &self.config.app_id
    }

    pub fn set_app_id(&mut self, app_id: AppId) {
        self.config.app_id = app_id;
    }

    #[must_use]
    pub const fn authentication_mode(&self) -> &AuthenticationMode {
        &self.config.authentication_mode
    }

    pub fn set_authentication_mode(&mut self, mode: AuthenticationMode) {
        self.config.authentication_mode = mode;
    }

    #[must_use]
    pub const fn authentication(&self) -> &DomainTarget {
        &self.config.authentication
    }

    #[must_use]
    pub const fn business(&self) -> &DomainTarget {
        &self.config.business
    }

    #[must_use]
    pub const fn api(&self) -> &DomainTarget {
        &self.config.api
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Contract Lookup
    // ─────────────────────────────────────────────────────────────────────────

    /// Configured contracts in lookup order.
    #[must_use]
    pub fn contracts(&self) -> &[Contract] {
        &self.config.contracts
    }

    /// Append a contract to the end of the lookup order.
    pub fn push_contract(&mut self, contract: Contract) {
        self.config.contracts.push(contract);
    }

    /// The contract at `index`.
    ///
    /// # Errors
    ///
    /// Returns `EndpointError::ContractIndexOutOfRange` if `index` is past the
    /// end of the contract list.
    pub fn contract_at(&self, index: usize) -> Result<&Contract, EndpointError> {
        self.config
            .contracts
            .get(index)
            .ok_or(EndpointError::ContractIndexOutOfRange {
                index,
                len: self.config.contracts.len(),
            })
    }

    /// The first contract whose id is `id`.
    #[must_use]
    pub fn contract_by_id(&self, id: ContractId) -> Option<&Contract> {
        self.config.contracts.iter().find(|c| c.id == id)
    }

    /// The first contract whose system name is exactly `name`.
    #[must_use]
    pub fn contract_by_name(&self, name: &str) -> Option<&Contract> {
        self.config.contracts.iter().find(|c| c.system_name == name)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Fixed Endpoints
    // ─────────────────────────────────────────────────────────────────────────

    /// Token endpoint used to authenticate users against the Arkane login realm.
    #[must_use]
    pub fn authentication_uri(&self) -> String {
        format!("{}{TOKEN_PATH}", self.config.authentication.select(self.use_staging()))
    }

    /// Arkane Connect host.
    ///
    /// Staging resolves to `https://connect.arkane.network` and production to
    /// `https://connect-staging.arkane.network`, the reverse of the other hosts.
    #[must_use]
    pub const fn connect_uri(&self) -> &'static str {
        if self.config.use_staging {
            CONNECT_WHEN_STAGING
        } else {
            CONNECT_WHEN_PRODUCTION
        }
    }

    /// Lists the authenticated user's wallets.
    #[must_use]
    pub fn wallet_uri(&self) -> String {
        format!("{}{WALLETS_PATH}", self.config.api.select(self.use_staging()))
    }

    /// Lists and manages applications on the business API.
    #[must_use]
    pub fn apps_uri(&self) -> String {
        format!("{}{APPS_PATH}", self.config.business.select(self.use_staging()))
    }

    /// Contracts of the configured application.
    ///
    /// # Errors
    ///
    /// Returns `EndpointError::InvalidApp` if no valid app id is configured.
    pub fn contract_uri(&self) -> Result<String, EndpointError> {
        self.contract_uri_for_app(&self.config.app_id)
    }

    /// Contracts of `app`.
    ///
    /// # Errors
    ///
    /// Returns `EndpointError::InvalidApp` if `app` is [`AppId::INVALID`].
    pub fn contract_uri_for_app(&self, app: &AppId) -> Result<String, EndpointError> {
        if *app == AppId::INVALID {
            return Err(EndpointError::InvalidApp);
        }
        Ok(format!("{}/{app}/contracts", self.apps_uri()))
    }

    /// Every endpoint that does not depend on a contract.
    #[must_use]
    pub fn endpoints(&self) -> EndpointSet {
        EndpointSet {
            environment: environment_name(self.use_staging()),
            authentication: self.authentication_uri(),
            connect: self.connect_uri().to_string(),
            wallets: self.wallet_uri(),
            apps: self.apps_uri(),
            contracts: self.contract_uri().ok(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Contract-Scoped Endpoints
    // ─────────────────────────────────────────────────────────────────────────
    //
    // The contract check runs before the app check in every builder.

    /// Token types of `contract` in the configured application.
    ///
    /// Resolves to the same `/token-types` URI as [`Self::token_uri`]; only
    /// the app-scoped variant targets `/define-token-type`.
    ///
    /// # Errors
    ///
    /// Returns `EndpointError::MissingContract` if `contract` is `None`, or
    /// `EndpointError::InvalidApp` if no valid app id is configured.
    pub fn define_token_type_uri(
        &self,
        contract: Option<&Contract>,
    ) -> Result<String, EndpointError> {
        let contract = contract.ok_or(EndpointError::MissingContract)?;
        Ok(format!("{}/{}/token-types", self.contract_uri()?, contract.id))
    }

    /// Defines a new token type on `contract` in `app`.
    ///
    /// # Errors
    ///
    /// Returns `EndpointError::MissingContract` if `contract` is `None`, or
    /// `EndpointError::InvalidApp` if `app` is invalid.
    pub fn define_token_type_uri_for_app(
        &self,
        app: &AppId,
        contract: Option<&Contract>,
    ) -> Result<String, EndpointError> {
        let contract = contract.ok_or(EndpointError::MissingContract)?;
        Ok(format!(
            "{}/{}/define-token-type",
            self.contract_uri_for_app(app)?,
            contract.id
        ))
    }

    /// Mints tokens on `contract` in the configured application.
    ///
    /// # Errors
    ///
    /// Returns `EndpointError::MissingContract` if `contract` is `None`, or
    /// `EndpointError::InvalidApp` if no valid app id is configured.
    pub fn create_token_uri(&self, contract: Option<&Contract>) -> Result<String, EndpointError> {
        let contract = contract.ok_or(EndpointError::MissingContract)?;
        Ok(format!("{}/{}/tokens", self.contract_uri()?, contract.id))
    }

    /// Mints tokens on `contract` in `app`.
    ///
    /// # Errors
    ///
    /// Returns `EndpointError::MissingContract` if `contract` is `None`, or
    /// `EndpointError::InvalidApp` if `app` is invalid.
    pub fn create_token_uri_for_app(
        &self,
        app: &AppId,
        contract: Option<&Contract>,
    ) -> Result<String, EndpointError> {
        let contract = contract.ok_or(EndpointError::MissingContract)?;
        Ok(format!(
            "{}/{}/tokens",
            self.contract_uri_for_app(app)?,
            contract.id
        ))
    }

    /// Token types of `contract` in the configured application.
    ///
    /// # Errors
    ///
    /// Returns `EndpointError::MissingContract` if `contract` is `None`, or
    /// `EndpointError::InvalidApp` if no valid app id is configured.
    pub fn token_uri(&self, contract: Option<&Contract>) -> Result<String, EndpointError> {
        let contract = contract.ok_or(EndpointError::MissingContract)?;
        self.token_uri_by_id(contract.id)
    }

    /// Token types of the contract with id `contract_id`, whether or not it
    /// is configured.
    ///
    /// # Errors
    ///
    /// Returns `EndpointError::InvalidApp` if no valid app id is configured.
    pub fn token_uri_by_id(&self, contract_id: ContractId) -> Result<String, EndpointError> {
        Ok(format!("{}/{contract_id}/token-types", self.contract_uri()?))
    }

    /// Token types of `contract` in `app`.
    ///
    /// # Errors
    ///
    /// Returns `EndpointError::MissingContract` if `contract` is `None`, or
    /// `EndpointError::InvalidApp` if `app` is invalid.
    pub fn token_uri_for_app(
        &self,
        app: &AppId,
        contract: Option<&Contract>,
    ) -> Result<String, EndpointError> {
        let contract = contract.ok_or(EndpointError::MissingContract)?;
        self.token_uri_for_app_by_id(app, contract.id)
    }

    /// Token types of the contract with id `contract_id` in `app`.
    ///
    /// # Errors
    ///
    /// Returns `EndpointError::InvalidApp` if `app` is invalid.
    pub fn token_uri_for_app_by_id(
        &self,
        app: &AppId,
        contract_id: ContractId,
    ) -> Result<String, EndpointError> {
        Ok(format!(
            "{}/{contract_id}/token-types",
            self.contract_uri_for_app(app)?
        ))
    }
}

impl Default for EndpointResolver {
    fn default() -> Self {
        Self::new(ArkaneConfig::default())
    }
}

impl From<ArkaneConfig> for EndpointResolver {
    fn from(config: ArkaneConfig) -> Self {
        Self::new(config)
    }
}

const fn environment_name(use_staging: bool) -> &'static str {
    if use_staging { "staging" } else { "production" }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn resolver(use_staging: bool, app: &str) -> EndpointResolver {
        let mut resolver = EndpointResolver::new(ArkaneConfig {
            use_staging,
            app_id: AppId::parse(app).unwrap(),
            ..ArkaneConfig::default()
        });
        resolver.push_contract(Contract::new(7_u64, "heroes"));
        resolver.push_contract(Contract::new(9_u64, "swords"));
        resolver.push_contract(Contract::new(7_u64, "heroes-v2"));
        resolver
    }

    #[test]
    fn test_authentication_uri() {
        assert_eq!(
            resolver(true, "42").authentication_uri(),
            "https://login-staging.arkane.network/auth/realms/Arkane/protocol/openid-connect/token"
        );
        assert_eq!(
            resolver(false, "42").authentication_uri(),
            "https://login.arkane.network/auth/realms/Arkane/protocol/openid-connect/token"
        );
    }

    #[test]
    fn test_connect_uri_is_inverted() {
        assert_eq!(resolver(true, "42").connect_uri(), "https://connect.arkane.network");
        assert_eq!(
            resolver(false, "42").connect_uri(),
            "https://connect-staging.arkane.network"
        );
    }

    #[test]
    fn test_wallet_and_apps_uri() {
        let r = resolver(true, "42");
        assert_eq!(r.wallet_uri(), "https://api-staging.arkane.network/api/wallets");
        assert_eq!(r.apps_uri(), "https://business-staging.arkane.network/api/apps");
    }

    #[test]
    fn test_contract_uri_requires_valid_app() {
        assert_eq!(resolver(true, "").contract_uri(), Err(EndpointError::InvalidApp));
        assert_eq!(
            resolver(false, "42").contract_uri().unwrap(),
            "https://business.arkane.network/api/apps/42/contracts"
        );
    }

    #[test]
    fn test_contract_uri_for_other_app() {
        let r = resolver(false, "");
        assert_eq!(
            r.contract_uri_for_app(&AppId::parse("77").unwrap()).unwrap(),
            "https://business.arkane.network/api/apps/77/contracts"
        );
        assert_eq!(
            r.contract_uri_for_app(&AppId::INVALID),
            Err(EndpointError::InvalidApp)
        );
    }

    #[test]
    fn test_contract_lookup() {
        let r = resolver(true, "42");

        assert_eq!(r.contract_at(1).unwrap().system_name, "swords");
        assert_eq!(
            r.contract_at(3),
            Err(EndpointError::ContractIndexOutOfRange { index: 3, len: 3 })
        );

        // First match wins on duplicate ids
        assert_eq!(r.contract_by_id(ContractId::new(7)).unwrap().system_name, "heroes");
        assert!(r.contract_by_id(ContractId::new(8)).is_none());

        assert_eq!(r.contract_by_name("heroes-v2").unwrap().id, ContractId::new(7));
        assert!(r.contract_by_name("Heroes").is_none());
    }

    #[test]
    fn test_contract_scoped_builders() {
        let r = resolver(false, "42");
        let swords = r.contract_by_name("swords");
        let base = "https://business.arkane.network/api/apps/42/contracts";

        assert_eq!(r.create_token_uri(swords).unwrap(), format!("{base}/9/tokens"));
        assert_eq!(r.token_uri(swords).unwrap(), format!("{base}/9/token-types"));
        assert_eq!(
            r.token_uri_by_id(ContractId::new(1234)).unwrap(),
            format!("{base}/1234/token-types")
        );
        assert_eq!(
            r.define_token_type_uri(swords).unwrap(),
            r.token_uri(swords).unwrap()
        );
    }

    #[test]
    fn test_app_scoped_builders() {
        let r = resolver(true, "42");
        let app = AppId::parse("99").unwrap();
        let heroes = r.contract_by_id(ContractId::new(7));
        let base = "https://business-staging.arkane.network/api/apps/99/contracts";

        assert_eq!(
            r.define_token_type_uri_for_app(&app, heroes).unwrap(),
            format!("{base}/7/define-token-type")
        );
        assert_eq!(
            r.create_token_uri_for_app(&app, heroes).unwrap(),
            format!("{base}/7/tokens")
        );
        assert_eq!(
            r.token_uri_for_app(&app, heroes).unwrap(),
            format!("{base}/7/token-types")
        );
        assert_eq!(
            r.token_uri_for_app_by_id(&app, ContractId::new(5)).unwrap(),
            format!("{base}/5/token-types")
        );
    }

    #[test]
    fn test_missing_contract_checked_before_app() {
        let r = resolver(true, "");
        assert_eq!(r.create_token_uri(None), Err(EndpointError::MissingContract));
        assert_eq!(r.define_token_type_uri(None), Err(EndpointError::MissingContract));
        assert_eq!(r.token_uri(None), Err(EndpointError::MissingContract));
        assert_eq!(
            r.token_uri_for_app(&AppId::INVALID, None),
            Err(EndpointError::MissingContract)
        );
        assert_eq!(
            r.create_token_uri(r.contract_at(0).ok()),
            Err(EndpointError::InvalidApp)
        );
        assert_eq!(
            r.token_uri_by_id(ContractId::new(7)),
            Err(EndpointError::InvalidApp)
        );
    }

    #[test]
    fn test_uris_follow_mutation() {
        let mut r = resolver(true, "");
        assert!(r.endpoints().contracts.is_none());

        r.set_use_staging(false);
        r.set_app_id(AppId::parse("42").unwrap());

        let endpoints = r.endpoints();
        assert_eq!(endpoints.environment, "production");
        assert_eq!(endpoints.wallets, "https://api.arkane.network/api/wallets");
        assert_eq!(
            endpoints.contracts.as_deref(),
            Some("https://business.arkane.network/api/apps/42/contracts")
        );
    }

    #[test]
    fn test_missing_settings_reflect_overrides() {
        let mut config = ArkaneConfig::from_yaml_str("use_staging: false\n").unwrap();
        assert_eq!(
            EndpointResolver::new(config.clone()).missing_settings(),
            vec!["app id", "client id"]
        );

        // Overrides applied before construction are what gets reported
        config.app_id = AppId::parse("42").unwrap();
        config.authentication_mode = AuthenticationMode::new("Arketype", "password");
        assert!(EndpointResolver::new(config).missing_settings().is_empty());
    }

    #[test]
    fn test_resolver_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<EndpointResolver>();
    }
}
