//! Integration tests for the Arkane endpoint resolver.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p arkane-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `endpoint_resolution` - URI composition across configurations
//! - `configuration` - Loading settings documents into a resolver
//! - `user_profile` - Arkane profile payloads

#![cfg_attr(not(test), forbid(unsafe_code))]

use arkane_core::{AppId, Contract, DomainTarget};
use arkane_endpoints::{ArkaneConfig, EndpointResolver};

/// Build a resolver over the default Arkane hosts with the given contracts.
#[must_use]
pub fn resolver_with(use_staging: bool, app_id: &str, contracts: Vec<Contract>) -> EndpointResolver {
    EndpointResolver::new(ArkaneConfig {
        use_staging,
        app_id: AppId::parse(app_id).expect("valid app id"),
        contracts,
        ..ArkaneConfig::default()
    })
}

/// Build a resolver whose business and API families point at the given hosts.
///
/// # Panics
///
/// Panics if any host is not an absolute URL without a trailing slash.
#[must_use]
#[allow(clippy::expect_used)]
pub fn resolver_for_hosts(
    use_staging: bool,
    app_id: &str,
    business: (&str, &str),
    api: (&str, &str),
) -> EndpointResolver {
    EndpointResolver::new(ArkaneConfig {
        use_staging,
        app_id: AppId::parse(app_id).expect("valid app id"),
        business: DomainTarget::new(business.0, business.1).expect("valid business hosts"),
        api: DomainTarget::new(api.0, api.1).expect("valid api hosts"),
        ..ArkaneConfig::default()
    })
}
