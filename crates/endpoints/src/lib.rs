//! Arkane Endpoints - REST endpoint resolution for the Arkane Network.
//!
//! Builds the URIs an HTTP client needs for authentication, wallet listing
//! and contract/token management from a small set of configured base URLs.
//!
//! # Example
//!
//! ```rust
//! use arkane_core::{AppId, Contract};
//! use arkane_endpoints::{ArkaneConfig, EndpointResolver};
//!
//! let mut resolver = EndpointResolver::new(ArkaneConfig::default());
//! resolver.set_use_staging(false);
//! resolver.set_app_id(AppId::parse("42").unwrap());
//! resolver.push_contract(Contract::new(7_u64, "heroes"));
//!
//! assert_eq!(resolver.wallet_uri(), "https://api.arkane.network/api/wallets");
//! assert_eq!(
//!     resolver.create_token_uri(resolver.contract_by_name("heroes")).unwrap(),
//!     "https://business.arkane.network/api/apps/42/contracts/7/tokens"
//! );
//! ```
//!
//! # Modules
//!
//! - [`config`] - Configuration loaded from environment variables or YAML
//! - [`resolver`] - The endpoint resolver and its URI builders
//! - [`error`] - Endpoint resolution errors

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod resolver;

pub use config::{ArkaneConfig, ConfigError};
pub use error::EndpointError;
pub use resolver::{EndpointResolver, EndpointSet};
