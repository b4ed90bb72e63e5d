//! Core types for the Arkane Network client.
//!
//! This module provides type-safe wrappers for the configuration and
//! identity records exchanged with the Arkane APIs.

pub mod auth_mode;
pub mod contract;
pub mod domain;
pub mod id;
pub mod profile;

pub use auth_mode::AuthenticationMode;
pub use contract::Contract;
pub use domain::{DomainError, DomainTarget};
pub use id::{AppId, AppIdError, ContractId};
pub use profile::UserProfile;
