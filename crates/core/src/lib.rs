//! Arkane Core - Shared data types.
//!
//! This crate provides the data model used by the Arkane Network client
//! configuration layer:
//! - `endpoints` - Resolves REST endpoint URIs from these types
//! - `cli` - Prints resolved endpoints for a configuration
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no environment access,
//! no HTTP clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - User profiles, application and contract ids, domain pairs,
//!   authentication modes and contract records

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
