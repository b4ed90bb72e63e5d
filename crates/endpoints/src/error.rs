//! Endpoint resolution errors.

use thiserror::Error;

/// Errors returned by the URI builders and contract lookups.
///
/// These are caller mistakes rather than transient faults: retrying with the
/// same arguments fails the same way.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EndpointError {
    /// The application id is the invalid sentinel.
    #[error("unable to construct a contract URI for an invalid app id")]
    InvalidApp,

    /// No contract was supplied to a contract-scoped builder.
    #[error("a contract is required but none was provided")]
    MissingContract,

    /// Index-based contract lookup past the end of the contract list.
    #[error("contract index {index} is out of range for {len} configured contracts")]
    ContractIndexOutOfRange {
        /// Requested position.
        index: usize,
        /// Number of configured contracts.
        len: usize,
    },
}
