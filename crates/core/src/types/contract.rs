//! Smart-contract records registered with an Arkane application.

use serde::{Deserialize, Serialize};

use super::ContractId;

/// A smart contract deployed through the Arkane business API.
///
/// Only `id` and `system_name` take part in endpoint resolution; the rest is
/// descriptive metadata carried along from the business API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    /// Numeric contract id assigned by Arkane
    pub id: ContractId,
    /// Stable name used to look the contract up from application code
    pub system_name: String,
    /// Human-readable name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Token symbol
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    /// On-chain address once deployed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_address: Option<String>,
}

impl Contract {
    /// Create a contract record with no metadata.
    #[must_use]
    pub fn new(id: impl Into<ContractId>, system_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            system_name: system_name.into(),
            name: None,
            description: None,
            symbol: None,
            contract_address: None,
        }
    }
}
