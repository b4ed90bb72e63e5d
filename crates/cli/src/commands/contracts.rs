//! Contract listing and contract-scoped endpoints.

use arkane_core::{AppId, Contract, ContractId};
use arkane_endpoints::EndpointResolver;
use serde::Serialize;

use super::emit;

/// How the `contract` command selects a contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Index(usize),
    Id(u64),
    Name(String),
}

/// Token management endpoints for one contract.
#[derive(Debug, Serialize)]
struct ContractEndpoints<'a> {
    contract: &'a Contract,
    define_token_type: String,
    create_token: String,
    token_types: String,
}

/// List configured contracts in lookup order.
///
/// # Errors
///
/// Returns an error if JSON serialization or writing to stdout fails.
pub fn list(resolver: &EndpointResolver, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let contracts = resolver.contracts();

    if json {
        emit(&serde_json::to_string_pretty(contracts)?)?;
        return Ok(());
    }

    if contracts.is_empty() {
        tracing::info!("No contracts configured");
        return Ok(());
    }

    let lines: Vec<String> = contracts
        .iter()
        .enumerate()
        .map(|(index, c)| format!("{index:>3}  {:>8}  {}", c.id, c.system_name))
        .collect();
    emit(&lines.join("\n"))?;
    Ok(())
}

/// Print the token management endpoints for the selected contract.
///
/// # Errors
///
/// Returns an error if the contract cannot be found, the application id is
/// invalid, or writing to stdout fails.
pub fn show(
    resolver: &EndpointResolver,
    lookup: &Lookup,
    app: Option<&AppId>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let endpoints = resolve(resolver, lookup, app)?;

    if json {
        emit(&serde_json::to_string_pretty(&endpoints)?)?;
    } else {
        emit(&format!(
            "contract           {} ({})\n\
             define-token-type  {}\n\
             create-token       {}\n\
             token-types        {}",
            endpoints.contract.system_name,
            endpoints.contract.id,
            endpoints.define_token_type,
            endpoints.create_token,
            endpoints.token_types,
        ))?;
    }
    Ok(())
}

fn resolve<'a>(
    resolver: &'a EndpointResolver,
    lookup: &Lookup,
    app: Option<&AppId>,
) -> Result<ContractEndpoints<'a>, Box<dyn std::error::Error>> {
    let contract = match lookup {
        Lookup::Index(index) => Some(resolver.contract_at(*index)?),
        Lookup::Id(id) => resolver.contract_by_id(ContractId::new(*id)),
        Lookup::Name(name) => resolver.contract_by_name(name),
    };
    let Some(contract) = contract else {
        return Err(format!("No configured contract matches {lookup:?}").into());
    };

    let endpoints = match app {
        Some(app) => ContractEndpoints {
            contract,
            define_token_type: resolver.define_token_type_uri_for_app(app, Some(contract))?,
            create_token: resolver.create_token_uri_for_app(app, Some(contract))?,
            token_types: resolver.token_uri_for_app(app, Some(contract))?,
        },
        None => ContractEndpoints {
            contract,
            define_token_type: resolver.define_token_type_uri(Some(contract))?,
            create_token: resolver.create_token_uri(Some(contract))?,
            token_types: resolver.token_uri(Some(contract))?,
        },
    };
    Ok(endpoints)
}
