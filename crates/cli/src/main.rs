//! Arkane CLI - Inspect resolved Arkane Network endpoints.
//!
//! # Usage
//!
//! ```bash
//! # Print every fixed endpoint for the configuration in the environment
//! arkane endpoints
//!
//! # Same, against production, as JSON
//! arkane --production endpoints --json
//!
//! # List configured contracts from a YAML settings file
//! arkane --config arkane.yaml contracts
//!
//! # Token endpoints for a contract, looked up by system name
//! arkane --app-id 42 contract --name heroes
//! ```
//!
//! # Commands
//!
//! - `endpoints` - Authentication, Connect, wallet, apps and contracts URIs
//! - `contracts` - Configured contracts in lookup order
//! - `contract` - Token management URIs for one contract

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use arkane_core::AppId;
use arkane_endpoints::{ArkaneConfig, EndpointResolver};
use clap::{Args, Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "arkane")]
#[command(author, version, about = "Arkane Network endpoint tools")]
struct Cli {
    /// YAML settings file (defaults to ARKANE_* environment variables)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Resolve against staging hosts
    #[arg(long, global = true, conflicts_with = "production")]
    staging: bool,

    /// Resolve against production hosts
    #[arg(long, global = true)]
    production: bool,

    /// Override the configured application id
    #[arg(long, global = true)]
    app_id: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every endpoint that does not depend on a contract
    Endpoints {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List configured contracts
    Contracts {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print token management endpoints for one contract
    Contract {
        #[command(flatten)]
        selector: ContractSelector,

        /// Resolve against this application instead of the configured one
        #[arg(long)]
        for_app: Option<String>,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

/// How to pick a contract from the configured list.
#[derive(Args)]
#[group(required = true, multiple = false)]
struct ContractSelector {
    /// Position in the contract list
    #[arg(long)]
    index: Option<usize>,

    /// Numeric contract id
    #[arg(long)]
    id: Option<u64>,

    /// Contract system name
    #[arg(long)]
    name: Option<String>,
}

fn main() {
    // Logs go to stderr so stdout stays clean for endpoint output
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "arkane_cli=info,arkane_endpoints=info".into());

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => ArkaneConfig::from_yaml_file(path)?,
        None => ArkaneConfig::from_env()?,
    };

    if cli.staging {
        config.use_staging = true;
    } else if cli.production {
        config.use_staging = false;
    }
    if let Some(app_id) = cli.app_id {
        config.app_id = AppId::parse(&app_id)?;
    }

    let resolver = EndpointResolver::new(config);

    match cli.command {
        Commands::Endpoints { json } => commands::endpoints::show(&resolver, json)?,
        Commands::Contracts { json } => commands::contracts::list(&resolver, json)?,
        Commands::Contract {
            selector,
            for_app,
            json,
        } => {
            let lookup = if let Some(index) = selector.index {
                commands::contracts::Lookup::Index(index)
            } else if let Some(id) = selector.id {
                commands::contracts::Lookup::Id(id)
            } else {
                commands::contracts::Lookup::Name(selector.name.unwrap_or_default())
            };
            let app = for_app.as_deref().map(AppId::parse).transpose()?;
            commands::contracts::show(&resolver, &lookup, app.as_ref(), json)?;
        }
    }
    Ok(())
}
