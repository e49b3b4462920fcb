pub mod list;
pub mod mutate;
pub mod show;

use std::time::Duration;

use anyhow::{Context, Result};
use loan_market_shared::{LoanEndpoints, MutationCoordinator};

use crate::{
    cli::{Cli, Commands},
    client::HttpLoanApi,
};

/// Coordinator over the HTTP client described by the global flags.
pub fn coordinator(cli: &Cli) -> Result<MutationCoordinator<HttpLoanApi>> {
    let endpoints = LoanEndpoints::new(&cli.api_base, &cli.loans_path);
    let api = HttpLoanApi::new(endpoints, Duration::from_secs(cli.timeout_secs.max(1)))
        .context("failed to build HTTP client")?;
    tracing::debug!(url = %api.endpoints().collection_url(), "using loan API");
    Ok(MutationCoordinator::new(api))
}

pub async fn run(cli: Cli) -> Result<()> {
    let coordinator = coordinator(&cli)?;
    match cli.command {
        Commands::List {
            category,
            query,
            format,
        } => list::run(&coordinator, &category, &query, format).await,
        Commands::Show {
            id,
            format,
        } => show::run(&coordinator, &id, format).await,
        Commands::Categories => list::categories(&coordinator).await,
        Commands::Stats => list::stats(&coordinator).await,
        Commands::Create {
            fields,
        } => mutate::create(&coordinator, &fields).await,
        Commands::Update {
            id,
            fields,
        } => mutate::update(&coordinator, &id, &fields).await,
        Commands::Delete {
            id,
            yes,
        } => mutate::delete(&coordinator, &id, yes).await,
        Commands::ShowOnHome {
            id,
            visible,
        } => mutate::show_on_home(&coordinator, &id, visible).await,
    }
}
