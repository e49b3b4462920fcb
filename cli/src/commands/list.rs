use anyhow::{Context, Result};
use loan_market_shared::{filter_loans, CategoryFilter, LoanApi, LoanFilter, MutationCoordinator};
use serde::Serialize;

use crate::{cli::OutputFormat, output};

#[derive(Serialize)]
struct StatsReport {
    total: usize,
    on_home: usize,
    categories: usize,
    hidden: usize,
}

pub async fn run<A: LoanApi>(
    coordinator: &MutationCoordinator<A>,
    category: &str,
    query: &str,
    format: OutputFormat,
) -> Result<()> {
    coordinator.load().await.context("failed to load loans")?;

    let filter = LoanFilter::new(CategoryFilter::from_label(category.trim()), query.trim());
    let store = coordinator.store().borrow();
    let visible = filter_loans(store.all(), &filter);
    if !filter.is_identity() {
        tracing::info!(matched = visible.len(), total = store.len(), "applied loan filter");
    }
    output::print_loans(&visible, format)
}

pub async fn categories<A: LoanApi>(coordinator: &MutationCoordinator<A>) -> Result<()> {
    coordinator.load().await.context("failed to load loans")?;
    let categories = coordinator.store().borrow().categories();
    output::print_json(&categories)
}

pub async fn stats<A: LoanApi>(coordinator: &MutationCoordinator<A>) -> Result<()> {
    coordinator.load().await.context("failed to load loans")?;
    let stats = coordinator.store().borrow().stats();
    output::print_json(&StatsReport {
        total: stats.total,
        on_home: stats.on_home,
        categories: stats.categories,
        hidden: stats.hidden,
    })
}
