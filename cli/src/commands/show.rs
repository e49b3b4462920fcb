use anyhow::{bail, Result};
use loan_market_shared::{LoanApi, LoanId, MutationCoordinator};

use crate::{cli::OutputFormat, output};

pub async fn run<A: LoanApi>(
    coordinator: &MutationCoordinator<A>,
    id: &str,
    format: OutputFormat,
) -> Result<()> {
    let id = LoanId::new(id.trim());
    let record = match coordinator.api().get_loan(&id).await {
        Ok(record) => record,
        Err(err) if err.is_not_found() => bail!("loan not found: {id}"),
        Err(err) => return Err(err.into()),
    };
    output::print_loans(&[&record], format)
}
