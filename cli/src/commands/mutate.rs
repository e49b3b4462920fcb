use anyhow::{bail, Context, Result};
use loan_market_shared::{FormSession, LoanApi, LoanId, MutationCoordinator};

use crate::{cli::LoanArgs, output, utils::apply_loan_args};

pub async fn create<A: LoanApi>(coordinator: &MutationCoordinator<A>, args: &LoanArgs) -> Result<()> {
    let mut session = FormSession::create();
    apply_loan_args(&mut session.input, args)?;
    let form = session.validate()?;

    let record = coordinator.create(form).await.context("failed to save loan")?;
    tracing::info!(id = %record.id, "created loan");
    output::print_json(&record)
}

pub async fn update<A: LoanApi>(
    coordinator: &MutationCoordinator<A>,
    id: &str,
    args: &LoanArgs,
) -> Result<()> {
    let id = LoanId::new(id.trim());
    coordinator.load().await.context("failed to load loans")?;

    let mut session = {
        let store = coordinator.store().borrow();
        let Some(current) = store.get(&id) else {
            bail!("loan not found: {id}");
        };
        FormSession::edit(current)
    };
    apply_loan_args(&mut session.input, args)?;
    let form = session.validate()?;

    let record = coordinator.update(&id, form).await.context("failed to save loan")?;
    tracing::info!(%id, "updated loan");
    output::print_json(&record)
}

pub async fn delete<A: LoanApi>(
    coordinator: &MutationCoordinator<A>,
    id: &str,
    yes: bool,
) -> Result<()> {
    let id = LoanId::new(id.trim());
    if !yes {
        bail!("refusing to delete loan {id} without --yes");
    }
    coordinator.remove(&id).await.context("could not delete loan")?;
    tracing::info!(%id, "deleted loan");
    Ok(())
}

pub async fn show_on_home<A: LoanApi>(
    coordinator: &MutationCoordinator<A>,
    id: &str,
    visible: bool,
) -> Result<()> {
    let id = LoanId::new(id.trim());
    coordinator
        .set_visibility(&id, visible)
        .await
        .context("could not update loan visibility")?;
    if visible {
        tracing::info!(%id, "added to home");
    } else {
        tracing::info!(%id, "removed from home");
    }
    Ok(())
}
