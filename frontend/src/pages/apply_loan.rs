use loan_market_shared::{loan::display_or_unspecified, LoanRecord};
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    components::{banner::Banner, loading_spinner::LoadingSpinner},
    hooks::use_scroll_to_top,
    i18n::{
        current::{apply_loan as t, loan_detail as d},
        fill_one,
    },
    router::Route,
};

#[derive(Properties, Clone, PartialEq)]
pub struct ApplyLoanProps {
    pub id: String,
}

/// Landing page behind "Apply now": the loan's terms and what happens next.
#[function_component(ApplyLoanPage)]
pub fn apply_loan_page(props: &ApplyLoanProps) -> Html {
    use_scroll_to_top();
    let loan = use_state(|| None::<LoanRecord>);
    let loading = use_state(|| true);
    let load_error = use_state(|| None::<String>);

    {
        let loan = loan.clone();
        let loading = loading.clone();
        let load_error = load_error.clone();
        use_effect_with(props.id.clone(), move |id| {
            let id = id.clone();
            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match crate::api::fetch_loan_detail(&id).await {
                    Ok(data) => loan.set(data),
                    Err(err) => load_error.set(Some(format!("{}: {}", t::LOAD_FAILED, err))),
                }
                loading.set(false);
            });
            || ()
        });
    }

    let body = if *loading {
        html! { <LoadingSpinner /> }
    } else if let Some(message) = (*load_error).clone() {
        html! { <Banner message={message} auto_dismiss={false} /> }
    } else if let Some(loan) = (*loan).as_ref() {
        render_terms(loan)
    } else {
        html! {
            <div class="space-y-4">
                <p class="text-[var(--muted)]">{ t::NOT_FOUND }</p>
                <Link<Route> to={Route::AllLoans} classes={classes!("btn-fluent-primary")}>
                    { t::BROWSE }
                </Link<Route>>
            </div>
        }
    };

    html! {
        <main class={classes!("max-w-3xl", "mx-auto", "px-4", "sm:px-6", "py-8", "space-y-6")}>
            <Link<Route>
                to={Route::LoanDetails { id: props.id.clone() }}
                classes={classes!("inline-flex", "items-center", "gap-2", "text-[var(--primary)]")}
            >
                <i class="fas fa-arrow-left" aria-hidden="true"></i>
                { t::BACK }
            </Link<Route>>
            { body }
        </main>
    }
}

fn render_terms(loan: &LoanRecord) -> Html {
    let terms = [
        (d::MAX_LOAN, loan.max_loan_display()),
        (d::INTEREST, loan.interest_rate_display()),
        (d::TENURE, loan.tenure_display()),
    ];
    let plans = if loan.fields.emi_plans.is_empty() {
        display_or_unspecified("").to_string()
    } else {
        loan.fields.emi_plans.join(", ")
    };

    html! {
        <section class={classes!("space-y-4", "rounded-2xl", "border", "border-[var(--border)]", "p-6")}>
            <h1 class={classes!("text-2xl", "font-bold")}>
                { fill_one(t::HEADING_TEMPLATE, display_or_unspecified(loan.title())) }
            </h1>
            <p class="text-[var(--muted)]">{ t::INTRO }</p>
            <dl class={classes!("grid", "gap-3", "sm:grid-cols-2")}>
                { for terms.iter().map(|(label, value)| html! {
                    <div>
                        <dt class={classes!("text-sm", "text-[var(--muted)]")}>{ *label }</dt>
                        <dd class="font-semibold">{ *value }</dd>
                    </div>
                }) }
                <div>
                    <dt class={classes!("text-sm", "text-[var(--muted)]")}>{ d::EMI_PLANS }</dt>
                    <dd class="font-semibold">{ plans }</dd>
                </div>
            </dl>
            <p>{ t::NEXT_STEPS }</p>
        </section>
    }
}
