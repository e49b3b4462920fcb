use loan_market_shared::{
    loan::{display_or_unspecified, NOT_SPECIFIED},
    LoanRecord,
};
use yew::prelude::*;
use yew_router::prelude::{use_navigator, Link};

use crate::{
    components::{
        banner::Banner,
        loading_spinner::{LoadingSpinner, SpinnerSize},
    },
    hooks::use_scroll_to_top,
    i18n::current::loan_detail as t,
    router::Route,
};

#[derive(Properties, Clone, PartialEq)]
pub struct LoanDetailProps {
    pub id: String,
}

#[function_component(LoanDetailPage)]
pub fn loan_detail_page(props: &LoanDetailProps) -> Html {
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
            load_error.set(None);
            wasm_bindgen_futures::spawn_local(async move {
                match crate::api::fetch_loan_detail(&id).await {
                    Ok(data) => loan.set(data),
                    Err(err) => {
                        loan.set(None);
                        load_error.set(Some(format!("{}: {}", t::LOAD_FAILED, err)));
                    },
                }
                loading.set(false);
            });
            || ()
        });
    }

    let navigator = use_navigator();

    let back_link = html! {
        <Link<Route> to={Route::AllLoans} classes={classes!("inline-flex", "items-center", "gap-2", "text-[var(--primary)]")}>
            <i class="fas fa-arrow-left" aria-hidden="true"></i>
            { t::BACK }
        </Link<Route>>
    };

    let body = if *loading {
        html! { <LoadingSpinner size={SpinnerSize::Large} /> }
    } else if let Some(message) = (*load_error).clone() {
        html! { <Banner message={message} auto_dismiss={false} /> }
    } else if let Some(loan) = (*loan).as_ref() {
        let on_apply = {
            let navigator = navigator.clone();
            let id = loan.id.to_string();
            Callback::from(move |_: MouseEvent| {
                if let Some(navigator) = navigator.as_ref() {
                    navigator.push(&Route::ApplyLoan {
                        id: id.clone(),
                    });
                }
            })
        };
        render_loan(loan, on_apply)
    } else {
        html! { <p class="text-[var(--muted)]">{ t::NOT_FOUND }</p> }
    };

    html! {
        <main class={classes!("max-w-4xl", "mx-auto", "px-4", "sm:px-6", "py-8", "space-y-6")}>
            { back_link }
            { body }
        </main>
    }
}

fn render_loan(loan: &LoanRecord, on_apply: Callback<MouseEvent>) -> Html {
    let emi_plans = if loan.fields.emi_plans.is_empty() {
        html! { <span>{ NOT_SPECIFIED }</span> }
    } else {
        html! {
            <ul class={classes!("flex", "flex-wrap", "gap-2")}>
                { for loan.fields.emi_plans.iter().map(|plan| html! {
                    <li class="chip">{ plan.clone() }</li>
                }) }
            </ul>
        }
    };

    let facts = [
        (t::CATEGORY, display_or_unspecified(loan.category())),
        (t::MAX_LOAN, loan.max_loan_display()),
        (t::INTEREST, loan.interest_rate_display()),
        (t::TENURE, loan.tenure_display()),
    ];

    html! {
        <article class={classes!("loan-detail", "space-y-6")}>
            if !loan.fields.image_data.is_empty() {
                <img
                    class={classes!("w-full", "max-h-96", "object-cover", "rounded-2xl")}
                    src={loan.fields.image_data.clone()}
                    alt={loan.title().to_string()}
                />
            }
            <header class="space-y-2">
                <h1 class={classes!("text-3xl", "font-bold")}>{ display_or_unspecified(loan.title()) }</h1>
                <p class="text-[var(--muted)]">{ display_or_unspecified(&loan.fields.short_description) }</p>
            </header>
            <dl class={classes!("grid", "gap-4", "sm:grid-cols-2")}>
                { for facts.iter().map(|(label, value)| html! {
                    <div class={classes!("rounded-xl", "border", "border-[var(--border)]", "p-4")}>
                        <dt class={classes!("text-sm", "text-[var(--muted)]")}>{ *label }</dt>
                        <dd class="font-semibold">{ *value }</dd>
                    </div>
                }) }
            </dl>
            <section class="space-y-2">
                <h2 class={classes!("text-xl", "font-semibold")}>{ t::EMI_PLANS }</h2>
                { emi_plans }
            </section>
            <section class="space-y-2">
                <h2 class={classes!("text-xl", "font-semibold")}>{ t::ABOUT }</h2>
                <p class="whitespace-pre-line">{ display_or_unspecified(loan.description_display()) }</p>
            </section>
            <button type="button" class="btn-fluent-primary" onclick={on_apply}>
                { t::APPLY }
            </button>
        </article>
    }
}
