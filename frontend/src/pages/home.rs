use loan_market_shared::LoanRecord;
use web_sys::console;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    components::{
        loading_spinner::{LoadingSpinner, SpinnerSize},
        loan_card::LoanCard,
    },
    hooks::use_scroll_to_top,
    i18n::current::home as t,
    models::{LoanProduct, LOAN_PRODUCTS},
    router::Route,
};

#[function_component(HomePage)]
pub fn home_page() -> Html {
    use_scroll_to_top();
    let featured = use_state(Vec::<LoanRecord>::new);
    let loading = use_state(|| true);

    {
        let featured = featured.clone();
        let loading = loading.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match crate::api::fetch_loans().await {
                    Ok(data) => featured.set(
                        data.into_iter()
                            .filter(LoanRecord::visible_on_home)
                            .collect(),
                    ),
                    Err(e) => {
                        console::error_1(&format!("Failed to fetch loans: {}", e).into());
                    },
                }
                loading.set(false);
            });
            || ()
        });
    }

    html! {
        <main class={classes!("max-w-7xl", "mx-auto", "px-4", "sm:px-6", "lg:px-8", "space-y-16")}>
            <section class={classes!("hero", "py-16", "text-center", "space-y-6")}>
                <h1 class={classes!("text-4xl", "md:text-5xl", "font-bold", "text-[var(--text)]")}>
                    { t::HERO_TITLE }
                </h1>
                <p class={classes!("text-lg", "text-[var(--muted)]", "max-w-2xl", "mx-auto")}>
                    { t::HERO_SUBTITLE }
                </p>
                <Link<Route> to={Route::AllLoans} classes={classes!("btn-fluent-primary")}>
                    { t::HERO_CTA }
                </Link<Route>>
            </section>

            <section class="space-y-6">
                <h2 class={classes!("text-2xl", "font-semibold")}>{ t::SHOWCASE_TITLE }</h2>
                <div class={classes!("grid", "gap-6", "sm:grid-cols-2", "lg:grid-cols-3")}>
                    { for LOAN_PRODUCTS.iter().map(product_tile) }
                </div>
            </section>

            <section class="space-y-6">
                <h2 class={classes!("text-2xl", "font-semibold")}>{ t::FEATURED_TITLE }</h2>
                {
                    if *loading {
                        html! { <LoadingSpinner size={SpinnerSize::Small} /> }
                    } else if featured.is_empty() {
                        html! { <p class="text-[var(--muted)]">{ t::FEATURED_EMPTY }</p> }
                    } else {
                        html! {
                            <div class={classes!("grid", "gap-6", "sm:grid-cols-2", "lg:grid-cols-3")}>
                                { for featured.iter().map(|loan| html! {
                                    <LoanCard key={loan.id.to_string()} loan={loan.clone()} />
                                }) }
                            </div>
                        }
                    }
                }
            </section>
        </main>
    }
}

fn product_tile(product: &LoanProduct) -> Html {
    html! {
        <article class={classes!(
            "loan-product",
            "rounded-2xl", "border", "border-[var(--border)]",
            "bg-[var(--surface)]", "p-6", "space-y-3",
            "shadow-[var(--shadow-sm)]"
        )}>
            <i class={classes!("fas", product.icon, "text-2xl", "text-[var(--primary)]")} aria-hidden="true"></i>
            <h3 class={classes!("text-lg", "font-semibold")}>{ product.name }</h3>
            <p class="text-[var(--muted)]">{ product.blurb }</p>
            <dl class={classes!("grid", "grid-cols-3", "gap-2", "text-sm")}>
                <div>
                    <dt class="text-[var(--muted)]">{ t::MAX_AMOUNT }</dt>
                    <dd class="font-semibold">{ product.max_amount }</dd>
                </div>
                <div>
                    <dt class="text-[var(--muted)]">{ t::INTEREST }</dt>
                    <dd class="font-semibold">{ product.interest_rate }</dd>
                </div>
                <div>
                    <dt class="text-[var(--muted)]">{ t::TENURE }</dt>
                    <dd class="font-semibold">{ product.tenure }</dd>
                </div>
            </dl>
        </article>
    }
}
