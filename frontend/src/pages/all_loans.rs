use loan_market_shared::{category_options, filter_loans, CategoryFilter, LoanFilter, LoanRecord};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::{
    components::{
        banner::Banner, category_chips::CategoryChips, loading_spinner::LoadingSpinner,
        loan_card::LoanCard,
    },
    hooks::use_scroll_to_top,
    i18n::current::{all_loans as t, common},
};

#[function_component(AllLoansPage)]
pub fn all_loans_page() -> Html {
    use_scroll_to_top();
    let loans = use_state(Vec::<LoanRecord>::new);
    let loading = use_state(|| true);
    let load_error = use_state(|| None::<String>);
    let category = use_state(CategoryFilter::default);
    let query = use_state(String::new);

    {
        let loans = loans.clone();
        let loading = loading.clone();
        let load_error = load_error.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match crate::api::fetch_loans().await {
                    Ok(data) => loans.set(data),
                    Err(err) => load_error.set(Some(format!("{}: {}", t::LOAD_FAILED, err))),
                }
                loading.set(false);
            });
            || ()
        });
    }

    let options = use_memo((*loans).clone(), |loans| category_options(loans));
    let visible = use_memo(
        ((*loans).clone(), (*category).clone(), (*query).clone()),
        |(loans, category, query)| {
            let filter = LoanFilter::new(category.clone(), query.as_str());
            filter_loans(loans, &filter)
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        },
    );

    let on_select = {
        let category = category.clone();
        Callback::from(move |next: CategoryFilter| category.set(next))
    };

    let on_query = {
        let query = query.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                query.set(target.value());
            }
        })
    };

    html! {
        <main class={classes!("max-w-7xl", "mx-auto", "px-4", "sm:px-6", "lg:px-8", "py-8", "space-y-6")}>
            <header class="space-y-2">
                <h1 class={classes!("text-3xl", "font-bold")}>{ t::TITLE }</h1>
                <p class="text-[var(--muted)]">{ t::SUBTITLE }</p>
            </header>

            if let Some(message) = (*load_error).clone() {
                <Banner message={message} auto_dismiss={false} />
            }

            <div class={classes!("flex", "flex-col", "md:flex-row", "gap-4", "md:items-center", "md:justify-between")}>
                <CategoryChips
                    options={(*options).clone()}
                    selected={(*category).clone()}
                    on_select={on_select}
                />
                <input
                    type="search"
                    class={classes!("search-minimal", "h-10", "px-3", "rounded-lg", "border", "border-[var(--border)]")}
                    placeholder={t::SEARCH_PLACEHOLDER}
                    value={(*query).clone()}
                    oninput={on_query}
                />
            </div>

            {
                if *loading {
                    html! { <LoadingSpinner caption={common::LOADING} /> }
                } else if visible.is_empty() {
                    html! { <p class="text-[var(--muted)]">{ t::EMPTY }</p> }
                } else {
                    html! {
                        <div class={classes!("grid", "gap-6", "sm:grid-cols-2", "lg:grid-cols-3")}>
                            { for visible.iter().map(|loan| html! {
                                <LoanCard key={loan.id.to_string()} loan={loan.clone()} />
                            }) }
                        </div>
                    }
                }
            }
        </main>
    }
}
