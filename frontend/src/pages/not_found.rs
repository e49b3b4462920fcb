use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{i18n::current::not_found as t, router::Route};

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <main class={classes!("max-w-3xl", "mx-auto", "px-4", "py-16", "text-center", "space-y-4")}>
            <h2 class={classes!("text-3xl", "font-bold")}>{ t::TITLE }</h2>
            <p class="text-[var(--muted)]">{ t::BODY }</p>
            <Link<Route> to={Route::Home} classes={classes!("btn-fluent-primary")}>
                { t::HOME_LINK }
            </Link<Route>>
        </main>
    }
}
