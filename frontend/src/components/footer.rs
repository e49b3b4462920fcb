use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    i18n::current::{common as common_text, footer as t, header as nav},
    router::Route,
};

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class={classes!(
            "border-t", "border-[var(--border)]",
            "mt-12", "py-8",
            "text-sm", "text-[var(--muted)]"
        )}>
            <div class={classes!(
                "max-w-7xl", "mx-auto", "px-4", "sm:px-6", "lg:px-8",
                "flex", "flex-col", "md:flex-row", "gap-4", "md:items-center", "md:justify-between"
            )}>
                <div>
                    <p class="font-semibold text-[var(--text)]">{ common_text::BRAND_NAME }</p>
                    <p>{ t::TAGLINE }</p>
                </div>
                <nav class={classes!("flex", "gap-4")}>
                    <Link<Route> to={Route::Home}>{ nav::NAV_HOME }</Link<Route>>
                    <Link<Route> to={Route::AllLoans}>{ nav::NAV_ALL_LOANS }</Link<Route>>
                </nav>
                <p>{ t::COPYRIGHT }</p>
            </div>
        </footer>
    }
}
