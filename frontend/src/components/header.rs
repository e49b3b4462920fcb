use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    components::theme_toggle::ThemeToggle,
    i18n::current::{common as common_text, header as t},
    router::Route,
};

#[function_component(Header)]
pub fn header() -> Html {
    let mobile_menu_open = use_state(|| false);
    let route = use_route::<Route>();

    // 路由变化时收起移动端菜单
    {
        let mobile_menu_open = mobile_menu_open.clone();
        use_effect_with(route.clone(), move |_| {
            mobile_menu_open.set(false);
            || ()
        });
    }

    let toggle_mobile_menu = {
        let mobile_menu_open = mobile_menu_open.clone();
        Callback::from(move |_| mobile_menu_open.set(!*mobile_menu_open))
    };

    let nav_items = [
        (t::NAV_HOME, Route::Home, "fa-house"),
        (t::NAV_ALL_LOANS, Route::AllLoans, "fa-list"),
        (t::NAV_DASHBOARD, Route::AdminLoans, "fa-gauge"),
    ];

    let nav_link = |(label, target, icon): &(&'static str, Route, &'static str)| {
        let active = route.as_ref() == Some(target);
        html! {
            <Link<Route> to={target.clone()} classes={classes!(
                "nav-link",
                "h-10",
                "px-3",
                "rounded-lg",
                "inline-flex", "items-center", "gap-2",
                "text-sm",
                "transition-all", "duration-200",
                "hover:text-[var(--primary)]",
                "hover:bg-[var(--surface-alt)]",
                if active { "text-[var(--primary)]" } else { "text-[var(--muted)]" }
            )}>
                <i class={classes!("fas", *icon)} aria-hidden="true"></i>
                <span>{ *label }</span>
            </Link<Route>>
        }
    };

    html! {
        <header class={classes!(
            "header-minimal",
            "sticky", "top-0", "left-0", "right-0", "z-[80]", "w-full",
            "shadow-[0_1px_0_rgba(var(--primary-rgb),0.08)]",
            "transition-all", "duration-200", "ease-[var(--ease-snap)]"
        )}>
            <div class={classes!(
                "flex", "items-center", "gap-4",
                "min-h-[var(--header-height-mobile)]", "md:min-h-[var(--header-height-desktop)]",
                "max-w-7xl", "mx-auto", "px-4", "sm:px-6", "lg:px-8"
            )}>
                <Link<Route> to={Route::Home} classes="brand-logo">
                    { common_text::BRAND_NAME }
                </Link<Route>>

                <nav
                    class={classes!("hidden", "md:flex", "ml-auto", "items-center", "gap-1")}
                    aria-label={t::NAV_MAIN_ARIA}
                >
                    { for nav_items.iter().map(nav_link) }
                </nav>

                <div class={classes!("ml-auto", "md:ml-0", "flex", "items-center", "gap-2")}>
                    <ThemeToggle />
                    <button
                        type="button"
                        class={classes!(
                            "md:hidden",
                            "w-10", "h-10",
                            "border", "border-[var(--border)]", "rounded-lg",
                            "inline-flex", "items-center", "justify-center",
                            "text-[var(--text)]"
                        )}
                        aria-label={t::NAV_MAIN_ARIA}
                        aria-expanded={(*mobile_menu_open).to_string()}
                        onclick={toggle_mobile_menu}
                    >
                        <i class={classes!("fas", if *mobile_menu_open { "fa-xmark" } else { "fa-bars" })}></i>
                    </button>
                </div>
            </div>

            if *mobile_menu_open {
                <nav
                    class={classes!("md:hidden", "flex", "flex-col", "gap-1", "px-4", "pb-4")}
                    aria-label={t::NAV_MAIN_ARIA}
                >
                    { for nav_items.iter().map(nav_link) }
                </nav>
            }
        </header>
    }
}
