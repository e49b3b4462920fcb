mod api;
mod components;
mod config;
pub mod hooks;
mod i18n;
mod models;
mod pages;
mod router;
mod theme_context;

use yew::prelude::*;

use crate::theme_context::ThemeProvider;

#[function_component(App)]
fn app() -> Html {
    html! {
        <ThemeProvider>
            <router::AppRouter />
        </ThemeProvider>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
