use std::rc::Rc;

use loan_market_shared::Theme;
use yew::prelude::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThemeState {
    pub theme: Theme,
}

pub enum ThemeAction {
    Toggle,
}

impl Reducible for ThemeState {
    type Action = ThemeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ThemeAction::Toggle => Rc::new(Self {
                theme: self.theme.toggled(),
            }),
        }
    }
}

pub type ThemeContext = UseReducerHandle<ThemeState>;

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    pub children: Html,
}

/// Owns the current theme and mirrors it onto `<html data-theme>`.
#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let state = use_reducer(|| ThemeState {
        theme: initial_theme(),
    });

    use_effect_with(state.theme, move |theme| {
        apply_theme_attribute(*theme);
        || ()
    });

    html! {
        <ContextProvider<ThemeContext> context={state}>
            {props.children.clone()}
        </ContextProvider<ThemeContext>>
    }
}

fn root_element() -> Option<web_sys::Element> {
    web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.document_element())
}

/// Theme already set on `<html data-theme>`, light when absent.
fn initial_theme() -> Theme {
    root_element()
        .and_then(|root| root.get_attribute("data-theme"))
        .map(|value| Theme::from_attr(&value))
        .unwrap_or_default()
}

fn apply_theme_attribute(theme: Theme) {
    if let Some(root) = root_element() {
        let _ = root.set_attribute("data-theme", theme.as_attr());
    }
}
