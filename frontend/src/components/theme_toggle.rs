use yew::prelude::*;

use crate::{
    i18n::current::theme_toggle as t,
    theme_context::{ThemeAction, ThemeContext},
};

#[derive(Properties, PartialEq)]
pub struct ThemeToggleProps {
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ThemeToggle)]
pub fn theme_toggle(props: &ThemeToggleProps) -> Html {
    let ThemeToggleProps {
        class,
    } = props;
    let Some(theme) = use_context::<ThemeContext>() else {
        return Html::default();
    };
    let is_dark = theme.theme.is_dark();

    let onclick = {
        let theme = theme.clone();
        Callback::from(move |_| theme.dispatch(ThemeAction::Toggle))
    };

    let label = if is_dark { t::SWITCH_TO_LIGHT } else { t::SWITCH_TO_DARK };

    let icon_class = if is_dark { "fa-sun" } else { "fa-moon" };

    let button_class = classes!(
        "group",
        "btn-fluent-icon",
        "border",
        "border-[var(--border)]",
        "bg-transparent",
        "hover:bg-[var(--surface-alt)]",
        "transition-all",
        "duration-100",
        "ease-[var(--ease-snap)]",
        class.clone()
    );

    html! {
        <button
            type="button"
            class={button_class}
            {onclick}
            aria-label={label}
            title={label}
            aria-pressed={is_dark.to_string()}
        >
            <i
                class={classes!(
                    "fas",
                    icon_class,
                    "fa-lg",
                    "transition-all",
                    "duration-100",
                    "ease-[var(--ease-snap)]",
                    "text-[var(--text)]",
                    "group-hover:text-[var(--primary)]"
                )}
                aria-hidden="true"
            ></i>
            <span class="sr-only">{ label }</span>
        </button>
    }
}
