use yew::prelude::*;
use yew_hooks::prelude::use_timeout;

use crate::i18n::current::banner as t;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum BannerTone {
    Error,
    Success,
}

impl BannerTone {
    fn title(self) -> &'static str {
        match self {
            BannerTone::Error => t::ERROR_TITLE,
            BannerTone::Success => t::SUCCESS_TITLE,
        }
    }

    fn icon(self) -> &'static str {
        match self {
            BannerTone::Error => "fa-triangle-exclamation",
            BannerTone::Success => "fa-circle-check",
        }
    }

    fn palette(self) -> Classes {
        match self {
            BannerTone::Error => classes!("banner-error", "bg-red-50", "text-red-800"),
            BannerTone::Success => classes!("banner-success", "bg-emerald-50", "text-emerald-800"),
        }
    }
}

/// Transient message strip. Closes itself after three seconds unless
/// `auto_dismiss` is off; a new `message` reopens it.
#[derive(Properties, PartialEq)]
pub struct BannerProps {
    pub message: String,
    #[prop_or(BannerTone::Error)]
    pub tone: BannerTone,
    #[prop_or_default]
    pub on_close: Option<Callback<()>>,
    #[prop_or(true)]
    pub auto_dismiss: bool,
}

#[function_component(Banner)]
pub fn banner(props: &BannerProps) -> Html {
    let is_open = use_state(|| true);

    let close = {
        let is_open = is_open.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_: ()| {
            if *is_open {
                is_open.set(false);
                if let Some(cb) = on_close.as_ref() {
                    cb.emit(());
                }
            }
        })
    };

    let timer = {
        let close = close.clone();
        use_timeout(move || close.emit(()), if props.auto_dismiss { 3000 } else { 0 })
    };

    {
        let is_open = is_open.clone();
        let timer = timer.clone();
        use_effect_with(
            (props.message.clone(), props.auto_dismiss),
            move |(_message, auto_dismiss)| {
                is_open.set(true);
                if *auto_dismiss {
                    timer.reset();
                } else {
                    timer.cancel();
                }
            },
        );
    }

    if props.message.trim().is_empty() || !*is_open {
        return Html::default();
    }

    let on_click_close = {
        let close = close.clone();
        Callback::from(move |_: MouseEvent| close.emit(()))
    };

    html! {
        <div
            class={classes!(
                "banner",
                props.tone.palette(),
                "flex", "items-start", "gap-3",
                "rounded-2xl", "px-5", "py-4",
                "text-sm", "shadow-xl",
                "w-full", "max-w-2xl"
            )}
            role="alert"
            aria-live="assertive"
        >
            <i class={classes!("fas", props.tone.icon(), "text-xl", "mt-0.5")} aria-hidden="true"></i>
            <div class="flex-1 space-y-1">
                <p class="font-semibold text-base">{ props.tone.title() }</p>
                <p>{ props.message.clone() }</p>
            </div>
            <button
                type="button"
                class={classes!(
                    "ml-4", "inline-flex", "h-8", "w-8",
                    "items-center", "justify-center",
                    "rounded-full", "bg-transparent", "text-lg",
                    "hover:bg-black/10", "dark:hover:bg-white/15"
                )}
                aria-label={t::CLOSE_ARIA}
                onclick={on_click_close}
            >
                { "×" }
            </button>
        </div>
    }
}
