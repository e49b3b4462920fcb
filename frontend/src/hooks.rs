use std::rc::Rc;

use loan_market_shared::MutationCoordinator;
use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::prelude::*;
use yew_router::prelude::use_location;

use crate::api::ApiClient;

/// Automatically scroll the viewport to the top whenever the current route
/// changes.
#[hook]
pub fn use_scroll_to_top() {
    let location = use_location();

    use_effect_with(location, move |location| {
        if location.is_some() {
            scroll_window_to_top();
        }

        || ()
    });
}

/// One coordinator (and record store) per mounted component.
///
/// The store is not observable; callers copy `snapshot()` into their own
/// state after every operation so the view re-renders.
#[hook]
pub fn use_loan_coordinator() -> Rc<MutationCoordinator<ApiClient>> {
    use_memo((), |_| MutationCoordinator::new(ApiClient::new()))
}

fn scroll_window_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_left(0.0);
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}
