use std::rc::Rc;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use loan_market_shared::{
    category_options, filter_loans, CategoryFilter, FormError, FormSession, LoanFilter,
    LoanFormInput, LoanId, LoanRecord, MutationError, RequiredField, LOAN_CATEGORIES,
};
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::{
    components::{
        banner::{Banner, BannerTone},
        category_chips::CategoryChips,
        loading_spinner::LoadingSpinner,
        stats_card::StatsCard,
    },
    hooks::{use_loan_coordinator, use_scroll_to_top},
    i18n::{
        current::{admin as t, loan_form as f},
        fill_one,
    },
    router::Route,
};

/// Editable inputs of the add/edit modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormField {
    Title,
    Category,
    ShortDescription,
    Description,
    MaxLoan,
    InterestRate,
    Tenure,
    EmiPlans,
}

impl FormField {
    fn apply(self, input: &mut LoanFormInput, value: String) {
        let slot = match self {
            FormField::Title => &mut input.title,
            FormField::Category => &mut input.category,
            FormField::ShortDescription => &mut input.short_description,
            FormField::Description => &mut input.description,
            FormField::MaxLoan => &mut input.max_loan,
            FormField::InterestRate => &mut input.interest_rate,
            FormField::Tenure => &mut input.tenure,
            FormField::EmiPlans => &mut input.emi_plans,
        };
        *slot = value;
    }

    fn required(self) -> Option<RequiredField> {
        match self {
            FormField::Title => Some(RequiredField::Title),
            FormField::Category => Some(RequiredField::Category),
            FormField::ShortDescription => Some(RequiredField::ShortDescription),
            FormField::MaxLoan => Some(RequiredField::MaxLoan),
            FormField::InterestRate => Some(RequiredField::InterestRate),
            FormField::Tenure => Some(RequiredField::Tenure),
            FormField::Description | FormField::EmiPlans => None,
        }
    }
}

/// At most one open form session plus its inline validation message.
#[derive(Debug, Clone, Default, PartialEq)]
struct ModalState {
    session: Option<FormSession>,
    invalid: Option<FormError>,
}

enum ModalAction {
    Open(FormSession),
    Close,
    SetField(FormField, String),
    SetImage(String),
    Invalid(FormError),
    Submitting,
    SubmitFailed,
}

impl Reducible for ModalState {
    type Action = ModalAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ModalAction::Open(session) => {
                next.session = Some(session);
                next.invalid = None;
            },
            ModalAction::Close => return Rc::new(Self::default()),
            ModalAction::SetField(field, value) => {
                if let Some(session) = next.session.as_mut() {
                    field.apply(&mut session.input, value);
                }
            },
            ModalAction::SetImage(url) => {
                if let Some(session) = next.session.as_mut() {
                    session.set_image(url);
                }
            },
            ModalAction::Invalid(err) => next.invalid = Some(err),
            ModalAction::Submitting => {
                if let Some(session) = next.session.as_mut() {
                    session.submitting = true;
                }
                next.invalid = None;
            },
            ModalAction::SubmitFailed => {
                if let Some(session) = next.session.as_mut() {
                    session.submitting = false;
                }
            },
        }
        Rc::new(next)
    }
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

fn failure_message(context: &str, err: &MutationError) -> String {
    format!("{context}: {err}")
}

fn visibility_message(visible: bool) -> &'static str {
    if visible {
        t::ADDED_TO_HOME
    } else {
        t::REMOVED_FROM_HOME
    }
}

/// Table contents and user notice once a homepage toggle settles.
///
/// The rows always come from the store, so a checkbox the browser flipped
/// before a rejected call is redrawn with the confirmed flag.
#[derive(Debug, PartialEq)]
struct ToggleSettled {
    records: Vec<LoanRecord>,
    notice: Result<&'static str, String>,
}

fn settle_toggle(records: Vec<LoanRecord>, result: Result<bool, MutationError>) -> ToggleSettled {
    let notice = result
        .map(visibility_message)
        .map_err(|err| failure_message(t::VISIBILITY_FAILED, &err));
    ToggleSettled {
        records,
        notice,
    }
}

fn data_url(mime: &str, bytes: &[u8]) -> String {
    let mime = if mime.trim().is_empty() { "application/octet-stream" } else { mime.trim() };
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

async fn read_image(file: File) -> Result<String, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("{:?}", e))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(data_url(&file.type_(), &bytes))
}

fn text_value(event: &InputEvent) -> Option<String> {
    if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
        return Some(input.value());
    }
    event
        .target_dyn_into::<HtmlTextAreaElement>()
        .map(|area| area.value())
}

#[function_component(AdminLoansPage)]
pub fn admin_loans_page() -> Html {
    use_scroll_to_top();
    let coordinator = use_loan_coordinator();
    let records = use_state(Vec::<LoanRecord>::new);
    let loading = use_state(|| true);
    let category = use_state(CategoryFilter::default);
    let query = use_state(String::new);
    let modal = use_reducer(ModalState::default);
    let notice = use_state(|| None::<(u32, String)>);
    let notice_seq = use_mut_ref(|| 0u32);

    // Fresh key per message so the banner remounts and restarts its timer.
    let announce = {
        let notice = notice.clone();
        Callback::from(move |message: String| {
            let seq = {
                let mut seq = notice_seq.borrow_mut();
                *seq += 1;
                *seq
            };
            notice.set(Some((seq, message)));
        })
    };

    {
        let coordinator = coordinator.clone();
        let records = records.clone();
        let loading = loading.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match coordinator.load().await {
                    Ok(_) => records.set(coordinator.snapshot()),
                    Err(err) => alert(&failure_message(t::LOAD_FAILED, &err)),
                }
                loading.set(false);
            });
            || ()
        });
    }

    let stats = coordinator.store().borrow().stats();
    let options = use_memo((*records).clone(), |records| category_options(records));
    let visible = use_memo(
        ((*records).clone(), (*category).clone(), (*query).clone()),
        |(records, category, query)| {
            let filter = LoanFilter::new(category.clone(), query.as_str());
            filter_loans(records, &filter)
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
            if let Some(value) = text_value(&event) {
                query.set(value);
            }
        })
    };

    let on_add = {
        let modal = modal.clone();
        Callback::from(move |_| modal.dispatch(ModalAction::Open(FormSession::create())))
    };

    let on_edit = {
        let modal = modal.clone();
        let coordinator = coordinator.clone();
        Callback::from(move |id: LoanId| {
            let session = coordinator.store().borrow().get(&id).map(FormSession::edit);
            if let Some(session) = session {
                modal.dispatch(ModalAction::Open(session));
            }
        })
    };

    let on_delete = {
        let coordinator = coordinator.clone();
        let records = records.clone();
        let announce = announce.clone();
        Callback::from(move |loan: LoanRecord| {
            if !confirm(&fill_one(t::CONFIRM_DELETE_TEMPLATE, loan.title())) {
                return;
            }
            let coordinator = coordinator.clone();
            let records = records.clone();
            let announce = announce.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match coordinator.remove(&loan.id).await {
                    Ok(()) => {
                        records.set(coordinator.snapshot());
                        announce.emit(t::DELETED.to_string());
                    },
                    Err(err) => alert(&failure_message(t::DELETE_FAILED, &err)),
                }
            });
        })
    };

    let on_toggle_home = {
        let coordinator = coordinator.clone();
        let records = records.clone();
        let announce = announce.clone();
        Callback::from(move |id: LoanId| {
            let coordinator = coordinator.clone();
            let records = records.clone();
            let announce = announce.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = coordinator.toggle_visibility(&id).await;
                let settled = settle_toggle(coordinator.snapshot(), result);
                records.set(settled.records);
                match settled.notice {
                    Ok(message) => announce.emit(message.to_string()),
                    Err(message) => alert(&message),
                }
            });
        })
    };

    let on_submit = {
        let coordinator = coordinator.clone();
        let records = records.clone();
        let modal = modal.clone();
        let announce = announce.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let Some(session) = modal.session.clone() else {
                return;
            };
            if session.submitting {
                return;
            }
            let form = match session.validate() {
                Ok(form) => form,
                Err(err) => {
                    modal.dispatch(ModalAction::Invalid(err));
                    return;
                },
            };
            modal.dispatch(ModalAction::Submitting);

            let coordinator = coordinator.clone();
            let records = records.clone();
            let modal = modal.clone();
            let announce = announce.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let (result, done) = match session.editing_id() {
                    Some(id) => (coordinator.update(id, form).await, t::UPDATED),
                    None => (coordinator.create(form).await, t::CREATED),
                };
                match result {
                    Ok(_) => {
                        records.set(coordinator.snapshot());
                        modal.dispatch(ModalAction::Close);
                        announce.emit(done.to_string());
                    },
                    Err(err) => {
                        modal.dispatch(ModalAction::SubmitFailed);
                        alert(&failure_message(t::SAVE_FAILED, &err));
                    },
                }
            });
        })
    };

    let stat_cards = [
        ("📋", stats.total, t::STAT_TOTAL, None),
        ("🏠", stats.on_home, t::STAT_ON_HOME, Some(Route::Home)),
        ("🗂️", stats.categories, t::STAT_CATEGORIES, None),
        ("🙈", stats.hidden, t::STAT_HIDDEN, None),
    ];

    html! {
        <main class={classes!("max-w-7xl", "mx-auto", "px-4", "sm:px-6", "lg:px-8", "py-8", "space-y-6")}>
            <header class={classes!("flex", "flex-wrap", "items-center", "justify-between", "gap-4")}>
                <div class="space-y-1">
                    <h1 class={classes!("text-3xl", "font-bold")}>{ t::TITLE }</h1>
                    <p class="text-[var(--muted)]">{ t::SUBTITLE }</p>
                </div>
                <button type="button" class="btn-fluent-primary" onclick={on_add}>
                    <i class="fas fa-plus" aria-hidden="true"></i>
                    { " " }{ t::ADD_LOAN }
                </button>
            </header>

            if let Some((seq, message)) = (*notice).clone() {
                <Banner key={seq} message={message} tone={BannerTone::Success} />
            }

            <section class={classes!("grid", "gap-4", "grid-cols-2", "md:grid-cols-4")}>
                { for stat_cards.iter().map(|(icon, value, label, route)| html! {
                    <StatsCard
                        icon={icon.to_string()}
                        value={value.to_string()}
                        label={label.to_string()}
                        route={route.clone()}
                    />
                }) }
            </section>

            <section class={classes!("flex", "flex-col", "md:flex-row", "gap-4", "md:items-center", "md:justify-between")}>
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
            </section>

            {
                if *loading {
                    html! { <LoadingSpinner /> }
                } else {
                    render_table(&visible, &on_edit, &on_delete, &on_toggle_home)
                }
            }

            if let Some(session) = modal.session.clone() {
                { render_modal(&session, modal.invalid.clone(), &modal, on_submit) }
            }
        </main>
    }
}

fn render_table(
    loans: &[LoanRecord],
    on_edit: &Callback<LoanId>,
    on_delete: &Callback<LoanRecord>,
    on_toggle_home: &Callback<LoanId>,
) -> Html {
    if loans.is_empty() {
        return html! { <p class="text-[var(--muted)]">{ t::EMPTY }</p> };
    }

    html! {
        <div class={classes!("overflow-x-auto", "rounded-2xl", "border", "border-[var(--border)]")}>
            <table class={classes!("w-full", "text-sm")}>
                <thead>
                    <tr>
                        <th>{ t::COL_IMAGE }</th>
                        <th>{ t::COL_TITLE }</th>
                        <th>{ t::COL_CATEGORY }</th>
                        <th>{ t::COL_INTEREST }</th>
                        <th>{ t::COL_MAX_LOAN }</th>
                        <th>{ t::COL_HOME }</th>
                        <th>{ t::COL_ACTIONS }</th>
                    </tr>
                </thead>
                <tbody>
                    { for loans.iter().map(|loan| {
                        let edit = {
                            let on_edit = on_edit.clone();
                            let id = loan.id.clone();
                            Callback::from(move |_| on_edit.emit(id.clone()))
                        };
                        let delete = {
                            let on_delete = on_delete.clone();
                            let loan = loan.clone();
                            Callback::from(move |_| on_delete.emit(loan.clone()))
                        };
                        let toggle = {
                            let on_toggle_home = on_toggle_home.clone();
                            let id = loan.id.clone();
                            Callback::from(move |_: Event| on_toggle_home.emit(id.clone()))
                        };
                        html! {
                            <tr key={loan.id.to_string()}>
                                <td>
                                    if !loan.fields.image_data.is_empty() {
                                        <img
                                            class={classes!("w-12", "h-12", "rounded-lg", "object-cover")}
                                            src={loan.fields.image_data.clone()}
                                            alt={loan.title().to_string()}
                                        />
                                    }
                                </td>
                                <td class="font-semibold">{ loan.title() }</td>
                                <td>{ loan.category() }</td>
                                <td>{ loan.interest_rate_display() }</td>
                                <td>{ loan.max_loan_display() }</td>
                                <td>
                                    <input
                                        type="checkbox"
                                        class="toggle"
                                        checked={loan.visible_on_home()}
                                        onchange={toggle}
                                    />
                                </td>
                                <td class={classes!("flex", "gap-2")}>
                                    <button type="button" class="btn-fluent-secondary" onclick={edit}>
                                        { t::EDIT }
                                    </button>
                                    <button type="button" class="btn-fluent-danger" onclick={delete}>
                                        { t::DELETE }
                                    </button>
                                </td>
                            </tr>
                        }
                    }) }
                </tbody>
            </table>
        </div>
    }
}

fn render_modal(
    session: &FormSession,
    invalid: Option<FormError>,
    modal: &UseReducerHandle<ModalState>,
    on_submit: Callback<SubmitEvent>,
) -> Html {
    let input = &session.input;
    let on_text = |field: FormField| {
        let modal = modal.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(value) = text_value(&event) {
                modal.dispatch(ModalAction::SetField(field, value));
            }
        })
    };

    let on_category = {
        let modal = modal.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                modal.dispatch(ModalAction::SetField(FormField::Category, select.value()));
            }
        })
    };

    let on_image = {
        let modal = modal.clone();
        Callback::from(move |event: Event| {
            let file = event
                .target_dyn_into::<HtmlInputElement>()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0));
            let Some(file) = file else {
                return;
            };
            let modal = modal.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match read_image(file).await {
                    Ok(url) => modal.dispatch(ModalAction::SetImage(url)),
                    Err(err) => alert(&format!("{}: {}", t::IMAGE_FAILED, err)),
                }
            });
        })
    };

    let on_cancel = {
        let modal = modal.clone();
        Callback::from(move |_| modal.dispatch(ModalAction::Close))
    };

    let heading = if session.is_edit() { f::EDIT_TITLE } else { f::CREATE_TITLE };
    let submit_label = match (session.submitting, session.is_edit()) {
        (true, _) => f::SAVING,
        (false, true) => f::SAVE,
        (false, false) => f::CREATE,
    };

    let missing = |field: FormField| {
        field
            .required()
            .zip(invalid.as_ref())
            .is_some_and(|(required, err)| err.is_missing(required))
    };

    let text_row = |label: &'static str, field: FormField, value: &str| {
        let flagged = missing(field);
        html! {
            <label class={classes!("flex", "flex-col", "gap-1")}>
                <span class="text-sm">{ label }</span>
                <input
                    type="text"
                    class={classes!(
                        "h-10", "px-3", "rounded-lg", "border",
                        if flagged { "border-red-500" } else { "border-[var(--border)]" }
                    )}
                    aria-invalid={flagged.to_string()}
                    value={value.to_string()}
                    oninput={on_text(field)}
                />
            </label>
        }
    };

    html! {
        <div class={classes!("fixed", "inset-0", "z-50", "flex", "items-center", "justify-center", "bg-black/40")}>
            <form
                class={classes!(
                    "w-full", "max-w-2xl", "max-h-[90vh]", "overflow-y-auto",
                    "rounded-2xl", "bg-[var(--surface)]", "p-6", "space-y-4"
                )}
                onsubmit={on_submit}
            >
                <h2 class={classes!("text-2xl", "font-semibold")}>{ heading }</h2>

                if let Some(err) = invalid.as_ref() {
                    <p class={classes!("text-sm", "text-red-500")} role="alert">{ err.to_string() }</p>
                }

                { text_row(f::TITLE, FormField::Title, &input.title) }

                <label class={classes!("flex", "flex-col", "gap-1")}>
                    <span class="text-sm">{ f::CATEGORY }</span>
                    <select
                        class={classes!(
                            "h-10", "px-3", "rounded-lg", "border",
                            if missing(FormField::Category) { "border-red-500" } else { "border-[var(--border)]" }
                        )}
                        onchange={on_category}
                    >
                        <option value="" selected={input.category.is_empty()}>{ f::CATEGORY_PLACEHOLDER }</option>
                        { for LOAN_CATEGORIES.iter().map(|category| html! {
                            <option value={*category} selected={input.category == *category}>{ *category }</option>
                        }) }
                    </select>
                </label>

                { text_row(f::SHORT_DESCRIPTION, FormField::ShortDescription, &input.short_description) }

                <label class={classes!("flex", "flex-col", "gap-1")}>
                    <span class="text-sm">{ f::DESCRIPTION }</span>
                    <textarea
                        rows="4"
                        class={classes!("px-3", "py-2", "rounded-lg", "border", "border-[var(--border)]")}
                        value={input.description.clone()}
                        oninput={on_text(FormField::Description)}
                    />
                </label>

                <div class={classes!("grid", "gap-4", "sm:grid-cols-3")}>
                    { text_row(f::MAX_LOAN, FormField::MaxLoan, &input.max_loan) }
                    { text_row(f::INTEREST_RATE, FormField::InterestRate, &input.interest_rate) }
                    { text_row(f::TENURE, FormField::Tenure, &input.tenure) }
                </div>

                { text_row(f::EMI_PLANS, FormField::EmiPlans, &input.emi_plans) }

                <label class={classes!("flex", "flex-col", "gap-1")}>
                    <span class="text-sm">{ f::IMAGE }</span>
                    <input type="file" accept="image/*" onchange={on_image} />
                </label>
                if !input.image.is_empty() {
                    <img class={classes!("w-32", "h-32", "rounded-lg", "object-cover")} src={input.image.clone()} />
                }

                <div class={classes!("flex", "justify-end", "gap-2")}>
                    <button type="button" class="btn-fluent-secondary" onclick={on_cancel}>
                        { f::CANCEL }
                    </button>
                    <button type="submit" class="btn-fluent-primary" disabled={session.submitting}>
                        { submit_label }
                    </button>
                </div>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use loan_market_shared::{ApiError, LoanFields};

    use super::*;

    #[test]
    fn data_url_defaults_unknown_mime() {
        assert_eq!(data_url("image/png", b"\x89PNG"), "data:image/png;base64,iVBORw==");
        assert_eq!(data_url(" ", b"hi"), "data:application/octet-stream;base64,aGk=");
    }

    #[test]
    fn failure_message_keeps_server_text() {
        let err = MutationError::Api(ApiError::Status {
            status: 500,
            message: Some("db down".into()),
        });
        assert_eq!(failure_message(t::SAVE_FAILED, &err), "Failed to save loan: db down");
    }

    #[test]
    fn modal_edits_only_the_open_session() {
        let closed = Rc::new(ModalState::default());
        let still_closed =
            closed.reduce(ModalAction::SetField(FormField::Title, "Ignored".into()));
        assert_eq!(*still_closed, ModalState::default());

        let record = LoanRecord::new(LoanId::new("7"), LoanFields {
            title: "Clinic Bills".into(),
            ..LoanFields::default()
        });
        let open = Rc::new(ModalState::default()).reduce(ModalAction::Open(FormSession::edit(&record)));
        let edited = open.reduce(ModalAction::SetField(FormField::Tenure, "6 months".into()));
        let session = edited.session.as_ref().expect("session stays open");
        assert_eq!(session.input.title, "Clinic Bills");
        assert_eq!(session.input.tenure, "6 months");
        assert_eq!(session.editing_id(), Some(&LoanId::new("7")));
    }

    #[test]
    fn invalid_submit_flags_only_missing_fields() {
        let mut session = FormSession::create();
        session.input.title = "Bridge Loan".into();
        session.input.category = "Business".into();
        let err = session.validate().expect_err("blank terms");
        let flagged = Rc::new(ModalState::default())
            .reduce(ModalAction::Open(session))
            .reduce(ModalAction::Invalid(err));
        let err = flagged.invalid.as_ref().expect("error kept");
        assert!(err.is_missing(FormField::MaxLoan.required().expect("required")));
        assert!(!err.is_missing(FormField::Title.required().expect("required")));
        assert_eq!(FormField::EmiPlans.required(), None);

        let cleared = flagged.reduce(ModalAction::Submitting);
        assert_eq!(cleared.invalid, None);
    }

    #[test]
    fn uploaded_image_lands_in_the_session() {
        let open = Rc::new(ModalState::default()).reduce(ModalAction::Open(FormSession::create()));
        let url = data_url("image/png", b"\x89PNG");
        let updated = open.reduce(ModalAction::SetImage(url.clone()));
        assert_eq!(updated.session.as_ref().map(|s| s.input.image.as_str()), Some(url.as_str()));
    }

    #[test]
    fn submit_failure_reenables_the_form() {
        let open = Rc::new(ModalState::default()).reduce(ModalAction::Open(FormSession::create()));
        let busy = open.reduce(ModalAction::Submitting);
        assert!(busy.session.as_ref().is_some_and(|session| session.submitting));
        let failed = busy.reduce(ModalAction::SubmitFailed);
        assert!(failed.session.as_ref().is_some_and(|session| !session.submitting));
        assert_eq!(*failed.reduce(ModalAction::Close), ModalState::default());
    }

    #[test]
    fn rejected_toggle_redraws_confirmed_flag() {
        let hidden = LoanRecord::new(LoanId::new("3"), LoanFields {
            title: "Seed Capital".into(),
            visible_on_home: false,
            ..LoanFields::default()
        });
        let err = MutationError::Api(ApiError::Status {
            status: 500,
            message: None,
        });
        let settled = settle_toggle(vec![hidden.clone()], Err(err));
        assert_eq!(settled.records, vec![hidden]);
        assert!(!settled.records[0].visible_on_home());
        assert_eq!(
            settled.notice,
            Err("Could not update loan visibility: HTTP error: 500".to_string())
        );
    }

    #[test]
    fn confirmed_toggle_announces_new_flag() {
        let shown = LoanRecord::new(LoanId::new("3"), LoanFields {
            visible_on_home: true,
            ..LoanFields::default()
        });
        let settled = settle_toggle(vec![shown], Ok(true));
        assert!(settled.records[0].visible_on_home());
        assert_eq!(settled.notice, Ok("Added to Home"));
    }

    #[test]
    fn visibility_messages() {
        assert_eq!(visibility_message(true), "Added to Home");
        assert_eq!(visibility_message(false), "Removed from Home");
    }
}
