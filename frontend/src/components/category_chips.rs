use loan_market_shared::CategoryFilter;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CategoryChipsProps {
    /// Chip labels, `All` first.
    pub options: Vec<String>,
    pub selected: CategoryFilter,
    pub on_select: Callback<CategoryFilter>,
}

#[function_component(CategoryChips)]
pub fn category_chips(props: &CategoryChipsProps) -> Html {
    html! {
        <div class={classes!("flex", "flex-wrap", "gap-2")} role="group">
            { for props.options.iter().map(|label| {
                let active = props.selected.label() == label.as_str();
                let onclick = {
                    let on_select = props.on_select.clone();
                    let filter = CategoryFilter::from_label(label);
                    Callback::from(move |_| on_select.emit(filter.clone()))
                };
                html! {
                    <button
                        type="button"
                        class={classes!("chip", active.then_some("chip-active"))}
                        aria-pressed={active.to_string()}
                        {onclick}
                    >
                        { label.clone() }
                    </button>
                }
            }) }
        </div>
    }
}
